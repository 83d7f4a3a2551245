#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod events;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod score;
#[cfg(feature = "std")]
mod score_file;
#[cfg(feature = "std")]
pub mod session;
mod ship;
mod shot;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use events::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use score::*;
#[cfg(feature = "std")]
pub use score_file::FileScoreStore;
#[cfg(feature = "std")]
pub use session::Session;
pub use ship::*;
pub use shot::*;
