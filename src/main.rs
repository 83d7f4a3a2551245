#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, run_play, FileScoreStore, PlayOptions, ScoreStore};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::path::PathBuf;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Naval combat against the computer, three shots a turn",
    long_about = None
)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Where the best score is kept (default: ~/.broadside_best)")]
        score_file: Option<PathBuf>,
        #[arg(
            long,
            default_value_t = 750,
            help = "Pause before each computer shot, in milliseconds"
        )]
        delay_ms: u64,
        #[arg(long, help = "Do not ring the terminal bell")]
        mute: bool,
        #[arg(long, help = "Skip the setup screen and place your ships at random")]
        auto_place: bool,
    },
    /// Show or clear the stored best score.
    Best {
        #[arg(long)]
        score_file: Option<PathBuf>,
        #[arg(long, help = "Forget the stored best score")]
        reset: bool,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            score_file,
            delay_ms,
            mute,
            auto_place,
        } => {
            run_play(PlayOptions {
                seed,
                score_file,
                delay: Duration::from_millis(delay_ms),
                muted: mute,
                auto_place,
            })
            .await?;
        }
        Commands::Best { score_file, reset } => {
            let store = score_file
                .map(FileScoreStore::new)
                .unwrap_or_else(FileScoreStore::default_location);
            if reset {
                store.reset()?;
                println!("Best score cleared ({})", store.path().display());
            } else {
                match store.load_best()? {
                    Some(best) => println!("Best score: {} shots", best),
                    None => println!("No best score yet"),
                }
            }
        }
    }
    Ok(())
}
