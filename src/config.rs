use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// The fleet every side sails with, largest first.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Battleship", 5),
    ShipType::new("Cruiser", 4),
    ShipType::new("Destroyer", 3),
    ShipType::new("Frigate", 3),
    ShipType::new("Submarine", 2),
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Shots each side fires before the turn passes.
pub const SHOTS_PER_TURN: u8 = 3;

/// Random samples tried for a single ship before the whole fleet is redrawn.
pub const MAX_ATTEMPTS_PER_SHIP: usize = 1000;

/// Whole-fleet redraws before placement is declared impossible.
pub const MAX_PLACEMENT_RESTARTS: usize = 100;

/// Look up a fleet entry by its name.
pub fn ship_type_by_name(name: &str) -> Option<ShipType> {
    FLEET.iter().copied().find(|def| def.name() == name)
}
