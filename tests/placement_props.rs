use broadside::{
    place_fleet, BoardError, CellState, Coord, Fleet, FleetSetup, Orientation, BOARD_SIZE,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn chebyshev(a: Coord, b: Coord) -> usize {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
}

fn assert_no_touching(fleet: &Fleet) {
    let ships = fleet.ships();
    for (i, a) in ships.iter().enumerate() {
        for b in ships.iter().skip(i + 1) {
            for ca in a.cells() {
                for cb in b.cells() {
                    assert!(
                        chebyshev(ca, cb) >= 2,
                        "{:?} touches {:?} at {} / {}",
                        a,
                        b,
                        ca,
                        cb
                    );
                }
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_fleet_invariants(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (board, fleet) = place_fleet(&mut rng).unwrap();

        prop_assert_eq!(board.count(CellState::Occupied), TOTAL_SHIP_CELLS);

        let mut lengths: Vec<usize> = fleet.ships().iter().map(|s| s.length()).collect();
        lengths.sort_unstable();
        prop_assert_eq!(lengths, vec![2, 3, 3, 4, 5]);

        for ship in fleet.ships() {
            prop_assert_eq!(ship.hits(), 0);
            for at in ship.cells() {
                prop_assert!(at.row < BOARD_SIZE as usize && at.col < BOARD_SIZE as usize);
                prop_assert_eq!(board.cell_at(at).unwrap(), CellState::Occupied);
            }
        }
        assert_no_touching(&fleet);
    }

    #[test]
    fn auto_place_keeps_manual_ships(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut setup = FleetSetup::new();
        setup.place(0, Coord::new(0, 0), Orientation::Vertical).unwrap();
        setup.auto_place_remaining(&mut rng).unwrap();
        prop_assert!(setup.is_complete());

        let (_, fleet) = setup.finish().unwrap();
        prop_assert_eq!(fleet.ship(0).unwrap().origin(), Coord::new(0, 0));
        prop_assert_eq!(fleet.ship(0).unwrap().orientation(), Orientation::Vertical);
        assert_no_touching(&fleet);
    }
}

#[test]
fn test_touching_ships_rejected() {
    let mut setup = FleetSetup::new();
    setup.place(0, Coord::new(0, 0), Orientation::Horizontal).unwrap();

    // Diagonal contact with the end of the battleship.
    assert_eq!(
        setup.place(4, Coord::new(1, 5), Orientation::Horizontal),
        Err(BoardError::ShipTouches)
    );
    // Edge contact.
    assert_eq!(
        setup.place(4, Coord::new(1, 0), Orientation::Horizontal),
        Err(BoardError::ShipTouches)
    );
    // Overlap.
    assert_eq!(
        setup.place(4, Coord::new(0, 2), Orientation::Vertical),
        Err(BoardError::ShipTouches)
    );
    assert!(!setup.is_placed(4));

    setup.place(4, Coord::new(2, 0), Orientation::Horizontal).unwrap();
    assert!(setup.is_placed(4));
}

#[test]
fn test_setup_errors_leave_setup_unchanged() {
    let mut setup = FleetSetup::new();
    setup.place(1, Coord::new(5, 5), Orientation::Vertical).unwrap();
    let before = setup.clone();

    assert_eq!(
        setup.place(0, Coord::new(0, 6), Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        setup.place(1, Coord::new(0, 0), Orientation::Horizontal),
        Err(BoardError::ShipAlreadyPlaced)
    );
    assert_eq!(
        setup.place(7, Coord::new(0, 0), Orientation::Horizontal),
        Err(BoardError::InvalidIndex)
    );
    assert_eq!(setup, before);
    assert_eq!(setup.clone().finish().unwrap_err(), BoardError::FleetIncomplete);
}

#[test]
fn test_rotate_and_remove() {
    let mut setup = FleetSetup::new();
    setup.place(0, Coord::new(0, 0), Orientation::Horizontal).unwrap();
    setup.rotate(0).unwrap();
    assert!(setup.occupied().contains(4, 0));
    assert!(!setup.occupied().contains(0, 4));

    // Standing the cruiser at G8 upright would run off the bottom edge.
    setup.place(1, Coord::new(7, 6), Orientation::Horizontal).unwrap();
    assert_eq!(setup.rotate(1), Err(BoardError::ShipOutOfBounds));
    assert!(setup.occupied().contains(7, 9));

    let removed = setup.remove(1).unwrap();
    assert_eq!(removed.name(), "Cruiser");
    assert!(!setup.occupied().contains(7, 9));
    assert!(setup.remove(1).is_none());

    setup.clear();
    assert!(setup.occupied().is_empty());
}

#[test]
fn test_far_off_origin_is_out_of_bounds() {
    let mut setup = FleetSetup::new();
    assert_eq!(
        setup.place(0, Coord::new(0, usize::MAX), Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        setup.place(0, Coord::new(usize::MAX - 1, 0), Orientation::Vertical),
        Err(BoardError::ShipOutOfBounds)
    );
    assert!(setup.occupied().is_empty());
}
