use broadside::{
    apply_shot, Board, BoardError, CellState, Coord, Fleet, FleetSetup, Orientation, ShotOutcome,
    BOARD_SIZE, TOTAL_SHIP_CELLS,
};

/// Every ship laid horizontally from column A on rows 1, 3, 5, 7 and 9.
fn known_fleet() -> (Board, Fleet) {
    let mut setup = FleetSetup::new();
    for i in 0..5 {
        setup
            .place(i, Coord::new(i * 2, 0), Orientation::Horizontal)
            .unwrap();
    }
    setup.finish().unwrap()
}

#[test]
fn test_new_board_is_all_water() {
    let board = Board::new();
    assert_eq!(board.count(CellState::Empty), 100);
    assert_eq!(board.cell_at(Coord::new(9, 9)).unwrap(), CellState::Empty);
}

#[test]
fn test_cell_at_out_of_bounds() {
    let board = Board::new();
    let err = board.cell_at(Coord::new(BOARD_SIZE as usize, 0)).unwrap_err();
    assert!(matches!(err, BoardError::BitBoardError(_)));
}

#[test]
fn test_finished_setup_marks_ship_cells() {
    let (board, fleet) = known_fleet();
    assert_eq!(board.count(CellState::Occupied), TOTAL_SHIP_CELLS);
    assert_eq!(board.cell_at(Coord::new(0, 4)).unwrap(), CellState::Occupied);
    assert_eq!(board.cell_at(Coord::new(0, 5)).unwrap(), CellState::Empty);
    assert_eq!(fleet.ship_index_at(Coord::new(2, 3)), Some(1));
    assert_eq!(fleet.ship_index_at(Coord::new(1, 0)), None);
}

#[test]
fn test_concealed_hides_ships_but_not_shots() {
    let (mut board, mut fleet) = known_fleet();
    apply_shot(&mut board, &mut fleet, Coord::new(0, 0));
    apply_shot(&mut board, &mut fleet, Coord::new(1, 0));

    let view = board.concealed();
    assert_eq!(view.count(CellState::Occupied), 0);
    assert_eq!(view.cell_at(Coord::new(0, 0)).unwrap(), CellState::Hit);
    assert_eq!(view.cell_at(Coord::new(1, 0)).unwrap(), CellState::Missed);
    assert_eq!(view.cell_at(Coord::new(0, 1)).unwrap(), CellState::Empty);
}

#[test]
fn test_fleet_eliminated_only_when_every_ship_sunk() {
    let (mut board, mut fleet) = known_fleet();
    let cells: Vec<Coord> = fleet.ships().iter().flat_map(|s| s.cells()).collect();
    let (last, rest) = cells.split_last().unwrap();
    for &at in rest {
        apply_shot(&mut board, &mut fleet, at);
        assert!(!fleet.is_eliminated());
    }
    assert_eq!(fleet.ships_afloat(), 1);
    assert!(matches!(
        apply_shot(&mut board, &mut fleet, *last),
        ShotOutcome::HitAndSunk(_)
    ));
    assert!(fleet.is_eliminated());
    assert_eq!(board.count(CellState::Sunk), TOTAL_SHIP_CELLS);
}

#[test]
fn test_coord_notation() {
    assert_eq!(Coord::new(4, 0).to_string(), "A5");
    assert_eq!(Coord::new(9, 9).to_string(), "J10");
    assert_eq!("b10".parse::<Coord>().unwrap(), Coord::new(9, 1));
    assert!("K1".parse::<Coord>().is_err());
    assert!("A0".parse::<Coord>().is_err());
    assert!("A11".parse::<Coord>().is_err());
    assert!("".parse::<Coord>().is_err());
    assert!("A+5".parse::<Coord>().is_err());
    assert!("B".parse::<Coord>().is_err());
    assert!("C 4".parse::<Coord>().is_err());
}
