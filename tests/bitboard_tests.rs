use broadside::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128, 10>::try_new().is_ok());

    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(bb.contains(1, 1));

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
    assert!(!bb.contains(4, 0));
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(0, 1), (3, 3)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
    assert_eq!(bb.count_ones(), 2);
}

#[test]
fn test_neighborhood_clips_at_corner() {
    let bb = BitBoard::<u128, 10>::from_cells([(0, 0)]).unwrap();
    let grown = bb.neighborhood();
    let cells: Vec<_> = grown.iter_set_bits().collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_neighborhood_of_segment() {
    let bb = BitBoard::<u128, 10>::from_cells([(5, 4), (5, 5)]).unwrap();
    let grown = bb.neighborhood();
    assert_eq!(grown.count_ones(), 12);
    assert!(grown.contains(4, 3));
    assert!(grown.contains(6, 6));
    assert!(!grown.contains(5, 7));
    assert!(!grown.contains(3, 4));
}

#[test]
fn test_complement_stays_on_board() {
    let bb = BitBoard::<u128, 10>::from_cells([(2, 2)]).unwrap();
    let inverse = !bb;
    assert_eq!(inverse.count_ones(), 99);
    assert!(!inverse.intersects(&bb));
}
