use super::*;

fn masks(v: &[i32]) -> Vec<WallMask> {
    v.iter().copied().map(WallMask).collect()
}

#[test]
fn direction_bits_follow_drawing_order() {
    let bits: Vec<i32> = Direction::ALL.iter().map(|d| d.bit()).collect();
    assert_eq!(bits, vec![1, 2, 4, 8]);
}

#[test]
fn walls_are_the_unset_low_bits() {
    let mask = WallMask(2 | 8);
    assert_eq!(
        mask.walls().collect::<Vec<_>>(),
        vec![Direction::Up, Direction::Down]
    );
    assert_eq!(WallMask::OPEN.walls().count(), 0);
    assert_eq!(WallMask::CLOSED.walls().count(), 4);
    // High bits carry no meaning.
    assert_eq!(WallMask(16 | 1).walls().count(), 3);
    assert_eq!(WallMask(0xF0 | 15).open_sides(), 4);
}

#[test]
fn grid_rejects_bad_dimensions() {
    assert!(CellGrid::new(0, 3, vec![]).is_err());
    assert!(CellGrid::new(2, 2, masks(&[1, 2, 3])).is_err());
    assert!(CellGrid::from_rows(&[]).is_err());
    assert!(CellGrid::from_rows(&[masks(&[1, 2]), masks(&[3])]).is_err());
}

#[test]
fn grid_is_row_major() {
    let grid = CellGrid::from_rows(&[masks(&[1, 2, 3]), masks(&[4, 5, 6])]).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (2, 3));
    assert_eq!(grid.get(Position::new(1, 0)), Some(WallMask(4)));
    assert_eq!(grid.get(Position::new(0, 2)), Some(WallMask(3)));
    assert_eq!(grid.get(Position::new(2, 0)), None);
    assert_eq!(grid.get(Position::new(0, -1)), None);

    let (pos, mask) = grid.iter().nth(4).unwrap();
    assert_eq!(pos, Position::new(1, 1));
    assert_eq!(mask, WallMask(5));
    assert_eq!(grid.to_rows(), vec![masks(&[1, 2, 3]), masks(&[4, 5, 6])]);
}

#[test]
fn default_corners_span_the_grid() {
    let grid = CellGrid::filled(3, 5, WallMask::CLOSED).unwrap();
    let def = MazeDefinition::with_default_corners(grid);
    assert_eq!(def.start, Position::new(0, 0));
    assert_eq!(def.end, Position::new(2, 4));
}

#[test]
fn array_literal_grid() {
    let grid = CellGrid::from_array([[2, 12], [3, 9]]);
    assert_eq!((grid.rows(), grid.cols()), (2, 2));
    assert_eq!(grid.cells(), &[WallMask(2), WallMask(12), WallMask(3), WallMask(9)]);
}

#[test]
fn oversized_dimensions_are_rejected_without_allocating() {
    assert!(CellGrid::new(MAX_GRID_SIDE + 1, 1, Vec::new()).is_err());
    assert!(CellGrid::filled(1, MAX_GRID_SIDE + 1, WallMask::OPEN).is_err());
    assert!(CellGrid::filled(usize::MAX, usize::MAX, WallMask::OPEN).is_err());
}
