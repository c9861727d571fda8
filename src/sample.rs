use crate::model::{CellGrid, MazeDefinition, Path, Position};

/// 4x4 snake with one dead end at (3,2).
const SAMPLE_ROWS: [[i32; 4]; 4] = [
    [2, 10, 10, 12],
    [6, 10, 10, 9],
    [5, 6, 10, 12],
    [3, 11, 8, 1],
];

const SAMPLE_SOLUTION: [(i32, i32); 15] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 3),
    (1, 2),
    (1, 1),
    (1, 0),
    (2, 0),
    (3, 0),
    (3, 1),
    (2, 1),
    (2, 2),
    (2, 3),
    (3, 3),
];

pub fn sample_maze() -> MazeDefinition {
    MazeDefinition::with_default_corners(CellGrid::from_array(SAMPLE_ROWS))
}

pub fn sample_solution() -> Path {
    SAMPLE_SOLUTION
        .iter()
        .map(|&(row, col)| Position::new(row, col))
        .collect()
}
