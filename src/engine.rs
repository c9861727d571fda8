//! Seams to the maze engine, plus the bundled wall-following checker.

use crate::model::{CellGrid, Direction, MazeDefinition, Position};

/// Outcome of checking a proposed solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// Human-readable reason, shown to the user verbatim.
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Produces new mazes. This is the interface for an external maze engine; no
/// generator ships with this crate, so the page has no generate control until
/// one is wired in through [`MazeSession::generate`](crate::session::MazeSession::generate).
pub trait MazeGenerator {
    fn generate_maze(&self, rows: usize, cols: usize) -> CellGrid;
}

pub trait SolutionChecker {
    fn check_solution(&self, maze: &MazeDefinition, path: &[Position]) -> ValidationResult;
}

/// Walks the path cell by cell: it must start on `start`, stay on the grid, move one
/// orthogonal step at a time through open sides, and finish on `end`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallChecker;

fn step_direction(from: Position, to: Position) -> Direction {
    if from.row != to.row {
        if to.row < from.row {
            Direction::Up
        } else {
            Direction::Down
        }
    } else if to.col < from.col {
        Direction::Left
    } else {
        Direction::Right
    }
}

fn invalid(msg: String) -> ValidationResult {
    ValidationResult::Invalid(msg)
}

impl SolutionChecker for WallChecker {
    fn check_solution(&self, maze: &MazeDefinition, path: &[Position]) -> ValidationResult {
        let start = maze.start;
        let end = maze.end;
        let Some((&first, rest)) = path.split_first() else {
            return invalid(format!(
                "Start your solution at the starting cell (row: {}, col: {}).",
                start.row, start.col
            ));
        };
        if first != start {
            return invalid(format!(
                "Start your solution at the starting cell (row: {}, col: {}).",
                start.row, start.col
            ));
        }

        let mut last = first;
        for (offset, &pos) in rest.iter().enumerate() {
            let idx = offset + 1;
            if !maze.grid.contains(pos) {
                return invalid(format!(
                    "The position at index ({}) (row: {}, col: {}) is not on the maze.",
                    idx, pos.row, pos.col
                ));
            }
            let delta = last.row.abs_diff(pos.row) + last.col.abs_diff(pos.col);
            if delta > 1 {
                return invalid(format!(
                    "The position at index ({}) moving from (row: {}, col: {}) to (row: {}, col: {}) was a diagonal move, which is not allowed.",
                    idx, last.row, last.col, pos.row, pos.col
                ));
            }
            if delta == 0 {
                return invalid(format!(
                    "No-move found at index ({}) from (row: {}, col: {}) to (row: {}, col: {}).",
                    idx, last.row, last.col, pos.row, pos.col
                ));
            }
            let dir = step_direction(last, pos);
            let Some(mask) = maze.grid.get(last) else {
                return invalid(format!(
                    "The position at index ({}) (row: {}, col: {}) is not on the maze.",
                    idx - 1,
                    last.row,
                    last.col
                ));
            };
            if !mask.is_open(dir) {
                let walls: Vec<&str> = mask.walls().map(Direction::name).collect();
                return invalid(format!(
                    "The position at index ({}) moving ({}) from (row: {}, col: {}) to (row: {}, col: {}) hit a wall. Cell at: (row: {}, col: {}) has walls: ({})",
                    idx,
                    dir.name(),
                    last.row,
                    last.col,
                    pos.row,
                    pos.col,
                    last.row,
                    last.col,
                    walls.join(", ")
                ));
            }
            last = pos;
        }

        if last != end {
            return invalid(format!(
                "Complete your solution at the ending cell (row: {}, col: {}).",
                end.row, end.col
            ));
        }
        ValidationResult::Valid
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
