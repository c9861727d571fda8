//! Core data models for the maze renderer.
//! Grids are row-major and replaced wholesale; nothing here is mutated after construction.

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, MazeResult};

/// Pixel size of one maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDimensions {
    pub width: u32,
    pub height: u32,
}

/// Zero-based cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Ordered solution path, start cell first. May be empty and may repeat cells.
pub type Path = Vec<Position>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Wall drawing order within a cell: top, right, bottom, left.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const fn bit(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 4,
            Direction::Left => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Open-side bitmask of one cell. A set bit means the side is passable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallMask(pub i32);

impl WallMask {
    pub const CLOSED: WallMask = WallMask(0);
    pub const OPEN: WallMask = WallMask(0b1111);

    pub const fn is_open(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Number of open sides, counting only the four direction bits.
    pub const fn open_sides(self) -> u32 {
        (self.0 & 0b1111).count_ones()
    }

    /// Sides that still carry a wall, in drawing order.
    pub fn walls(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| !self.is_open(*d))
    }
}

/// Flat row-major grid of wall masks. `cells.len() == rows * cols`, both at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<WallMask>,
}

/// Largest row or column count; every cell coordinate must fit a [`Position`].
pub const MAX_GRID_SIDE: usize = i32::MAX as usize;

/// Checks the dimensions and returns the cell count they imply.
fn cell_count(rows: usize, cols: usize) -> MazeResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(MazeError::malformed(format!(
            "a maze needs at least one row and one column (got {rows}x{cols})"
        )));
    }
    if rows > MAX_GRID_SIDE || cols > MAX_GRID_SIDE {
        return Err(MazeError::malformed(format!(
            "{rows}x{cols} is too large, each side is limited to {MAX_GRID_SIDE}"
        )));
    }
    rows.checked_mul(cols)
        .ok_or_else(|| MazeError::malformed(format!("{rows}x{cols} has too many cells")))
}

impl CellGrid {
    pub fn new(rows: usize, cols: usize, cells: Vec<WallMask>) -> MazeResult<Self> {
        let expected = cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(MazeError::malformed(format!(
                "expected {expected} cells for {rows}x{cols}, got {}",
                cells.len()
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Grid from a fixed-size literal; dimensions are checked at compile time.
    pub fn from_array<const R: usize, const C: usize>(rows: [[i32; C]; R]) -> Self {
        const {
            assert!(R > 0 && C > 0, "a maze needs at least one cell");
            assert!(R <= MAX_GRID_SIDE && C <= MAX_GRID_SIDE, "maze side too large");
        };
        Self {
            rows: R,
            cols: C,
            cells: rows.iter().flatten().copied().map(WallMask).collect(),
        }
    }

    /// Uniform grid, every cell carrying `mask`.
    pub fn filled(rows: usize, cols: usize, mask: WallMask) -> MazeResult<Self> {
        let count = cell_count(rows, cols)?;
        Self::new(rows, cols, vec![mask; count])
    }

    pub fn from_rows(rows: &[Vec<WallMask>]) -> MazeResult<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((idx, ragged)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MazeError::malformed(format!(
                "row {idx} has {} columns, expected {cols}",
                ragged.len()
            )));
        }
        Self::new(rows.len(), cols, rows.concat())
    }

    pub fn to_rows(&self) -> Vec<Vec<WallMask>> {
        self.cells.chunks(self.cols).map(<[WallMask]>::to_vec).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[WallMask] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    pub fn get(&self, pos: Position) -> Option<WallMask> {
        if !self.contains(pos) {
            return None;
        }
        self.cells
            .get(pos.row as usize * self.cols + pos.col as usize)
            .copied()
    }

    /// Row-major iteration yielding each cell with its coordinate.
    pub fn iter(&self) -> impl Iterator<Item = (Position, WallMask)> + '_ {
        let cols = self.cols;
        // construction bounds both sides by MAX_GRID_SIDE, so the casts are lossless
        self.cells.iter().enumerate().map(move |(idx, mask)| {
            (
                Position::new((idx / cols) as i32, (idx % cols) as i32),
                *mask,
            )
        })
    }
}

/// Maze as exchanged with the maze engine: grid plus entry and exit cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeDefinition {
    pub start: Position,
    pub end: Position,
    pub grid: CellGrid,
}

impl MazeDefinition {
    /// Definition with the engine's default corners: top-left start, bottom-right end.
    pub fn with_default_corners(grid: CellGrid) -> Self {
        let end = Position::new(grid.rows() as i32 - 1, grid.cols() as i32 - 1);
        Self {
            start: Position::new(0, 0),
            end,
            grid,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/model.rs"]
mod tests;
