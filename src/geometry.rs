use crate::model::{BlockDimensions, Position};

/// Pixel-space point on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

/// Canvas size in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

/// Top-left pixel of a cell. Shared by walls and solution fills so both layers line up.
pub fn cell_to_pixel(row: i32, col: i32, block: BlockDimensions) -> Point {
    Point::new(
        f64::from(col) * f64::from(block.width),
        f64::from(row) * f64::from(block.height),
    )
}

/// Full block rectangle of a cell.
pub fn cell_rect(pos: Position, block: BlockDimensions) -> Rect {
    Rect {
        origin: cell_to_pixel(pos.row, pos.col, block),
        width: f64::from(block.width),
        height: f64::from(block.height),
    }
}

/// Surface dimensions for a grid. Resizing clears a canvas, so apply this before drawing.
pub fn compute_surface_size(rows: usize, cols: usize, block: BlockDimensions) -> SurfaceSize {
    let scale = |cells: usize, px: u32| u32::try_from(cells).unwrap_or(u32::MAX).saturating_mul(px);
    SurfaceSize {
        width: scale(cols, block.width),
        height: scale(rows, block.height),
    }
}

#[cfg(test)]
#[path = "../tests/unit/geometry.rs"]
mod tests;
