//! Draw instructions: plain tagged values built from maze data and interpreted
//! later by a [`RenderSurface`](crate::surface::RenderSurface).

use crate::config::{FillStyle, WallStyle};
use crate::geometry::{Point, Rect, cell_rect, cell_to_pixel};
use crate::model::{BlockDimensions, CellGrid, Direction, Position};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroke a straight wall segment.
    Line {
        from: Point,
        to: Point,
        style: WallStyle,
    },
    /// Fill a whole cell block.
    Fill { rect: Rect, style: FillStyle },
}

/// Segment for one side of the cell whose top-left pixel is `origin`.
fn wall_segment(origin: Point, block: BlockDimensions, side: Direction) -> (Point, Point) {
    let (x, y) = (origin.x, origin.y);
    let (w, h) = (f64::from(block.width), f64::from(block.height));
    match side {
        Direction::Up => (Point::new(x, y), Point::new(x + w, y)),
        Direction::Right => (Point::new(x + w, y), Point::new(x + w, y + h)),
        Direction::Down => (Point::new(x, y + h), Point::new(x + w, y + h)),
        Direction::Left => (Point::new(x, y), Point::new(x, y + h)),
    }
}

/// One line per closed side, row-major over cells and top/right/bottom/left within a cell.
pub fn wall_ops(grid: &CellGrid, block: BlockDimensions, style: WallStyle) -> Vec<DrawOp> {
    let closed: usize = grid.cells().iter().map(|m| 4 - m.open_sides() as usize).sum();
    let mut ops = Vec::with_capacity(closed);
    for (pos, mask) in grid.iter() {
        let origin = cell_to_pixel(pos.row, pos.col, block);
        for side in mask.walls() {
            let (from, to) = wall_segment(origin, block, side);
            ops.push(DrawOp::Line { from, to, style });
        }
    }
    ops
}

/// One block fill per path entry, in path order.
pub fn solution_ops(path: &[Position], block: BlockDimensions, style: FillStyle) -> Vec<DrawOp> {
    path.iter()
        .map(|pos| DrawOp::Fill {
            rect: cell_rect(*pos, block),
            style,
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/draw.rs"]
mod tests;
