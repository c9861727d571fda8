//! The only layer allowed to write to a drawing surface.

use crate::config::{FillStyle, WallStyle};
use crate::draw::DrawOp;
use crate::error::SurfaceError;
use crate::geometry::{Point, Rect, SurfaceSize};

pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Primitive drawing calls a backend must provide. Errors propagate; nothing is retried.
pub trait RenderSurface {
    /// Resize the backing surface. Implementations may clear it as a side effect.
    fn resize(&mut self, size: SurfaceSize) -> SurfaceResult<()>;

    fn clear(&mut self) -> SurfaceResult<()>;

    fn stroke_line(&mut self, from: Point, to: Point, style: &WallStyle) -> SurfaceResult<()>;

    fn fill_rect(&mut self, rect: Rect, style: &FillStyle) -> SurfaceResult<()>;

    /// Run `ops` in order, stopping at the first failure.
    fn execute(&mut self, ops: &[DrawOp]) -> SurfaceResult<()> {
        for op in ops {
            match op {
                DrawOp::Line { from, to, style } => self.stroke_line(*from, *to, style)?,
                DrawOp::Fill { rect, style } => self.fill_rect(*rect, style)?,
            }
        }
        Ok(())
    }
}

/// Everything needed to paint a maze from scratch.
#[derive(Clone, Debug, PartialEq)]
pub struct RedrawPlan {
    pub size: SurfaceSize,
    pub walls: Vec<DrawOp>,
}

/// Resize, clear, then draw the walls. Resizing first keeps it from wiping fresh strokes.
pub fn render_maze<S: RenderSurface + ?Sized>(
    surface: &mut S,
    plan: &RedrawPlan,
) -> SurfaceResult<()> {
    surface.resize(plan.size)?;
    surface.clear()?;
    surface.execute(&plan.walls)
}

#[cfg(test)]
#[path = "../tests/unit/surface.rs"]
mod tests;
