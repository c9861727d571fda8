use super::*;
use crate::config::MAZE_STYLE;
use crate::draw::{solution_ops, wall_ops};
use crate::geometry::compute_surface_size;
use crate::model::{CellGrid, Position, WallMask};
use crate::testing::{Recorder, SurfaceCall};

fn plan_for(rows: usize, cols: usize, mask: WallMask) -> RedrawPlan {
    let grid = CellGrid::filled(rows, cols, mask).unwrap();
    RedrawPlan {
        size: compute_surface_size(rows, cols, MAZE_STYLE.block),
        walls: wall_ops(&grid, MAZE_STYLE.block, MAZE_STYLE.walls),
    }
}

#[test]
fn render_maze_resizes_then_clears_then_draws() {
    let plan = plan_for(2, 3, WallMask::CLOSED);
    let mut rec = Recorder::new();
    render_maze(&mut rec, &plan).unwrap();

    assert_eq!(
        rec.calls[0],
        SurfaceCall::Resize(SurfaceSize {
            width: 18,
            height: 12
        })
    );
    assert_eq!(rec.calls[1], SurfaceCall::Clear);
    assert_eq!(rec.line_count(), 24);
    assert_eq!(rec.calls.len(), 26);
}

#[test]
fn execute_preserves_op_order() {
    let path = [Position::new(1, 1), Position::new(0, 1), Position::new(0, 0)];
    let ops = solution_ops(&path, MAZE_STYLE.block, MAZE_STYLE.solution);
    let mut rec = Recorder::new();
    rec.execute(&ops).unwrap();
    let origins: Vec<(f64, f64)> = rec
        .fills()
        .iter()
        .map(|r| (r.origin.x, r.origin.y))
        .collect();
    assert_eq!(origins, vec![(6.0, 6.0), (6.0, 0.0), (0.0, 0.0)]);
}

#[test]
fn draw_failure_stops_execution_and_propagates() {
    let plan = plan_for(1, 2, WallMask::CLOSED);
    let mut rec = Recorder::failing_after(3);
    let err = render_maze(&mut rec, &plan).unwrap_err();
    assert!(matches!(err, SurfaceError::Draw(_)));
    assert_eq!(rec.line_count(), 3);
}

#[test]
fn open_grid_only_resizes_and_clears() {
    let plan = plan_for(4, 4, WallMask::OPEN);
    let mut rec = Recorder::new();
    render_maze(&mut rec, &plan).unwrap();
    assert_eq!(rec.calls.len(), 2);
}
