use super::*;
use crate::config::MAZE_STYLE;
use crate::model::WallMask;

const BLOCK: BlockDimensions = MAZE_STYLE.block;

fn grid(rows: usize, cols: usize, masks: &[i32]) -> CellGrid {
    CellGrid::new(rows, cols, masks.iter().copied().map(WallMask).collect()).unwrap()
}

fn lines(ops: &[DrawOp]) -> Vec<((f64, f64), (f64, f64))> {
    ops.iter()
        .map(|op| match op {
            DrawOp::Line { from, to, .. } => ((from.x, from.y), (to.x, to.y)),
            DrawOp::Fill { .. } => panic!("unexpected fill"),
        })
        .collect()
}

#[test]
fn closed_cell_draws_four_sides_in_order() {
    let ops = wall_ops(&grid(1, 1, &[0]), BLOCK, MAZE_STYLE.walls);
    assert_eq!(
        lines(&ops),
        vec![
            ((0.0, 0.0), (6.0, 0.0)),
            ((6.0, 0.0), (6.0, 6.0)),
            ((0.0, 6.0), (6.0, 6.0)),
            ((0.0, 0.0), (0.0, 6.0)),
        ]
    );
}

#[test]
fn open_bits_suppress_their_side() {
    // right and down open at (0,1): only top and left remain
    let ops = wall_ops(&grid(1, 2, &[15, 2 | 4]), BLOCK, MAZE_STYLE.walls);
    assert_eq!(
        lines(&ops),
        vec![((6.0, 0.0), (12.0, 0.0)), ((6.0, 0.0), (6.0, 6.0))]
    );
}

#[test]
fn cells_are_visited_row_major() {
    // only the top wall survives in every cell
    let ops = wall_ops(&grid(2, 2, &[14, 14, 14, 14]), BLOCK, MAZE_STYLE.walls);
    let starts: Vec<(f64, f64)> = lines(&ops).into_iter().map(|(a, _)| a).collect();
    assert_eq!(starts, vec![(0.0, 0.0), (6.0, 0.0), (0.0, 6.0), (6.0, 6.0)]);
}

#[test]
fn op_count_drops_by_one_per_open_bit() {
    let masks = [0, 1, 3, 7, 15, 5, 10, 255, 16, 9, 6, 12];
    let g = grid(3, 4, &masks);
    let open: u32 = g.cells().iter().map(|m| m.open_sides()).sum();
    let ops = wall_ops(&g, BLOCK, MAZE_STYLE.walls);
    assert_eq!(ops.len(), 4 * g.len() - open as usize);
}

#[test]
fn fully_walled_and_fully_open_grids() {
    let closed = CellGrid::filled(5, 7, WallMask::CLOSED).unwrap();
    assert_eq!(wall_ops(&closed, BLOCK, MAZE_STYLE.walls).len(), 4 * 5 * 7);

    let open = CellGrid::filled(5, 7, WallMask::OPEN).unwrap();
    assert!(wall_ops(&open, BLOCK, MAZE_STYLE.walls).is_empty());
}

#[test]
fn wall_ops_carry_the_wall_style() {
    let ops = wall_ops(&grid(1, 1, &[14]), BLOCK, MAZE_STYLE.walls);
    assert!(matches!(&ops[0], DrawOp::Line { style, .. } if *style == MAZE_STYLE.walls));
}

#[test]
fn solution_ops_follow_path_order() {
    let path = vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)];
    let ops = solution_ops(&path, BLOCK, MAZE_STYLE.solution);
    assert_eq!(ops.len(), 3);
    let origins: Vec<(f64, f64)> = ops
        .iter()
        .map(|op| match op {
            DrawOp::Fill { rect, style } => {
                assert_eq!(*style, MAZE_STYLE.solution);
                assert_eq!((rect.width, rect.height), (6.0, 6.0));
                (rect.origin.x, rect.origin.y)
            }
            DrawOp::Line { .. } => panic!("unexpected line"),
        })
        .collect();
    assert_eq!(origins, vec![(0.0, 0.0), (6.0, 0.0), (6.0, 6.0)]);
}

#[test]
fn empty_path_builds_nothing() {
    assert!(solution_ops(&[], BLOCK, MAZE_STYLE.solution).is_empty());
}

#[test]
fn repeated_cells_are_kept() {
    let path = vec![Position::new(0, 0), Position::new(0, 0)];
    assert_eq!(solution_ops(&path, BLOCK, MAZE_STYLE.solution).len(), 2);
}
