use super::*;
use crate::model::WallMask;
use crate::sample::{sample_maze, sample_solution};

fn check(path: &[Position]) -> ValidationResult {
    WallChecker.check_solution(&sample_maze(), path)
}

fn message(result: ValidationResult) -> String {
    match result {
        ValidationResult::Invalid(msg) => msg,
        ValidationResult::Valid => panic!("expected an invalid result"),
    }
}

#[test]
fn sample_solution_is_valid() {
    assert!(check(&sample_solution()).is_valid());
}

#[test]
fn empty_or_misplaced_start_is_rejected() {
    let expected = "Start your solution at the starting cell (row: 0, col: 0).";
    assert_eq!(message(check(&[])), expected);
    assert_eq!(message(check(&[Position::new(0, 1)])), expected);
}

#[test]
fn off_grid_cells_are_rejected() {
    let msg = message(check(&[Position::new(0, 0), Position::new(-1, 0)]));
    assert_eq!(
        msg,
        "The position at index (1) (row: -1, col: 0) is not on the maze."
    );
}

#[test]
fn diagonal_and_no_op_moves_are_rejected() {
    let diag = message(check(&[Position::new(0, 0), Position::new(1, 1)]));
    assert!(diag.contains("was a diagonal move"));

    let still = message(check(&[Position::new(0, 0), Position::new(0, 0)]));
    assert_eq!(
        still,
        "No-move found at index (1) from (row: 0, col: 0) to (row: 0, col: 0)."
    );
}

#[test]
fn wall_hits_list_the_cell_walls() {
    // (0,0) is open only to the right
    let msg = message(check(&[Position::new(0, 0), Position::new(1, 0)]));
    assert_eq!(
        msg,
        "The position at index (1) moving (down) from (row: 0, col: 0) to (row: 1, col: 0) hit a wall. Cell at: (row: 0, col: 0) has walls: (up, down, left)"
    );
}

#[test]
fn path_must_end_on_the_exit() {
    let mut path = sample_solution();
    path.pop();
    let msg = message(check(&path));
    assert_eq!(
        msg,
        "Complete your solution at the ending cell (row: 3, col: 3)."
    );
}

#[test]
fn backtracking_through_open_sides_is_allowed() {
    let mut path = sample_solution();
    // detour into the dead end at (3,2) and back
    path.splice(11..11, [Position::new(3, 2), Position::new(3, 1)]);
    assert!(check(&path).is_valid());
}

#[test]
fn extreme_coordinates_do_not_overflow_the_step_distance() {
    let maze = MazeDefinition {
        start: Position::new(i32::MIN, 0),
        end: Position::new(0, 0),
        grid: CellGrid::filled(1, 1, WallMask::OPEN).unwrap(),
    };
    let msg = message(WallChecker.check_solution(&maze, &[maze.start, Position::new(0, 0)]));
    assert!(msg.contains("diagonal move"), "{msg}");
}
