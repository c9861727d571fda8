use super::*;
use crate::engine::WallChecker;
use crate::model::{CellGrid, Position, WallMask};

struct OpenFieldGenerator;

impl MazeGenerator for OpenFieldGenerator {
    fn generate_maze(&self, rows: usize, cols: usize) -> CellGrid {
        CellGrid::filled(rows, cols, WallMask::OPEN).unwrap()
    }
}

#[test]
fn default_session_draws_the_sample() {
    let session = MazeSession::default();
    let plan = session.redraw_plan();
    assert_eq!((plan.size.width, plan.size.height), (24, 24));
    // 16 cells, 15 passages, each passage opens one side on both of its cells
    assert_eq!(plan.walls.len(), 4 * 16 - 30);
    assert!(session.result().is_none());
}

#[test]
fn bad_maze_text_keeps_the_previous_maze() {
    let mut session = MazeSession::default();
    let before = session.maze().clone();
    let err = session.load_maze_text("[[1, 2,").unwrap_err();
    assert!(matches!(err, MazeError::InvalidMazeJson(_)));
    assert_eq!(session.maze(), &before);

    assert!(session.load_maze_text("[[1, 2], [3]]").is_err());
    assert_eq!(session.maze(), &before);
}

#[test]
fn loading_a_maze_resets_the_result() {
    let mut session = MazeSession::default();
    session.submit_solution(vec![Position::new(0, 0)], &WallChecker);
    assert!(session.result().is_some());

    let plan = session.load_maze_text("[[0, 0, 0]]").unwrap();
    assert_eq!((plan.size.width, plan.size.height), (18, 6));
    assert_eq!(plan.walls.len(), 12);
    assert!(session.result().is_none());
    assert_eq!(session.maze().end, Position::new(0, 2));
}

#[test]
fn valid_solution_animates_in_path_order() {
    let mut session = MazeSession::default();
    let text = crate::format::serialize_path(&crate::sample::sample_solution());
    let outcome = session.submit_solution_text(&text, &WallChecker).unwrap();
    let SolutionOutcome::Animate(ops) = outcome else {
        panic!("sample solution should be accepted");
    };
    assert_eq!(ops.len(), 15);
    assert_eq!(session.result_message(), Some(SOLUTION_VALID_MESSAGE));
    assert_eq!(session.solution_text(), text);
}

#[test]
fn invalid_solution_reports_the_checker_message() {
    let mut session = MazeSession::default();
    let outcome = session
        .submit_solution_text(r#"[{"row":0,"col":1}]"#, &WallChecker)
        .unwrap();
    let expected = "Start your solution at the starting cell (row: 0, col: 0).";
    assert_eq!(outcome, SolutionOutcome::Rejected(expected.into()));
    assert_eq!(session.result_message(), Some(expected));
}

#[test]
fn unparsable_solution_keeps_the_last_result() {
    let mut session = MazeSession::default();
    session.submit_solution(crate::sample::sample_solution(), &WallChecker);
    let err = session.submit_solution_text("not json", &WallChecker).unwrap_err();
    assert!(matches!(err, MazeError::InvalidSolutionJson(_)));
    assert_eq!(session.result_message(), Some(SOLUTION_VALID_MESSAGE));
    assert_eq!(session.solution().map(Vec::len), Some(15));
}

#[test]
fn generate_installs_the_engine_grid() {
    let mut session = MazeSession::default();
    session.submit_solution(crate::sample::sample_solution(), &WallChecker);
    let plan = session.generate(&OpenFieldGenerator, 10, 20).unwrap();
    assert_eq!((plan.size.width, plan.size.height), (120, 60));
    assert!(plan.walls.is_empty());
    assert!(session.solution().is_none());
    assert!(session.generate(&OpenFieldGenerator, 0, 5).is_err());
}

#[test]
fn load_sample_checks_the_bundled_solution() {
    let mut session = MazeSession::default();
    session.load_maze_text("[[15]]").unwrap();
    let (plan, outcome) = session.load_sample(&WallChecker);
    assert_eq!(plan.walls.len(), 34);
    assert!(matches!(outcome, SolutionOutcome::Animate(ref ops) if ops.len() == 15));
}
