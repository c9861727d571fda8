//! Control-loop state behind the page: the current maze, the last submitted
//! solution and its validation result.
//!
//! Every operation either fully replaces a piece of state or leaves it alone.
//! A failed parse never touches the active maze or solution.

use crate::config::MazeStyle;
use crate::draw::{DrawOp, solution_ops, wall_ops};
use crate::engine::{MazeGenerator, SolutionChecker, ValidationResult};
use crate::error::{MazeError, MazeResult};
use crate::format::{parse_maze, parse_path, serialize_maze, serialize_path};
use crate::geometry::compute_surface_size;
use crate::model::{MazeDefinition, Path};
use crate::sample::{sample_maze, sample_solution};
use crate::surface::RedrawPlan;

pub const SOLUTION_VALID_MESSAGE: &str = "Your solution works, well done!";

/// Result of submitting a solution that parsed.
#[derive(Clone, Debug, PartialEq)]
pub enum SolutionOutcome {
    /// Accepted; these fills replay the path from start to end.
    Animate(Vec<DrawOp>),
    /// Rejected by the checker with this reason.
    Rejected(String),
}

#[derive(Clone, Debug)]
pub struct MazeSession {
    style: MazeStyle,
    maze: MazeDefinition,
    solution: Option<Path>,
    result: Option<ValidationResult>,
}

impl Default for MazeSession {
    fn default() -> Self {
        Self::new(sample_maze(), MazeStyle::default())
    }
}

impl MazeSession {
    pub fn new(maze: MazeDefinition, style: MazeStyle) -> Self {
        Self {
            style,
            maze,
            solution: None,
            result: None,
        }
    }

    pub fn maze(&self) -> &MazeDefinition {
        &self.maze
    }

    pub fn solution(&self) -> Option<&Path> {
        self.solution.as_ref()
    }

    pub fn result(&self) -> Option<&ValidationResult> {
        self.result.as_ref()
    }

    pub fn style(&self) -> &MazeStyle {
        &self.style
    }

    pub fn maze_text(&self) -> String {
        serialize_maze(&self.maze)
    }

    pub fn solution_text(&self) -> String {
        self.solution
            .as_deref()
            .map(serialize_path)
            .unwrap_or_default()
    }

    /// Size and wall ops for the active maze.
    pub fn redraw_plan(&self) -> RedrawPlan {
        let grid = &self.maze.grid;
        RedrawPlan {
            size: compute_surface_size(grid.rows(), grid.cols(), self.style.block),
            walls: wall_ops(grid, self.style.block, self.style.walls),
        }
    }

    fn replace_maze(&mut self, maze: MazeDefinition) -> RedrawPlan {
        self.maze = maze;
        self.result = None;
        self.redraw_plan()
    }

    /// Parse and install a maze. On error the previous maze stays active.
    pub fn load_maze_text(&mut self, text: &str) -> MazeResult<RedrawPlan> {
        let maze = parse_maze(text)?;
        Ok(self.replace_maze(maze))
    }

    /// Ask an external maze engine for a fresh maze; any previous solution is dropped.
    /// The page itself never calls this, since no engine is bundled.
    pub fn generate(
        &mut self,
        generator: &dyn MazeGenerator,
        rows: usize,
        cols: usize,
    ) -> MazeResult<RedrawPlan> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::malformed(format!(
                "cannot generate a {rows}x{cols} maze"
            )));
        }
        let grid = generator.generate_maze(rows, cols);
        self.solution = None;
        Ok(self.replace_maze(MazeDefinition::with_default_corners(grid)))
    }

    /// Parse, store and check a solution. A parse error leaves the last result in place.
    pub fn submit_solution_text(
        &mut self,
        text: &str,
        checker: &dyn SolutionChecker,
    ) -> MazeResult<SolutionOutcome> {
        let path = parse_path(text)?;
        Ok(self.submit_solution(path, checker))
    }

    pub fn submit_solution(
        &mut self,
        path: Path,
        checker: &dyn SolutionChecker,
    ) -> SolutionOutcome {
        let result = checker.check_solution(&self.maze, &path);
        let outcome = match &result {
            ValidationResult::Valid => {
                let style = &self.style;
                SolutionOutcome::Animate(solution_ops(&path, style.block, style.solution))
            }
            ValidationResult::Invalid(reason) => SolutionOutcome::Rejected(reason.clone()),
        };
        self.solution = Some(path);
        self.result = Some(result);
        outcome
    }

    /// Install the bundled sample maze and check its known solution.
    pub fn load_sample(
        &mut self,
        checker: &dyn SolutionChecker,
    ) -> (RedrawPlan, SolutionOutcome) {
        let plan = self.replace_maze(sample_maze());
        let outcome = self.submit_solution(sample_solution(), checker);
        (plan, outcome)
    }

    /// Text for the result region, if a solution has been checked.
    pub fn result_message(&self) -> Option<&str> {
        match self.result.as_ref()? {
            ValidationResult::Valid => Some(SOLUTION_VALID_MESSAGE),
            ValidationResult::Invalid(reason) => Some(reason.as_str()),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
