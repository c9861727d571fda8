/// Convenience result type for session and format operations.
pub type MazeResult<T> = Result<T, MazeError>;

/// Failures surfaced to the user from a single action (load, submit, redraw).
#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    /// Maze text was not valid JSON for any accepted maze shape.
    #[error(
        "Invalid JSON submitted in maze definition, please check the format of your definition. {0}"
    )]
    InvalidMazeJson(String),

    /// Solution text was not a JSON array of cells.
    #[error("Invalid JSON submitted, please check the format of your solution. {0}")]
    InvalidSolutionJson(String),

    /// JSON parsed but does not describe a rectangular, non-empty grid.
    #[error("Invalid maze definition: {0}")]
    MalformedMaze(String),

    /// The drawing surface failed while rendering.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl MazeError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedMaze(msg.into())
    }
}

/// Drawing surface failures. These are never retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No 2d context could be obtained for the canvas.
    #[error("drawing surface unavailable: {0}")]
    Unavailable(String),

    /// The canvas is no longer attached to the document.
    #[error("drawing surface detached from the document")]
    Detached,

    /// A draw call was rejected by the surface.
    #[error("draw call failed: {0}")]
    Draw(String),

    /// The next animation frame could not be requested.
    #[error("animation frame request failed: {0}")]
    FrameRequest(String),
}

#[cfg(test)]
#[path = "../tests/unit/error.rs"]
mod tests;
