//! Maze renderer: turns wall-mask grids and solution paths into draw ops and
//! replays solutions on a canvas a few cells per animation frame.

pub mod browser;
pub mod components;
pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod format;
pub mod geometry;
pub mod model;
pub mod sample;
pub mod scheduler;
pub mod session;
pub mod storage;
pub mod surface;
pub mod testing;
pub mod util;

pub use error::{MazeError, MazeResult, SurfaceError};
