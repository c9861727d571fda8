//! Fixed styling plus the user-adjustable settings persisted between visits.

use serde::{Deserialize, Serialize};

use crate::model::BlockDimensions;

/// Stroke used for maze walls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallStyle {
    pub line_width: f64,
    pub stroke: &'static str,
}

/// Fill used for solution cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    pub fill: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MazeStyle {
    pub block: BlockDimensions,
    pub walls: WallStyle,
    pub solution: FillStyle,
}

pub const MAZE_STYLE: MazeStyle = MazeStyle {
    block: BlockDimensions {
        width: 6,
        height: 6,
    },
    walls: WallStyle {
        line_width: 0.6,
        stroke: "rgba(0, 0, 0, 0.5)",
    },
    solution: FillStyle {
        fill: "rgba(255, 0, 0, 0.5)",
    },
};

impl Default for MazeStyle {
    fn default() -> Self {
        MAZE_STYLE
    }
}

pub const MAX_OPS_PER_TICK: usize = 64;

/// CSS upscaling of the canvas; blocks are only a few pixels wide.
pub const DISPLAY_SCALE: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Solution cells painted per animation frame.
    pub ops_per_tick: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { ops_per_tick: 1 }
    }
}

impl Settings {
    /// Keeps `ops_per_tick` within `1..=MAX_OPS_PER_TICK`.
    pub fn normalized(self) -> Self {
        Self {
            ops_per_tick: self.ops_per_tick.clamp(1, MAX_OPS_PER_TICK),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
