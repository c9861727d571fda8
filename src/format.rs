//! JSON import/export for mazes and solutions.
//!
//! Mazes are accepted either as a bare row-major 2D array of wall masks or as
//! the engine's definition object (`start`, `end`, `rowsAndColumns`). Solutions
//! are arrays of `{row, col}` cells; older `{x, y}` cells are converted here so
//! nothing past this module sees them.

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, MazeResult};
use crate::model::{CellGrid, MazeDefinition, Path, Position, WallMask};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefinitionJson {
    start: Position,
    end: Position,
    rows_and_columns: Vec<Vec<WallMask>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MazeJson {
    Rows(Vec<Vec<WallMask>>),
    Definition(DefinitionJson),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CellJson {
    RowCol { row: i32, col: i32 },
    XY { x: i32, y: i32 },
}

impl From<CellJson> for Position {
    fn from(cell: CellJson) -> Self {
        match cell {
            CellJson::RowCol { row, col } => Position::new(row, col),
            CellJson::XY { x, y } => Position::new(y, x),
        }
    }
}

pub fn parse_maze(text: &str) -> MazeResult<MazeDefinition> {
    let value: serde_json::Value = serde_json::from_str(text.trim())
        .map_err(|e| MazeError::InvalidMazeJson(e.to_string()))?;
    let parsed = MazeJson::deserialize(value).map_err(|_| {
        MazeError::InvalidMazeJson(
            "Expected a 2D array of wall masks or an object with start, end and rowsAndColumns."
                .into(),
        )
    })?;
    match parsed {
        MazeJson::Rows(rows) => {
            let grid = CellGrid::from_rows(&rows)?;
            Ok(MazeDefinition::with_default_corners(grid))
        }
        MazeJson::Definition(def) => {
            let grid = CellGrid::from_rows(&def.rows_and_columns)?;
            for (name, pos) in [("start", def.start), ("end", def.end)] {
                if !grid.contains(pos) {
                    return Err(MazeError::malformed(format!(
                        "{name} cell (row: {}, col: {}) is outside the {}x{} grid",
                        pos.row,
                        pos.col,
                        grid.rows(),
                        grid.cols()
                    )));
                }
            }
            Ok(MazeDefinition {
                start: def.start,
                end: def.end,
                grid,
            })
        }
    }
}

/// Definition object form, as handed to the maze engine and offered for download.
pub fn serialize_maze(def: &MazeDefinition) -> String {
    let json = DefinitionJson {
        start: def.start,
        end: def.end,
        rows_and_columns: def.grid.to_rows(),
    };
    serde_json::to_string(&json).unwrap_or_default()
}

/// Bare 2D array form.
pub fn serialize_grid(grid: &CellGrid) -> String {
    serde_json::to_string(&grid.to_rows()).unwrap_or_default()
}

pub fn parse_grid(text: &str) -> MazeResult<CellGrid> {
    let rows: Vec<Vec<WallMask>> = serde_json::from_str(text.trim())
        .map_err(|e| MazeError::InvalidMazeJson(e.to_string()))?;
    CellGrid::from_rows(&rows)
}

pub fn parse_path(text: &str) -> MazeResult<Path> {
    let cells: Vec<CellJson> = serde_json::from_str(text.trim())
        .map_err(|e| MazeError::InvalidSolutionJson(e.to_string()))?;
    Ok(cells.into_iter().map(Position::from).collect())
}

pub fn serialize_path(path: &[Position]) -> String {
    serde_json::to_string(path).unwrap_or_default()
}

#[cfg(test)]
#[path = "../tests/unit/format.rs"]
mod tests;
