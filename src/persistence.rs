//! JSON persistence for solved boards.
//!
//! The payload carries everything a renderer needs to redraw the board
//! without re-running the solver: board dimensions, the static label
//! grid, the per-cell assignment records, the must-cover and forbidden
//! cells, and the piece-to-cells placements.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{self, FORBIDDEN, LABELS};
use crate::pieces::{self, Cell, Placement, PIECE_CELLS};

/// A (row, col) pair in the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: i32,
    pub col: i32,
}

impl From<Cell> for CellRef {
    fn from((row, col): Cell) -> Self {
        Self { row, col }
    }
}

/// One board cell with its label and assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    pub row: i32,
    pub col: i32,
    pub label: String,
    pub piece: Option<String>,
    pub is_must_cover: bool,
    pub is_forbidden: bool,
}

/// One placed piece by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub name: String,
    pub cells: Vec<CellRef>,
}

/// The full serialized solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub rows: usize,
    pub cols: usize,
    #[serde(rename = "boardLabels")]
    pub board_labels: Vec<Vec<String>>,
    pub cells: Vec<Vec<CellRecord>>,
    pub must_cover: Vec<CellRef>,
    pub forbidden: Vec<CellRef>,
    pub placements: Vec<PlacementRecord>,
}

/// Builds the payload for a solved board.
pub fn build_record(must_cover: &[Cell], solution: &[Placement]) -> SolutionRecord {
    let mut assignment: Vec<Vec<Option<String>>> = vec![vec![None; board::COLS]; board::ROWS];
    for placement in solution {
        for &(r, c) in &placement.cells {
            assignment[r as usize][c as usize] = Some(placement.name().to_string());
        }
    }

    let cells = (0..board::ROWS)
        .map(|r| {
            (0..board::COLS)
                .map(|c| {
                    let cell = (r as i32, c as i32);
                    CellRecord {
                        row: cell.0,
                        col: cell.1,
                        label: LABELS[r][c].to_string(),
                        piece: assignment[r][c].clone(),
                        is_must_cover: must_cover.contains(&cell),
                        is_forbidden: cell == FORBIDDEN,
                    }
                })
                .collect()
        })
        .collect();

    SolutionRecord {
        rows: board::ROWS,
        cols: board::COLS,
        board_labels: LABELS
            .iter()
            .map(|row| row.iter().map(|label| label.to_string()).collect())
            .collect(),
        cells,
        must_cover: must_cover.iter().map(|&cell| cell.into()).collect(),
        forbidden: vec![FORBIDDEN.into()],
        placements: solution
            .iter()
            .map(|placement| PlacementRecord {
                name: placement.name().to_string(),
                cells: placement.cells.iter().map(|&cell| cell.into()).collect(),
            })
            .collect(),
    }
}

impl SolutionRecord {
    /// Reconstructs the placements from the payload.
    ///
    /// Returns `None` if a piece name is not in the catalog, a placement
    /// does not carry exactly five cells, or a cell is off the board.
    pub fn placements(&self) -> Option<Vec<Placement>> {
        self.placements
            .iter()
            .map(|record| {
                let piece_index = pieces::piece_index(&record.name)?;
                if record.cells.len() != PIECE_CELLS {
                    return None;
                }
                let mut cells = [(0, 0); PIECE_CELLS];
                for (slot, cell_ref) in cells.iter_mut().zip(&record.cells) {
                    if !board::in_bounds((cell_ref.row, cell_ref.col)) {
                        return None;
                    }
                    *slot = (cell_ref.row, cell_ref.col);
                }
                Some(Placement { piece_index, cells })
            })
            .collect()
    }

    /// The must-cover cells as plain (row, col) pairs.
    pub fn must_cover_cells(&self) -> Vec<Cell> {
        self.must_cover
            .iter()
            .map(|cell_ref| (cell_ref.row, cell_ref.col))
            .collect()
    }
}

/// Saves a solved board as pretty-printed JSON.
pub fn save(path: &Path, must_cover: &[Cell], solution: &[Placement]) -> io::Result<()> {
    let record = build_record(must_cover, solution);
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &record)?;
    Ok(())
}

/// Loads a previously saved payload.
pub fn load(path: &Path) -> Option<SolutionRecord> {
    let file = File::open(path).ok()?;
    serde_json::from_reader(file).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_placement() -> Placement {
        Placement {
            piece_index: 0,
            cells: [(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)],
        }
    }

    #[test]
    fn test_record_marks_special_cells() {
        let must_cover = [(0, 0), (0, 5), (3, 7)];
        let record = build_record(&must_cover, &[sample_placement()]);

        assert_eq!(record.rows, board::ROWS);
        assert_eq!(record.cols, board::COLS);
        assert!(record.cells[0][0].is_must_cover);
        assert!(record.cells[5][8].is_forbidden);
        assert_eq!(record.cells[1][2].piece.as_deref(), Some("I5"));
        assert_eq!(record.cells[0][1].piece, None);
    }

    #[test]
    fn test_json_roundtrip() {
        let must_cover = [(0, 0), (0, 5), (3, 7)];
        let record = build_record(&must_cover, &[sample_placement()]);

        let json = serde_json::to_string(&record).unwrap();
        let reloaded: SolutionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, reloaded);
        assert_eq!(reloaded.placements(), Some(vec![sample_placement()]));
        assert_eq!(reloaded.must_cover_cells(), must_cover.to_vec());
    }

    #[test]
    fn test_unknown_piece_name_is_rejected() {
        let mut record = build_record(&[(0, 0), (0, 5), (3, 7)], &[sample_placement()]);
        record.placements[0].name = "nope".to_string();
        assert_eq!(record.placements(), None);
    }
}
