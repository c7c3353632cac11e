//! Fixed calendar board geometry, labels, and text formatting.
//!
//! The board is a 6x9 grid whose cells carry month, day, and weekday
//! labels. One corner cell is structurally forbidden: no piece may cover
//! it and no date selection may name it. Everything here is static
//! configuration; per-request state lives in the solver.

use crate::pieces::{Cell, Placement};

/// Number of board rows.
pub const ROWS: usize = 6;

/// Number of board columns.
pub const COLS: usize = 9;

/// Total cell count (fits in a u64 bitmask).
pub const NUM_CELLS: usize = ROWS * COLS;

/// The one cell no piece may ever cover, labeled EMPTY on the board.
pub const FORBIDDEN: Cell = (5, 8);

/// Bitmask over board cells; bit `row * COLS + col` is set when the cell
/// is present. `NUM_CELLS` is 54, so a u64 holds the whole board.
pub type CellMask = u64;

/// Per-cell labels in board position.
pub const LABELS: [[&str; COLS]; ROWS] = [
    ["JAN", "FEB", "MAR", "APR", "1", "2", "3", "MON", "TUE"],
    ["MAY", "4", "5", "6", "7", "8", "9", "WED", "BL"],
    ["JUN", "10", "11", "12", "13", "31", "15", "THU", "BL"],
    ["JUL", "16", "17", "18", "19", "20", "21", "FRI", "SAT"],
    ["AUG", "22", "23", "24", "25", "26", "27", "BL", "SUN"],
    ["SEP", "OCT", "NOV", "DEC", "28", "29", "30", "14", "EMPTY"],
];

/// Converts a (row, column) cell to a linear index.
#[inline(always)]
pub const fn cell_to_idx(cell: Cell) -> usize {
    cell.0 as usize * COLS + cell.1 as usize
}

/// Converts a linear index back to a (row, column) cell.
#[inline(always)]
pub const fn idx_to_cell(idx: usize) -> Cell {
    ((idx / COLS) as i32, (idx % COLS) as i32)
}

/// Returns whether a cell lies on the board.
#[inline(always)]
pub const fn in_bounds(cell: Cell) -> bool {
    cell.0 >= 0 && (cell.0 as usize) < ROWS && cell.1 >= 0 && (cell.1 as usize) < COLS
}

/// Single-cell bitmask.
#[inline(always)]
pub const fn cell_mask(cell: Cell) -> CellMask {
    1 << cell_to_idx(cell)
}

/// Mask of the cells the pieces must exactly tile: the whole board minus
/// the forbidden cell and the caller's must-stay-uncovered cells.
pub fn coverage_mask(must_cover: &[Cell]) -> CellMask {
    let mut mask = (1 << NUM_CELLS) - 1;
    mask &= !cell_mask(FORBIDDEN);
    for &cell in must_cover {
        mask &= !cell_mask(cell);
    }
    mask
}

/// Resolves a board label to its cell, scanning row-major.
///
/// The forbidden EMPTY cell is never resolvable. The filler label "BL"
/// appears more than once; the first match wins, but no valid date
/// selection names it.
pub fn find_label(label: &str) -> Option<Cell> {
    for r in 0..ROWS {
        for c in 0..COLS {
            let cell = (r as i32, c as i32);
            if cell != FORBIDDEN && LABELS[r][c] == label {
                return Some(cell);
            }
        }
    }
    None
}

/// Formats the board as paired label/piece lines.
///
/// Each board row prints a line of labels and a line of piece marks.
/// Pieces show as 1..9 then letters, the forbidden cell as `#`, the
/// must-stay-uncovered windows as blanks, and anything left uncovered
/// (only possible for partial input) as a dot.
pub fn format_solution(must_cover: &[Cell], solution: &[Placement]) -> String {
    let mut marks = [["·"; COLS]; ROWS];
    marks[FORBIDDEN.0 as usize][FORBIDDEN.1 as usize] = "#";
    for &(r, c) in must_cover {
        marks[r as usize][c as usize] = " ";
    }

    let piece_marks = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "A"];
    for placement in solution {
        for &(r, c) in &placement.cells {
            marks[r as usize][c as usize] = piece_marks[placement.piece_index];
        }
    }

    // column width driven by the widest label in each column, minimum 3
    let widths: Vec<usize> = (0..COLS)
        .map(|c| (0..ROWS).map(|r| LABELS[r][c].len()).max().unwrap().max(3))
        .collect();

    let fmt_row = |values: &[&str]| -> String {
        values
            .iter()
            .enumerate()
            .map(|(c, val)| format!("{:^width$}", val, width = widths[c]))
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    let header: Vec<String> = (0..COLS).map(|c| format!("C{}", c + 1)).collect();
    let header_refs: Vec<&str> = header.iter().map(String::as_str).collect();
    output.push_str(&format!("     {}\n", fmt_row(&header_refs)));

    for r in 0..ROWS {
        output.push_str(&format!("R{:<2} L {}\n", r + 1, fmt_row(&LABELS[r])));
        output.push_str(&format!("R{:<2} P {}\n\n", r + 1, fmt_row(&marks[r])));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index_roundtrip() {
        for idx in 0..NUM_CELLS {
            assert_eq!(cell_to_idx(idx_to_cell(idx)), idx);
        }
    }

    #[test]
    fn test_every_cell_has_a_label() {
        for row in LABELS {
            for label in row {
                assert!(!label.is_empty());
            }
        }
    }

    #[test]
    fn test_coverage_mask_has_fifty_cells() {
        let must_cover = [(0, 0), (0, 5), (3, 7)];
        let mask = coverage_mask(&must_cover);
        assert_eq!(mask.count_ones(), 50);
        assert_eq!(mask & cell_mask(FORBIDDEN), 0);
        for cell in must_cover {
            assert_eq!(mask & cell_mask(cell), 0);
        }
    }

    #[test]
    fn test_find_label_resolves_dates() {
        assert_eq!(find_label("JAN"), Some((0, 0)));
        assert_eq!(find_label("2"), Some((0, 5)));
        assert_eq!(find_label("31"), Some((2, 5)));
        assert_eq!(find_label("14"), Some((5, 7)));
        assert_eq!(find_label("FRI"), Some((3, 7)));
        assert_eq!(find_label("SUN"), Some((4, 8)));
    }

    #[test]
    fn test_forbidden_cell_is_not_resolvable() {
        assert_eq!(find_label("EMPTY"), None);
        assert_eq!(find_label("nope"), None);
    }

    #[test]
    fn test_format_marks_forbidden_and_windows() {
        let output = format_solution(&[(0, 0)], &[]);
        assert!(output.contains("JAN"));
        assert!(output.contains('#'));
        assert!(output.contains('·'));
    }
}
