//! Puzzle piece definitions and coordinate types.
//!
//! Each piece is a set of five cell offsets in board space, normalized so
//! the minimum row and column are both zero.

/// A board cell as a zero-based (row, column) pair.
pub type Cell = (i32, i32);

/// Number of cells in every piece.
pub const PIECE_CELLS: usize = 5;

/// Number of pieces in the catalog.
pub const NUM_PIECES: usize = 10;

/// The ten pieces that must tile the calendar board.
///
/// Offsets are normalized so the minimum row/column are at the origin.
/// Catalog order is fixed; the solver and the placement index rely on it.
pub const PIECES: [(&str, [Cell; PIECE_CELLS]); NUM_PIECES] = [
    // straight bar
    ("I5", [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
    // bar with an off-center branch
    ("T", [(0, 0), (0, 1), (0, 2), (0, 3), (1, 1)]),
    // open box
    ("U", [(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)]),
    // zig-zag
    ("Z", [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]),
    // long corner
    ("L1", [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]),
    // 2x2 block with a tail
    ("P", [(0, 0), (0, 1), (1, 0), (1, 1), (2, 1)]),
    // offset steps
    ("F", [(0, 0), (0, 1), (1, 1), (1, 2), (2, 1)]),
    // tall zig-zag
    ("W", [(0, 0), (1, 0), (1, 1), (2, 1), (3, 1)]),
    // tall corner
    ("L2", [(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]),
    // centered tee
    ("TL", [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)]),
];

/// Looks up a piece's catalog index by name.
pub fn piece_index(name: &str) -> Option<usize> {
    PIECES.iter().position(|&(piece_name, _)| piece_name == name)
}

/// A piece fixed at specific absolute cells on the board.
///
/// Uses a fixed-size array to avoid heap allocation in the solver's hot loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub piece_index: usize,
    pub cells: [Cell; PIECE_CELLS],
}

impl Placement {
    /// Returns the catalog name of the placed piece.
    pub fn name(&self) -> &'static str {
        PIECES[self.piece_index].0
    }
}

/// Formats one catalog piece as an ASCII atlas entry.
///
/// Filled cells show as `#`, empty bounding-box cells as `.`.
pub fn format_piece(piece_index: usize) -> String {
    let (name, cells) = PIECES[piece_index];
    let max_r = cells.iter().map(|&(r, _)| r).max().unwrap_or(0);
    let max_c = cells.iter().map(|&(_, c)| c).max().unwrap_or(0);

    let mut grid = vec![vec!["."; max_c as usize + 1]; max_r as usize + 1];
    for &(r, c) in &cells {
        grid[r as usize][c as usize] = "#";
    }

    let body = grid
        .iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{} ({} cells):\n{}\n", name, cells.len(), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shapes_are_normalized() {
        for (name, cells) in PIECES {
            let min_r = cells.iter().map(|&(r, _)| r).min().unwrap();
            let min_c = cells.iter().map(|&(_, c)| c).min().unwrap();
            assert_eq!((min_r, min_c), (0, 0), "piece {name} is not normalized");
        }
    }

    #[test]
    fn test_catalog_cells_are_distinct() {
        for (name, cells) in PIECES {
            for i in 0..cells.len() {
                assert!(
                    !cells[..i].contains(&cells[i]),
                    "piece {name} repeats cell {:?}",
                    cells[i]
                );
            }
        }
    }

    #[test]
    fn test_piece_index_lookup() {
        assert_eq!(piece_index("I5"), Some(0));
        assert_eq!(piece_index("TL"), Some(9));
        assert_eq!(piece_index("X"), None);
    }

    #[test]
    fn test_format_piece_atlas_entry() {
        insta::assert_snapshot!(format_piece(2), @r"
        U (5 cells):
        # . #
        # # #
        ");
    }
}
