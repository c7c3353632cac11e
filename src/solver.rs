//! Backtracking exact-cover solver for date selections.
//!
//! A solve request names the three cells that must stay uncovered (month,
//! day, weekday). The solver enumerates every legal placement of every
//! piece up front, indexes placements by the cell they cover, then runs a
//! most-constrained-cell backtracking search for an assignment of exactly
//! one placement per piece that tiles the remaining 50 cells.
//!
//! Key representation choices:
//! - Occupied cells are a u64 bitmask (bit = row * 9 + col) so collision
//!   checks and undo are single AND/OR operations.
//! - Committed pieces are a u16 bitmask.
//! - Placements are precomputed once per request with their masks; the
//!   search only touches integers until a solution is assembled.

use std::fmt;

use crate::board::{self, CellMask};
use crate::geometry::all_orientations;
use crate::pieces::{Cell, Placement, NUM_PIECES, PIECES, PIECE_CELLS};

/// A structurally invalid solve request, detected before any search runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// A must-stay-uncovered cell lies outside the 6x9 board.
    OffBoard(Cell),
    /// A must-stay-uncovered cell names the forbidden cell.
    Forbidden(Cell),
    /// The same cell was selected more than once.
    Duplicate(Cell),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::OffBoard((r, c)) => {
                write!(f, "cell ({r}, {c}) is outside the board")
            }
            RequestError::Forbidden((r, c)) => {
                write!(f, "cell ({r}, {c}) is the forbidden cell and cannot be selected")
            }
            RequestError::Duplicate((r, c)) => {
                write!(f, "cell ({r}, {c}) was selected more than once")
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// A precomputed legal placement: occupancy mask plus the absolute cells.
#[derive(Clone, Copy)]
struct Candidate {
    piece_index: usize,
    mask: CellMask,
    cells: [Cell; PIECE_CELLS],
}

/// Immutable per-request search tables.
struct Tables {
    /// All candidates, in piece-catalog order then enumeration order.
    candidates: Vec<Candidate>,
    /// Candidate ids covering each cell, indexed by linear cell index.
    by_cell: Vec<Vec<u32>>,
    /// The cells the candidates must exactly tile.
    coverage: CellMask,
}

/// Mutable search state: committed cells, pieces, and candidate ids.
struct State {
    used_cells: CellMask,
    used_pieces: u16,
    chosen: Vec<u32>,
}

/// Solves the puzzle for one date selection.
///
/// `must_cover` holds the month, day, and weekday cells that must stay
/// uncovered. Returns the first solution found in the fixed deterministic
/// search order, `Ok(None)` when no tiling exists (a normal outcome for
/// some selections), or a [`RequestError`] for malformed input.
pub fn solve(must_cover: [Cell; 3]) -> Result<Option<Vec<Placement>>, RequestError> {
    validate_request(&must_cover)?;

    let coverage = board::coverage_mask(&must_cover);
    debug_assert_eq!(coverage.count_ones() as usize, NUM_PIECES * PIECE_CELLS);

    let Some(candidates) = enumerate_all(coverage) else {
        log::info!("unsolvable: a piece has no legal placement for {must_cover:?}");
        return Ok(None);
    };
    let by_cell = index_by_cell(&candidates);

    let tables = Tables {
        candidates,
        by_cell,
        coverage,
    };
    let mut state = State {
        used_cells: 0,
        used_pieces: 0,
        chosen: Vec::with_capacity(NUM_PIECES),
    };

    if search(&tables, &mut state) {
        let solution: Vec<Placement> = state
            .chosen
            .iter()
            .map(|&id| {
                let candidate = &tables.candidates[id as usize];
                Placement {
                    piece_index: candidate.piece_index,
                    cells: candidate.cells,
                }
            })
            .collect();
        log::info!("solved {must_cover:?} with {} placements", solution.len());
        Ok(Some(solution))
    } else {
        log::info!("search exhausted for {must_cover:?}: no solution");
        Ok(None)
    }
}

/// Rejects duplicate, off-board, and forbidden must-cover cells.
///
/// The CLI resolves labels before calling in, but the core re-checks so a
/// bad caller cannot corrupt the search state.
fn validate_request(must_cover: &[Cell; 3]) -> Result<(), RequestError> {
    for (i, &cell) in must_cover.iter().enumerate() {
        if !board::in_bounds(cell) {
            return Err(RequestError::OffBoard(cell));
        }
        if cell == board::FORBIDDEN {
            return Err(RequestError::Forbidden(cell));
        }
        if must_cover[..i].contains(&cell) {
            return Err(RequestError::Duplicate(cell));
        }
    }
    Ok(())
}

/// Enumerates every legal placement of every piece against the coverage
/// target.
///
/// Enumeration order is fixed: pieces in catalog order, orientations in
/// generator order, base offsets row-major. Returns `None` as soon as any
/// piece has no legal placement, since no exact cover can then exist.
fn enumerate_all(coverage: CellMask) -> Option<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for (piece_index, (name, cells)) in PIECES.iter().enumerate() {
        let start = candidates.len();

        for orientation in all_orientations(cells) {
            let max_r = orientation.iter().map(|&(r, _)| r).max().unwrap_or(0);
            let max_c = orientation.iter().map(|&(_, c)| c).max().unwrap_or(0);

            for base_r in 0..board::ROWS as i32 - max_r {
                for base_c in 0..board::COLS as i32 - max_c {
                    let absolute = orientation.map(|(r, c)| (base_r + r, base_c + c));
                    let mask = absolute
                        .iter()
                        .fold(0, |acc, &cell| acc | board::cell_mask(cell));

                    // the mask must fall entirely inside the coverage
                    // target, which excludes forbidden and must-cover cells
                    if mask & !coverage != 0 {
                        continue;
                    }

                    candidates.push(Candidate {
                        piece_index,
                        mask,
                        cells: absolute,
                    });
                }
            }
        }

        let count = candidates.len() - start;
        if count == 0 {
            log::warn!("piece {name} has no legal placements for this selection");
            return None;
        }
        log::debug!("piece {name}: {count} placements");
    }

    Some(candidates)
}

/// Builds the cell -> covering-candidates index.
///
/// Each list inherits the arena's order, so the search branches over
/// candidates deterministically.
fn index_by_cell(candidates: &[Candidate]) -> Vec<Vec<u32>> {
    let mut by_cell: Vec<Vec<u32>> = vec![Vec::new(); board::NUM_CELLS];
    for (id, candidate) in candidates.iter().enumerate() {
        for &cell in &candidate.cells {
            by_cell[board::cell_to_idx(cell)].push(id as u32);
        }
    }
    by_cell
}

/// Returns whether a candidate can still be committed.
#[inline(always)]
fn is_viable(candidate: &Candidate, state: &State) -> bool {
    state.used_pieces & (1 << candidate.piece_index) == 0
        && candidate.mask & state.used_cells == 0
}

/// Picks the uncovered cell with the fewest viable candidates.
///
/// Ties break to the first minimal cell in row-major index order, keeping
/// results reproducible. A cell with zero viable candidates ends the scan
/// early: no other choice can rescue the branch.
fn pick_cell(tables: &Tables, state: &State) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;

    for idx in 0..board::NUM_CELLS {
        let bit = 1 << idx;
        if tables.coverage & bit == 0 || state.used_cells & bit != 0 {
            continue;
        }

        let viable = tables.by_cell[idx]
            .iter()
            .filter(|&&id| is_viable(&tables.candidates[id as usize], state))
            .count();

        if best.map_or(true, |(least, _)| viable < least) {
            best = Some((viable, idx));
        }
        if viable == 0 {
            break;
        }
    }

    best.map(|(_, idx)| idx)
}

/// Recursive most-constrained-cell backtracking.
///
/// Commits a candidate, recurses, and undoes the commit exactly on
/// failure. Returns as soon as the first complete cover is assembled.
fn search(tables: &Tables, state: &mut State) -> bool {
    if state.used_cells == tables.coverage {
        // each commit adds five disjoint cells, so a full cover always
        // holds exactly one placement per piece
        debug_assert_eq!(state.used_pieces.count_ones() as usize, NUM_PIECES);
        return true;
    }

    let Some(cell) = pick_cell(tables, state) else {
        // defensive: an incomplete cover always leaves an uncovered cell
        return false;
    };

    for i in 0..tables.by_cell[cell].len() {
        let id = tables.by_cell[cell][i];
        let candidate = &tables.candidates[id as usize];
        if !is_viable(candidate, state) {
            continue;
        }
        debug_assert_eq!(state.used_pieces & (1 << candidate.piece_index), 0);

        state.used_pieces |= 1 << candidate.piece_index;
        state.used_cells |= candidate.mask;
        state.chosen.push(id);

        if search(tables, state) {
            return true;
        }

        state.chosen.pop();
        state.used_cells &= !candidate.mask;
        state.used_pieces &= !(1 << candidate.piece_index);
    }

    false
}
