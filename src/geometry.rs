//! 2D rotation and reflection utilities.
//!
//! A flat piece has at most 8 orientations (the dihedral group of the
//! square): four 90-degree rotations, each optionally mirrored.

use rustc_hash::FxHashSet;

use crate::pieces::{Cell, PIECE_CELLS};

/// A normalized piece shape: five offsets in canonical row-major order.
pub type Shape = [Cell; PIECE_CELLS];

/// Rotates a shape 90 degrees clockwise around the origin.
fn rotate90(shape: &Shape) -> Shape {
    shape.map(|(r, c)| (c, -r))
}

/// Mirrors a shape horizontally: (r, c) -> (r, -c).
fn reflect(shape: &Shape) -> Shape {
    shape.map(|(r, c)| (r, -c))
}

/// Translates a shape so its minimum row and column are both zero, then
/// sorts the offsets row-major to produce a comparable canonical key.
///
/// Two orientations that differ only by translation normalize to the same
/// shape, which is what makes deduplication work.
pub fn normalize(shape: &Shape) -> Shape {
    let min_r = shape.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_c = shape.iter().map(|&(_, c)| c).min().unwrap_or(0);

    let mut normalized = shape.map(|(r, c)| (r - min_r, c - min_c));
    normalized.sort_unstable();
    normalized
}

/// Generates all unique orientations of a piece.
///
/// Visits the four rotations in order, each followed by its mirror image,
/// keeping an orientation only the first time its canonical form appears.
/// Symmetric pieces therefore yield fewer than 8 orientations, and the
/// output order is stable across runs.
pub fn all_orientations(base: &Shape) -> Vec<Shape> {
    let mut seen: FxHashSet<Shape> = FxHashSet::default();
    let mut orientations = Vec::new();

    let mut current = *base;
    for _ in 0..4 {
        for shape in [normalize(&current), normalize(&reflect(&current))] {
            if seen.insert(shape) {
                orientations.push(shape);
            }
        }
        current = rotate90(&current);
    }

    orientations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PIECES;

    #[test]
    fn test_orientation_counts_within_dihedral_bounds() {
        for (name, cells) in PIECES {
            let count = all_orientations(&cells).len();
            assert!(
                (1..=8).contains(&count),
                "piece {name} produced {count} orientations"
            );
        }
    }

    #[test]
    fn test_orientations_are_stable_across_runs() {
        for (_, cells) in PIECES {
            assert_eq!(all_orientations(&cells), all_orientations(&cells));
        }
    }

    #[test]
    fn test_straight_bar_has_two_orientations() {
        let bar = PIECES[0].1;
        assert_eq!(all_orientations(&bar).len(), 2);
    }

    #[test]
    fn test_mirror_symmetric_piece_has_four_orientations() {
        let open_box = PIECES[2].1;
        assert_eq!(all_orientations(&open_box).len(), 4);
    }

    #[test]
    fn test_off_center_branch_has_all_eight_orientations() {
        let branched = [(0, 0), (0, 1), (0, 2), (0, 3), (1, 1)];
        assert_eq!(all_orientations(&branched).len(), 8);
    }

    #[test]
    fn test_normalize_shifts_to_origin_and_sorts() {
        let shifted = [(3, 4), (2, 4), (2, 5), (4, 4), (2, 6)];
        assert_eq!(
            normalize(&shifted),
            [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)]
        );
    }

    #[test]
    fn test_every_orientation_is_normalized() {
        for (_, cells) in PIECES {
            for orientation in all_orientations(&cells) {
                assert_eq!(orientation, normalize(&orientation));
            }
        }
    }
}
