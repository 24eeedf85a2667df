//! Orthogonal ray scanning, shared by every sliding piece.

use crate::game_state::chess_types::{Square, SquareSet};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares a rook on `square` reaches. Each ray ends on the first occupied
/// square, which is included whatever its color.
#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    slide(square, &ROOK_DIRECTIONS, occupancy)
}

pub fn slide(square: Square, directions: &[(i8, i8)], occupancy: SquareSet) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    for &(d_row, d_col) in directions {
        attacks |= trace_ray(square, d_row, d_col, occupancy);
    }
    attacks
}

pub fn trace_ray(square: Square, d_row: i8, d_col: i8, occupancy: SquareSet) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    let mut cursor = square.offset(d_row, d_col);

    while let Some(target) = cursor {
        attacks.insert(target);
        if occupancy.contains(target) {
            break;
        }
        cursor = target.offset(d_row, d_col);
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::chess_types::{Square, SquareSet};

    #[test]
    fn rook_rays_from_d4_have_fourteen_squares() {
        let d4 = Square::new(4, 3).expect("d4");
        assert_eq!(rook_attacks(d4, SquareSet::EMPTY).len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = Square::new(7, 0).expect("a1");
        let a4 = Square::new(4, 0).expect("a4");
        let a5 = Square::new(3, 0).expect("a5");
        let blockers: SquareSet = [a4].into_iter().collect();
        let attacks = rook_attacks(a1, blockers);

        assert!(attacks.contains(a4));
        assert!(!attacks.contains(a5));
        assert_eq!(attacks.len(), 3 + 7);
    }
}
