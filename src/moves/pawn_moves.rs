//! Pawn patterns.
//!
//! A pawn threatens only its two forward diagonals. The square straight
//! ahead is a move target but never a threat, which keeps a king free to
//! stand directly in front of an enemy pawn.

use crate::game_state::chess_types::{Color, Square, SquareSet};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareSet {
    match color {
        Color::White => SquareSet::from_bits(WHITE_PAWN_ATTACKS[square.index()]),
        Color::Black => SquareSet::from_bits(BLACK_PAWN_ATTACKS[square.index()]),
    }
}

/// The square one step ahead, if any.
#[inline]
pub fn pawn_push(color: Color, square: Square) -> Option<Square> {
    square.offset(color.pawn_direction(), 0)
}

/// The two-step target, only from the pawn's starting row.
#[inline]
pub fn pawn_double_push(color: Color, square: Square) -> Option<Square> {
    if square.row() != color.pawn_row() {
        return None;
    }
    square.offset(2 * color.pawn_direction(), 0)
}

const fn generate_pawn_attacks(direction: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32 + direction;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        if row >= 0 && row < 8 {
            if col > 0 {
                attacks |= 1u64 << (row as usize * 8 + (col - 1) as usize);
            }
            if col < 7 {
                attacks |= 1u64 << (row as usize * 8 + (col + 1) as usize);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
