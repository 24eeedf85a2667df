//! Move description types shared by generators, the legality filter and the
//! game controller.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    #[inline]
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_COL,
            CastleSide::Queenside => QUEENSIDE_ROOK_COL,
        }
    }

    #[inline]
    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// `(from, to)` of the rook for `color`.
    #[inline]
    pub const fn rook_shift(self, color: Color) -> (Square, Square) {
        let row = color.home_row();
        (
            Square::at(row, self.rook_from_col()),
            Square::at(row, self.rook_to_col()),
        )
    }

    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        }
    }
}

/// How a candidate reaches its target. Doubles as the highlight mark the
/// presentation layer shows for a selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    DoublePawnPush,
    Capture,
    EnPassant,
    Castle(CastleSide),
}

impl MoveKind {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }
}

/// A pseudo-legal move. It becomes legal once it survives the legality
/// filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    /// A pawn reaching the last rank; a promotion piece must be chosen.
    pub promotes: bool,
}

impl CandidateMove {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        CandidateMove {
            from,
            to,
            kind,
            promotes: false,
        }
    }

    #[inline]
    pub const fn promoting(mut self) -> Self {
        self.promotes = true;
        self
    }
}
