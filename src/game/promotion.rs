//! Pawn promotion: the pending request and the piece chosen to resolve it.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::GameError;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::move_descriptions::CandidateMove;

/// A pawn move that reached the last rank and waits for its replacement
/// piece. Nothing on the board has changed yet; the move is committed
/// together with the chosen piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionRequest {
    /// Square the pawn moves from.
    pub pawn: Square,
    pub destination: Square,
    pub color: Color,
    pub(crate) mv: CandidateMove,
}

impl PromotionRequest {
    pub(crate) fn new(mv: CandidateMove, color: Color) -> Self {
        PromotionRequest {
            pawn: mv.from,
            destination: mv.to,
            color,
            mv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionChoice {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Knight => PieceKind::Knight,
        }
    }
}

impl TryFrom<PieceKind> for PromotionChoice {
    type Error = GameError;

    fn try_from(kind: PieceKind) -> Result<Self, Self::Error> {
        match kind {
            PieceKind::Queen => Ok(PromotionChoice::Queen),
            PieceKind::Rook => Ok(PromotionChoice::Rook),
            PieceKind::Bishop => Ok(PromotionChoice::Bishop),
            PieceKind::Knight => Ok(PromotionChoice::Knight),
            other => Err(GameError::InvalidPromotionChoice(other.name().to_owned())),
        }
    }
}

/// Accepts the full piece name or its notation letter, in any case.
impl FromStr for PromotionChoice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "queen" | "q" => Ok(PromotionChoice::Queen),
            "rook" | "r" => Ok(PromotionChoice::Rook),
            "bishop" | "b" => Ok(PromotionChoice::Bishop),
            "knight" | "n" => Ok(PromotionChoice::Knight),
            _ => Err(GameError::InvalidPromotionChoice(s.to_owned())),
        }
    }
}

impl fmt::Display for PromotionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().name())
    }
}
