use crate::game_state::chess_types::{Color, Piece};

/// Per-color record of what a side has played and taken. Piece placement
/// lives on the board, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    moves_record: Vec<String>,
    captured: Vec<Piece>,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Player {
            color,
            moves_record: Vec::new(),
            captured: Vec::new(),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Notation of this side's moves, oldest first.
    #[inline]
    pub fn moves_record(&self) -> &[String] {
        &self.moves_record
    }

    /// Enemy pieces this side has captured, in capture order.
    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub(crate) fn record_move(&mut self, notation: String, captured: Option<Piece>) {
        self.moves_record.push(notation);
        self.captured.extend(captured);
    }
}
