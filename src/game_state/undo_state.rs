use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::CandidateMove;

/// Everything needed to take back one simulated move exactly.
#[derive(Debug, Clone)]
pub struct SimulationRecord {
    pub mv: CandidateMove,
    pub moved_piece: Piece,
    /// The captured piece and the square it was lifted from. For en passant
    /// that square is not the destination.
    pub captured: Option<PlacedPiece>,
    /// Rook relocation of a castling move, `(from, to)`.
    pub rook_shift: Option<(Square, Square)>,
}
