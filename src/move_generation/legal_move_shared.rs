use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{CandidateMove, MoveKind};

/// Turns a reach set into candidates: empty squares are quiet moves, enemy
/// squares are captures, own pieces and the enemy king are skipped.
pub fn push_reach_targets(
    game_state: &GameState,
    from: Square,
    color: Color,
    reach: SquareSet,
    out: &mut Vec<CandidateMove>,
) {
    for to in reach {
        match game_state.board.occupant_at(to) {
            None => out.push(CandidateMove::new(from, to, MoveKind::Quiet)),
            Some(occupant) if occupant.color != color && occupant.kind != PieceKind::King => {
                out.push(CandidateMove::new(from, to, MoveKind::Capture))
            }
            Some(_) => {}
        }
    }
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, color: Color, square: Square) -> Option<Piece> {
    game_state
        .board
        .occupant_at(square)
        .filter(|piece| piece.color != color)
}
