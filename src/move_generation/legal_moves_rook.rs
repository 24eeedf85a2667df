//! Pseudo-legal rook moves: each orthogonal ray up to and including the
//! first enemy piece.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_reach_targets;
use crate::moves::move_descriptions::CandidateMove;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    let reach = rook_attacks(from, game_state.board.occupancy());
    push_reach_targets(game_state, from, color, reach, out);
}
