use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_reach_targets;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::CandidateMove;

/// Same-color occupants block only their own square; knights jump.
pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    push_reach_targets(game_state, from, color, knight_attacks(from), out);
}
