use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_reach_targets;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::CandidateMove;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    let reach = bishop_attacks(from, game_state.board.occupancy());
    push_reach_targets(game_state, from, color, reach, out);
}
