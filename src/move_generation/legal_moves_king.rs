//! King steps and castling.
//!
//! A king step is dropped when the square holds an own piece, lies in the
//! opponent's threat map, or touches the opposing king. Castling is offered
//! only when every prerequisite holds at once: the right is still recorded,
//! king and rook stand on their home squares, the squares between them are
//! empty, the king is not in check, and no square the king crosses or lands
//! on is threatened or next to the opposing king.

use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::threat_map;
use crate::move_generation::legal_move_shared::push_reach_targets;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{CandidateMove, CastleSide, MoveKind};

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    let threatened = threat_map(game_state, color.opposite());
    let near_enemy_king = enemy_king_zone(game_state, color);

    let reach = king_attacks(from) & !threatened & !near_enemy_king;
    push_reach_targets(game_state, from, color, reach, out);

    generate_castling_moves(game_state, from, color, threatened, near_enemy_king, out);
}

fn generate_castling_moves(
    game_state: &GameState,
    king_from: Square,
    color: Color,
    threatened: SquareSet,
    near_enemy_king: SquareSet,
    out: &mut Vec<CandidateMove>,
) {
    let row = color.home_row();
    if king_from != Square::at(row, KING_HOME_COL) {
        return;
    }

    // Cannot castle out of check.
    if threatened.contains(king_from) {
        return;
    }

    let rights = game_state.castling_rights(color);
    for side in CastleSide::BOTH {
        let allowed = match side {
            CastleSide::Kingside => rights.kingside,
            CastleSide::Queenside => rights.queenside,
        };
        if allowed && castling_path_clear(game_state, color, side, threatened, near_enemy_king) {
            let to = Square::at(row, side.king_target_col());
            out.push(CandidateMove::new(king_from, to, MoveKind::Castle(side)));
        }
    }
}

fn castling_path_clear(
    game_state: &GameState,
    color: Color,
    side: CastleSide,
    threatened: SquareSet,
    near_enemy_king: SquareSet,
) -> bool {
    let board = &game_state.board;
    let row = color.home_row();
    let (rook_from, _) = side.rook_shift(color);

    if board.occupant_at(rook_from) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }

    let (low, high) = if rook_from.col() < KING_HOME_COL {
        (rook_from.col() + 1, KING_HOME_COL)
    } else {
        (KING_HOME_COL + 1, rook_from.col())
    };
    if (low..high).any(|col| !board.is_empty(Square::at(row, col))) {
        return false;
    }

    let target_col = side.king_target_col();
    let (first, last) = if target_col < KING_HOME_COL {
        (target_col, KING_HOME_COL - 1)
    } else {
        (KING_HOME_COL + 1, target_col)
    };
    (first..=last).all(|col| {
        let square = Square::at(row, col);
        !threatened.contains(square) && !near_enemy_king.contains(square)
    })
}

/// Squares adjacent to the opposing king, where this king may never stand.
fn enemy_king_zone(game_state: &GameState, color: Color) -> SquareSet {
    king_attacks(game_state.expect_king(color.opposite()))
}
