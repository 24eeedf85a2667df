//! Full legal move generation pipeline.
//!
//! Per-piece pseudo-legal generation is dispatched on piece kind, then every
//! candidate is simulated, tested for self-check and undone. Only survivors
//! are returned.

use tracing::trace;

use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{commit_move, with_simulated_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{
    GeneratedMove, MoveAnnotations, MoveGenResult, MoveGenerationError, MoveGenerator,
};
use crate::moves::move_descriptions::CandidateMove;

/// Candidates for the piece on `from`, ignoring self-check. Empty when the
/// square is empty.
pub fn pseudo_legal_moves_from(game_state: &GameState, from: Square) -> Vec<CandidateMove> {
    let Some(piece) = game_state.board.occupant_at(from) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(28);
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, color, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, from, color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, color, &mut out),
        PieceKind::Rook => generate_rook_moves(game_state, from, color, &mut out),
        PieceKind::Queen => generate_queen_moves(game_state, from, color, &mut out),
        PieceKind::King => generate_king_moves(game_state, from, color, &mut out),
    }
    out
}

/// Legal moves of the piece on `from`, whichever color it is.
///
/// The board is mutated while each candidate is tested and restored before
/// this returns.
pub fn legal_moves_from(game_state: &mut GameState, from: Square) -> Vec<CandidateMove> {
    let Some(piece) = game_state.board.occupant_at(from) else {
        return Vec::new();
    };
    let mut candidates = pseudo_legal_moves_from(game_state, from);
    candidates.retain(|mv| {
        let exposes_king =
            with_simulated_move(game_state, *mv, |after| is_king_in_check(after, piece.color));
        if exposes_king {
            trace!(
                origin = ?mv.from,
                target = ?mv.to,
                color = %piece.color,
                "dropped move leaving king in check"
            );
        }
        !exposes_king
    });
    candidates
}

/// Every legal move of the side to move.
pub fn legal_moves(game_state: &mut GameState) -> Vec<CandidateMove> {
    let color = game_state.side_to_move;
    let origins: Vec<Square> = game_state
        .board
        .pieces_of(color)
        .map(|placed| placed.square)
        .collect();
    origins
        .into_iter()
        .flat_map(|from| legal_moves_from(game_state, from))
        .collect()
}

/// Stops at the first legal move found for `color`.
pub fn has_legal_move(game_state: &mut GameState, color: Color) -> bool {
    let origins: Vec<Square> = game_state
        .board
        .pieces_of(color)
        .map(|placed| placed.square)
        .collect();
    origins
        .into_iter()
        .any(|from| !legal_moves_from(game_state, from).is_empty())
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        for color in Color::BOTH {
            if game_state.board.count(color, PieceKind::King) != 1 {
                return Err(MoveGenerationError::InvalidState(format!(
                    "{color} must have exactly one king"
                )));
            }
        }

        let mut scratch = game_state.clone();
        let candidates = legal_moves(&mut scratch);
        let mut legal = Vec::with_capacity(candidates.len());

        for mv in candidates {
            let choices: Vec<Option<PieceKind>> = if mv.promotes {
                PROMOTION_KINDS.iter().copied().map(Some).collect()
            } else {
                vec![None]
            };

            for promotion in choices {
                let mut next = game_state.clone();
                commit_move(&mut next, mv, promotion);
                let annotations = classify_move_annotations(&mut next);
                legal.push(GeneratedMove {
                    mv,
                    promotion,
                    game_after_move: next,
                    annotations,
                });
            }
        }

        Ok(legal)
    }
}

fn classify_move_annotations(next: &mut GameState) -> MoveAnnotations {
    let defender = next.side_to_move;
    let gives_check = is_king_in_check(next, defender);
    let is_checkmate = gives_check && !has_legal_move(next, defender);
    MoveAnnotations {
        gives_check,
        is_checkmate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::{simulate_move, undo_simulation};
    use crate::moves::move_descriptions::MoveKind;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square on board")
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut state = GameState::new_game();
        assert_eq!(legal_moves(&mut state).len(), 20);
        assert_eq!(state, GameState::new_game());
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // Rook on e8 pins the knight on e4 to the king on e1.
        let mut state = GameState::builder()
            .piece(sq(7, 4), Color::White, PieceKind::King)
            .piece(sq(4, 4), Color::White, PieceKind::Knight)
            .piece(sq(0, 4), Color::Black, PieceKind::Rook)
            .piece(sq(0, 0), Color::Black, PieceKind::King)
            .build();
        assert_eq!(pseudo_legal_moves_from(&state, sq(4, 4)).len(), 8);
        assert!(legal_moves_from(&mut state, sq(4, 4)).is_empty());
    }

    #[test]
    fn king_cannot_retreat_along_checking_ray() {
        let mut state = GameState::builder()
            .piece(sq(4, 4), Color::White, PieceKind::King)
            .piece(sq(0, 4), Color::Black, PieceKind::Rook)
            .piece(sq(0, 0), Color::Black, PieceKind::King)
            .build();
        let targets: Vec<Square> = legal_moves_from(&mut state, sq(4, 4))
            .into_iter()
            .map(|mv| mv.to)
            .collect();
        assert!(!targets.contains(&sq(5, 4)));
        assert!(!targets.contains(&sq(3, 4)));
        assert!(targets.contains(&sq(5, 3)));
    }

    #[test]
    fn en_passant_exposing_king_on_rank_is_filtered() {
        let mut state = GameState::builder()
            .piece(sq(3, 0), Color::White, PieceKind::King)
            .piece(sq(3, 4), Color::White, PieceKind::Pawn)
            .piece(sq(3, 3), Color::Black, PieceKind::Pawn)
            .piece(sq(3, 7), Color::Black, PieceKind::Rook)
            .piece(sq(0, 7), Color::Black, PieceKind::King)
            .en_passant(EnPassantWindow {
                target: sq(2, 3),
                pawn: sq(3, 3),
                color: Color::Black,
            })
            .build();
        let moves = legal_moves_from(&mut state, sq(3, 4));
        assert_eq!(moves, vec![CandidateMove::new(sq(3, 4), sq(2, 4), MoveKind::Quiet)]);
    }

    #[test]
    fn every_retained_move_is_safe_on_resimulation() {
        let mut state = GameState::new_game();
        let moves = legal_moves(&mut state);
        for mv in moves {
            let record = simulate_move(&mut state, mv);
            assert!(!is_king_in_check(&state, Color::White));
            undo_simulation(&mut state, record);
        }
        assert_eq!(state, GameState::new_game());
    }

    #[test]
    fn generator_expands_promotions_and_flags_mate() {
        let state = GameState::builder()
            .piece(sq(1, 0), Color::White, PieceKind::Pawn)
            .piece(sq(1, 5), Color::White, PieceKind::King)
            .piece(sq(0, 7), Color::Black, PieceKind::King)
            .piece(sq(1, 7), Color::Black, PieceKind::Pawn)
            .piece(sq(2, 7), Color::White, PieceKind::Pawn)
            .build();
        let generated = LegalMoveGenerator
            .generate_legal_moves(&state)
            .expect("valid position");
        let promotions: Vec<_> = generated
            .iter()
            .filter(|g| g.mv.from == sq(1, 0))
            .collect();
        assert_eq!(promotions.len(), 4);
        let mates: Vec<_> = promotions
            .iter()
            .filter(|g| g.annotations.is_checkmate)
            .map(|g| g.promotion)
            .collect();
        assert_eq!(mates, vec![Some(PieceKind::Queen), Some(PieceKind::Rook)]);
    }

    #[test]
    fn generator_rejects_missing_king() {
        let state = GameState::builder()
            .piece(sq(7, 4), Color::White, PieceKind::King)
            .build();
        assert!(matches!(
            LegalMoveGenerator.generate_legal_moves(&state),
            Err(MoveGenerationError::InvalidState(_))
        ));
    }

    #[test]
    #[should_panic(expected = "White king is missing")]
    fn legal_moves_without_own_king_panics() {
        let mut state = GameState::builder()
            .piece(sq(6, 0), Color::White, PieceKind::Pawn)
            .piece(sq(0, 4), Color::Black, PieceKind::King)
            .build();
        legal_moves(&mut state);
    }
}
