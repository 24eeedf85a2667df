use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::{CandidateMove, MoveKind};
use crate::moves::pawn_moves::{pawn_attacks, pawn_double_push, pawn_push};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    let board = &game_state.board;

    if let Some(to) = pawn_push(color, from).filter(|sq| board.is_empty(*sq)) {
        out.push(with_promotion(color, CandidateMove::new(from, to, MoveKind::Quiet)));

        if let Some(two_step) = pawn_double_push(color, from).filter(|sq| board.is_empty(*sq)) {
            out.push(CandidateMove::new(from, two_step, MoveKind::DoublePawnPush));
        }
    }

    for to in pawn_attacks(color, from) {
        match enemy_piece_on(game_state, color, to) {
            Some(victim) if victim.kind != PieceKind::King => {
                out.push(with_promotion(color, CandidateMove::new(from, to, MoveKind::Capture)));
            }
            Some(_) => {}
            None if en_passant_allows(game_state, from, color, to) => {
                out.push(CandidateMove::new(from, to, MoveKind::EnPassant));
            }
            None => {}
        }
    }
}

/// The window must belong to an opponent pawn standing beside `from` on the
/// same row, with `to` the square behind it.
fn en_passant_allows(game_state: &GameState, from: Square, color: Color, to: Square) -> bool {
    let Some(window) = game_state.en_passant else {
        return false;
    };
    window.color != color
        && window.target == to
        && window.pawn.row() == from.row()
        && window.pawn.col() == to.col()
        && game_state.board.occupant_at(window.pawn)
            == Some(Piece::new(window.color, PieceKind::Pawn))
}

#[inline]
fn with_promotion(color: Color, mv: CandidateMove) -> CandidateMove {
    if mv.to.row() == color.promotion_row() {
        mv.promoting()
    } else {
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square on board")
    }

    fn kings() -> crate::game_state::game_state::GameStateBuilder {
        GameState::builder()
            .piece(sq(7, 4), Color::White, PieceKind::King)
            .piece(sq(0, 4), Color::Black, PieceKind::King)
    }

    #[test]
    fn unmoved_pawn_has_single_and_double_step() {
        let state = GameState::new_game();
        let mut out = Vec::new();
        generate_pawn_moves(&state, sq(6, 4), Color::White, &mut out);
        let targets: Vec<Square> = out.iter().map(|mv| mv.to).collect();
        assert_eq!(targets, vec![sq(5, 4), sq(4, 4)]);
        assert_eq!(out[1].kind, MoveKind::DoublePawnPush);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let state = kings()
            .piece(sq(6, 0), Color::White, PieceKind::Pawn)
            .piece(sq(5, 0), Color::Black, PieceKind::Knight)
            .build();
        let mut out = Vec::new();
        generate_pawn_moves(&state, sq(6, 0), Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn pawn_captures_only_diagonally_onto_enemies() {
        let state = kings()
            .piece(sq(4, 4), Color::White, PieceKind::Pawn)
            .piece(sq(3, 3), Color::Black, PieceKind::Pawn)
            .piece(sq(3, 5), Color::White, PieceKind::Knight)
            .piece(sq(3, 4), Color::Black, PieceKind::Rook)
            .build();
        let mut out = Vec::new();
        generate_pawn_moves(&state, sq(4, 4), Color::White, &mut out);
        assert_eq!(out, vec![CandidateMove::new(sq(4, 4), sq(3, 3), MoveKind::Capture)]);
    }

    #[test]
    fn reaching_last_rank_is_flagged_as_promotion() {
        let state = kings()
            .piece(sq(1, 0), Color::White, PieceKind::Pawn)
            .piece(sq(0, 1), Color::Black, PieceKind::Rook)
            .build();
        let mut out = Vec::new();
        generate_pawn_moves(&state, sq(1, 0), Color::White, &mut out);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|mv| mv.promotes));
    }

    #[test]
    fn en_passant_needs_matching_window() {
        let window = EnPassantWindow {
            target: sq(2, 3),
            pawn: sq(3, 3),
            color: Color::Black,
        };
        let base = kings()
            .piece(sq(3, 4), Color::White, PieceKind::Pawn)
            .piece(sq(3, 3), Color::Black, PieceKind::Pawn);

        let open = base.clone().en_passant(window).build();
        let mut out = Vec::new();
        generate_pawn_moves(&open, sq(3, 4), Color::White, &mut out);
        assert!(out.contains(&CandidateMove::new(sq(3, 4), sq(2, 3), MoveKind::EnPassant)));

        let closed = base.build();
        out.clear();
        generate_pawn_moves(&closed, sq(3, 4), Color::White, &mut out);
        assert!(out.iter().all(|mv| mv.kind != MoveKind::EnPassant));
    }
}
