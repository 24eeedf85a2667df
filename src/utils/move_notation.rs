//! The notation stream handed to the presentation layer after each move.
//!
//! Format: piece glyph (blank for a pawn), `_`, destination square, so
//! `N_f3` or `_e4`. Castling is `O-O` / `O-O-O`, and a promotion appends
//! `=` and the new piece's glyph. No check or capture markers are added.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::legal_move_apply::CommittedMove;
use crate::moves::move_descriptions::MoveKind;

pub fn move_to_notation(committed: &CommittedMove) -> String {
    if let MoveKind::Castle(side) = committed.mv.kind {
        return side.notation().to_owned();
    }

    let mut out = piece_at_notation(committed.moved_piece.kind, committed.mv.to);
    if let Some(glyph) = committed.promoted_to.and_then(PieceKind::glyph) {
        out.push('=');
        out.push(glyph);
    }
    out
}

/// Glyph and square only, as used for a piece standing on `square`.
pub fn piece_at_notation(kind: PieceKind, square: Square) -> String {
    match kind.glyph() {
        Some(glyph) => format!("{glyph}_{square}"),
        None => format!("_{square}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece};
    use crate::moves::move_descriptions::{CandidateMove, CastleSide};

    fn committed(
        kind: PieceKind,
        mv: CandidateMove,
        promoted_to: Option<PieceKind>,
    ) -> CommittedMove {
        CommittedMove {
            mv,
            moved_piece: Piece::new(Color::White, kind),
            captured: None,
            promoted_to,
        }
    }

    #[test]
    fn pieces_and_pawns() {
        let knight = CandidateMove::new(Square::at(7, 6), Square::at(5, 5), MoveKind::Quiet);
        assert_eq!(move_to_notation(&committed(PieceKind::Knight, knight, None)), "N_f3");

        let pawn = CandidateMove::new(Square::at(6, 4), Square::at(4, 4), MoveKind::DoublePawnPush);
        assert_eq!(move_to_notation(&committed(PieceKind::Pawn, pawn, None)), "_e4");
    }

    #[test]
    fn castling_and_promotion() {
        let short = CandidateMove::new(
            Square::at(7, 4),
            Square::at(7, 6),
            MoveKind::Castle(CastleSide::Kingside),
        );
        assert_eq!(move_to_notation(&committed(PieceKind::King, short, None)), "O-O");

        let long = CandidateMove::new(
            Square::at(7, 4),
            Square::at(7, 2),
            MoveKind::Castle(CastleSide::Queenside),
        );
        assert_eq!(move_to_notation(&committed(PieceKind::King, long, None)), "O-O-O");

        let promote =
            CandidateMove::new(Square::at(1, 4), Square::at(0, 4), MoveKind::Quiet).promoting();
        assert_eq!(
            move_to_notation(&committed(PieceKind::Pawn, promote, Some(PieceKind::Queen))),
            "_e8=Q"
        );
    }
}
