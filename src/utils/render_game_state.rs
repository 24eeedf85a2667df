//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (rank 8) is printed first so White sits at the bottom.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::rank_char;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    render_with_marks(game_state, SquareSet::EMPTY)
}

/// Like [`render_game_state`], but empty squares in `marks` are drawn as `×`
/// and marked occupied squares are bracketed. Used to show the targets of a
/// selected piece.
pub fn render_with_marks(game_state: &GameState, marks: SquareSet) -> String {
    let mut out = String::new();
    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..8u8 {
        let rank = rank_char(Square::at(row, 0));
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let square = Square::at(row, col);
            let marked = marks.contains(square);
            match (game_state.board.occupant_at(square), marked) {
                (Some(piece), true) => {
                    out.push('[');
                    out.push(piece_to_unicode(piece));
                    out.push(']');
                }
                (Some(piece), false) => {
                    out.push(' ');
                    out.push(piece_to_unicode(piece));
                    out.push(' ');
                }
                (None, true) => out.push_str(" × "),
                (None, false) => out.push_str(" · "),
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");
    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
