//! Threat map and check detection.
//!
//! The threat map of a color is every square its living pieces, kings
//! excluded, could move or capture to, with sliding rays stopping on the
//! first occupied square of either color. Squares holding the color's own
//! pieces are therefore included, so a defended piece cannot be taken by the
//! enemy king. Pawns contribute their diagonals only.
//!
//! The king's own reach is left out; the adjacent-kings rule in king move
//! generation covers it.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares `placed` threatens on the current board.
pub fn piece_threats(placed: PlacedPiece, occupancy: SquareSet) -> SquareSet {
    let PlacedPiece { piece, square } = placed;
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => SquareSet::EMPTY,
    }
}

/// The threatened-square set of `attacker`.
pub fn threat_map(game_state: &GameState, attacker: Color) -> SquareSet {
    let board = &game_state.board;
    let occupancy = board.occupancy();
    board
        .pieces_of(attacker)
        .fold(SquareSet::EMPTY, |acc, placed| {
            acc | piece_threats(placed, occupancy)
        })
}

#[inline]
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker: Color) -> bool {
    threat_map(game_state, attacker).contains(square)
}

/// Whether the king of `color` stands on a square its opponent threatens.
///
/// # Panics
/// When `color` has no king on the board.
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let king = game_state.expect_king(color);
    is_square_attacked(game_state, king, color.opposite())
}

/// Squares of the enemy pieces currently giving check to `color`.
pub fn checking_pieces(game_state: &GameState, color: Color) -> Vec<Square> {
    let board = &game_state.board;
    let king = game_state.expect_king(color);
    let occupancy = board.occupancy();
    board
        .pieces_of(color.opposite())
        .filter(|placed| piece_threats(*placed, occupancy).contains(king))
        .map(|placed| placed.square)
        .collect()
}
