//! Canonical chess-rule constants.
//!
//! Rows are counted from the top of the board as seen by White: row 0 is
//! rank 8 (Black's back rank) and row 7 is rank 1 (White's back rank).
//! Columns run from file `a` (0) to file `h` (7).

use crate::game_state::chess_types::PieceKind;

/// Back rank of White's pieces.
pub const WHITE_HOME_ROW: u8 = 7;
/// Back rank of Black's pieces.
pub const BLACK_HOME_ROW: u8 = 0;

/// Row the White pawns start from.
pub const WHITE_PAWN_ROW: u8 = 6;
/// Row the Black pawns start from.
pub const BLACK_PAWN_ROW: u8 = 1;

/// Column of both kings in the initial setup.
pub const KING_HOME_COL: u8 = 4;
/// Column of the rook that castles kingside.
pub const KINGSIDE_ROOK_COL: u8 = 7;
/// Column of the rook that castles queenside.
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Back-rank piece order from file `a` to file `h`.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece types a pawn may be promoted to.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];
