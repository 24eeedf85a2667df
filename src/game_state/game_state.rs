//! The explicit game context passed to every rule query.
//!
//! `GameState` bundles the board with the side to move, both castling records
//! and the en-passant window. Move generation, the threat map and the
//! legality filter all read from it; only `legal_move_apply` writes to it.

use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// Indexed by `Color::index`.
    pub castling: [CastlingRecord; 2],
    pub en_passant: Option<EnPassantWindow>,
    /// Completed half-moves since the state was created.
    pub ply: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling: [CastlingRecord::BOTH; 2],
            en_passant: None,
            ply: 0,
        }
    }

    #[inline]
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::default()
    }

    #[inline]
    pub fn castling_rights(&self, color: Color) -> CastlingRecord {
        self.castling[color.index()]
    }

    /// The king of `color`.
    ///
    /// # Panics
    /// Every reachable position holds exactly one king per color; a missing
    /// king is a construction bug and aborts.
    pub fn expect_king(&self, color: Color) -> Square {
        self.board
            .king_square(color)
            .unwrap_or_else(|| panic!("{color} king is missing from the board"))
    }
}

/// Programmatic position setup for tests, tools and benches.
///
/// Castling rights are inferred from king and rook home placement unless
/// overridden with [`GameStateBuilder::castling`].
#[derive(Debug, Clone)]
pub struct GameStateBuilder {
    board: Board,
    side_to_move: Color,
    castling: [Option<CastlingRecord>; 2],
    en_passant: Option<EnPassantWindow>,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        GameStateBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: [None; 2],
            en_passant: None,
        }
    }
}

impl GameStateBuilder {
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.place(Piece::new(color, kind), square);
        self
    }

    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    pub fn castling(mut self, color: Color, record: CastlingRecord) -> Self {
        self.castling[color.index()] = Some(record);
        self
    }

    pub fn en_passant(mut self, window: EnPassantWindow) -> Self {
        self.en_passant = Some(window);
        self
    }

    pub fn build(self) -> GameState {
        let castling = Color::BOTH.map(|color| {
            self.castling[color.index()].unwrap_or_else(|| inferred_castling(&self.board, color))
        });
        GameState {
            board: self.board,
            side_to_move: self.side_to_move,
            castling,
            en_passant: self.en_passant,
            ply: 0,
        }
    }
}

fn inferred_castling(board: &Board, color: Color) -> CastlingRecord {
    let row = color.home_row();
    let king = Piece::new(color, PieceKind::King);
    let rook = Piece::new(color, PieceKind::Rook);
    if board.occupant_at(Square::at(row, KING_HOME_COL)) != Some(king) {
        return CastlingRecord::NONE;
    }
    CastlingRecord {
        kingside: board.occupant_at(Square::at(row, KINGSIDE_ROOK_COL)) == Some(rook),
        queenside: board.occupant_at(Square::at(row, QUEENSIDE_ROOK_COL)) == Some(rook),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_white_to_move_with_full_rights() {
        let state = GameState::new_game();
        assert_eq!(state.side_to_move, Color::White);
        assert_eq!(state.castling_rights(Color::White), CastlingRecord::BOTH);
        assert_eq!(state.castling_rights(Color::Black), CastlingRecord::BOTH);
        assert_eq!(state.en_passant, None);
    }

    #[test]
    fn builder_infers_castling_from_home_placement() {
        let state = GameState::builder()
            .piece(Square::at(7, 4), Color::White, PieceKind::King)
            .piece(Square::at(7, 7), Color::White, PieceKind::Rook)
            .piece(Square::at(0, 3), Color::Black, PieceKind::King)
            .piece(Square::at(0, 0), Color::Black, PieceKind::Rook)
            .build();
        assert_eq!(
            state.castling_rights(Color::White),
            CastlingRecord {
                kingside: true,
                queenside: false
            }
        );
        // Black king is off its home square.
        assert_eq!(state.castling_rights(Color::Black), CastlingRecord::NONE);
    }

    #[test]
    fn builder_override_wins_over_inference() {
        let state = GameState::builder()
            .piece(Square::at(7, 4), Color::White, PieceKind::King)
            .piece(Square::at(7, 7), Color::White, PieceKind::Rook)
            .castling(Color::White, CastlingRecord::NONE)
            .build();
        assert_eq!(state.castling_rights(Color::White), CastlingRecord::NONE);
    }

    #[test]
    #[should_panic(expected = "king is missing")]
    fn missing_king_aborts() {
        let state = GameState::builder().build();
        state.expect_king(Color::White);
    }
}
