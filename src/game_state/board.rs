//! The 8x8 grid of optional occupants.
//!
//! The board is the single source of truth for where a piece stands: a
//! piece's position is the index of the cell holding it, so there is no
//! second copy of coordinates to keep in sync. The board carries no legality
//! knowledge.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// The standard initial arrangement, White on rows 6 and 7.
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.place(
                    Piece::new(color, *kind),
                    Square::at(color.home_row(), col as u8),
                );
            }
            for col in 0..8 {
                board.place(
                    Piece::new(color, PieceKind::Pawn),
                    Square::at(color.pawn_row(), col),
                );
            }
        }
        board
    }

    #[inline]
    pub fn occupant_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    /// Puts `piece` on `square`, returning whatever was there before.
    #[inline]
    pub fn place(&mut self, piece: Piece, square: Square) -> Option<Piece> {
        self.cells[square.index()].replace(piece)
    }

    /// Empties `square`, returning the piece that stood there.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    pub fn occupancy(&self) -> SquareSet {
        self.pieces().map(|placed| placed.square).collect()
    }

    pub fn occupancy_of(&self, color: Color) -> SquareSet {
        self.pieces_of(color).map(|placed| placed.square).collect()
    }

    /// Every living piece, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        Square::all().filter_map(move |square| {
            self.occupant_at(square)
                .map(|piece| PlacedPiece { piece, square })
        })
    }

    /// The living pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.pieces().filter(move |placed| placed.piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|placed| placed.piece.kind == PieceKind::King)
            .map(|placed| placed.square)
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color)
            .filter(|placed| placed.piece.kind == kind)
            .count()
    }
}
