//! Board mutation: the reversible simulation used by the legality filter and
//! the committing move application used by the game controller.
//!
//! Simulation touches the board only. Side to move, castling records, the
//! en-passant window and the ply counter are left alone, which is what makes
//! the undo exact.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{CandidateMove, CastleSide, MoveKind};

/// Applies `mv` to the board and returns what is needed to take it back.
///
/// # Panics
/// When `mv.from` is empty. Generated candidates always start on a piece.
pub fn simulate_move(game_state: &mut GameState, mv: CandidateMove) -> SimulationRecord {
    let board = &mut game_state.board;
    let moved_piece = board
        .clear(mv.from)
        .unwrap_or_else(|| panic!("simulated move starts on empty square {:?}", mv.from));

    let captured = match mv.kind {
        MoveKind::EnPassant => {
            let victim_square = en_passant_victim(mv);
            board
                .clear(victim_square)
                .map(|piece| PlacedPiece { piece, square: victim_square })
        }
        _ => board
            .clear(mv.to)
            .map(|piece| PlacedPiece { piece, square: mv.to }),
    };

    board.place(moved_piece, mv.to);

    let rook_shift = match mv.kind {
        MoveKind::Castle(side) => {
            let (rook_from, rook_to) = side.rook_shift(moved_piece.color);
            if let Some(rook) = board.clear(rook_from) {
                board.place(rook, rook_to);
            }
            Some((rook_from, rook_to))
        }
        _ => None,
    };

    SimulationRecord {
        mv,
        moved_piece,
        captured,
        rook_shift,
    }
}

/// Reverses [`simulate_move`] exactly.
pub fn undo_simulation(game_state: &mut GameState, record: SimulationRecord) {
    let board = &mut game_state.board;

    if let Some((rook_from, rook_to)) = record.rook_shift {
        if let Some(rook) = board.clear(rook_to) {
            board.place(rook, rook_from);
        }
    }

    board.clear(record.mv.to);
    if let Some(captured) = record.captured {
        board.place(captured.piece, captured.square);
    }
    board.place(record.moved_piece, record.mv.from);
}

/// Runs `inspect` against the position after `mv`, then restores the board.
/// No caller can observe the intermediate state.
pub fn with_simulated_move<R>(
    game_state: &mut GameState,
    mv: CandidateMove,
    inspect: impl FnOnce(&GameState) -> R,
) -> R {
    let record = simulate_move(game_state, mv);
    let result = inspect(game_state);
    undo_simulation(game_state, record);
    result
}

/// What a committed move did to the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedMove {
    pub mv: CandidateMove,
    pub moved_piece: Piece,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
}

/// Plays `mv` for the side to move and advances the turn.
///
/// `promotion` replaces the pawn when `mv.promotes`; it is ignored otherwise.
/// Castling rights are consumed when a king or rook moves away from, or a
/// rook is captured on, its home square. The en-passant window is replaced
/// on every move.
pub fn commit_move(
    game_state: &mut GameState,
    mv: CandidateMove,
    promotion: Option<PieceKind>,
) -> CommittedMove {
    let record = simulate_move(game_state, mv);
    let moved_piece = record.moved_piece;
    let color = moved_piece.color;

    let promoted_to = if mv.promotes {
        let kind = promotion.unwrap_or(PieceKind::Queen);
        game_state.board.place(Piece::new(color, kind), mv.to);
        Some(kind)
    } else {
        None
    };

    update_castling_rights(game_state, moved_piece, mv, record.captured);

    game_state.en_passant = match mv.kind {
        MoveKind::DoublePawnPush => Some(EnPassantWindow {
            target: Square::at((mv.from.row() + mv.to.row()) / 2, mv.from.col()),
            pawn: mv.to,
            color,
        }),
        _ => None,
    };

    game_state.side_to_move = color.opposite();
    game_state.ply = game_state.ply.saturating_add(1);

    CommittedMove {
        mv,
        moved_piece,
        captured: record.captured.map(|placed| placed.piece),
        promoted_to,
    }
}

/// The pawn taken en passant stands beside the origin, in the target's column.
#[inline]
fn en_passant_victim(mv: CandidateMove) -> Square {
    Square::at(mv.from.row(), mv.to.col())
}

fn update_castling_rights(
    game_state: &mut GameState,
    moved_piece: Piece,
    mv: CandidateMove,
    captured: Option<PlacedPiece>,
) {
    let color = moved_piece.color;
    match moved_piece.kind {
        PieceKind::King => game_state.castling[color.index()].clear(),
        PieceKind::Rook => revoke_rook_right(game_state, color, mv.from),
        _ => {}
    }

    if let Some(victim) = captured.filter(|placed| placed.piece.kind == PieceKind::Rook) {
        revoke_rook_right(game_state, victim.piece.color, victim.square);
    }
}

fn revoke_rook_right(game_state: &mut GameState, color: Color, square: Square) {
    let record = &mut game_state.castling[color.index()];
    for side in CastleSide::BOTH {
        if side.rook_shift(color).0 == square {
            match side {
                CastleSide::Kingside => record.kingside = false,
                CastleSide::Queenside => record.queenside = false,
            }
        }
    }
}
