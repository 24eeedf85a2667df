use thiserror::Error;

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::CandidateMove;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    #[error("invalid game state: {0}")]
    InvalidState(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
}

/// One fully legal move with the position it leads to. Promotions appear
/// once per promotion piece.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: CandidateMove,
    pub promotion: Option<PieceKind>,
    pub game_after_move: GameState,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>>;
}
