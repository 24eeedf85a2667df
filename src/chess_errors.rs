//! Error types returned by the game controller and the notation helpers.
//!
//! A rejected move request is not an error: it is reported through
//! `MoveOutcome::Rejected` and leaves the game untouched. The variants here
//! cover requests that are out of place for the current phase of the game,
//! plus malformed text input.

use thiserror::Error;

use crate::game_state::chess_types::GameOutcome;

/// Errors from the turn/outcome controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has finished; no further selections or moves are accepted.
    #[error("the game is over ({0})")]
    GameOver(GameOutcome),

    /// The promotion piece name was not queen, rook, bishop or knight.
    /// The promotion stays pending.
    #[error("invalid promotion choice: {0:?}")]
    InvalidPromotionChoice(String),

    /// A pawn is waiting for its promotion piece; resolve that first.
    #[error("a promotion is pending")]
    PromotionPending,

    #[error("no promotion is pending")]
    NoPromotionPending,

    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

pub type GameResult<T> = Result<T, GameError>;

/// Errors parsing algebraic coordinates such as `e4`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid algebraic square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid file: {0:?}")]
    InvalidFile(char),

    #[error("invalid rank: {0:?}")]
    InvalidRank(char),
}

impl From<NotationError> for GameError {
    fn from(value: NotationError) -> Self {
        GameError::InvalidSquare(value.to_string())
    }
}
