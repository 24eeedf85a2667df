//! Crate root module declarations for the Plum rules engine.
//!
//! This file exposes the subsystems (game state, piece move patterns, legal
//! move generation, the turn controller and utility helpers) so binaries,
//! tests and benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod game {
    pub mod controller;
    pub mod player;
    pub mod promotion;
}

pub mod utils {
    pub mod algebraic;
    pub mod move_log;
    pub mod move_notation;
    pub mod render_game_state;
}
