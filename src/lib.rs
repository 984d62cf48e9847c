//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the board model, move generation, draw detection,
//! precomputed tables and notation helpers so binaries, tests and external
//! front ends can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod castling;
    pub mod chess_game;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod draw_detection;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod check_analysis;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_move_validation;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod tables {
    pub mod jump_tables;
    pub mod sliding_rays;
    pub mod zobrist;
}

pub mod utils {
    pub mod algebraic;
    pub mod console_commands;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}
