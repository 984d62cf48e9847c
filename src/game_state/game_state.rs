//! Core incremental board state representation.
//!
//! `GameState` is the central model for the engine. It stores the piece
//! mailbox, castling slots, the king-square cache, clocks, the incremental
//! Zobrist key and the LIFO history stacks used by make/unmake.

use crate::chess_errors::ChessErrors;
use crate::game_state::castling::{CastleSide, CastlingRight, CastlingSlots, NO_CASTLING};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Incremental game state optimized for in-place move making/unmaking.
///
/// The side to move is not stored; it is the parity of `total_halfmoves`
/// (even = white). Every history stack holds one entry for the loaded
/// position plus one per move made since, and its top is the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: PieceArray,

    pub castling: CastlingSlots,
    pub king_squares: [Square; 2],

    /// Half-moves played since the start of the game (derived from the FEN
    /// fullmove number for loaded positions).
    pub total_halfmoves: u32,

    pub en_passant_history: Vec<Option<Square>>,
    pub fifty_move_history: Vec<u16>,

    pub zobrist_key: u64,
    pub hash_history: Vec<u64>,

    pub move_history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            castling: NO_CASTLING,
            king_squares: [0; 2],
            total_halfmoves: 0,
            en_passant_history: vec![None],
            fifty_move_history: vec![0],
            zobrist_key: 0,
            hash_history: vec![0],
            move_history: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board with no kings; only meaningful as a starting point for the
    /// FEN parser.
    #[inline]
    pub(crate) fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.total_halfmoves % 2 == 0 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_right(&self, color: Color, side: CastleSide) -> CastlingRight {
        self.castling[color.index()][side.index()]
    }

    /// En-passant target valid for the current half-move only.
    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_history.last().copied().flatten()
    }

    /// Half-moves since the last pawn move or capture.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.fifty_move_history.last().copied().unwrap_or(0)
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        1 + self.total_halfmoves / 2
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move())
    }

    #[inline]
    pub fn make_move(&mut self, mv: Move) {
        legal_move_apply::make_move(self, mv);
    }

    /// Reverse `mv`, which must be the most recently made move.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is not the top of the move history or if the restored
    /// hash disagrees with the hash history.
    #[inline]
    pub fn unmake_move(&mut self, mv: &Move) {
        legal_move_apply::unmake_move(self, mv);
    }
}
