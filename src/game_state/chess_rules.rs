//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the draw thresholds.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Fifty full moves without a pawn move or capture, counted in half-moves.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// Largest fullmove number a FEN may carry. The half-move counter derived
/// from it keeps room for play well past this point.
pub const MAX_FULLMOVE_NUMBER: u32 = u32::MAX / 4;

/// Occurrences of one position (same side to move) that end the game.
pub const REPETITION_DRAW_COUNT: usize = 3;

/// A side with more pieces than this, king included, always has mating
/// material under the simplified insufficient-material rule.
pub const INSUFFICIENT_MATERIAL_MAX_PIECES: usize = 3;
