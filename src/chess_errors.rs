//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned for malformed input:
//! FEN text, algebraic squares and long-algebraic moves. Every variant is
//! recoverable by the caller (discard the input and ask again).
//!
//! Internal-consistency faults are not represented here. Unmaking a move
//! that was not the most recent one, or an incremental hash that no longer
//! matches its history, panics.

use std::error::Error;
use std::fmt;

/// The six space-separated fields of a FEN record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenField {
    PiecePlacement,
    ActiveColor,
    CastlingAvailability,
    EnPassantTarget,
    HalfmoveClock,
    FullmoveNumber,
}

impl fmt::Display for FenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FenField::PiecePlacement => "piece placement",
            FenField::ActiveColor => "active color",
            FenField::CastlingAvailability => "castling availability",
            FenField::EnPassantTarget => "en passant target",
            FenField::HalfmoveClock => "halfmove clock",
            FenField::FullmoveNumber => "fullmove number",
        };
        f.write_str(name)
    }
}

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// FEN text did not split into four to six whitespace-separated fields.
    ///
    /// Payload: the number of fields found.
    FenFieldCount(usize),

    /// One FEN field was present but its content was invalid.
    MalformedFen { field: FenField, detail: String },

    /// Algebraic square text outside `[a-h][1-8]`.
    ///
    /// Payload: the offending text.
    InvalidSquareReference(String),

    /// Long-algebraic move text that could not be read (for example `e2e`
    /// or `e7e8x`).
    InvalidMoveNotation(String),

    /// Well-formed move text that names no legal move in the current
    /// position.
    MoveNotAvailable(String),
}

impl ChessErrors {
    pub(crate) fn fen(field: FenField, detail: impl Into<String>) -> Self {
        ChessErrors::MalformedFen {
            field,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::FenFieldCount(count) => {
                write!(f, "FEN must have 4 to 6 fields, found {count}")
            }
            ChessErrors::MalformedFen { field, detail } => {
                write!(f, "malformed FEN {field}: {detail}")
            }
            ChessErrors::InvalidSquareReference(text) => {
                write!(f, "invalid square reference '{text}', expected [a-h][1-8]")
            }
            ChessErrors::InvalidMoveNotation(text) => {
                write!(f, "invalid move notation '{text}'")
            }
            ChessErrors::MoveNotAvailable(text) => {
                write!(f, "move '{text}' is not legal in this position")
            }
        }
    }
}

impl Error for ChessErrors {}

#[cfg(test)]
mod tests {
    use super::{ChessErrors, FenField};

    #[test]
    fn messages_name_the_offending_field() {
        let err = ChessErrors::fen(FenField::HalfmoveClock, "'x' is not a number");
        assert_eq!(err.to_string(), "malformed FEN halfmove clock: 'x' is not a number");
        assert_eq!(
            ChessErrors::FenFieldCount(2).to_string(),
            "FEN must have 4 to 6 fields, found 2"
        );
    }
}
