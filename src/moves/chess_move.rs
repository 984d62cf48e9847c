//! Move descriptor for a single ply.
//!
//! A `Move` records everything make/unmake need to apply and reverse it
//! without consulting the board again: both squares, the moving piece, the
//! captured piece (the en-passant victim included) and the move kind. The
//! `proven_legal` bit is a cache owned by the legality checker.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    EnPassant,
    Castle,
    Promotion(PieceKind),
}

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub target: Square,
    pub moving: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    /// Set once the move is known not to leave the mover's king in check.
    pub proven_legal: bool,
}

impl Move {
    /// Build a move from the current board contents.
    ///
    /// The captured piece is read from `target`, except for en passant where
    /// the victim is the enemy pawn one rank behind it.
    pub fn on_board(game_state: &GameState, start: Square, target: Square, kind: MoveKind) -> Option<Self> {
        let moving = game_state.board[start as usize]?;
        let captured = match kind {
            MoveKind::EnPassant => Some(Piece::new(moving.color.opposite(), PieceKind::Pawn)),
            _ => game_state.board[target as usize],
        };
        Some(Self {
            start,
            target,
            moving,
            captured,
            kind,
            proven_legal: false,
        })
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.moving.color
    }

    #[inline]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    /// Kind of the piece standing on `target` after the move.
    #[inline]
    pub const fn placed_kind(&self) -> PieceKind {
        match self.kind {
            MoveKind::Promotion(piece) => piece,
            _ => self.moving.kind,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle)
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Square of the captured piece; differs from `target` only for en passant.
    #[inline]
    pub fn capture_square(&self) -> Square {
        match self.kind {
            MoveKind::EnPassant => {
                (self.target as i8 - 8 * self.moving.color.pawn_direction()) as Square
            }
            _ => self.target,
        }
    }

    #[inline]
    pub const fn is_double_pawn_push(&self) -> bool {
        matches!(self.moving.kind, PieceKind::Pawn) && self.start.abs_diff(self.target) == 16
    }

    #[inline]
    pub fn with_proven_legal(mut self) -> Self {
        self.proven_legal = true;
        self
    }
}

/// Moves compare by what they do on the board; the legality cache bit is
/// ignored.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.target == other.target
            && self.moving == other.moving
            && self.captured == other.captured
            && self.kind == other.kind
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.target)
        )?;
        if let Some(piece) = self.promotion() {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}
