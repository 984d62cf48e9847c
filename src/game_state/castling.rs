//! Castling-rights bookkeeping.
//!
//! Each `[color][side]` slot remembers *when* a right was lost rather than a
//! plain flag, so unmaking a move can restore exactly the rights that move
//! removed and nothing else.

use crate::game_state::chess_types::{square_at, Color, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }

    /// Home square of the rook that castles on this side.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => square_at(7, color.home_rank()),
            CastleSide::Queenside => square_at(0, color.home_rank()),
        }
    }

    /// Square the rook lands on after castling.
    #[inline]
    pub const fn rook_destination(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => square_at(5, color.home_rank()),
            CastleSide::Queenside => square_at(3, color.home_rank()),
        }
    }

    /// Square the king lands on after castling.
    #[inline]
    pub const fn king_destination(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => square_at(6, color.home_rank()),
            CastleSide::Queenside => square_at(2, color.home_rank()),
        }
    }

    /// Squares between king and rook that must be empty.
    pub fn between_squares(self, color: Color) -> &'static [u8] {
        match (self, color) {
            (CastleSide::Kingside, Color::Light) => &[5, 6],
            (CastleSide::Queenside, Color::Light) => &[1, 2, 3],
            (CastleSide::Kingside, Color::Dark) => &[61, 62],
            (CastleSide::Queenside, Color::Dark) => &[57, 58, 59],
        }
    }

    /// Squares the king crosses or lands on; none may be attacked.
    pub fn king_transit_squares(self, color: Color) -> [Square; 2] {
        let rank = color.home_rank();
        match self {
            CastleSide::Kingside => [square_at(5, rank), square_at(6, rank)],
            CastleSide::Queenside => [square_at(3, rank), square_at(2, rank)],
        }
    }

    /// Side a castling king move heads to, judged by its destination file.
    #[inline]
    pub const fn from_king_target(target: Square) -> CastleSide {
        if target % 8 < 4 {
            CastleSide::Queenside
        } else {
            CastleSide::Kingside
        }
    }

    pub const fn to_fen_char(self, color: Color) -> char {
        match (self, color) {
            (CastleSide::Kingside, Color::Light) => 'K',
            (CastleSide::Queenside, Color::Light) => 'Q',
            (CastleSide::Kingside, Color::Dark) => 'k',
            (CastleSide::Queenside, Color::Dark) => 'q',
        }
    }
}

/// State of one castling right over the life of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingRight {
    /// The position was loaded without this right.
    NeverHeld,
    /// Still available.
    Held,
    /// Removed by the move that brought the game to this half-move count.
    LostAt(u32),
}

impl CastlingRight {
    #[inline]
    pub const fn is_held(self) -> bool {
        matches!(self, CastlingRight::Held)
    }
}

/// Rights table indexed `[color][side]`.
pub type CastlingSlots = [[CastlingRight; 2]; 2];

pub const NO_CASTLING: CastlingSlots = [[CastlingRight::NeverHeld; 2]; 2];
