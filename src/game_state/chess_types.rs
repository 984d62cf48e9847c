//! Primitive board vocabulary shared by every engine subsystem.
//!
//! Squares are plain `u8` indices (`rank * 8 + file`, a1 = 0, h8 = 63). Colors
//! and piece kinds are small enums so they can index the precomputed tables
//! directly.

/// Board square index (`0..=63`).
pub type Square = u8;

/// Side to move. `Light` is white, `Dark` is black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// `+1` for white, `-1` for black.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Rank step of a pawn push for this color.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        self.sign()
    }

    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

/// Piece kind (color is carried separately in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Pieces a pawn may promote to, in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Low three bits of the packed piece code (1 = pawn ... 6 = king).
    #[inline]
    pub const fn type_code(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// True for pieces that slide along orthogonal rays.
    #[inline]
    pub const fn slides_orthogonally(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }

    /// True for pieces that slide along diagonal rays.
    #[inline]
    pub const fn slides_diagonally(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }
}

/// A colored piece occupying a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Packed 4-bit code: bit 3 is the color (0 white, 1 black), the low
    /// three bits are the kind (1 = pawn ... 6 = king).
    #[inline]
    pub const fn code(self) -> u8 {
        ((self.color.index() as u8) << 3) | self.kind.type_code()
    }

    pub const fn from_code(code: u8) -> Option<Piece> {
        let color = if code & 0b1000 == 0 { Color::Light } else { Color::Dark };
        let kind = match code & 0b0111 {
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Rook,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
            _ => return None,
        };
        Some(Piece { color, kind })
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn to_fen_char(self) -> char {
        let base = self.kind.to_char();
        match self.color {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };
        PieceKind::from_char(ch).map(|kind| Piece { color, kind })
    }
}

/// The 64-entry mailbox, indexed by [`Square`].
pub type PieceArray = [Option<Piece>; 64];

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// Square reached by stepping `(d_file, d_rank)` from `square`, if it stays
/// on the board.
#[inline]
pub const fn offset_square(square: Square, d_file: i8, d_rank: i8) -> Option<Square> {
    let file = file_of(square) as i8 + d_file;
    let rank = rank_of(square) as i8 + d_rank;
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return None;
    }
    Some(square_at(file as u8, rank as u8))
}

#[inline]
pub const fn square_mask(square: Square) -> u64 {
    1u64 << square
}
