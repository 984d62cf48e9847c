//! Per-square sliding boundaries for the eight ray directions.
//!
//! `SQUARES_TO_EDGE[square][direction]` is how many steps a slider can take
//! from `square` before leaving the board. Walking a ray never needs a file
//! wrap-around check because the boundary already accounts for it.

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
            Direction::NorthEast => 4,
            Direction::NorthWest => 5,
            Direction::SouthEast => 6,
            Direction::SouthWest => 7,
        }
    }

    /// `(d_file, d_rank)` of one step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }

    /// Square-index offset of one step.
    #[inline]
    pub const fn offset(self) -> i8 {
        let (d_file, d_rank) = self.delta();
        d_rank * 8 + d_file
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (d_file, d_rank) = self.delta();
        d_file != 0 && d_rank != 0
    }
}

pub static SQUARES_TO_EDGE: [[u8; 8]; 64] = generate_squares_to_edge();

#[inline]
pub fn squares_to_edge(square: Square, direction: Direction) -> u8 {
    SQUARES_TO_EDGE[square as usize][direction.index()]
}

/// Squares along `direction` from `square` (exclusive) out to the board edge.
#[inline]
pub fn ray(square: Square, direction: Direction) -> impl Iterator<Item = Square> {
    let offset = direction.offset() as i16;
    let steps = squares_to_edge(square, direction) as i16;
    (1..=steps).map(move |step| (square as i16 + offset * step) as Square)
}

const fn generate_squares_to_edge() -> [[u8; 8]; 64] {
    let mut table = [[0u8; 8]; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as u8;
        let rank = (sq / 8) as u8;
        let north = 7 - rank;
        let south = rank;
        let east = 7 - file;
        let west = file;

        table[sq][Direction::North.index()] = north;
        table[sq][Direction::South.index()] = south;
        table[sq][Direction::East.index()] = east;
        table[sq][Direction::West.index()] = west;
        table[sq][Direction::NorthEast.index()] = min(north, east);
        table[sq][Direction::NorthWest.index()] = min(north, west);
        table[sq][Direction::SouthEast.index()] = min(south, east);
        table[sq][Direction::SouthWest.index()] = min(south, west);

        sq += 1;
    }

    table
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}
