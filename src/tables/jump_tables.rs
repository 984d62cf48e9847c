//! Knight and king destination tables.
//!
//! Built at compile time; each square maps to the list of squares a knight or
//! king standing there could jump to on an empty board.

use crate::game_state::chess_types::Square;

/// Fixed-capacity destination list for one square.
#[derive(Debug, Clone, Copy)]
pub struct JumpList {
    targets: [Square; 8],
    len: u8,
}

impl JumpList {
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.targets[..self.len as usize]
    }
}

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub static KNIGHT_MOVES: [JumpList; 64] = generate_jump_table(&KNIGHT_DELTAS);
pub static KING_MOVES: [JumpList; 64] = generate_jump_table(&KING_DELTAS);

#[inline]
pub fn knight_targets(square: Square) -> &'static [Square] {
    KNIGHT_MOVES[square as usize].as_slice()
}

#[inline]
pub fn king_targets(square: Square) -> &'static [Square] {
    KING_MOVES[square as usize].as_slice()
}

const fn generate_jump_table(deltas: &[(i32, i32); 8]) -> [JumpList; 64] {
    let mut table = [JumpList {
        targets: [0; 8],
        len: 0,
    }; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut i = 0usize;

        while i < deltas.len() {
            let target_file = file + deltas[i].0;
            let target_rank = rank + deltas[i].1;
            if target_file >= 0 && target_file < 8 && target_rank >= 0 && target_rank < 8 {
                let len = table[sq].len as usize;
                table[sq].targets[len] = (target_rank * 8 + target_file) as Square;
                table[sq].len += 1;
            }
            i += 1;
        }

        sq += 1;
    }

    table
}
