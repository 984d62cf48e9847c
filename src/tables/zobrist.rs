//! Zobrist hashing support for fast position identity and repetition tracking.
//!
//! The keys are drawn from a fixed-seed generator so hashes are deterministic
//! across runs, which is useful for testing and debugging. They are built once
//! on first use and never mutated afterwards.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::game_state::castling::CastleSide;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    // [color][castle side]
    castling: [[u64; 2]; 2],
    side_to_move: u64,
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = rng.next_u64();
            }
        }
    }

    let mut castling = [[0u64; 2]; 2];
    for color in &mut castling {
        for key in color {
            *key = rng.next_u64();
        }
    }

    let side_to_move = rng.next_u64();

    ZobristTables {
        piece_square,
        castling,
        side_to_move,
    }
}

/// Return the Zobrist key for a `(color, piece, square)` occupancy term.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.color.index()][piece.kind.index()][square as usize]
}

/// Return the key xor-ed in while `color` still holds the castling right on `side`.
#[inline]
pub fn castling_key(color: Color, side: CastleSide) -> u64 {
    tables().castling[color.index()][side.index()]
}

/// Return the side-to-move toggle key (xor in when dark to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Compute the full position key from scratch.
///
/// Make/unmake maintain the same value incrementally; this is the ground
/// truth they are checked against.
pub fn compute_zobrist_key(game_state: &GameState) -> u64 {
    let mut key = 0u64;

    for (sq, slot) in game_state.board.iter().enumerate() {
        if let Some(piece) = slot {
            key ^= piece_square_key(*piece, sq as Square);
        }
    }

    if game_state.side_to_move() == Color::Dark {
        key ^= side_to_move_key();
    }

    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            if game_state.castling_right(color, side).is_held() {
                key ^= castling_key(color, side);
            }
        }
    }

    key
}

#[cfg(test)]
mod tests {
    use super::compute_zobrist_key;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_hash_is_deterministic() {
        let a = GameState::new_game();
        let b = GameState::new_game();
        assert_eq!(a.zobrist_key, b.zobrist_key);
        assert_eq!(a.zobrist_key, compute_zobrist_key(&a));
    }

    #[test]
    fn side_to_move_changes_hash() {
        let w = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let b = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert_ne!(w.zobrist_key, b.zobrist_key);
    }

    #[test]
    fn castling_rights_change_hash() {
        let with_rights =
            GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let without_rights =
            GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        let kingside_only =
            GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w K - 0 1").expect("FEN should parse");
        assert_ne!(with_rights.zobrist_key, without_rights.zobrist_key);
        assert_ne!(with_rights.zobrist_key, kingside_only.zobrist_key);
        assert_ne!(kingside_only.zobrist_key, without_rights.zobrist_key);
    }

    #[test]
    fn en_passant_target_is_not_part_of_the_key() {
        let no_ep = GameState::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1").expect("FEN should parse");
        let ep = GameState::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").expect("FEN should parse");
        assert_eq!(no_ep.zobrist_key, ep.zobrist_key);
    }
}
