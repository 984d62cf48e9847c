//! Check and pin analysis around the side-to-move's king.
//!
//! One outward scan from the king along the eight rays plus the knight and
//! pawn patterns yields everything phase B of generation needs: how many
//! pieces give check, which squares answer a single check, and which own
//! pieces are pinned to which line.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{pawn_attack_sources, slides_along};
use crate::tables::jump_tables::knight_targets;
use crate::tables::sliding_rays::{ray, Direction};

#[derive(Debug, Clone)]
pub struct KingSafety {
    /// Number of enemy pieces giving check (capped meaningfully at 2).
    pub checkers: u8,
    /// Squares a non-king move must land on: every square under no check,
    /// the checker plus the blocking squares under one check, none under two.
    pub evasion_mask: u64,
    pub pinned: u64,
    /// For each pinned square, the line from the king (exclusive) to the
    /// pinner (inclusive).
    pub pin_rays: [u64; 64],
    /// Moves that respect the masks are legal without probing.
    pub proves_legality: bool,
}

impl KingSafety {
    /// No restrictions and no proofs; every move must be probed.
    pub fn unrestricted() -> Self {
        Self {
            checkers: 0,
            evasion_mask: u64::MAX,
            pinned: 0,
            pin_rays: [0; 64],
            proves_legality: false,
        }
    }

    #[inline]
    pub fn is_pinned(&self, square: Square) -> bool {
        self.pinned & square_mask(square) != 0
    }

    /// Destination mask for a non-king piece standing on `from`.
    #[inline]
    pub fn allowed_targets(&self, from: Square) -> u64 {
        if self.is_pinned(from) {
            self.evasion_mask & self.pin_rays[from as usize]
        } else {
            self.evasion_mask
        }
    }

    #[inline]
    pub fn in_double_check(&self) -> bool {
        self.checkers >= 2
    }
}

pub fn analyze_king_safety(game_state: &GameState, color: Color) -> KingSafety {
    let king_sq = game_state.king_square(color);
    let enemy = color.opposite();

    let mut checkers = 0u8;
    let mut check_mask = 0u64;
    let mut pinned = 0u64;
    let mut pin_rays = [0u64; 64];

    for sq in pawn_attack_sources(king_sq, enemy).into_iter().flatten() {
        if game_state.piece_at(sq) == Some(Piece::new(enemy, PieceKind::Pawn)) {
            checkers += 1;
            check_mask |= square_mask(sq);
        }
    }

    for &sq in knight_targets(king_sq) {
        if game_state.piece_at(sq) == Some(Piece::new(enemy, PieceKind::Knight)) {
            checkers += 1;
            check_mask |= square_mask(sq);
        }
    }

    for direction in Direction::ALL {
        let mut line = 0u64;
        let mut shield: Option<Square> = None;

        for sq in ray(king_sq, direction) {
            line |= square_mask(sq);
            let Some(piece) = game_state.piece_at(sq) else {
                continue;
            };

            if piece.color == color {
                if shield.is_some() {
                    break;
                }
                shield = Some(sq);
                continue;
            }

            if slides_along(piece.kind, direction) {
                match shield {
                    None => {
                        checkers += 1;
                        check_mask |= line;
                    }
                    Some(pinned_sq) => {
                        pinned |= square_mask(pinned_sq);
                        pin_rays[pinned_sq as usize] = line;
                    }
                }
            }
            break;
        }
    }

    let evasion_mask = match checkers {
        0 => u64::MAX,
        1 => check_mask,
        _ => 0,
    };

    KingSafety {
        checkers,
        evasion_mask,
        pinned,
        pin_rays,
        proves_legality: true,
    }
}

#[cfg(test)]
mod tests {
    use super::analyze_king_safety;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn quiet_position_has_no_restrictions() {
        let game_state = GameState::new_game();
        let safety = analyze_king_safety(&game_state, Color::Light);
        assert_eq!(safety.checkers, 0);
        assert_eq!(safety.evasion_mask, u64::MAX);
        assert_eq!(safety.pinned, 0);
    }

    #[test]
    fn single_slider_check_allows_capture_or_block() {
        let game_state = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN should parse");
        let safety = analyze_king_safety(&game_state, Color::Light);
        assert_eq!(safety.checkers, 1);
        // a1 (the rook), b1, c1, d1.
        assert_eq!(safety.evasion_mask, 0b1111);
    }

    #[test]
    fn knight_and_rook_make_a_double_check() {
        let game_state = GameState::from_fen("4k3/8/8/8/8/3n4/8/r3K3 w - - 0 1").expect("FEN should parse");
        let safety = analyze_king_safety(&game_state, Color::Light);
        assert!(safety.in_double_check());
        assert_eq!(safety.evasion_mask, 0);
    }

    #[test]
    fn pinned_piece_is_restricted_to_its_line() {
        let game_state = GameState::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let safety = analyze_king_safety(&game_state, Color::Light);
        assert_eq!(safety.checkers, 0);
        assert!(safety.is_pinned(12));
        // e2 through e7 along the file.
        let expected = (1..=6).fold(0u64, |mask, rank| mask | square_mask(square_at(4, rank)));
        assert_eq!(safety.allowed_targets(12), expected);
    }

    #[test]
    fn two_own_pieces_on_a_line_are_not_pinned() {
        let game_state = GameState::from_fen("4k3/4r3/8/8/4N3/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let safety = analyze_king_safety(&game_state, Color::Light);
        assert_eq!(safety.pinned, 0);
    }
}
