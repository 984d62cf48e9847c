//! Perft: exhaustive move-path enumeration used to validate generation.
//!
//! Every traversal walks the tree in place with make/unmake, so the root
//! `GameState` is handed back unchanged.

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Leaf statistics in the layout of the published perft tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf nodes `depth` half-moves below `game_state`.
pub fn perft<G: MoveGenerator + ?Sized>(generator: &G, game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        game_state.make_move(mv);
        nodes += perft(generator, game_state, depth - 1);
        game_state.unmake_move(&mv);
    }
    nodes
}

/// Leaf counts per root move, labelled in long algebraic notation and
/// sorted by label.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut divided: Vec<(String, u64)> = generator
        .generate_legal_moves(game_state)
        .into_iter()
        .map(|mv| {
            game_state.make_move(mv);
            let nodes = perft(generator, game_state, depth - 1);
            game_state.unmake_move(&mv);
            (move_to_long_algebraic(&mv), nodes)
        })
        .collect();

    divided.sort_by(|a, b| a.0.cmp(&b.0));
    divided
}

/// Full leaf statistics. Slower than [`perft`]: every leaf is made so check
/// and mate can be classified.
pub fn perft_counts<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        game_state.make_move(mv);

        if depth == 1 {
            total.nodes += 1;
            total.captures += u64::from(mv.is_capture());
            total.en_passant += u64::from(mv.is_en_passant());
            total.castles += u64::from(mv.is_castle());
            total.promotions += u64::from(mv.promotion().is_some());
            if game_state.is_in_check() {
                total.checks += 1;
                if generator.generate_legal_moves(game_state).is_empty() {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft_counts(generator, game_state, depth - 1));
        }

        game_state.unmake_move(&mv);
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::PinAwareMoveGenerator;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&PinAwareMoveGenerator, &mut game, 0), 1);
        assert_eq!(
            perft_counts(&PinAwareMoveGenerator, &mut game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_start_position_shallow() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(perft(&PinAwareMoveGenerator, &mut game, 1), 20);
        assert_eq!(perft(&PinAwareMoveGenerator, &mut game, 2), 400);
        assert_eq!(perft(&PinAwareMoveGenerator, &mut game, 3), 8_902);
        assert_eq!(game, before);
    }

    #[test]
    fn perft_counts_depth_three_matches_reference_table() {
        let mut game = GameState::new_game();
        let counts = perft_counts(&PinAwareMoveGenerator, &mut game, 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8_902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_depth_one_statistics() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let counts = perft_counts(&PinAwareMoveGenerator, &mut game, 1);
        assert_eq!(counts.nodes, 48);
        assert_eq!(counts.captures, 8);
        assert_eq!(counts.castles, 2);
        assert_eq!(counts.checks, 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&PinAwareMoveGenerator, &mut game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided[0].0, "a2a3");
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
