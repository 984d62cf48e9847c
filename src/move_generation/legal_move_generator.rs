//! Full legal move generation pipeline.
//!
//! `PinAwareMoveGenerator` runs the check/pin analysis first and only
//! generates moves that can answer the current check situation, proving most
//! of them legal on the way. `ExhaustiveMoveGenerator` generates every
//! pseudo-legal move and probes each one; it is slower and serves as the
//! reference the fast path is tested against.

use crate::game_state::game_state::GameState;
use crate::move_generation::check_analysis::{analyze_king_safety, KingSafety};
use crate::move_generation::legal_move_validation::is_legal;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::{generate_en_passant_moves, generate_pawn_moves};
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct PinAwareMoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveMoveGenerator;

impl MoveGenerator for PinAwareMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move> {
        let safety = analyze_king_safety(game_state, game_state.side_to_move());
        generate_with_safety(game_state, &safety)
    }
}

impl MoveGenerator for ExhaustiveMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move> {
        generate_with_safety(game_state, &KingSafety::unrestricted())
    }
}

/// Legal moves for the side to move using the default generator.
#[inline]
pub fn legal_moves(game_state: &mut GameState) -> Vec<Move> {
    PinAwareMoveGenerator.generate_legal_moves(game_state)
}

fn generate_with_safety(game_state: &mut GameState, safety: &KingSafety) -> Vec<Move> {
    let mut moves = Vec::<Move>::with_capacity(64);

    // Under double check only the king may move.
    if !safety.in_double_check() {
        generate_pawn_moves(game_state, safety, &mut moves);
        generate_knight_moves(game_state, safety, &mut moves);
        generate_bishop_moves(game_state, safety, &mut moves);
        generate_rook_moves(game_state, safety, &mut moves);
        generate_queen_moves(game_state, safety, &mut moves);
        generate_en_passant_moves(game_state, &mut moves);
    }
    generate_king_moves(game_state, safety.checkers == 0, &mut moves);

    moves.retain_mut(|mv| is_legal(game_state, mv));
    moves
}

#[cfg(test)]
mod tests {
    use super::{legal_moves, ExhaustiveMoveGenerator, PinAwareMoveGenerator};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::MoveGenerator;

    fn count(fen: &str) -> usize {
        let mut game_state = GameState::from_fen(fen).expect("FEN should parse");
        legal_moves(&mut game_state).len()
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let mut game_state = GameState::new_game();
        let before = game_state.clone();
        let moves = legal_moves(&mut game_state);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|mv| mv.proven_legal));
        assert_eq!(game_state, before);
    }

    #[test]
    fn double_check_leaves_only_king_moves() {
        let mut game_state =
            GameState::from_fen("4k3/8/8/8/8/3n4/1Q6/r3K3 w - - 0 1").expect("FEN should parse");
        let moves = legal_moves(&mut game_state);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.moving.kind == PieceKind::King));
    }

    #[test]
    fn single_check_allows_blocks_and_captures() {
        // Rook a1 checks; Qb2 can take on a1 or block on b1 or c1.
        let mut game_state =
            GameState::from_fen("4k3/8/8/8/8/8/1Q6/r3K3 w - - 0 1").expect("FEN should parse");
        let moves = legal_moves(&mut game_state);
        let queen_targets: Vec<_> = moves
            .iter()
            .filter(|mv| mv.moving.kind == PieceKind::Queen)
            .map(|mv| mv.target)
            .collect();
        assert_eq!(queen_targets.len(), 3);
        for sq in [0, 1, 2] {
            assert!(queen_targets.contains(&sq), "queen should reach {sq}");
        }
    }

    #[test]
    fn checkmate_and_stalemate_have_no_moves() {
        assert_eq!(count("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1"), 0);
        assert_eq!(count("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), 0);
    }

    #[test]
    fn generators_agree_on_a_tactical_position() {
        let fen = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
        let mut game_state = GameState::from_fen(fen).expect("FEN should parse");

        let mut fast = PinAwareMoveGenerator.generate_legal_moves(&mut game_state);
        let mut slow = ExhaustiveMoveGenerator.generate_legal_moves(&mut game_state);
        let key = |mv: &crate::moves::chess_move::Move| mv.to_string();
        fast.sort_by_key(key);
        slow.sort_by_key(key);

        assert_eq!(fast.len(), 6);
        assert_eq!(fast, slow);
    }
}
