use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// Produces the complete legal move list for the side to move.
///
/// Implementations may probe the position through make-like mutations but
/// must leave `game_state` exactly as they found it.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move>;
}
