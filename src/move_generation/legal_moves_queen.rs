use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::check_analysis::KingSafety;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::chess_move::Move;
use crate::tables::sliding_rays::Direction;

pub fn generate_queen_moves(game_state: &GameState, safety: &KingSafety, out: &mut Vec<Move>) {
    generate_slider_moves(game_state, PieceKind::Queen, &Direction::ALL, safety, out);
}
