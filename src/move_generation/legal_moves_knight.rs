use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::check_analysis::KingSafety;
use crate::move_generation::legal_move_shared::{occupied_by, push_filtered_move, squares_of};
use crate::moves::chess_move::{Move, MoveKind};
use crate::tables::jump_tables::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, safety: &KingSafety, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();

    for from in squares_of(game_state, side, PieceKind::Knight) {
        for &to in knight_targets(from) {
            if !occupied_by(game_state, to, side) {
                push_filtered_move(game_state, from, to, MoveKind::Normal, safety, out);
            }
        }
    }
}
