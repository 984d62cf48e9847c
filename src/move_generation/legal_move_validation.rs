//! Legality probe for moves the generator could not prove legal.

use crate::game_state::castling::CastleSide;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_board_effect, revert_board_effect};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::moves::chess_move::Move;

/// True when `mv` does not leave the mover's king attacked.
///
/// Castling is answered from attack queries alone. Anything else is tried
/// on the mailbox, checked and taken back, so `game_state` is unchanged on
/// return. A positive answer is cached in `mv.proven_legal`.
pub fn is_legal(game_state: &mut GameState, mv: &mut Move) -> bool {
    if mv.proven_legal {
        return true;
    }

    let color = mv.color();
    let legal = if mv.is_castle() {
        let side = CastleSide::from_king_target(mv.target);
        !is_king_in_check(game_state, color)
            && side
                .king_transit_squares(color)
                .iter()
                .all(|&sq| !is_square_attacked(game_state, sq, color.opposite()))
    } else {
        apply_board_effect(game_state, mv);
        let exposed = is_king_in_check(game_state, color);
        revert_board_effect(game_state, mv);
        !exposed
    };

    mv.proven_legal = legal;
    legal
}
