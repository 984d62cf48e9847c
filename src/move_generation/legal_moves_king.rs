//! King steps and castling. Neither is ever proven by the pin scan; both
//! are left for the legality probe.

use crate::game_state::castling::CastleSide;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::occupied_by;
use crate::moves::chess_move::{Move, MoveKind};
use crate::tables::jump_tables::king_targets;

pub fn generate_king_moves(game_state: &GameState, allow_castling: bool, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let from = game_state.king_square(side);

    for &to in king_targets(from) {
        if occupied_by(game_state, to, side) {
            continue;
        }
        if let Some(mv) = Move::on_board(game_state, from, to, MoveKind::Normal) {
            out.push(mv);
        }
    }

    if allow_castling {
        generate_castling_moves(game_state, from, out);
    }
}

/// Castling candidates gated on the right being held and the squares
/// between king and rook being empty. Attacks are the probe's business.
fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let rook = Some(Piece::new(side, PieceKind::Rook));

    for castle_side in CastleSide::BOTH {
        if !game_state.castling_right(side, castle_side).is_held() {
            continue;
        }
        if game_state.piece_at(castle_side.rook_home(side)) != rook {
            continue;
        }
        if castle_side
            .between_squares(side)
            .iter()
            .any(|&sq| game_state.piece_at(sq).is_some())
        {
            continue;
        }

        let target = castle_side.king_destination(side);
        if let Some(mv) = Move::on_board(game_state, king_from, target, MoveKind::Castle) {
            out.push(mv);
        }
    }
}
