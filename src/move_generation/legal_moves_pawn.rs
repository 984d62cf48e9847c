//! Pawn move generation.
//!
//! Pushes, double pushes, diagonal captures and promotions go through the
//! king-safety masks like every other piece. En passant is emitted
//! separately and unproven, because removing two pawns from one rank can
//! uncover the king in ways the pin scan does not see.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::check_analysis::KingSafety;
use crate::move_generation::legal_move_shared::{push_filtered_move, squares_of};
use crate::moves::chess_move::{Move, MoveKind};

pub fn generate_pawn_moves(game_state: &GameState, safety: &KingSafety, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let forward = side.pawn_direction();

    for from in squares_of(game_state, side, PieceKind::Pawn) {
        if let Some(one_step) = offset_square(from, 0, forward) {
            if game_state.piece_at(one_step).is_none() {
                push_pawn_move(game_state, from, one_step, safety, out);

                if rank_of(from) == side.pawn_start_rank() {
                    if let Some(two_step) = offset_square(from, 0, 2 * forward) {
                        if game_state.piece_at(two_step).is_none() {
                            push_filtered_move(game_state, from, two_step, MoveKind::Normal, safety, out);
                        }
                    }
                }
            }
        }

        for file_delta in [-1i8, 1] {
            let Some(to) = offset_square(from, file_delta, forward) else {
                continue;
            };
            if matches!(game_state.piece_at(to), Some(piece) if piece.color != side) {
                push_pawn_move(game_state, from, to, safety, out);
            }
        }
    }
}

/// En-passant captures onto the current target square, left unproven.
pub fn generate_en_passant_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let Some(target) = game_state.en_passant_square() else {
        return;
    };
    let side = game_state.side_to_move();
    let capturer = Piece::new(side, PieceKind::Pawn);
    let victim = Piece::new(side.opposite(), PieceKind::Pawn);

    let Some(victim_square) = offset_square(target, 0, -side.pawn_direction()) else {
        return;
    };
    if game_state.piece_at(target).is_some() || game_state.piece_at(victim_square) != Some(victim) {
        log::warn!("ignoring en-passant target {target}: no pawn to capture behind it");
        return;
    }

    for file_delta in [-1i8, 1] {
        let Some(from) = offset_square(target, file_delta, -side.pawn_direction()) else {
            continue;
        };
        if game_state.piece_at(from) != Some(capturer) {
            continue;
        }
        if let Some(mv) = Move::on_board(game_state, from, target, MoveKind::EnPassant) {
            out.push(mv);
        }
    }
}

fn push_pawn_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    safety: &KingSafety,
    out: &mut Vec<Move>,
) {
    if rank_of(to) == game_state.side_to_move().promotion_rank() {
        for promo in PieceKind::PROMOTIONS {
            push_filtered_move(game_state, from, to, MoveKind::Promotion(promo), safety, out);
        }
    } else {
        push_filtered_move(game_state, from, to, MoveKind::Normal, safety, out);
    }
}
