use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::check_analysis::KingSafety;
use crate::moves::chess_move::{Move, MoveKind};
use crate::tables::sliding_rays::{ray, Direction};

/// Push `start -> target` if the king-safety masks allow it, marking it
/// proven legal when the analysis vouches for it.
#[inline]
pub fn push_filtered_move(
    game_state: &GameState,
    start: Square,
    target: Square,
    kind: MoveKind,
    safety: &KingSafety,
    out: &mut Vec<Move>,
) {
    if safety.allowed_targets(start) & square_mask(target) == 0 {
        return;
    }
    if let Some(mut mv) = Move::on_board(game_state, start, target, kind) {
        mv.proven_legal = safety.proves_legality;
        out.push(mv);
    }
}

/// True when `square` holds a piece of `color`.
#[inline]
pub fn occupied_by(game_state: &GameState, square: Square, color: Color) -> bool {
    matches!(game_state.piece_at(square), Some(piece) if piece.color == color)
}

/// Squares of every piece of `kind` belonging to `color`.
pub fn squares_of(game_state: &GameState, color: Color, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
    let wanted = Piece::new(color, kind);
    game_state
        .board
        .iter()
        .enumerate()
        .filter(move |(_, slot)| **slot == Some(wanted))
        .map(|(sq, _)| sq as Square)
}

/// Walk each ray from `from` until the first occupied square, emitting quiet
/// moves and a final capture when that square holds an enemy.
pub fn generate_slider_moves(
    game_state: &GameState,
    kind: PieceKind,
    directions: &[Direction],
    safety: &KingSafety,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move();

    for from in squares_of(game_state, side, kind) {
        for &direction in directions {
            for to in ray(from, direction) {
                match game_state.piece_at(to) {
                    None => push_filtered_move(game_state, from, to, MoveKind::Normal, safety, out),
                    Some(piece) => {
                        if piece.color != side {
                            push_filtered_move(game_state, from, to, MoveKind::Normal, safety, out);
                        }
                        break;
                    }
                }
            }
        }
    }
}
