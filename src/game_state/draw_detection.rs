//! Automatic draw rules: fifty-move, threefold repetition and a simplified
//! insufficient-material test.

use crate::game_state::chess_rules::{
    FIFTY_MOVE_HALFMOVE_LIMIT, INSUFFICIENT_MATERIAL_MAX_PIECES, REPETITION_DRAW_COUNT,
};
use crate::game_state::{chess_types::*, game_state::GameState};

#[inline]
pub fn is_fifty_move_draw(game_state: &GameState) -> bool {
    game_state.halfmove_clock() >= FIFTY_MOVE_HALFMOVE_LIMIT
}

/// True once the current position has occurred three times with the same
/// side to move.
///
/// Only positions inside the fifty-move window can repeat: a pawn move or
/// capture makes every earlier position unreachable.
pub fn is_threefold_repetition(game_state: &GameState) -> bool {
    let history = &game_state.hash_history;
    let Some(&current) = history.last() else {
        return false;
    };

    let window = usize::from(game_state.halfmove_clock()).min(history.len() - 1);
    let earlier_matches = (2..=window)
        .step_by(2)
        .filter(|&back| history[history.len() - 1 - back] == current)
        .take(REPETITION_DRAW_COUNT - 1)
        .count();

    earlier_matches + 1 >= REPETITION_DRAW_COUNT
}

/// Simplified dead-position test.
///
/// A side with four or more pieces always has mating material. King and two
/// knights against a bare king is a draw; any other three-piece side is not.
/// Otherwise the game is drawn when no pawn, rook or queen is left.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let mut piece_counts = [0usize; 2];
    let mut knight_counts = [0usize; 2];
    let mut heavy_or_pawn = false;

    for piece in game_state.board.iter().flatten() {
        piece_counts[piece.color.index()] += 1;
        match piece.kind {
            PieceKind::Knight => knight_counts[piece.color.index()] += 1,
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => heavy_or_pawn = true,
            PieceKind::Bishop | PieceKind::King => {}
        }
    }

    if piece_counts
        .iter()
        .any(|&count| count > INSUFFICIENT_MATERIAL_MAX_PIECES)
    {
        return false;
    }

    for color in Color::BOTH {
        if piece_counts[color.index()] == INSUFFICIENT_MATERIAL_MAX_PIECES {
            return knight_counts[color.index()] == 2 && piece_counts[color.opposite().index()] == 1;
        }
    }

    !heavy_or_pawn
}

pub fn is_draw(game_state: &GameState) -> bool {
    is_fifty_move_draw(game_state)
        || is_insufficient_material(game_state)
        || is_threefold_repetition(game_state)
}
