//! Long algebraic (UCI-style) move text: `e2e4`, `e1g1`, `a7a8q`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Split move text into start square, target square and promotion piece.
///
/// The text is only checked for shape; whether the move is legal is up to
/// the caller.
pub fn parse_long_algebraic(
    long_algebraic: &str,
) -> Result<(Square, Square, Option<PieceKind>), ChessErrors> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidMoveNotation(long_algebraic.to_owned()));
    }

    let start = algebraic_to_square(&text[0..2])?;
    let target = algebraic_to_square(&text[2..4])?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_char(ch) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(ChessErrors::InvalidMoveNotation(long_algebraic.to_owned())),
        },
    };

    Ok((start, target, promotion))
}

#[inline]
pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}
