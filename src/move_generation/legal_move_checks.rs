use crate::game_state::{chess_types::*, game_state::GameState};
use crate::tables::jump_tables::{king_targets, knight_targets};
use crate::tables::sliding_rays::{ray, Direction};

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

/// First occupied square along `direction` from `square`, with its piece.
#[inline]
pub(crate) fn first_occupant(
    game_state: &GameState,
    square: Square,
    direction: Direction,
) -> Option<(Square, Piece)> {
    ray(square, direction).find_map(|sq| game_state.piece_at(sq).map(|piece| (sq, piece)))
}

/// True when a piece of `kind` slides along `direction`.
#[inline]
pub(crate) fn slides_along(kind: PieceKind, direction: Direction) -> bool {
    if direction.is_diagonal() {
        kind.slides_diagonally()
    } else {
        kind.slides_orthogonally()
    }
}

/// Squares holding a pawn of `attacker_color` that attacks `square`.
#[inline]
pub(crate) fn pawn_attack_sources(square: Square, attacker_color: Color) -> [Option<Square>; 2] {
    // An attacking pawn sits one rank behind the target from its own side.
    let back = -attacker_color.pawn_direction();
    [
        offset_square(square, -1, back),
        offset_square(square, 1, back),
    ]
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let is_attacker = |sq: Square, kind: PieceKind| {
        game_state.piece_at(sq) == Some(Piece::new(attacker_color, kind))
    };

    if pawn_attack_sources(square, attacker_color)
        .into_iter()
        .flatten()
        .any(|sq| is_attacker(sq, PieceKind::Pawn))
    {
        return true;
    }

    if knight_targets(square)
        .iter()
        .any(|&sq| is_attacker(sq, PieceKind::Knight))
    {
        return true;
    }

    if king_targets(square)
        .iter()
        .any(|&sq| is_attacker(sq, PieceKind::King))
    {
        return true;
    }

    Direction::ALL.into_iter().any(|direction| {
        matches!(
            first_occupant(game_state, square, direction),
            Some((_, piece)) if piece.color == attacker_color && slides_along(piece.kind, direction)
        )
    })
}

/// Squares of every enemy piece currently giving check to `color`'s king.
pub fn checkers_of(game_state: &GameState, color: Color) -> Vec<Square> {
    let king_sq = game_state.king_square(color);
    let attacker_color = color.opposite();
    let mut checkers = Vec::new();

    let mut push_if = |sq: Square, kind: PieceKind| {
        if game_state.piece_at(sq) == Some(Piece::new(attacker_color, kind)) {
            checkers.push(sq);
        }
    };

    for sq in pawn_attack_sources(king_sq, attacker_color).into_iter().flatten() {
        push_if(sq, PieceKind::Pawn);
    }
    for &sq in knight_targets(king_sq) {
        push_if(sq, PieceKind::Knight);
    }

    for direction in Direction::ALL {
        if let Some((sq, piece)) = first_occupant(game_state, king_sq, direction) {
            if piece.color == attacker_color && slides_along(piece.kind, direction) {
                checkers.push(sq);
            }
        }
    }

    checkers
}
