//! In-place make/unmake.
//!
//! `make_move` pushes one entry on every history stack of the `GameState`
//! and `unmake_move` pops it again, so a search can walk the tree without
//! cloning boards. The Zobrist key is maintained incrementally and checked
//! against the hash history on every unmake.

use crate::game_state::castling::{CastleSide, CastlingRight};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;
use crate::tables::zobrist::{castling_key, piece_square_key, side_to_move_key};

pub fn make_move(game_state: &mut GameState, mv: Move) {
    let color = mv.color();
    debug_assert_eq!(
        color,
        game_state.side_to_move(),
        "make_move called with a move for the side not on move: {mv}"
    );

    apply_board_effect(game_state, &mv);

    let mut key = game_state.zobrist_key ^ board_key_delta(&mv) ^ side_to_move_key();
    game_state.total_halfmoves += 1;

    let now = game_state.total_halfmoves;
    if mv.moving.kind == PieceKind::King {
        for side in CastleSide::BOTH {
            key ^= revoke_castling(game_state, color, side, now);
        }
    }
    for side in CastleSide::BOTH {
        if mv.moving.kind == PieceKind::Rook && mv.start == side.rook_home(color) {
            key ^= revoke_castling(game_state, color, side, now);
        }
        let enemy = color.opposite();
        if mv.is_capture() && mv.target == side.rook_home(enemy) {
            key ^= revoke_castling(game_state, enemy, side, now);
        }
    }

    let clock = if mv.moving.kind == PieceKind::Pawn || mv.is_capture() {
        0
    } else {
        game_state.halfmove_clock().saturating_add(1)
    };
    game_state.fifty_move_history.push(clock);

    let en_passant = mv
        .is_double_pawn_push()
        .then(|| (mv.start + mv.target) / 2);
    game_state.en_passant_history.push(en_passant);

    game_state.zobrist_key = key;
    game_state.hash_history.push(key);
    game_state.move_history.push(mv);

    log::trace!("make {mv} -> {key:#018x}");
}

pub fn unmake_move(game_state: &mut GameState, mv: &Move) {
    match game_state.move_history.last() {
        Some(last) if last == mv => {}
        Some(last) => {
            log::error!("unmake of {mv} requested but the last move made was {last}");
            panic!("unmake_move: {mv} is not the most recent move ({last})");
        }
        None => {
            log::error!("unmake of {mv} requested with no move history");
            panic!("unmake_move: no move has been made");
        }
    }
    game_state.move_history.pop();

    revert_board_effect(game_state, mv);

    let mut key = game_state.zobrist_key ^ board_key_delta(mv) ^ side_to_move_key();

    let undone = game_state.total_halfmoves;
    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            let slot = &mut game_state.castling[color.index()][side.index()];
            if *slot == CastlingRight::LostAt(undone) {
                *slot = CastlingRight::Held;
                key ^= castling_key(color, side);
            }
        }
    }
    game_state.total_halfmoves -= 1;

    game_state.en_passant_history.pop();
    game_state.fifty_move_history.pop();
    game_state.hash_history.pop();

    let expected = game_state.hash_history.last().copied();
    if expected != Some(key) {
        log::error!("hash after unmaking {mv} is {key:#018x}, history says {expected:?}");
        panic!("unmake_move: incremental hash diverged from hash history");
    }
    game_state.zobrist_key = key;

    log::trace!("unmake {mv} -> {key:#018x}");
}

/// Move the pieces on the mailbox and king cache only; no hash, clocks or
/// rights. Used by the legality probe and by `make_move`.
pub(crate) fn apply_board_effect(game_state: &mut GameState, mv: &Move) {
    let color = mv.color();

    game_state.board[mv.start as usize] = None;
    if mv.is_en_passant() {
        game_state.board[mv.capture_square() as usize] = None;
    }
    game_state.board[mv.target as usize] = Some(Piece::new(color, mv.placed_kind()));

    if mv.is_castle() {
        let side = CastleSide::from_king_target(mv.target);
        let rook = game_state.board[side.rook_home(color) as usize].take();
        game_state.board[side.rook_destination(color) as usize] = rook;
    }

    if mv.moving.kind == PieceKind::King {
        game_state.king_squares[color.index()] = mv.target;
    }
}

/// Exact inverse of [`apply_board_effect`].
pub(crate) fn revert_board_effect(game_state: &mut GameState, mv: &Move) {
    let color = mv.color();

    if mv.is_castle() {
        let side = CastleSide::from_king_target(mv.target);
        let rook = game_state.board[side.rook_destination(color) as usize].take();
        game_state.board[side.rook_home(color) as usize] = rook;
    }

    game_state.board[mv.target as usize] = None;
    if let Some(captured) = mv.captured {
        game_state.board[mv.capture_square() as usize] = Some(captured);
    }
    game_state.board[mv.start as usize] = Some(mv.moving);

    if mv.moving.kind == PieceKind::King {
        game_state.king_squares[color.index()] = mv.start;
    }
}

/// XOR of every piece-square key the move toggles. Depends only on the
/// move, so the same value both applies and reverts it.
fn board_key_delta(mv: &Move) -> u64 {
    let color = mv.color();
    let mut delta = piece_square_key(mv.moving, mv.start)
        ^ piece_square_key(Piece::new(color, mv.placed_kind()), mv.target);

    if let Some(captured) = mv.captured {
        delta ^= piece_square_key(captured, mv.capture_square());
    }

    if mv.is_castle() {
        let side = CastleSide::from_king_target(mv.target);
        let rook = Piece::new(color, PieceKind::Rook);
        delta ^= piece_square_key(rook, side.rook_home(color))
            ^ piece_square_key(rook, side.rook_destination(color));
    }

    delta
}

/// Mark a held right as lost at half-move `now`; returns the hash toggle.
fn revoke_castling(game_state: &mut GameState, color: Color, side: CastleSide, now: u32) -> u64 {
    let slot = &mut game_state.castling[color.index()][side.index()];
    if slot.is_held() {
        *slot = CastlingRight::LostAt(now);
        castling_key(color, side)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{make_move, unmake_move};
    use crate::game_state::castling::{CastleSide, CastlingRight};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::chess_move::{Move, MoveKind};
    use crate::tables::zobrist::compute_zobrist_key;

    fn mv(game_state: &GameState, start: Square, target: Square, kind: MoveKind) -> Move {
        Move::on_board(game_state, start, target, kind).expect("start square should be occupied")
    }

    #[test]
    fn double_push_sets_en_passant_for_one_halfmove() {
        let mut game_state = GameState::new_game();
        let e4 = mv(&game_state, 12, 28, MoveKind::Normal);
        make_move(&mut game_state, e4);

        assert_eq!(game_state.en_passant_square(), Some(20));
        assert_eq!(game_state.side_to_move(), Color::Dark);
        assert_eq!(game_state.halfmove_clock(), 0);
        assert_eq!(game_state.zobrist_key, compute_zobrist_key(&game_state));

        let nf6 = mv(&game_state, 62, 45, MoveKind::Normal);
        make_move(&mut game_state, nf6);
        assert_eq!(game_state.en_passant_square(), None);
        assert_eq!(game_state.halfmove_clock(), 1);
        assert_eq!(game_state.fullmove_number(), 2);
        assert_eq!(game_state.hash_history.len(), 3);
    }

    #[test]
    fn make_then_unmake_restores_everything() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut game_state = GameState::from_fen(fen).expect("FEN should parse");
        let before = game_state.clone();

        let castle = mv(&game_state, 4, 6, MoveKind::Castle);
        make_move(&mut game_state, castle);
        assert_eq!(game_state.piece_at(5), Some(Piece::new(Color::Light, PieceKind::Rook)));
        assert_eq!(game_state.piece_at(7), None);
        assert_eq!(game_state.king_square(Color::Light), 6);
        assert_eq!(game_state.castling_right(Color::Light, CastleSide::Queenside), CastlingRight::LostAt(1));
        assert_eq!(game_state.zobrist_key, compute_zobrist_key(&game_state));

        unmake_move(&mut game_state, &castle);
        assert_eq!(game_state, before);
    }

    #[test]
    fn capturing_a_home_rook_revokes_the_opponents_right() {
        let mut game_state =
            GameState::from_fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1").expect("FEN should parse");
        let bxh1 = mv(&game_state, 14, 7, MoveKind::Normal);
        make_move(&mut game_state, bxh1);

        assert!(!game_state.castling_right(Color::Light, CastleSide::Kingside).is_held());
        assert!(game_state.castling_right(Color::Light, CastleSide::Queenside).is_held());
        assert_eq!(game_state.zobrist_key, compute_zobrist_key(&game_state));

        unmake_move(&mut game_state, &bxh1);
        assert!(game_state.castling_right(Color::Light, CastleSide::Kingside).is_held());
        assert_eq!(game_state.piece_at(7), Some(Piece::new(Color::Light, PieceKind::Rook)));
    }

    #[test]
    fn en_passant_and_promotion_round_trip() {
        let fen = "4k3/1P6/8/3pP3/8/8/8/4K3 w - d6 0 2";
        let mut game_state = GameState::from_fen(fen).expect("FEN should parse");
        let before = game_state.clone();

        let exd6 = mv(&game_state, 36, 43, MoveKind::EnPassant);
        make_move(&mut game_state, exd6);
        assert_eq!(game_state.piece_at(35), None);
        assert_eq!(game_state.piece_at(43), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert_eq!(game_state.zobrist_key, compute_zobrist_key(&game_state));
        unmake_move(&mut game_state, &exd6);
        assert_eq!(game_state, before);

        let b8q = mv(&game_state, 49, 57, MoveKind::Promotion(PieceKind::Queen));
        make_move(&mut game_state, b8q);
        assert_eq!(game_state.piece_at(57), Some(Piece::new(Color::Light, PieceKind::Queen)));
        assert_eq!(game_state.zobrist_key, compute_zobrist_key(&game_state));
        unmake_move(&mut game_state, &b8q);
        assert_eq!(game_state, before);
    }

    #[test]
    #[should_panic(expected = "no move has been made")]
    fn unmake_without_make_panics() {
        let mut game_state = GameState::new_game();
        let e4 = mv(&game_state, 12, 28, MoveKind::Normal);
        unmake_move(&mut game_state, &e4);
    }

    #[test]
    #[should_panic(expected = "not the most recent move")]
    fn unmake_out_of_order_panics() {
        let mut game_state = GameState::new_game();
        let e4 = mv(&game_state, 12, 28, MoveKind::Normal);
        let d4 = mv(&game_state, 11, 27, MoveKind::Normal);
        make_move(&mut game_state, e4);
        unmake_move(&mut game_state, &d4);
    }
}
