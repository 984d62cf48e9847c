//! FEN-to-GameState parser.
//!
//! Builds a fully-populated incremental state from a Forsyth-Edwards Notation
//! string: mailbox, king cache, castling slots, clocks and the initial hash.
//! Any malformed field aborts the parse; no partially built board escapes.

use crate::chess_errors::{ChessErrors, FenField};
use crate::game_state::castling::{CastleSide, CastlingRight, CastlingSlots, NO_CASTLING};
use crate::game_state::chess_rules::MAX_FULLMOVE_NUMBER;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::tables::zobrist::compute_zobrist_key;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&parts.len()) {
        return Err(ChessErrors::FenFieldCount(parts.len()));
    }

    let mut game_state = GameState::new_empty();

    parse_board(parts[0], &mut game_state)?;
    let side_to_move = parse_side_to_move(parts[1])?;
    game_state.castling = parse_castling_rights(parts[2], &game_state.board)?;
    let en_passant = parse_en_passant_square(parts[3], side_to_move)?;

    // Older tools omit the two counters; treat them like a fresh position.
    let halfmove_clock = match parts.get(4) {
        Some(text) => text.parse::<u16>().map_err(|_| {
            ChessErrors::fen(FenField::HalfmoveClock, format!("'{text}' is not a number"))
        })?,
        None => 0,
    };
    let fullmove_number = match parts.get(5) {
        Some(text) => text.parse::<u32>().map_err(|_| {
            ChessErrors::fen(FenField::FullmoveNumber, format!("'{text}' is not a number"))
        })?,
        None => 1,
    };
    if fullmove_number > MAX_FULLMOVE_NUMBER {
        return Err(ChessErrors::fen(
            FenField::FullmoveNumber,
            format!("{fullmove_number} is out of range (at most {MAX_FULLMOVE_NUMBER})"),
        ));
    }

    let side_offset = match side_to_move {
        Color::Light => 0,
        Color::Dark => 1,
    };
    game_state.total_halfmoves = 2 * fullmove_number.saturating_sub(1) + side_offset;
    game_state.en_passant_history = vec![en_passant];
    game_state.fifty_move_history = vec![halfmove_clock];
    game_state.zobrist_key = compute_zobrist_key(&game_state);
    game_state.hash_history = vec![game_state.zobrist_key];

    log::debug!("loaded FEN '{fen}' (zobrist {:#018x})", game_state.zobrist_key);

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::fen(
            FenField::PiecePlacement,
            format!("expected 8 ranks, found {}", ranks.len()),
        ));
    }

    let mut king_counts = [0usize; 2];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::fen(
                        FenField::PiecePlacement,
                        format!("invalid empty-square count '{ch}'"),
                    ));
                }
                file += empty_count as u8;
                if file > 8 {
                    break;
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessErrors::fen(FenField::PiecePlacement, format!("unrecognised character '{ch}'"))
            })?;

            if file >= 8 {
                file += 1;
                break;
            }

            let sq = square_at(file, board_rank);
            game_state.board[sq as usize] = Some(piece);
            if piece.kind == PieceKind::King {
                king_counts[piece.color.index()] += 1;
                game_state.king_squares[piece.color.index()] = sq;
            }
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::fen(
                FenField::PiecePlacement,
                format!("rank {} covers {file} files instead of 8", board_rank + 1),
            ));
        }
    }

    for color in Color::BOTH {
        let count = king_counts[color.index()];
        if count != 1 {
            let name = match color {
                Color::Light => "white",
                Color::Dark => "black",
            };
            return Err(ChessErrors::fen(
                FenField::PiecePlacement,
                format!("expected exactly one {name} king, found {count}"),
            ));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::fen(
            FenField::ActiveColor,
            format!("expected 'w' or 'b', found '{side_part}'"),
        )),
    }
}

fn parse_castling_rights(castling_part: &str, board: &PieceArray) -> Result<CastlingSlots, ChessErrors> {
    let mut slots = NO_CASTLING;
    if castling_part == "-" {
        return Ok(slots);
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::Light, CastleSide::Kingside),
            'Q' => (Color::Light, CastleSide::Queenside),
            'k' => (Color::Dark, CastleSide::Kingside),
            'q' => (Color::Dark, CastleSide::Queenside),
            _ => {
                return Err(ChessErrors::fen(
                    FenField::CastlingAvailability,
                    format!("unrecognised character '{ch}'"),
                ))
            }
        };

        let king_home = square_at(4, color.home_rank());
        let king_ok = board[king_home as usize] == Some(Piece::new(color, PieceKind::King));
        let rook_ok =
            board[side.rook_home(color) as usize] == Some(Piece::new(color, PieceKind::Rook));

        if king_ok && rook_ok {
            slots[color.index()][side.index()] = CastlingRight::Held;
        } else {
            log::warn!("ignoring castling right '{ch}': king or rook is not on its home square");
        }
    }

    Ok(slots)
}

/// The target sits behind a pawn that just double-pushed, so it must be on
/// the sixth rank with white to move and the third with black to move.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|err| ChessErrors::fen(FenField::EnPassantTarget, err.to_string()))?;

    let (expected_rank, rank_name) = match side_to_move {
        Color::Light => (5, "sixth"),
        Color::Dark => (2, "third"),
    };
    if rank_of(square) != expected_rank {
        return Err(ChessErrors::fen(
            FenField::EnPassantTarget,
            format!("'{en_passant_part}' is not on the {rank_name} rank"),
        ));
    }

    Ok(Some(square))
}
