use crate::game_state::castling::CastleSide;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state);
    let en_passant = game_state
        .en_passant_square()
        .map_or_else(|| "-".to_owned(), square_to_algebraic);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

fn generate_board_field(board: &PieceArray) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board[square_at(file, rank) as usize] {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            if game_state.castling_right(color, side).is_held() {
                out.push(side.to_fen_char(color));
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
