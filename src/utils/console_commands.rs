//! Line-oriented console protocol over a [`ChessGame`].
//!
//! `ConsoleCommand::parse` turns one input line into a command; `execute`
//! runs it against the session and returns the lines to print. The stdin
//! loop itself lives in the binary.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_game::ChessGame;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::PinAwareMoveGenerator;
use crate::move_generation::perft::{perft, perft_divide};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    StartPosition,       // position startpos
    FenPosition(String), // position fen <fen>
    Moves,               // list legal moves
    Move(String),        // move <lan>
    Undo,
    Fen,
    Status,
    Perft(u8),  // perft <depth>
    Divide(u8), // divide <depth>
    Quit,

    Invalid(String),
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> ConsoleCommand {
        let parts = line.split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            ["position", "startpos"] => ConsoleCommand::StartPosition,
            ["position", "fen", fen @ ..] if !fen.is_empty() => ConsoleCommand::FenPosition(fen.join(" ")),
            ["moves"] => ConsoleCommand::Moves,
            ["move", notation] => ConsoleCommand::Move(notation.to_string()),
            ["undo"] => ConsoleCommand::Undo,
            ["fen"] => ConsoleCommand::Fen,
            ["status"] => ConsoleCommand::Status,
            ["perft", depth] => match depth.parse::<u8>() {
                Ok(depth) => ConsoleCommand::Perft(depth),
                Err(_) => ConsoleCommand::Invalid(line.trim().to_owned()),
            },
            ["divide", depth] => match depth.parse::<u8>() {
                Ok(depth) => ConsoleCommand::Divide(depth),
                Err(_) => ConsoleCommand::Invalid(line.trim().to_owned()),
            },
            ["quit"] | ["exit"] => ConsoleCommand::Quit,
            _ => ConsoleCommand::Invalid(line.trim().to_owned()),
        }
    }
}

/// Run `command` against `game` and return the lines to print.
///
/// `Quit` produces no output; stopping the loop is the caller's job.
pub fn execute(game: &mut ChessGame, command: &ConsoleCommand) -> Result<Vec<String>, ChessErrors> {
    let lines = match command {
        ConsoleCommand::StartPosition => {
            *game = ChessGame::new();
            vec![game.as_fen()]
        }
        ConsoleCommand::FenPosition(fen) => {
            *game = ChessGame::from_fen(fen)?;
            vec![game.as_fen()]
        }
        ConsoleCommand::Moves => {
            let mut moves: Vec<String> = game.legal_moves().iter().map(move_to_long_algebraic).collect();
            moves.sort();
            vec![format!("{} legal: {}", moves.len(), moves.join(" "))]
        }
        ConsoleCommand::Move(notation) => {
            let mv = game.find_move_by_notation(notation)?;
            game.make_move(mv)?;
            vec![game.as_fen()]
        }
        ConsoleCommand::Undo => match game.undo() {
            Some(mv) => vec![format!("undid {mv}"), game.as_fen()],
            None => vec!["nothing to undo".to_owned()],
        },
        ConsoleCommand::Fen => vec![game.as_fen()],
        ConsoleCommand::Status => vec![status_line(game)],
        ConsoleCommand::Perft(depth) => {
            let mut state = game.state().clone();
            vec![format!("nodes: {}", perft(&PinAwareMoveGenerator, &mut state, *depth))]
        }
        ConsoleCommand::Divide(depth) => {
            let mut state = game.state().clone();
            let divided = perft_divide(&PinAwareMoveGenerator, &mut state, *depth);
            let total: u64 = divided.iter().map(|(_, nodes)| nodes).sum();
            divided
                .into_iter()
                .map(|(label, nodes)| format!("{label}: {nodes}"))
                .chain(std::iter::once(format!("nodes: {total}")))
                .collect()
        }
        ConsoleCommand::Quit => Vec::new(),
        ConsoleCommand::Invalid(text) => vec![format!("unknown command '{text}'")],
    };
    Ok(lines)
}

fn status_line(game: &ChessGame) -> String {
    if let Some(outcome) = game.game_over() {
        return format!("game over: {outcome} (score {})", outcome.score());
    }
    let side = match game.state().side_to_move() {
        Color::Light => "white",
        Color::Dark => "black",
    };
    let check = if game.in_check() { ", in check" } else { "" };
    format!("{side} to move{check}, {} legal moves", game.legal_moves().len())
}

#[cfg(test)]
mod tests {
    use super::{execute, ConsoleCommand};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_game::ChessGame;

    #[test]
    fn parses_every_command() {
        assert_eq!(ConsoleCommand::parse("position startpos"), ConsoleCommand::StartPosition);
        assert_eq!(
            ConsoleCommand::parse("position fen 4k3/8/8/8/8/8/8/4K3 w - - 0 1"),
            ConsoleCommand::FenPosition("4k3/8/8/8/8/8/8/4K3 w - - 0 1".to_owned())
        );
        assert_eq!(ConsoleCommand::parse("  moves "), ConsoleCommand::Moves);
        assert_eq!(ConsoleCommand::parse("move e2e4"), ConsoleCommand::Move("e2e4".to_owned()));
        assert_eq!(ConsoleCommand::parse("undo"), ConsoleCommand::Undo);
        assert_eq!(ConsoleCommand::parse("fen"), ConsoleCommand::Fen);
        assert_eq!(ConsoleCommand::parse("status"), ConsoleCommand::Status);
        assert_eq!(ConsoleCommand::parse("perft 3"), ConsoleCommand::Perft(3));
        assert_eq!(ConsoleCommand::parse("divide 2"), ConsoleCommand::Divide(2));
        assert_eq!(ConsoleCommand::parse("quit"), ConsoleCommand::Quit);
    }

    #[test]
    fn malformed_lines_are_invalid() {
        assert_eq!(ConsoleCommand::parse("perft x"), ConsoleCommand::Invalid("perft x".to_owned()));
        assert_eq!(ConsoleCommand::parse("position fen"), ConsoleCommand::Invalid("position fen".to_owned()));
        assert_eq!(ConsoleCommand::parse(""), ConsoleCommand::Invalid(String::new()));
    }

    #[test]
    fn session_round_trip_through_commands() {
        let mut game = ChessGame::new();

        let out = execute(&mut game, &ConsoleCommand::Move("e2e4".to_owned())).expect("legal move");
        assert_eq!(out, vec!["rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1".to_owned()]);

        let out = execute(&mut game, &ConsoleCommand::Status).expect("status");
        assert_eq!(out, vec!["black to move, 20 legal moves".to_owned()]);

        let out = execute(&mut game, &ConsoleCommand::Perft(2)).expect("perft");
        assert_eq!(out, vec!["nodes: 600".to_owned()]);

        let out = execute(&mut game, &ConsoleCommand::Undo).expect("undo");
        assert_eq!(out[0], "undid e2e4");
    }

    #[test]
    fn errors_surface_to_the_caller() {
        let mut game = ChessGame::new();
        assert_eq!(
            execute(&mut game, &ConsoleCommand::Move("e2e5".to_owned())),
            Err(ChessErrors::MoveNotAvailable("e2e5".to_owned()))
        );
        assert!(matches!(
            execute(&mut game, &ConsoleCommand::FenPosition("bad".to_owned())),
            Err(ChessErrors::FenFieldCount(1))
        ));
    }

    #[test]
    fn divide_reports_a_total() {
        let mut game = ChessGame::new();
        let out = execute(&mut game, &ConsoleCommand::Divide(1)).expect("divide");
        assert_eq!(out.len(), 21);
        assert_eq!(out.last().map(String::as_str), Some("nodes: 20"));
    }
}
