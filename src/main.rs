use std::io::{self, BufRead, Write};

use chess_rules::game_state::chess_game::ChessGame;
use chess_rules::utils::console_commands::{execute, ConsoleCommand};

fn main() {
    env_logger::init();

    let mut game = ChessGame::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("failed to read stdin: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = ConsoleCommand::parse(&line);
        if command == ConsoleCommand::Quit {
            break;
        }

        match execute(&mut game, &command) {
            Ok(lines) => {
                for out in lines {
                    println!("{out}");
                }
            }
            Err(err) => println!("error: {err}"),
        }
        stdout.flush().ok();
    }
}
