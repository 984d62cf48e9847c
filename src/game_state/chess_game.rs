//! Game session facade.
//!
//! `ChessGame` is what a front end talks to: it owns the board, keeps the
//! legal-move list for the current position cached, and answers the
//! end-of-game question. Every mutation refreshes the cache.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::draw_detection::is_draw;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::PinAwareMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;
use crate::utils::long_algebraic::parse_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Draw,
    LightWins,
    DarkWins,
}

impl GameOutcome {
    /// `0` for a draw, `+1` when white won, `-1` when black won.
    #[inline]
    pub const fn score(self) -> i8 {
        match self {
            GameOutcome::Draw => 0,
            GameOutcome::LightWins => 1,
            GameOutcome::DarkWins => -1,
        }
    }

    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::Light => GameOutcome::LightWins,
            Color::Dark => GameOutcome::DarkWins,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Draw => f.write_str("1/2-1/2"),
            GameOutcome::LightWins => f.write_str("1-0"),
            GameOutcome::DarkWins => f.write_str("0-1"),
        }
    }
}

pub struct ChessGame {
    state: GameState,
    legal_moves: Vec<Move>,
    generator: Box<dyn MoveGenerator>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::with_generator(GameState::new_game(), Box::new(PinAwareMoveGenerator))
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        let state = GameState::from_fen(fen)?;
        Ok(Self::with_generator(state, Box::new(PinAwareMoveGenerator)))
    }

    pub fn with_generator(state: GameState, generator: Box<dyn MoveGenerator>) -> Self {
        let mut game = Self {
            state,
            legal_moves: Vec::new(),
            generator,
        };
        game.refresh_legal_moves();
        game
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Legal move from `start` to `target`; `promotion` must name the piece
    /// for promotions and be `None` otherwise.
    pub fn find_move(&self, start: Square, target: Square, promotion: Option<PieceKind>) -> Option<Move> {
        self.legal_moves
            .iter()
            .copied()
            .find(|mv| mv.start == start && mv.target == target && mv.promotion() == promotion)
    }

    pub fn find_move_by_notation(&self, notation: &str) -> Result<Move, ChessErrors> {
        let (start, target, promotion) = parse_long_algebraic(notation)?;
        self.find_move(start, target, promotion)
            .ok_or_else(|| ChessErrors::MoveNotAvailable(notation.to_owned()))
    }

    /// Play `mv`, which must be one of [`ChessGame::legal_moves`].
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessErrors> {
        let Some(known) = self.legal_moves.iter().copied().find(|legal| *legal == mv) else {
            return Err(ChessErrors::MoveNotAvailable(mv.to_string()));
        };
        self.state.make_move(known);
        self.refresh_legal_moves();
        Ok(())
    }

    /// Take back the last move, if any, and return it.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.state.last_move().copied()?;
        self.state.unmake_move(&last);
        self.refresh_legal_moves();
        Some(last)
    }

    /// `+1` when white is to move, `-1` when black is.
    #[inline]
    pub fn color_to_move(&self) -> i8 {
        self.state.side_to_move().sign()
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.state.is_in_check()
    }

    pub fn game_over(&self) -> Option<GameOutcome> {
        let outcome = if self.legal_moves.is_empty() {
            if self.in_check() {
                GameOutcome::win_for(self.state.side_to_move().opposite())
            } else {
                GameOutcome::Draw
            }
        } else if is_draw(&self.state) {
            GameOutcome::Draw
        } else {
            return None;
        };

        log::debug!("game over at '{}': {outcome}", self.as_fen());
        Some(outcome)
    }

    #[inline]
    pub fn as_fen(&self) -> String {
        self.state.get_fen()
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn refresh_legal_moves(&mut self) {
        self.legal_moves = self.generator.generate_legal_moves(&mut self.state);
    }
}
