//! The core abstractions for this application
//!

use std::fmt::Display;

use clap::ValueEnum;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use crate::{
    error::GameError,
    game::tictactoe::{Board, Cell, Move},
};

/// Value of a position, from the point of view of the maximizer
pub type Score = i32;

/// Magnitude of a won position before any depth adjustment
pub const WIN_SCORE: Score = 100;

/// The two sides of the game.
/// The maximizer (`x`) wants the score as high as possible, the minimizer (`o`) as low as possible.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Hash,
    PartialOrd,
    Ord,
    Sequence,
    ValueEnum,
    Serialize,
    Deserialize,
)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    pub fn other(&self) -> Self {
        match *self {
            Self::Maximizer => Self::Minimizer,
            Self::Minimizer => Self::Maximizer,
        }
    }

    /// The mark this role leaves on the board
    pub fn mark(&self) -> Cell {
        match *self {
            Self::Maximizer => Cell::Maximizer,
            Self::Minimizer => Cell::Minimizer,
        }
    }

    /// Is `candidate` strictly better than `incumbent` for this role?
    pub fn prefers(&self, candidate: Score, incumbent: Score) -> bool {
        match *self {
            Self::Maximizer => candidate > incumbent,
            Self::Minimizer => candidate < incumbent,
        }
    }

    /// The score any real outcome improves upon
    pub fn worst_score(&self) -> Score {
        match *self {
            Self::Maximizer => Score::MIN,
            Self::Minimizer => Score::MAX,
        }
    }

    /// The score of a game this role has won
    pub fn win_score(&self) -> Score {
        match *self {
            Self::Maximizer => WIN_SCORE,
            Self::Minimizer => -WIN_SCORE,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// The Player trait is the struct that represents a player.
pub trait Player {
    /// The side this player plays for
    fn role(&self) -> Role;

    /// You observe the whole board through a reference, and return the cell to place your mark in.
    /// Asking for a move on a finished board is an error.
    fn play(&mut self, b: &Board) -> Result<Move, GameError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum GameStatus {
    Undecided,
    Draw,
    Won(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum GameEndStatus {
    Draw,
    Won(Role),
}

impl GameEndStatus {
    /// The score of the final board without any depth adjustment: +100, -100 or 0
    pub fn score(&self) -> Score {
        match *self {
            GameEndStatus::Draw => 0,
            GameEndStatus::Won(role) => role.win_score(),
        }
    }
}

impl TryFrom<GameStatus> for GameEndStatus {
    type Error = GameError;

    fn try_from(status: GameStatus) -> Result<Self, Self::Error> {
        match status {
            GameStatus::Draw => Ok(GameEndStatus::Draw),
            GameStatus::Won(role) => Ok(GameEndStatus::Won(role)),
            GameStatus::Undecided => Err(GameError::InvalidState(
                "the game is still undecided".into(),
            )),
        }
    }
}

impl Display for GameEndStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEndStatus::Draw => write!(f, "draw"),
            GameEndStatus::Won(role) => write!(f, "{role} won"),
        }
    }
}
