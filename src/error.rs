//! Error types for the game engine

use crate::core::PlayerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Coordinates should be from 1 to 3!")]
    InvalidCoordinates,

    #[error("This cell is occupied! Choose another one!")]
    OccupiedCell,

    #[error("You should enter the numbers!")]
    ValueParse,

    #[error("Bad parameters!")]
    BadParameters,

    #[error("cell {cell} is outside the board (must be 0-8)")]
    InvalidCell { cell: usize },

    #[error("game already over")]
    GameOver,

    #[error("no empty cells left")]
    NoEmptyCells,

    #[error("player {player} needs human input")]
    NeedsHuman { player: PlayerId },

    #[error("input stream closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// 入力し直せば回復できるエラーか
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidCoordinates
                | GameError::OccupiedCell
                | GameError::ValueParse
                | GameError::BadParameters
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
