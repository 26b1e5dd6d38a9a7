//! Error types for setup operations.
//!
//! Gameplay input is never an error: rejected clicks are reported through
//! `FlipRejection` inside a `FlipOutcome`. Only configuration and fixed deck
//! layouts can fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{CardId, PairValue};

/// Invalid `GameConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no board sizes are allowed")]
    NoAllowedSizes,

    #[error("board size {0} is too small, the minimum is 2")]
    BoardSizeTooSmall(u8),

    #[error("board size {0} is odd and cannot be split into pairs")]
    OddBoardSize(u8),

    #[error("initial board size {0} is not in the allowed set")]
    InitialSizeNotAllowed(u8),
}

/// Invalid fixed deck layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck has no cards")]
    Empty,

    #[error("{0} appears more than once")]
    DuplicateId(CardId),

    #[error("value {value} appears {count} times, expected exactly 2")]
    UnpairedValue { value: PairValue, count: usize },

    #[error("deck has {actual} cards but the board needs {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Why a flip was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FlipRejection {
    #[error("input is locked while a pair is shown")]
    InputLocked,

    #[error("the game is already won")]
    GameWon,

    #[error("{0} is already solved")]
    AlreadySolved(CardId),

    #[error("{0} is not in the deck")]
    UnknownCard(CardId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::OddBoardSize(3).to_string(),
            "board size 3 is odd and cannot be split into pairs"
        );
        assert_eq!(
            DeckError::UnpairedValue { value: PairValue(2), count: 3 }.to_string(),
            "value 2 appears 3 times, expected exactly 2"
        );
        assert_eq!(
            FlipRejection::AlreadySolved(CardId(4)).to_string(),
            "Card(4) is already solved"
        );
    }
}
