//! Core engine types: cards, board sizes, configuration, RNG, errors.
//!
//! This module contains the building blocks shared by the deck generator
//! and the controller.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{Card, CardId, PairValue};
pub use config::{BoardSize, GameConfig, REFERENCE_MISMATCH_DELAY, REFERENCE_SIZES};
pub use error::{ConfigError, DeckError, FlipRejection};
pub use rng::{GameRng, GameRngState};
