//! # memory-match
//!
//! A memory-matching card game engine: deal a square board of face-down
//! pairs, flip two at a time, keep matches, win when every pair is solved.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `GameController` holds the deck, selection, solved set
//!    and input lock. Nothing else mutates them.
//!
//! 2. **Epoch-Safe Timers**: A mismatched pair stays face-up for a delay.
//!    The reset is a `ResetTicket` tagged with the game's epoch, so a late
//!    timer from an earlier deal can never touch the current one.
//!
//! 3. **Headless**: The engine emits `GameEvent`s and a `BoardView`; drawing
//!    is left to the host (browser, terminal, test).
//!
//! ## Modules
//!
//! - `core`: Card ids, pair values, board sizes, configuration, RNG, errors
//! - `deck`: Deck generation and fixed layouts
//! - `game`: The controller and flip state machine
//! - `schedule`: Epochs, reset tickets and schedulers
//! - `events`: Change notifications and observers
//! - `view`: Render-ready board snapshot

pub mod core;
pub mod deck;
pub mod events;
pub mod game;
pub mod schedule;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, Card, CardId, ConfigError, DeckError, FlipRejection, GameConfig, GameRng,
    GameRngState, PairValue,
};

pub use crate::deck::Deck;

pub use crate::events::{EventLog, FnObserver, GameEvent, ObserverId, StateObserver};

pub use crate::game::{FlipOutcome, GameController, Phase, Selection};

pub use crate::schedule::{Epoch, FnScheduler, ResetTicket, Scheduler, TimerQueue};

pub use crate::view::{ActionLabel, BoardView, CardFace, CardView};
