//! The flip/match state machine.
//!
//! ## States
//!
//! - `Idle`: nothing face-up
//! - `OneFlipped`: one card face-up; flipping it again returns to `Idle`
//! - `Evaluating`: two cards face-up, input locked
//!
//! A matching pair is solved at once and returns to `Idle`. A mismatched
//! pair stays in `Evaluating` until its reset ticket resolves. The game is
//! won when every card is solved; flips are then ignored until the next deal.

mod controller;
mod outcome;
mod selection;

pub use controller::GameController;
pub use outcome::FlipOutcome;
pub use selection::{Phase, Selection};
