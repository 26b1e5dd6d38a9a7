//! View model for the presentation layer.
//!
//! `GameController::view` produces a `BoardView`: each card's position and
//! face, the won flag, and the action button label. It serializes to JSON
//! for browser hosts and renders to text for terminals.

mod board;

pub use board::{ActionLabel, BoardView, CardFace, CardView};
