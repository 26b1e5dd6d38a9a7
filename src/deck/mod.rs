//! Deck generation and lookup.
//!
//! `Deck::generate` deals `floor(side² / 2)` pairs and applies a uniform
//! shuffle from the game RNG. `Deck::from_cards` and `Deck::from_values`
//! accept fixed layouts after checking that ids are unique and values pair
//! up exactly.

mod layout;

pub use layout::Deck;
