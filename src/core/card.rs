//! Card identification.
//!
//! Every card in a deck has a unique `CardId` and a `PairValue` shared with
//! exactly one other card.
//!
//! ## ID Layout
//!
//! Ids are assigned per pair before shuffling:
//! - value `v` is carried by cards `2v - 1` and `2v`
//! - ids run `1..=card_count`, values run `1..=card_count / 2`
//!
//! ```
//! use memory_match::core::{CardId, PairValue};
//!
//! let value = PairValue::new(3);
//! let (a, b) = value.card_ids();
//!
//! assert_eq!(a, CardId::new(5));
//! assert_eq!(b, CardId::new(6));
//! assert_eq!(a.pair_value(), value);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a card within one deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The pair value this id carries under the standard layout.
    ///
    /// Only meaningful for ids produced by the deck generator.
    #[must_use]
    pub const fn pair_value(self) -> PairValue {
        PairValue(self.0.div_ceil(2))
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Pair label. Two cards match when their values are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairValue(pub u32);

impl PairValue {
    /// Create a pair value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The two card ids carrying this value under the standard layout.
    #[must_use]
    pub const fn card_ids(self) -> (CardId, CardId) {
        (CardId(self.0 * 2 - 1), CardId(self.0 * 2))
    }
}

impl std::fmt::Display for PairValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card: immutable once dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub value: PairValue,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(id: CardId, value: PairValue) -> Self {
        Self { id, value }
    }

    /// Check whether two cards form a pair.
    ///
    /// A card never pairs with itself.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.id != other.id && self.value == other.value
    }
}
