//! Face-up selection and flip phases.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

/// Where the flip state machine is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No card face-up.
    Idle,
    /// One card face-up, waiting for its partner.
    OneFlipped,
    /// Two cards face-up, input locked until they resolve.
    Evaluating,
}

/// Cards currently face-up and not solved. Holds at most two ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cards: SmallVec<[CardId; 2]>,
}

impl Selection {
    /// Maximum number of selected cards.
    pub const CAPACITY: usize = 2;

    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() == Self::CAPACITY
    }

    /// The card flipped first.
    #[must_use]
    pub fn first(&self) -> Option<CardId> {
        self.cards.first().copied()
    }

    /// The card flipped second.
    #[must_use]
    pub fn second(&self) -> Option<CardId> {
        self.cards.get(1).copied()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains(&id)
    }

    /// Selected ids in flip order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardId] {
        &self.cards
    }

    /// Add a card. Returns false when the selection is full.
    pub(crate) fn push(&mut self, id: CardId) -> bool {
        if self.is_full() {
            return false;
        }
        self.cards.push(id);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }

    /// Phase implied by this selection.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.cards.len() {
            0 => Phase::Idle,
            1 => Phase::OneFlipped,
            _ => Phase::Evaluating,
        }
    }
}
