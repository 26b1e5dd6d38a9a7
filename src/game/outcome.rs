//! Result of a flip.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, FlipRejection};
use crate::schedule::ResetTicket;

/// What a call to `flip_card` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(FlipRejection),
    /// The card is face-up, waiting for a partner.
    FirstRevealed(CardId),
    /// The face-up card was clicked again and turned back down.
    Deselected(CardId),
    /// The two cards matched. `won` is true if this was the last pair.
    Matched { first: CardId, second: CardId, won: bool },
    /// The two cards differ and stay face-up until `ticket` resolves.
    Mismatched { first: CardId, second: CardId, ticket: ResetTicket },
}

impl FlipOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, FlipOutcome::Ignored(_))
    }

    /// Rejection reason, for ignored flips.
    #[must_use]
    pub fn rejection(&self) -> Option<FlipRejection> {
        match self {
            FlipOutcome::Ignored(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Pending reset, for mismatches.
    #[must_use]
    pub fn ticket(&self) -> Option<ResetTicket> {
        match self {
            FlipOutcome::Mismatched { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }
}
