//! Epochs and reset tickets.

use serde::{Deserialize, Serialize};

/// Game generation counter. Bumped on every deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Epoch(pub u64);

impl Epoch {
    /// Create an epoch.
    #[must_use]
    pub const fn new(epoch: u64) -> Self {
        Self(epoch)
    }

    /// Get the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The following epoch.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Epoch({})", self.0)
    }
}

/// Handle for one deferred mismatch reset.
///
/// A ticket is only honoured by the controller while its epoch is current and
/// it is the pending ticket of that epoch. `sequence` distinguishes successive
/// mismatches inside one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResetTicket {
    pub epoch: Epoch,
    pub sequence: u32,
}

impl ResetTicket {
    /// Create a ticket.
    #[must_use]
    pub const fn new(epoch: Epoch, sequence: u32) -> Self {
        Self { epoch, sequence }
    }

    /// Check whether this ticket was issued in `epoch`.
    #[must_use]
    pub fn belongs_to(&self, epoch: Epoch) -> bool {
        self.epoch == epoch
    }
}

impl std::fmt::Display for ResetTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reset({}#{})", self.epoch.0, self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_next() {
        assert_eq!(Epoch(0).next(), Epoch(1));
        assert_eq!(Epoch(u64::MAX).next(), Epoch(0));
    }

    #[test]
    fn test_ticket_belongs_to() {
        let ticket = ResetTicket::new(Epoch(3), 1);
        assert!(ticket.belongs_to(Epoch(3)));
        assert!(!ticket.belongs_to(Epoch(4)));
        assert_eq!(format!("{}", ticket), "Reset(3#1)");
    }
}
