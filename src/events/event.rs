//! State change events.

use serde::{Deserialize, Serialize};

use crate::core::{BoardSize, CardId, PairValue};
use crate::schedule::{Epoch, ResetTicket};

/// Something visible changed on the board.
///
/// Emitted after the controller has finished the change, so an observer
/// reading the controller sees the new state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh deck was dealt.
    Dealt { epoch: Epoch, size: BoardSize },

    /// The board size changed. Followed by `Dealt`.
    BoardSizeChanged { from: BoardSize, to: BoardSize },

    /// A card turned face-up as the first of a pair.
    CardRevealed { card: CardId },

    /// The only face-up card was clicked again and turned back down.
    CardHidden { card: CardId },

    /// Two cards matched and are now solved.
    PairMatched { first: CardId, second: CardId, value: PairValue },

    /// Two cards did not match and stay face-up until `ticket` resolves.
    PairMismatched { first: CardId, second: CardId, ticket: ResetTicket },

    /// A mismatched pair turned back down and input unlocked.
    MismatchCleared { ticket: ResetTicket },

    /// Every pair is solved.
    Won { epoch: Epoch },
}

impl GameEvent {
    /// Short name, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Dealt { .. } => "dealt",
            GameEvent::BoardSizeChanged { .. } => "board_size_changed",
            GameEvent::CardRevealed { .. } => "card_revealed",
            GameEvent::CardHidden { .. } => "card_hidden",
            GameEvent::PairMatched { .. } => "pair_matched",
            GameEvent::PairMismatched { .. } => "pair_mismatched",
            GameEvent::MismatchCleared { .. } => "mismatch_cleared",
            GameEvent::Won { .. } => "won",
        }
    }
}
