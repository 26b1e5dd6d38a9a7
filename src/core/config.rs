//! Game configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `BoardSize`: Side length of the square board
//! - `GameConfig`: Allowed sizes, starting size, and mismatch delay
//!
//! ## Reference Configuration
//!
//! `GameConfig::default()` matches the reference widget: sizes 2, 4 and 6,
//! starting on a 2x2 board, with a one second mismatch window.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::new()
//!     .with_allowed_sizes([2, 4])
//!     .with_initial_size(4)
//!     .with_mismatch_delay(Duration::from_millis(600));
//!
//! assert!(config.validate().is_ok());
//! assert!(config.allows(2));
//! assert!(!config.allows(6));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::ConfigError;

/// Board sizes offered by the reference widget.
pub const REFERENCE_SIZES: [u8; 3] = [2, 4, 6];

/// Mismatch display window of the reference widget.
pub const REFERENCE_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Side length of a square board.
///
/// Only `GameConfig` hands these out to the controller, so any size the
/// controller holds has passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoardSize(pub u8);

impl BoardSize {
    /// Create a board size.
    #[must_use]
    pub const fn new(side: u8) -> Self {
        Self(side)
    }

    /// Side length.
    #[must_use]
    pub const fn side(self) -> u8 {
        self.0
    }

    /// Number of cells, `side²`.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0 as usize * self.0 as usize
    }

    /// Number of pairs dealt, `floor(side² / 2)`.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.cell_count() / 2
    }

    /// Number of cards dealt. Equal to `cell_count` for even sides.
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.pair_count() * 2
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Sizes a host may switch to, ascending and deduplicated.
    allowed_sizes: SmallVec<[u8; 4]>,

    /// Size of the first deal.
    initial_size: u8,

    /// How long a mismatched pair stays face-up.
    mismatch_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            allowed_sizes: SmallVec::from_slice(&REFERENCE_SIZES),
            initial_size: REFERENCE_SIZES[0],
            mismatch_delay: REFERENCE_MISMATCH_DELAY,
        }
    }
}

impl GameConfig {
    /// Create the reference configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the allowed size set.
    ///
    /// If the current initial size is no longer allowed, the smallest
    /// allowed size becomes the initial size.
    #[must_use]
    pub fn with_allowed_sizes(mut self, sizes: impl IntoIterator<Item = u8>) -> Self {
        let mut sizes: SmallVec<[u8; 4]> = sizes.into_iter().collect();
        sizes.sort_unstable();
        sizes.dedup();
        if !sizes.contains(&self.initial_size) {
            if let Some(&smallest) = sizes.first() {
                self.initial_size = smallest;
            }
        }
        self.allowed_sizes = sizes;
        self
    }

    /// Set the size of the first deal.
    #[must_use]
    pub fn with_initial_size(mut self, size: u8) -> Self {
        self.initial_size = size;
        self
    }

    /// Set how long a mismatched pair stays visible.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Allowed sizes, ascending.
    #[must_use]
    pub fn allowed_sizes(&self) -> &[u8] {
        &self.allowed_sizes
    }

    /// Size of the first deal.
    #[must_use]
    pub fn initial_size(&self) -> BoardSize {
        BoardSize(self.initial_size)
    }

    /// Mismatch display window.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        self.mismatch_delay
    }

    /// Check whether a requested size is allowed.
    #[must_use]
    pub fn allows(&self, size: u8) -> bool {
        self.allowed_sizes.contains(&size)
    }

    /// Resolve a requested size against the allowed set.
    #[must_use]
    pub fn board_size(&self, requested: u8) -> Option<BoardSize> {
        self.allows(requested).then_some(BoardSize(requested))
    }

    /// Validate the configuration.
    ///
    /// Every allowed size must be even and at least 2, and the initial size
    /// must be one of them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_sizes.is_empty() {
            return Err(ConfigError::NoAllowedSizes);
        }
        for &size in &self.allowed_sizes {
            if size < 2 {
                return Err(ConfigError::BoardSizeTooSmall(size));
            }
            if size % 2 != 0 {
                return Err(ConfigError::OddBoardSize(size));
            }
        }
        if !self.allows(self.initial_size) {
            return Err(ConfigError::InitialSizeNotAllowed(self.initial_size));
        }
        Ok(())
    }
}
