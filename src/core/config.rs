//! Game setup configuration.
//!
//! A `SpiderConfig` fixes everything a new game depends on: the suit count
//! and, optionally, the shuffle seed. It round-trips through serde so a
//! host can keep it next to its own settings.
//!
//! ```
//! use spider_engine::core::SpiderConfig;
//! use spider_engine::cards::SuitCount;
//!
//! let config = SpiderConfig::new(SuitCount::Two).with_seed(7);
//! assert_eq!(config.suit_count, SuitCount::Two);
//! assert_eq!(config.seed, Some(7));
//! ```

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::cards::SuitCount;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiderConfig {
    /// Suits in play. Serialized as a plain number; 1, 2 and 4 are kept,
    /// anything else loads as one suit.
    #[serde(default)]
    pub suit_count: SuitCount,

    /// Shuffle seed. `None` draws a fresh seed per game.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SpiderConfig {
    /// Create a configuration with no fixed seed.
    #[must_use]
    pub fn new(suit_count: SuitCount) -> Self {
        Self {
            suit_count,
            seed: None,
        }
    }

    /// Create a configuration from a raw suit count.
    #[must_use]
    pub fn with_raw_suit_count(count: u8) -> Self {
        Self::new(SuitCount::from_count(count))
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random source this configuration asks for.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}
