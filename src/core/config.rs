//! Engine configuration.
//!
//! Table size and starting phase are chosen per game by `Command::StartGame`;
//! everything that stays fixed for the lifetime of an `Engine` lives here.
//!
//! ```
//! use phase_ten::core::GameConfig;
//!
//! let config = GameConfig::default().with_seed(7).with_strict(true);
//! assert_eq!(config.hand_size, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Largest supported table.
pub const MAX_PLAYERS: usize = 6;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Cards dealt to each seat per round.
pub const DEFAULT_HAND_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for every shuffle the engine performs.
    pub seed: u64,

    /// Cards dealt to each seat per round.
    pub hand_size: usize,

    /// Panic on caller-bug rejections in debug builds.
    pub strict: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            hand_size: DEFAULT_HAND_SIZE,
            strict: false,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.hand_size, DEFAULT_HAND_SIZE);
        assert!(!config.strict);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_seed(9)
            .with_hand_size(7)
            .with_strict(true);

        assert_eq!(config.seed, 9);
        assert_eq!(config.hand_size, 7);
        assert!(config.strict);
    }

    #[test]
    fn test_serde() {
        let config = GameConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
