//! Core engine types: seats, state, commands, errors, RNG, configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, Command, SortCriterion};
pub use config::{GameConfig, DEFAULT_HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ActionError, InvariantViolation};
pub use player::{Player, PlayerId, PlayerKind, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Stage};
