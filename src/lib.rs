//! # phase-ten
//!
//! Rules engine for a Phase-10-style card game: deck and scoring, objective
//! verification, turn and round flow with queued skips, and heuristic bots.
//!
//! ## Design Principles
//!
//! 1. **One owner**: an `Engine` owns the `GameState`; every change is a
//!    `Command` passed to `Engine::apply`.
//!
//! 2. **Atomic commands**: a command either applies completely or returns an
//!    `ActionError` and leaves the state untouched. Callers may probe freely.
//!
//! 3. **Cards by identity**: duplicates of the same face exist, so every
//!    command names cards by `CardId`.
//!
//! ## Modules
//!
//! - `core`: seats, state, commands, errors, RNG, configuration
//! - `cards`: card taxonomy, deck, scoring, sorting
//! - `phases`: phase catalog, verification, best-play grouping
//! - `zones`: objective areas
//! - `rules`: the engine and its transitions
//! - `bot`: bot policy trait, default heuristic, turn driver
//!
//! ## Example
//!
//! ```
//! use phase_ten::bot::{play_bots, HeuristicBot};
//! use phase_ten::{Command, Engine, GameConfig, PlayerId};
//!
//! let mut engine = Engine::new(GameConfig::default().with_seed(3));
//! engine.apply(Command::StartGame { total_players: 3, starting_phase: 0 }).unwrap();
//!
//! // Seat 0 is human: draw, then discard the first card in hand.
//! engine.apply(Command::DrawCard { from_discard: false }).unwrap();
//! let card = engine.state().players[PlayerId(0)].hand[0];
//! let target = card.is_skip().then_some(PlayerId(1));
//! engine.apply(Command::DiscardCard { card: card.id, target }).unwrap();
//!
//! // The bots take their turns until the human is up again.
//! play_bots(&mut engine, &HeuristicBot).unwrap();
//! assert!(engine.state().check_invariants().is_ok());
//! ```

pub mod bot;
pub mod cards;
pub mod core;
pub mod phases;
pub mod rules;
pub mod zones;

pub use crate::core::{
    ActionError, ActionRecord, Command, GameConfig, GameRng, GameRngState, GameState,
    InvariantViolation, Player, PlayerId, PlayerKind, PlayerMap, SortCriterion, Stage,
};

pub use crate::cards::{Card, CardId, CardKind, Color};

pub use crate::phases::{Objective, ObjectiveKind, Phase, PHASES};

pub use crate::zones::ObjectiveArea;

pub use crate::rules::{Engine, GameResult};

pub use crate::bot::{BotPolicy, HeuristicBot, TurnSummary};
