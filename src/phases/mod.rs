//! Phase catalog, objective verification, and the best-play heuristic.
//!
//! Everything here is pure: no game state, no randomness. The turn engine
//! calls `verify` after every card relocation and `can_extend` for hits; bots
//! call `best_play` to arrange their objective areas.

pub mod catalog;
pub mod grouping;
pub mod verify;

pub use catalog::{phase, Objective, ObjectiveKind, Phase, LAST_PHASE, PHASES};
pub use grouping::{best_play, candidates, group_by_color, group_by_run, group_by_set};
pub use verify::{can_extend, verify};

#[cfg(test)]
pub(crate) use verify::test_cards;
