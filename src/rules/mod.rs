//! Game rules: the engine and the transitions it applies.
//!
//! - `engine`: command dispatch, atomic commit, history
//! - `turn`: drawing, discarding, reshuffles, skips
//! - `objectives`: staging, laying down a phase, hits
//! - `round`: dealing, scoring, game end

pub mod engine;
mod objectives;
mod round;
mod turn;

pub use engine::{Engine, GameResult};
