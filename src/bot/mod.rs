//! Computer-controlled players.
//!
//! - `policy`: the `BotPolicy` decision trait
//! - `heuristic`: `HeuristicBot`, the default policy
//! - `driver`: `play_turn` / `play_bots`, which turn decisions into commands

pub mod driver;
pub mod heuristic;
pub mod policy;

pub use driver::{play_bots, play_turn, TurnSummary};
pub use heuristic::HeuristicBot;
pub use policy::{BotPolicy, DiscardChoice, Hit};
