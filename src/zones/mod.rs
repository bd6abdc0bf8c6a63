//! Card zones owned by players.
//!
//! The shared draw and discard piles live directly on `GameState`; the
//! per-player staging zones are `ObjectiveArea`s.

pub mod objective_area;

pub use objective_area::ObjectiveArea;
