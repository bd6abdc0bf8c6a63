//! The command surface: every state change is one `Command`.
//!
//! Commands reference cards by `CardId` and seats by `PlayerId`. Turn
//! commands always act for the active seat; only `SortHand` names its seat
//! explicitly.
//!
//! ```
//! use phase_ten::core::{Command, PlayerId};
//! use phase_ten::cards::CardId;
//!
//! let skip = Command::DiscardCard { card: CardId(104), target: Some(PlayerId(1)) };
//! assert!(skip.is_turn_command());
//! assert!(!Command::EndRound.is_turn_command());
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// Presentation order for a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortCriterion {
    /// By rank; Skip after 12, Wild after Skip.
    Number,
    /// Red, Blue, Green, Yellow, then Wild, then Skip.
    Color,
}

/// A request to change the game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Seat a new table and deal the first round. Legal in any stage.
    StartGame {
        total_players: usize,
        starting_phase: usize,
    },

    DrawCard {
        from_discard: bool,
    },

    /// `target` is required for a Skip and refused for anything else.
    DiscardCard {
        card: CardId,
        target: Option<PlayerId>,
    },

    MoveToObjectiveArea {
        objective: usize,
        card: CardId,
    },

    MoveFromObjectiveArea {
        objective: usize,
        card: CardId,
    },

    MoveBetweenObjectiveAreas {
        from: usize,
        to: usize,
        card: CardId,
    },

    CompletePhase,

    /// Hit `card` onto an objective area. `target: None` means the actor's own.
    HitObjective {
        target: Option<PlayerId>,
        objective: usize,
        card: CardId,
        from_start: bool,
    },

    EndRound,

    EndGame,

    SortHand {
        player: PlayerId,
        criterion: SortCriterion,
    },
}

impl Command {
    /// Commands that act for the active seat during a round.
    #[must_use]
    pub fn is_turn_command(&self) -> bool {
        matches!(
            self,
            Command::DrawCard { .. }
                | Command::DiscardCard { .. }
                | Command::MoveToObjectiveArea { .. }
                | Command::MoveFromObjectiveArea { .. }
                | Command::MoveBetweenObjectiveAreas { .. }
                | Command::CompletePhase
                | Command::HitObjective { .. }
        )
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::StartGame { .. } => "start_game",
            Command::DrawCard { .. } => "draw_card",
            Command::DiscardCard { .. } => "discard_card",
            Command::MoveToObjectiveArea { .. } => "move_to_objective_area",
            Command::MoveFromObjectiveArea { .. } => "move_from_objective_area",
            Command::MoveBetweenObjectiveAreas { .. } => "move_between_objective_areas",
            Command::CompletePhase => "complete_phase",
            Command::HitObjective { .. } => "hit_objective",
            Command::EndRound => "end_round",
            Command::EndGame => "end_game",
            Command::SortHand { .. } => "sort_hand",
        }
    }
}

/// An accepted command with metadata, kept for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted, if any. Table-level commands have none.
    pub actor: Option<PlayerId>,

    pub command: Command,

    /// `rounds_played` when the command was accepted.
    pub round: u32,

    /// Position in the engine's history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(actor: Option<PlayerId>, command: Command, round: u32, sequence: u32) -> Self {
        Self {
            actor,
            command,
            round,
            sequence,
        }
    }
}
