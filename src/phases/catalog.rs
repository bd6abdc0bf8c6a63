//! The fixed phase catalog.
//!
//! Each phase holds one or two objectives. Players work through the catalog in
//! order; completing the last phase ends the game.

use serde::{Deserialize, Serialize};

/// Kind of card grouping an objective asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveKind {
    /// Cards of one rank.
    Set,
    /// Consecutive ranks.
    Run,
    /// Cards of one color.
    Color,
}

impl std::fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ObjectiveKind::Set => "set",
            ObjectiveKind::Run => "run",
            ObjectiveKind::Color => "color",
        };
        f.write_str(name)
    }
}

/// One required grouping with its minimum length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Objective {
    pub kind: ObjectiveKind,
    pub required_length: usize,
}

impl Objective {
    #[must_use]
    pub const fn new(kind: ObjectiveKind, required_length: usize) -> Self {
        Self { kind, required_length }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.kind, self.required_length)
    }
}

/// A catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub description: &'static str,
    pub objectives: &'static [Objective],
}

const fn set(len: usize) -> Objective {
    Objective::new(ObjectiveKind::Set, len)
}

const fn run(len: usize) -> Objective {
    Objective::new(ObjectiveKind::Run, len)
}

const fn color(len: usize) -> Objective {
    Objective::new(ObjectiveKind::Color, len)
}

/// All phases, easiest first.
pub static PHASES: [Phase; 10] = [
    Phase { description: "2 sets of 3", objectives: &[set(3), set(3)] },
    Phase { description: "1 set of 3 + 1 run of 4", objectives: &[set(3), run(4)] },
    Phase { description: "1 set of 4 + 1 run of 4", objectives: &[set(4), run(4)] },
    Phase { description: "1 run of 7", objectives: &[run(7)] },
    Phase { description: "1 run of 8", objectives: &[run(8)] },
    Phase { description: "1 run of 9", objectives: &[run(9)] },
    Phase { description: "2 sets of 4", objectives: &[set(4), set(4)] },
    Phase { description: "7 cards of one color", objectives: &[color(7)] },
    Phase { description: "1 set of 5 + 1 set of 2", objectives: &[set(5), set(2)] },
    Phase { description: "1 set of 5 + 1 set of 3", objectives: &[set(5), set(3)] },
];

/// Index of the final phase.
pub const LAST_PHASE: usize = PHASES.len() - 1;

/// Look up a phase by index.
#[must_use]
pub fn phase(index: usize) -> Option<&'static Phase> {
    PHASES.get(index)
}
