//! Card taxonomy: numbered cards, wilds and skips.
//!
//! Every physical card carries a unique `CardId`. Face-equal duplicates exist
//! (two copies of each rank per color), so cards are compared and removed by
//! id, never by face.

use serde::{Deserialize, Serialize};

/// Lowest rank of a numbered card.
pub const MIN_RANK: u8 = 1;
/// Highest rank of a numbered card.
pub const MAX_RANK: u8 = 12;

/// Unique identifier of a physical card within the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index of this card in the unshuffled deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card colors, in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in deck order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// What a card is, independent of which physical copy it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Numbered card, rank 1..=12.
    Number { color: Color, rank: u8 },
    /// Universal substitute for any objective.
    Wild,
    /// Discarding it makes a chosen opponent lose their next turn.
    Skip,
}

/// A single physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity.
    pub id: CardId,
    /// Face of the card.
    pub kind: CardKind,
}

impl Card {
    /// Create a numbered card.
    #[must_use]
    pub fn number(id: CardId, color: Color, rank: u8) -> Self {
        debug_assert!((MIN_RANK..=MAX_RANK).contains(&rank), "rank {rank} out of range");
        Self {
            id,
            kind: CardKind::Number { color, rank },
        }
    }

    /// Create a wild card.
    #[must_use]
    pub const fn wild(id: CardId) -> Self {
        Self { id, kind: CardKind::Wild }
    }

    /// Create a skip card.
    #[must_use]
    pub const fn skip(id: CardId) -> Self {
        Self { id, kind: CardKind::Skip }
    }

    #[must_use]
    pub fn is_wild(&self) -> bool {
        matches!(self.kind, CardKind::Wild)
    }

    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self.kind, CardKind::Skip)
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self.kind, CardKind::Number { .. })
    }

    /// Rank of a numbered card, `None` for wilds and skips.
    #[must_use]
    pub fn rank(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number { rank, .. } => Some(rank),
            CardKind::Wild | CardKind::Skip => None,
        }
    }

    /// Color of a numbered card, `None` for wilds and skips.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self.kind {
            CardKind::Number { color, .. } => Some(color),
            CardKind::Wild | CardKind::Skip => None,
        }
    }

    /// Penalty points the card is worth when left over at round end.
    #[must_use]
    pub fn value(&self) -> u32 {
        match self.kind {
            CardKind::Number { rank, .. } if rank < 10 => 5,
            CardKind::Number { .. } => 10,
            CardKind::Wild => 25,
            CardKind::Skip => 15,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Number { color, rank } => write!(f, "{color} {rank}"),
            CardKind::Wild => f.write_str("Wild"),
            CardKind::Skip => f.write_str("Skip"),
        }
    }
}
