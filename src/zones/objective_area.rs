//! Objective areas: the staging zones where a player builds their phase.
//!
//! Each area pairs one `Objective` with the cards committed toward it and a
//! cached completability flag. The flag is refreshed by every mutation that
//! goes through this type, so it can never drift from the cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{self, Card, CardId};
use crate::phases::{can_extend, verify, Objective};

/// Cards committed toward one objective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveArea {
    /// The objective this area is built for.
    pub objective: Objective,

    /// Committed cards, front to back.
    cards: Vector<Card>,

    /// Whether `cards` currently satisfies `objective`.
    completable: bool,
}

impl ObjectiveArea {
    /// Create an empty area for `objective`.
    #[must_use]
    pub fn new(objective: Objective) -> Self {
        Self {
            objective,
            cards: Vector::new(),
            completable: false,
        }
    }

    /// Committed cards, front to back.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Whether the committed cards satisfy the objective.
    #[must_use]
    pub fn is_completable(&self) -> bool {
        self.completable
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Penalty value of the committed cards.
    #[must_use]
    pub fn score(&self) -> u32 {
        cards::score(&self.cards)
    }

    /// Could `card` be hit onto this area at the given end?
    #[must_use]
    pub fn accepts(&self, card: &Card, from_start: bool) -> bool {
        let existing: Vec<Card> = self.cards.iter().copied().collect();
        can_extend(self.objective.kind, &existing, card, from_start)
    }

    /// Append `card` at the back.
    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
        self.refresh();
    }

    /// Insert `card` at the front.
    pub fn push_front(&mut self, card: Card) {
        self.cards.push_front(card);
        self.refresh();
    }

    /// Remove the card with `id`, returning it if present.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let card = cards::remove_by_identity(&mut self.cards, id)?;
        self.refresh();
        Some(card)
    }

    /// Remove every card, returning them front to back.
    pub fn take_all(&mut self) -> Vector<Card> {
        let taken = std::mem::take(&mut self.cards);
        self.refresh();
        taken
    }

    /// Re-run verification against the current cards.
    pub fn refresh(&mut self) {
        let cards: Vec<Card> = self.cards.iter().copied().collect();
        self.completable = verify(self.objective.kind, &cards, self.objective.required_length);
    }
}
