//! Decision points of a computer-controlled turn.
//!
//! A policy only reads the state; the driver turns its answers into
//! commands. Every method is asked on behalf of `me`, the active seat.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::{GameState, PlayerId};

/// One hit the policy wants to make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub target: PlayerId,
    pub objective: usize,
    pub card: CardId,
    pub from_start: bool,
}

/// The card to end the turn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscardChoice {
    /// Discard straight from the hand.
    Hand(CardId),
    /// Pull a staged card back to the hand, then discard it.
    Staged { objective: usize, card: CardId },
}

impl DiscardChoice {
    #[must_use]
    pub fn card(&self) -> CardId {
        match *self {
            DiscardChoice::Hand(card) | DiscardChoice::Staged { card, .. } => card,
        }
    }
}

/// Policy for automating one seat's turn.
pub trait BotPolicy: Send + Sync {
    /// Take the top discard instead of drawing blind?
    fn draw_from_discard(&self, state: &GameState, me: PlayerId) -> bool;

    /// Desired contents of each objective area, from hand and staged cards.
    ///
    /// Group `i` goes to objective area `i`; missing groups mean empty areas.
    fn arrange(&self, state: &GameState, me: PlayerId) -> Vec<Vec<Card>>;

    /// The next hit to make, or `None` to stop hitting.
    fn next_hit(&self, state: &GameState, me: PlayerId) -> Option<Hit>;

    /// The card to discard, or `None` when there is nothing to discard.
    fn choose_discard(&self, state: &GameState, me: PlayerId) -> Option<DiscardChoice>;

    /// Who to skip when discarding a Skip.
    fn skip_target(&self, state: &GameState, me: PlayerId) -> Option<PlayerId>;
}
