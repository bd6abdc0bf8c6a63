//! Seats, per-seat storage, and player records.
//!
//! ## PlayerId
//!
//! Seat index, 0-based. Seat 0 is the human seat.
//!
//! ## PlayerMap
//!
//! Per-seat data backed by a `Vec`, indexable by `PlayerId`. Empty while no
//! game is in progress.
//!
//! ## Player
//!
//! One seat's hand, objective areas, and scoring. Scores are derived from
//! the cards on demand rather than cached.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::{self, Card, CardId};
use crate::phases::{Phase, LAST_PHASE, PHASES};
use crate::zones::ObjectiveArea;

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All seats of a table with `player_count` players.
    ///
    /// ```
    /// use phase_ten::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The next seat clockwise.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count.max(1)) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> PlayerMap<T> {
    /// Create a map with one entry per seat from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        debug_assert!(player_count <= u8::MAX as usize, "at most 255 seats");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `player` is a seat at this table.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Who makes decisions for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Bot,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    pub display_name: String,

    pub kind: PlayerKind,

    /// Index into `PHASES` of the phase being attempted.
    pub phase_index: usize,

    /// Cards in hand, in presentation order.
    pub hand: Vector<Card>,

    /// One area per objective of the current phase.
    pub objective_areas: SmallVec<[ObjectiveArea; 2]>,

    /// Set once the phase has been laid down this round.
    pub phase_completed: bool,

    /// Penalty points accumulated over finished rounds.
    pub cumulative_score: u32,
}

impl Player {
    /// Create a seat attempting `phase_index`, with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, phase_index: usize) -> Self {
        let (display_name, kind) = if id.index() == 0 {
            ("Player 1".to_string(), PlayerKind::Human)
        } else {
            (format!("NPC {}", id.0), PlayerKind::Bot)
        };
        let mut player = Self {
            id,
            display_name,
            kind,
            phase_index,
            hand: Vector::new(),
            objective_areas: SmallVec::new(),
            phase_completed: false,
            cumulative_score: 0,
        };
        player.reset_for_round();
        player
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.kind == PlayerKind::Bot
    }

    /// The catalog entry for `phase_index`.
    #[must_use]
    pub fn phase(&self) -> &'static Phase {
        &PHASES[self.phase_index.min(LAST_PHASE)]
    }

    /// Empty hand and areas, fresh areas for the current phase.
    pub fn reset_for_round(&mut self) {
        self.hand = Vector::new();
        self.objective_areas = self
            .phase()
            .objectives
            .iter()
            .map(|objective| ObjectiveArea::new(*objective))
            .collect();
        self.phase_completed = false;
    }

    /// Penalty value this seat would take if the round ended now.
    ///
    /// Staged cards count until the phase is laid down.
    #[must_use]
    pub fn current_hand_score(&self) -> u32 {
        let hand = cards::score(&self.hand);
        if self.phase_completed {
            hand
        } else {
            hand + self.objective_areas.iter().map(ObjectiveArea::score).sum::<u32>()
        }
    }

    /// Whether every objective area verifies.
    #[must_use]
    pub fn can_complete_phase(&self) -> bool {
        !self.objective_areas.is_empty() && self.objective_areas.iter().all(ObjectiveArea::is_completable)
    }

    /// Hand cards plus every staged card.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.objective_areas.iter().map(ObjectiveArea::len).sum::<usize>()
    }

    /// Every card this seat holds: hand first, then areas in order.
    pub fn owned_cards(&self) -> impl Iterator<Item = &Card> {
        self.hand
            .iter()
            .chain(self.objective_areas.iter().flat_map(|area| area.cards().iter()))
    }

    /// Cards staged in the objective areas, area by area.
    #[must_use]
    pub fn staged_cards(&self) -> Vec<Card> {
        self.objective_areas
            .iter()
            .flat_map(|area| area.cards().iter().copied())
            .collect()
    }

    #[must_use]
    pub fn hand_card(&self, id: CardId) -> Option<Card> {
        cards::find_by_identity(&self.hand, id)
    }
}
