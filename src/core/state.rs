//! The complete game state: piles, seats, turn flags, skips, and outcome.
//!
//! `GameState` is a plain value. The engine clones it before every command
//! (O(1) via `im` persistent vectors) and commits the clone only on success,
//! so the snapshot a caller holds is always a consistent one.
//!
//! ## Piles
//!
//! The top of both the draw and the discard pile is the back of the vector.
//!
//! ## Card accounting
//!
//! In every stage the draw pile, discard pile, hands and objective areas
//! together hold exactly the 108 cards of `build_deck()`. See
//! [`GameState::check_invariants`].

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::InvariantViolation;
use super::player::{Player, PlayerId, PlayerMap};
use crate::cards::{build_deck, Card, DECK_SIZE};

/// Lifecycle stage of a table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// No game yet, or the last one was ended. The full deck sits in the draw pile.
    #[default]
    WaitingToStart,
    /// A round is being played.
    InRound,
    /// Someone finished the last phase; the final table stays visible.
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub stage: Stage,

    /// Face-down draw pile; top is the back.
    pub draw_pile: Vector<Card>,

    /// Face-up discard pile; top is the back.
    pub discard_pile: Vector<Card>,

    /// Seats in turn order.
    pub players: PlayerMap<Player>,

    pub active_player: PlayerId,

    /// The active player may draw.
    pub can_draw: bool,

    /// The active player may discard.
    pub can_discard: bool,

    /// Seats owed a skip, oldest first.
    pub skip_queue: Vector<PlayerId>,

    /// Rounds scored so far in this game.
    pub rounds_played: u32,

    /// Seats that won, set when the game ends.
    pub winners: Vec<PlayerId>,

    pub winner_message: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            stage: Stage::WaitingToStart,
            draw_pile: build_deck().into_iter().collect(),
            discard_pile: Vector::new(),
            players: PlayerMap::default(),
            active_player: PlayerId(0),
            can_draw: false,
            can_discard: false,
            skip_queue: Vector::new(),
            rounds_played: 0,
            winners: Vec::new(),
            winner_message: None,
        }
    }
}

impl GameState {
    /// A table waiting for `StartGame`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// The seat whose turn it is, if a game has been dealt.
    #[must_use]
    pub fn active(&self) -> Option<&Player> {
        self.players.get(self.active_player)
    }

    #[must_use]
    pub fn in_round(&self) -> bool {
        self.stage == Stage::InRound
    }

    #[must_use]
    pub fn game_ended(&self) -> bool {
        self.stage == Stage::GameOver
    }

    /// Someone has laid down their phase and has no cards left.
    ///
    /// Turn commands are refused until the round is ended.
    #[must_use]
    pub fn round_over(&self) -> bool {
        self.in_round()
            && self
                .players
                .values()
                .any(|p| p.phase_completed && p.hand.is_empty())
    }

    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.back()
    }

    /// Seats that have laid down their phase this round, in seat order.
    pub fn completed_players(&self) -> impl Iterator<Item = &Player> {
        self.players.values().filter(|p| p.phase_completed)
    }

    /// Every card on the table, wherever it is.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile
            .iter()
            .chain(self.discard_pile.iter())
            .chain(self.players.values().flat_map(Player::owned_cards))
    }

    /// Check card accounting and turn flags.
    ///
    /// Every card of the deck must appear exactly once, unchanged. During a
    /// round exactly one of `can_draw` and `can_discard` is set.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let deck = build_deck();
        let mut seen = [false; DECK_SIZE];
        let mut found = 0;

        for card in self.all_cards() {
            found += 1;
            let index = card.id.index();
            if deck.get(index) != Some(card) {
                return Err(InvariantViolation::UnknownCard(card.id));
            }
            if seen[index] {
                return Err(InvariantViolation::DuplicateCard(card.id));
            }
            seen[index] = true;
        }

        if found != DECK_SIZE {
            return Err(InvariantViolation::CardCount {
                expected: DECK_SIZE,
                found,
            });
        }
        if let Some(missing) = deck.iter().find(|c| !seen[c.id.index()]) {
            return Err(InvariantViolation::MissingCard(missing.id));
        }

        if self.in_round() {
            if self.can_draw == self.can_discard {
                return Err(InvariantViolation::TurnFlags(self.can_draw));
            }
            if !self.players.contains(self.active_player) {
                return Err(InvariantViolation::ActivePlayer(self.active_player));
            }
        }
        Ok(())
    }
}
