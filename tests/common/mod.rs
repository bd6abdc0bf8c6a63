//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use phase_ten::cards::{self, CardId};
use phase_ten::{Card, Command, Engine, GameConfig, GameState, PlayerId};
use tracing_subscriber::{fmt, EnvFilter};

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once. `TEST_LOG`, then `RUST_LOG`, else `warn`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A fresh engine with a dealt game.
pub fn started(players: usize, phase: usize, seed: u64) -> Engine {
    init_tracing();
    let mut engine = Engine::new(GameConfig::default().with_seed(seed));
    engine
        .apply(Command::StartGame {
            total_players: players,
            starting_phase: phase,
        })
        .unwrap();
    engine
}

/// Red rank `rank`, copy `copy` (0 or 1).
pub fn red(rank: u8, copy: u8) -> CardId {
    CardId((rank - 1) + copy * 12)
}

/// Blue rank `rank`, copy `copy` (0 or 1).
pub fn blue(rank: u8, copy: u8) -> CardId {
    CardId(26 + (rank - 1) + copy * 12)
}

/// The `n`th wild (0..8).
pub fn wild(n: u8) -> CardId {
    CardId(24 + 26 * (n / 2) + n % 2)
}

/// The `n`th skip (0..4).
pub fn skip(n: u8) -> CardId {
    CardId(104 + n)
}

/// Take a card out of wherever it currently is.
pub fn extract(state: &mut GameState, id: CardId) -> Card {
    if let Some(card) = cards::remove_by_identity(&mut state.draw_pile, id) {
        return card;
    }
    if let Some(card) = cards::remove_by_identity(&mut state.discard_pile, id) {
        return card;
    }
    for (_, player) in state.players.iter_mut() {
        if let Some(card) = cards::remove_by_identity(&mut player.hand, id) {
            return card;
        }
        for area in player.objective_areas.iter_mut() {
            if let Some(card) = area.remove(id) {
                return card;
            }
        }
    }
    panic!("{id} is not on the table");
}

/// Move a card into a seat's hand, from wherever it is.
pub fn give(state: &mut GameState, seat: u8, ids: &[CardId]) {
    for id in ids {
        let card = extract(state, *id);
        state.players[PlayerId(seat)].hand.push_back(card);
    }
}

/// Empty a seat's hand onto the bottom of the draw pile.
pub fn clear_hand(state: &mut GameState, seat: u8) {
    let hand = std::mem::take(&mut state.players[PlayerId(seat)].hand);
    for card in hand {
        state.draw_pile.push_front(card);
    }
}

/// Replace a seat's hand with exactly `ids`.
pub fn set_hand(state: &mut GameState, seat: u8, ids: &[CardId]) {
    clear_hand(state, seat);
    give(state, seat, ids);
}

/// Put a card on top of the discard pile.
pub fn put_on_discard(state: &mut GameState, id: CardId) {
    let card = extract(state, id);
    state.discard_pile.push_back(card);
}
