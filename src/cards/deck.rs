//! Fixed deck composition, shuffling, scoring and identity-based removal.
//!
//! ## Composition
//!
//! - 4 colors × 12 ranks × 2 copies = 96 numbered cards
//! - 2 wilds per color = 8 wilds
//! - 4 skips
//!
//! 108 cards total. Ids are assigned in build order, so sorting any
//! permutation of the deck by id recovers `build_deck()`.

use im::Vector;

use super::card::{Card, CardId, Color, MAX_RANK, MIN_RANK};
use crate::core::GameRng;

/// Total number of cards in the deck.
pub const DECK_SIZE: usize = 108;

/// Copies of each rank per color.
pub const COPIES_PER_RANK: usize = 2;

/// Wild cards per color.
pub const WILDS_PER_COLOR: usize = 2;

/// Skip cards in the deck.
pub const SKIP_COUNT: usize = 4;

/// Build the full deck in deterministic (unshuffled) order.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u8;
    let mut alloc = || {
        let id = CardId(next_id);
        next_id += 1;
        id
    };

    for color in Color::ALL {
        for _ in 0..COPIES_PER_RANK {
            for rank in MIN_RANK..=MAX_RANK {
                deck.push(Card::number(alloc(), color, rank));
            }
        }
        for _ in 0..WILDS_PER_COLOR {
            deck.push(Card::wild(alloc()));
        }
    }
    for _ in 0..SKIP_COUNT {
        deck.push(Card::skip(alloc()));
    }

    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

/// Uniform random permutation of `cards`.
pub fn shuffle(cards: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(cards);
}

/// Sum of the penalty values of `cards`.
pub fn score<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u32 {
    cards.into_iter().map(Card::value).sum()
}

/// Remove the card with `id` from `cards`.
///
/// Returns the removed card, or `None` if no card with that id is present.
/// Face-equal duplicates are left untouched.
pub fn remove_by_identity(cards: &mut Vector<Card>, id: CardId) -> Option<Card> {
    let index = cards.iter().position(|c| c.id == id)?;
    Some(cards.remove(index))
}

/// Find the card with `id` in `cards`.
#[must_use]
pub fn find_by_identity(cards: &Vector<Card>, id: CardId) -> Option<Card> {
    cards.iter().find(|c| c.id == id).copied()
}
