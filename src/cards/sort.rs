//! Presentation-order sorting for hands.

use super::card::{Card, CardKind, MAX_RANK};
use crate::core::action::SortCriterion;

fn number_key(card: &Card) -> u8 {
    match card.kind {
        CardKind::Number { rank, .. } => rank,
        CardKind::Skip => MAX_RANK + 2,
        CardKind::Wild => MAX_RANK + 3,
    }
}

fn color_key(card: &Card) -> u8 {
    match card.kind {
        CardKind::Number { color, .. } => color as u8,
        CardKind::Wild => 4,
        CardKind::Skip => 5,
    }
}

/// Stable sort of `cards` in place.
pub fn sort_cards(cards: &mut [Card], criterion: SortCriterion) {
    match criterion {
        SortCriterion::Number => cards.sort_by_key(number_key),
        SortCriterion::Color => cards.sort_by_key(color_key),
    }
}

/// Sorted copy of `cards`.
#[must_use]
pub fn sorted(cards: &[Card], criterion: SortCriterion) -> Vec<Card> {
    let mut copy = cards.to_vec();
    sort_cards(&mut copy, criterion);
    copy
}
