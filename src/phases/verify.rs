//! Objective verification: pure predicates over candidate card sequences.
//!
//! - `verify`: does a sequence satisfy an objective?
//! - `can_extend`: may one more card be hit onto an existing group?
//!
//! ## Anchors
//!
//! Wilds take their meaning from the numbered cards around them. A group
//! without any numbered card has no anchor and neither verifies nor accepts
//! extensions, whatever the candidate is.
//!
//! ## Run boundaries
//!
//! A run whose anchor sits at rank 1 (front) or rank 12 (back) refuses
//! extension at that end, wilds included. This is stricter than how wilds in
//! the middle of a run are valued; it is kept as the game rule.

use crate::cards::{Card, Color, MAX_RANK, MIN_RANK};

use super::catalog::ObjectiveKind;

/// Does `cards` satisfy an objective of `kind` with at least `required_length` cards?
#[must_use]
pub fn verify(kind: ObjectiveKind, cards: &[Card], required_length: usize) -> bool {
    if cards.len() < required_length {
        return false;
    }
    match kind {
        ObjectiveKind::Set => verify_set(cards),
        ObjectiveKind::Color => verify_color(cards),
        ObjectiveKind::Run => verify_run(cards),
    }
}

fn verify_set(cards: &[Card]) -> bool {
    let Some(rank) = anchor_rank(cards) else {
        return false;
    };
    cards.iter().all(|c| c.is_wild() || c.rank() == Some(rank))
}

fn verify_color(cards: &[Card]) -> bool {
    let Some(color) = anchor_color(cards) else {
        return false;
    };
    cards.iter().all(|c| c.is_wild() || c.color() == Some(color))
}

fn verify_run(cards: &[Card]) -> bool {
    let Some(first) = cards.iter().position(Card::is_number) else {
        return false;
    };
    let Some(base) = cards[first].rank() else {
        return false;
    };
    let base = i32::from(base);

    cards.iter().enumerate().skip(first).all(|(i, card)| {
        if card.is_wild() {
            return true;
        }
        let expected = base + (i - first) as i32;
        card.rank().map(i32::from) == Some(expected)
    })
}

/// Can `candidate` be appended to `existing` (a group of `kind`)?
///
/// `from_start` selects the front of the group instead of the back; it only
/// matters for runs.
#[must_use]
pub fn can_extend(kind: ObjectiveKind, existing: &[Card], candidate: &Card, from_start: bool) -> bool {
    if !existing.iter().any(Card::is_number) {
        return false;
    }
    match kind {
        ObjectiveKind::Set => {
            candidate.is_wild() || (candidate.rank().is_some() && candidate.rank() == anchor_rank(existing))
        }
        ObjectiveKind::Color => {
            candidate.is_wild() || (candidate.color().is_some() && candidate.color() == anchor_color(existing))
        }
        ObjectiveKind::Run => can_extend_run(existing, candidate, from_start),
    }
}

fn can_extend_run(existing: &[Card], candidate: &Card, from_start: bool) -> bool {
    let index = if from_start {
        existing.iter().position(Card::is_number)
    } else {
        existing.iter().rposition(Card::is_number)
    };
    let Some(index) = index else {
        return false;
    };
    let Some(anchor) = existing[index].rank() else {
        return false;
    };

    if (from_start && anchor == MIN_RANK) || (!from_start && anchor == MAX_RANK) {
        return false;
    }
    if candidate.is_wild() {
        return true;
    }

    let offset = if from_start {
        -(index as i32) - 1
    } else {
        (existing.len() - index) as i32
    };
    let next = i32::from(anchor) + offset;
    candidate.rank().map(i32::from) == Some(next)
}

fn anchor_rank(cards: &[Card]) -> Option<u8> {
    cards.iter().find_map(Card::rank)
}

fn anchor_color(cards: &[Card]) -> Option<Color> {
    cards.iter().find_map(Card::color)
}
