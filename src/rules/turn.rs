//! Drawing, discarding, and turn rotation.
//!
//! ## Reshuffle
//!
//! Drawing from an empty draw pile first turns the discard pile over: the
//! top discard stays face up and everything beneath it is shuffled into a
//! new draw pile. With only the top card left there is nothing to reshuffle
//! and the draw is refused.
//!
//! ## Skips
//!
//! Skips are queued, not applied. The queue head is consumed only at the
//! moment it matches the seat about to become active, so a seat can be
//! skipped several times in a row and a queued skip never looks ahead.

use tracing::debug;

use crate::cards::{self, Card, CardId};
use crate::core::{ActionError, GameRng, GameState, PlayerId};

/// Draw one card into the active hand.
pub(crate) fn draw_card(
    state: &mut GameState,
    rng: &mut GameRng,
    from_discard: bool,
) -> Result<Card, ActionError> {
    if !state.can_draw {
        return Err(ActionError::CannotDraw);
    }

    let card = if from_discard {
        state.discard_pile.pop_back().ok_or(ActionError::EmptyPile)?
    } else {
        if state.draw_pile.is_empty() {
            reshuffle(state, rng)?;
        }
        state.draw_pile.pop_back().ok_or(ActionError::EmptyPile)?
    };

    let active = state.active_player;
    let player = state
        .players
        .get_mut(active)
        .ok_or(ActionError::UnknownPlayer(active))?;
    player.hand.push_back(card);

    state.can_draw = false;
    state.can_discard = true;
    Ok(card)
}

/// Turn the discard pile (minus its top card) into a fresh draw pile.
fn reshuffle(state: &mut GameState, rng: &mut GameRng) -> Result<(), ActionError> {
    if state.discard_pile.len() < 2 {
        return Err(ActionError::EmptyPile);
    }
    let top = state.discard_pile.pop_back().ok_or(ActionError::EmptyPile)?;

    let mut pile: Vec<Card> = std::mem::take(&mut state.discard_pile).into_iter().collect();
    cards::shuffle(&mut pile, rng);
    debug!(cards = pile.len(), "reshuffled discard pile into draw pile");

    state.draw_pile = pile.into_iter().collect();
    state.discard_pile.push_back(top);
    Ok(())
}

/// Discard `card` from the active hand and pass the turn.
///
/// A Skip must name another seated player, who is queued to lose a turn.
pub(crate) fn discard_card(
    state: &mut GameState,
    card: CardId,
    target: Option<PlayerId>,
) -> Result<(), ActionError> {
    if !state.can_discard {
        return Err(ActionError::CannotDiscard);
    }

    let active = state.active_player;
    let player = state
        .players
        .get(active)
        .ok_or(ActionError::UnknownPlayer(active))?;
    let discarded = player.hand_card(card).ok_or(ActionError::CardNotInHand(card))?;

    let skipped = match (discarded.is_skip(), target) {
        (true, None) => return Err(ActionError::MissingSkipTarget),
        (true, Some(target)) if target == active => return Err(ActionError::SelfSkip),
        (true, Some(target)) if !state.players.contains(target) => {
            return Err(ActionError::UnknownPlayer(target))
        }
        (true, Some(target)) => Some(target),
        (false, Some(_)) => return Err(ActionError::UnexpectedTarget),
        (false, None) => None,
    };

    let hand = &mut state.players[active].hand;
    cards::remove_by_identity(hand, card).ok_or(ActionError::CardNotInHand(card))?;
    state.discard_pile.push_back(discarded);

    if let Some(target) = skipped {
        debug!(%active, %target, "skip queued");
        state.skip_queue.push_back(target);
    }

    advance_turn(state);
    Ok(())
}

/// Pass the turn to the next seat that is not owed a skip.
pub(crate) fn advance_turn(state: &mut GameState) {
    let count = state.player_count();
    state.active_player = state.active_player.next(count);
    resolve_skips(state);
    state.can_draw = true;
    state.can_discard = false;
}

/// Consume queued skips for the seat about to act.
///
/// Each matching queue head moves the turn on by one seat.
pub(crate) fn resolve_skips(state: &mut GameState) {
    let count = state.player_count();
    while state.skip_queue.front() == Some(&state.active_player) {
        state.skip_queue.pop_front();
        debug!(player = %state.active_player, "turn skipped");
        state.active_player = state.active_player.next(count);
    }
}
