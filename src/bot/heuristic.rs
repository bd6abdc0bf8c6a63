//! The default bot: greedy, deterministic, no lookahead.
//!
//! ## Drawing
//!
//! Take the top discard unless it is a Skip and only if it helps: before
//! laying down, the best arrangement of hand plus staged cards plus that
//! card must use it; after laying down, it must extend some completed
//! objective area from either end.
//!
//! ## Discarding
//!
//! Highest-value non-wild card first (so a Skip goes before a 10, a 10
//! before a 5). Wilds are kept until nothing else is left.
//!
//! ## Skipping
//!
//! The opponent closest to going out: completed phase first, then highest
//! phase, then fewest cards in hand, then lowest seat.

use std::cmp::Reverse;

use super::policy::{BotPolicy, DiscardChoice, Hit};
use crate::cards::Card;
use crate::core::{GameState, Player, PlayerId};
use crate::phases::best_play;

#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicBot;

impl HeuristicBot {
    pub const NAME: &'static str = "heuristic";
}

/// Hand cards followed by staged cards.
fn available(player: &Player) -> Vec<Card> {
    let mut cards: Vec<Card> = player.hand.iter().copied().collect();
    cards.extend(player.staged_cards());
    cards
}

/// First completed area `card` extends: seat order, objective order, front before back.
fn find_extension(state: &GameState, card: &Card) -> Option<(PlayerId, usize, bool)> {
    state.completed_players().find_map(|owner| {
        owner
            .objective_areas
            .iter()
            .enumerate()
            .find_map(|(objective, area)| {
                [true, false]
                    .into_iter()
                    .find(|&from_start| area.accepts(card, from_start))
                    .map(|from_start| (owner.id, objective, from_start))
            })
    })
}

impl BotPolicy for HeuristicBot {
    fn draw_from_discard(&self, state: &GameState, me: PlayerId) -> bool {
        let (Some(top), Some(player)) = (state.top_discard(), state.player(me)) else {
            return false;
        };
        if top.is_skip() {
            return false;
        }

        if player.phase_completed {
            find_extension(state, top).is_some()
        } else {
            let mut cards = available(player);
            cards.push(*top);
            best_play(&cards, player.phase())
                .iter()
                .flatten()
                .any(|c| c.id == top.id)
        }
    }

    fn arrange(&self, state: &GameState, me: PlayerId) -> Vec<Vec<Card>> {
        state
            .player(me)
            .map(|player| best_play(&available(player), player.phase()))
            .unwrap_or_default()
    }

    fn next_hit(&self, state: &GameState, me: PlayerId) -> Option<Hit> {
        let player = state.player(me)?;
        if !player.phase_completed {
            return None;
        }
        player.hand.iter().find_map(|card| {
            find_extension(state, card).map(|(target, objective, from_start)| Hit {
                target,
                objective,
                card: card.id,
                from_start,
            })
        })
    }

    fn choose_discard(&self, state: &GameState, me: PlayerId) -> Option<DiscardChoice> {
        let player = state.player(me)?;

        let plain = player
            .hand
            .iter()
            .filter(|c| !c.is_wild())
            .min_by_key(|c| Reverse(c.value()));
        if let Some(card) = plain.or_else(|| player.hand.front()) {
            return Some(DiscardChoice::Hand(card.id));
        }

        if player.phase_completed {
            return None;
        }
        let objective = player.objective_areas.iter().rposition(|area| !area.is_empty())?;
        let card = player.objective_areas[objective].cards().back()?;
        Some(DiscardChoice::Staged {
            objective,
            card: card.id,
        })
    }

    fn skip_target(&self, state: &GameState, me: PlayerId) -> Option<PlayerId> {
        state
            .players
            .values()
            .filter(|p| p.id != me)
            .min_by_key(|p| (Reverse(p.phase_completed), Reverse(p.phase_index), p.hand.len(), p.id))
            .map(|p| p.id)
    }
}
