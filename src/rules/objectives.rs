//! Staging cards into objective areas, laying down a phase, and hits.
//!
//! Staging moves belong to the active player and stop once their phase is
//! laid down; after that the staged cards are locked and the player sheds
//! cards by hitting them onto completed areas instead.

use tracing::debug;

use crate::cards::{self, CardId};
use crate::core::{ActionError, GameState, Player, PlayerId};
use crate::zones::ObjectiveArea;

/// The active player, if they may still rearrange their areas.
fn staging_player(state: &mut GameState) -> Result<&mut Player, ActionError> {
    let active = state.active_player;
    let player = state
        .players
        .get_mut(active)
        .ok_or(ActionError::UnknownPlayer(active))?;
    if player.phase_completed {
        return Err(ActionError::PhaseAlreadyCompleted(active));
    }
    Ok(player)
}

fn area_mut(player: &mut Player, objective: usize) -> Result<&mut ObjectiveArea, ActionError> {
    player
        .objective_areas
        .get_mut(objective)
        .ok_or(ActionError::ObjectiveOutOfRange(objective))
}

/// Hand to objective area.
pub(crate) fn move_to(state: &mut GameState, objective: usize, card: CardId) -> Result<(), ActionError> {
    let player = staging_player(state)?;
    if objective >= player.objective_areas.len() {
        return Err(ActionError::ObjectiveOutOfRange(objective));
    }
    let moved = cards::remove_by_identity(&mut player.hand, card).ok_or(ActionError::CardNotInHand(card))?;
    area_mut(player, objective)?.push_back(moved);
    Ok(())
}

/// Objective area back to hand.
pub(crate) fn move_from(state: &mut GameState, objective: usize, card: CardId) -> Result<(), ActionError> {
    let player = staging_player(state)?;
    let moved = area_mut(player, objective)?
        .remove(card)
        .ok_or(ActionError::CardNotInObjectiveArea { card, objective })?;
    player.hand.push_back(moved);
    Ok(())
}

/// One objective area to another.
pub(crate) fn move_between(
    state: &mut GameState,
    from: usize,
    to: usize,
    card: CardId,
) -> Result<(), ActionError> {
    if from == to {
        return Err(ActionError::SameObjectiveArea);
    }
    let player = staging_player(state)?;
    if to >= player.objective_areas.len() {
        return Err(ActionError::ObjectiveOutOfRange(to));
    }
    let moved = area_mut(player, from)?
        .remove(card)
        .ok_or(ActionError::CardNotInObjectiveArea { card, objective: from })?;
    area_mut(player, to)?.push_back(moved);
    Ok(())
}

/// Lay down the phase. Every area must already verify.
pub(crate) fn complete_phase(state: &mut GameState) -> Result<(), ActionError> {
    let player = staging_player(state)?;
    if !player.can_complete_phase() {
        return Err(ActionError::PhaseIncomplete);
    }
    player.phase_completed = true;
    debug!(player = %player.id, phase = player.phase_index, "phase completed");
    Ok(())
}

/// Hit a hand card onto a completed objective area.
///
/// Both the actor and the owner of the area must have laid down their
/// phase. `target: None` hits the actor's own area.
pub(crate) fn hit_objective(
    state: &mut GameState,
    target: Option<PlayerId>,
    objective: usize,
    card: CardId,
    from_start: bool,
) -> Result<(), ActionError> {
    let actor = state.active_player;
    let target = target.unwrap_or(actor);

    let acting = state.player(actor).ok_or(ActionError::UnknownPlayer(actor))?;
    if !acting.phase_completed {
        return Err(ActionError::PhaseNotCompleted(actor));
    }
    let hit = acting.hand_card(card).ok_or(ActionError::CardNotInHand(card))?;

    let owner = state.player(target).ok_or(ActionError::UnknownPlayer(target))?;
    if !owner.phase_completed {
        return Err(ActionError::PhaseNotCompleted(target));
    }
    let area = owner
        .objective_areas
        .get(objective)
        .ok_or(ActionError::ObjectiveOutOfRange(objective))?;
    if !area.accepts(&hit, from_start) {
        return Err(ActionError::CannotExtend(card));
    }

    cards::remove_by_identity(&mut state.players[actor].hand, card).ok_or(ActionError::CardNotInHand(card))?;
    let area = &mut state.players[target].objective_areas[objective];
    if from_start {
        area.push_front(hit);
    } else {
        area.push_back(hit);
    }
    debug!(%actor, %target, objective, %card, from_start, "hit");
    Ok(())
}
