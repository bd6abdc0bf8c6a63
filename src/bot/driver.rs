//! Runs whole bot turns against an `Engine`.
//!
//! A turn is one synchronous sequence of commands: draw, arrange the
//! objective areas, lay down the phase if possible, hit, discard. Any
//! pacing between turns is the caller's business.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::policy::{BotPolicy, DiscardChoice, Hit};
use crate::cards::CardId;
use crate::core::{ActionError, Command, PlayerId};
use crate::rules::Engine;

/// What a bot did on its turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub player: PlayerId,
    pub drew_from_discard: bool,
    pub completed_phase: bool,
    pub hits: Vec<Hit>,
    /// `None` when the bot went out without discarding.
    pub discarded: Option<CardId>,
    pub skipped: Option<PlayerId>,
}

/// Play the active seat's turn with `policy`.
///
/// The active seat need not be a bot; this is how all-bot tables are driven.
pub fn play_turn(engine: &mut Engine, policy: &dyn BotPolicy) -> Result<TurnSummary, ActionError> {
    let me = engine.state().active_player;

    let prefer = policy.draw_from_discard(engine.state(), me);
    let drew_from_discard = match engine.apply(Command::DrawCard { from_discard: prefer }) {
        Ok(()) => prefer,
        Err(ActionError::EmptyPile) => {
            engine.apply(Command::DrawCard { from_discard: !prefer })?;
            !prefer
        }
        Err(err) => return Err(err),
    };

    let mut summary = TurnSummary {
        player: me,
        drew_from_discard,
        completed_phase: false,
        hits: Vec::new(),
        discarded: None,
        skipped: None,
    };

    if !is_completed(engine, me) {
        arrange(engine, policy, me)?;
        if engine.state().player(me).is_some_and(|p| p.can_complete_phase()) {
            engine.apply(Command::CompletePhase)?;
            summary.completed_phase = true;
        }
    }

    if is_completed(engine, me) {
        while !engine.state().round_over() {
            let Some(hit) = policy.next_hit(engine.state(), me) else {
                break;
            };
            let command = Command::HitObjective {
                target: Some(hit.target),
                objective: hit.objective,
                card: hit.card,
                from_start: hit.from_start,
            };
            if let Err(err) = engine.apply(command) {
                debug!(player = %me, error = %err, "hit refused");
                break;
            }
            summary.hits.push(hit);
        }
    }

    if engine.state().round_over() {
        debug!(player = %me, "went out");
        return Ok(summary);
    }

    let Some(choice) = policy.choose_discard(engine.state(), me) else {
        return Ok(summary);
    };
    if let DiscardChoice::Staged { objective, card } = choice {
        engine.apply(Command::MoveFromObjectiveArea { objective, card })?;
    }

    let card = choice.card();
    let is_skip = engine
        .state()
        .player(me)
        .and_then(|p| p.hand_card(card))
        .is_some_and(|c| c.is_skip());
    let target = if is_skip {
        Some(
            policy
                .skip_target(engine.state(), me)
                .ok_or(ActionError::MissingSkipTarget)?,
        )
    } else {
        None
    };

    engine.apply(Command::DiscardCard { card, target })?;
    summary.discarded = Some(card);
    summary.skipped = target;

    debug!(
        player = %me,
        drew_from_discard,
        completed = summary.completed_phase,
        hits = summary.hits.len(),
        %card,
        "bot turn"
    );
    Ok(summary)
}

/// Play bot turns until a human seat is active, the round is over, or the game ended.
pub fn play_bots(engine: &mut Engine, policy: &dyn BotPolicy) -> Result<Vec<TurnSummary>, ActionError> {
    let mut turns = Vec::new();
    loop {
        let state = engine.state();
        if !state.in_round() || state.round_over() {
            break;
        }
        if !state.active().is_some_and(|p| p.is_bot()) {
            break;
        }
        turns.push(play_turn(engine, policy)?);
    }
    Ok(turns)
}

fn is_completed(engine: &Engine, me: PlayerId) -> bool {
    engine.state().player(me).is_some_and(|p| p.phase_completed)
}

/// Restage the objective areas as the policy wants them.
fn arrange(engine: &mut Engine, policy: &dyn BotPolicy, me: PlayerId) -> Result<(), ActionError> {
    let desired = policy.arrange(engine.state(), me);
    let Some(player) = engine.state().player(me) else {
        return Ok(());
    };

    let unchanged = player.objective_areas.iter().enumerate().all(|(i, area)| {
        let wanted = desired.get(i).map(Vec::as_slice).unwrap_or_default();
        area.len() == wanted.len() && area.cards().iter().zip(wanted).all(|(a, b)| a.id == b.id)
    });
    if unchanged {
        return Ok(());
    }

    let mut commands = Vec::new();
    for (objective, area) in player.objective_areas.iter().enumerate() {
        for card in area.cards() {
            commands.push(Command::MoveFromObjectiveArea {
                objective,
                card: card.id,
            });
        }
    }
    for (objective, group) in desired.iter().enumerate().take(player.objective_areas.len()) {
        for card in group {
            commands.push(Command::MoveToObjectiveArea {
                objective,
                card: card.id,
            });
        }
    }

    for command in commands {
        engine.apply(command)?;
    }
    Ok(())
}
