//! Round and game lifecycle: seating, dealing, scoring, and the end of the game.
//!
//! ## Dealing
//!
//! Every round starts from a freshly shuffled full deck. Cards are dealt
//! one at a time round-robin, starting with the round's opening seat
//! (`rounds_played % players`), then one card is flipped onto the discard
//! pile and the rest become the draw pile.
//!
//! ## Scoring
//!
//! `EndRound` adds each seat's `current_hand_score` to its cumulative score.
//! Seats that laid down the last phase are finishers; if there are any, the
//! game is over and the finishers with the lowest cumulative score win.
//! Otherwise every seat that laid down its phase moves to the next one.

use tracing::{debug, info};

use super::engine::GameResult;
use super::turn::resolve_skips;
use crate::cards::{self, build_deck, Card, DECK_SIZE};
use crate::core::{
    ActionError, GameConfig, GameRng, GameState, Player, PlayerId, PlayerMap, Stage, MAX_PLAYERS,
    MIN_PLAYERS,
};
use crate::phases::LAST_PHASE;

/// Seat a new table and deal the first round. Seat 0 opens.
pub(crate) fn start_game(
    state: &mut GameState,
    rng: &mut GameRng,
    config: &GameConfig,
    total_players: usize,
    starting_phase: usize,
) -> Result<(), ActionError> {
    let needed = total_players * config.hand_size + 1;
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&total_players) || needed > DECK_SIZE {
        return Err(ActionError::InvalidPlayerCount(total_players));
    }
    if starting_phase > LAST_PHASE {
        return Err(ActionError::InvalidStartingPhase(starting_phase));
    }

    *state = GameState {
        players: PlayerMap::new(total_players, |id| Player::new(id, starting_phase)),
        ..GameState::new()
    };
    deal(state, rng, config.hand_size);

    info!(players = total_players, starting_phase, "game started");
    Ok(())
}

/// Shuffle a full deck and deal a round from the opening seat.
fn deal(state: &mut GameState, rng: &mut GameRng, hand_size: usize) {
    let count = state.player_count();
    let opener = PlayerId((state.rounds_played as usize % count) as u8);

    let mut deck = build_deck();
    cards::shuffle(&mut deck, rng);
    let mut deck = deck.into_iter();

    for (_, player) in state.players.iter_mut() {
        player.reset_for_round();
    }
    for i in 0..hand_size * count {
        let seat = PlayerId(((opener.index() + i) % count) as u8);
        if let Some(card) = deck.next() {
            state.players[seat].hand.push_back(card);
        }
    }

    state.discard_pile = deck.next().into_iter().collect();
    state.draw_pile = deck.collect();
    state.skip_queue.clear();
    state.active_player = opener;
    state.can_draw = true;
    state.can_discard = false;
    state.stage = Stage::InRound;

    debug!(%opener, draw_pile = state.draw_pile.len(), "round dealt");
}

/// Score the round, advance phases, and either end the game or deal again.
pub(crate) fn end_round(
    state: &mut GameState,
    rng: &mut GameRng,
    config: &GameConfig,
) -> Option<GameResult> {
    for (_, player) in state.players.iter_mut() {
        player.cumulative_score += player.current_hand_score();
    }

    let finishers: Vec<&Player> = state
        .completed_players()
        .filter(|p| p.phase_index >= LAST_PHASE)
        .collect();

    if !finishers.is_empty() {
        let best = finishers.iter().map(|p| p.cumulative_score).min().unwrap_or(0);
        let winners: Vec<&Player> = finishers
            .into_iter()
            .filter(|p| p.cumulative_score == best)
            .collect();

        let message = winner_message(&winners);
        let ids: Vec<PlayerId> = winners.iter().map(|p| p.id).collect();

        info!(%message, score = best, "game over");
        state.winners = ids;
        state.winner_message = Some(message);
        state.rounds_played += 1;
        state.skip_queue.clear();
        state.stage = Stage::GameOver;
        state.can_draw = false;
        state.can_discard = false;
        return Some(GameResult::from_winners(state.winners.clone()));
    }

    for (_, player) in state.players.iter_mut() {
        if player.phase_completed {
            player.phase_index += 1;
        }
    }
    state.rounds_played += 1;
    info!(round = state.rounds_played, "round scored");

    deal(state, rng, config.hand_size);
    if state.top_discard().is_some_and(Card::is_skip) {
        debug!(player = %state.active_player, "skip flipped onto discard pile");
        state.skip_queue.push_back(state.active_player);
        resolve_skips(state);
    }
    None
}

fn winner_message(winners: &[&Player]) -> String {
    match winners {
        [winner] => format!("{} has won the game", winner.display_name),
        _ => {
            let names: Vec<&str> = winners.iter().map(|p| p.display_name.as_str()).collect();
            format!("{} tied the game", names.join(", "))
        }
    }
}

/// Return to an empty table with the whole deck, unshuffled, in the draw pile.
pub(crate) fn end_game(state: &mut GameState) {
    *state = GameState::new();
    info!("game ended");
}
