//! Round scoring, phase advancement, and the end of the game.

mod common;

use common::{clear_hand, give, red, started};
use phase_ten::{ActionError, Command, Engine, GameConfig, GameResult, PlayerId, Stage};

/// Mark `seat` as having laid down its phase with nothing left in hand.
fn gone_out(engine: Engine, seats: &[u8]) -> Engine {
    let mut state = engine.state().clone();
    for &seat in seats {
        clear_hand(&mut state, seat);
        state.players[PlayerId(seat)].phase_completed = true;
    }
    Engine::from_state(state, engine.config().clone())
}

/// Seat expected to act first in the round just dealt.
fn expected_opener(engine: &Engine) -> PlayerId {
    let state = engine.state();
    let opener = PlayerId((state.rounds_played as usize % state.player_count()) as u8);
    if state.top_discard().is_some_and(|c| c.is_skip()) {
        opener.next(state.player_count())
    } else {
        opener
    }
}

/// Ending a round scores every hand and rotates the opening seat.
#[test]
fn test_end_round_scores_and_rotates() {
    let mut engine = started(3, 0, 5);

    for round in 1..=4u32 {
        let hands: Vec<u32> = engine
            .state()
            .players
            .values()
            .map(|p| p.current_hand_score())
            .collect();
        let before: Vec<u32> = engine.state().players.values().map(|p| p.cumulative_score).collect();

        engine.apply(Command::EndRound).unwrap();

        let state = engine.state();
        assert_eq!(state.rounds_played, round);
        assert_eq!(state.active_player, expected_opener(&engine));
        for (i, player) in state.players.values().enumerate() {
            assert_eq!(player.cumulative_score, before[i] + hands[i]);
            assert_eq!(player.phase_index, 0);
            assert_eq!(player.hand.len(), 10);
            assert!(!player.phase_completed);
        }
        assert_eq!(state.check_invariants(), Ok(()));
    }
}

/// Only seats that laid down their phase move on.
#[test]
fn test_completed_players_advance() {
    let mut engine = gone_out(started(3, 2, 9), &[1]);

    engine.apply(Command::EndRound).unwrap();

    let state = engine.state();
    assert_eq!(state.players[PlayerId(0)].phase_index, 2);
    assert_eq!(state.players[PlayerId(1)].phase_index, 3);
    assert_eq!(state.players[PlayerId(1)].cumulative_score, 0);
    assert_eq!(state.players[PlayerId(2)].phase_index, 2);
    assert_eq!(state.stage, Stage::InRound);
    assert!(engine.result().is_none());
}

/// Two finishers on the same score share the win.
#[test]
fn test_tied_finishers() {
    let mut engine = gone_out(started(3, 9, 1), &[0, 1]);

    engine.apply(Command::EndRound).unwrap();

    let state = engine.state();
    assert_eq!(state.stage, Stage::GameOver);
    assert_eq!(state.winners, vec![PlayerId(0), PlayerId(1)]);
    assert_eq!(state.winner_message.as_deref(), Some("Player 1, NPC 1 tied the game"));
    assert!(!state.can_draw && !state.can_discard);
    assert_eq!(
        engine.result(),
        Some(GameResult::Winners(vec![PlayerId(0), PlayerId(1)]))
    );
}

/// A lone finisher wins even when others have lower scores.
#[test]
fn test_single_finisher_wins() {
    let mut engine = gone_out(started(2, 9, 2), &[1]);

    engine.apply(Command::EndRound).unwrap();

    let state = engine.state();
    assert_eq!(state.winners, vec![PlayerId(1)]);
    assert_eq!(state.winner_message.as_deref(), Some("NPC 1 has won the game"));
    assert!(state.players[PlayerId(0)].cumulative_score > 0);

    let result = engine.result().unwrap();
    assert_eq!(result, GameResult::Winner(PlayerId(1)));
    assert!(result.is_winner(PlayerId(1)));
    assert!(!result.is_winner(PlayerId(0)));
}

/// Among several finishers the lowest cumulative score wins.
#[test]
fn test_lowest_finisher_wins() {
    let engine = started(2, 9, 3);
    let mut state = engine.state().clone();
    for seat in [0, 1] {
        clear_hand(&mut state, seat);
        state.players[PlayerId(seat)].phase_completed = true;
    }
    state.players[PlayerId(0)].cumulative_score = 50;
    give(&mut state, 1, &[red(1, 0)]);
    let mut engine = Engine::from_state(state, GameConfig::default());

    engine.apply(Command::EndRound).unwrap();

    let state = engine.state();
    assert_eq!(state.players[PlayerId(1)].cumulative_score, 5);
    assert_eq!(state.winners, vec![PlayerId(1)]);
    assert_eq!(state.winner_message.as_deref(), Some("NPC 1 has won the game"));
}

/// After the game ends only `EndGame` and `StartGame` are accepted.
#[test]
fn test_game_over_refuses_play() {
    let mut engine = gone_out(started(2, 9, 4), &[0]);
    engine.apply(Command::EndRound).unwrap();
    let over = engine.state().clone();

    assert_eq!(
        engine.apply(Command::DrawCard { from_discard: false }),
        Err(ActionError::GameOver)
    );
    assert_eq!(engine.apply(Command::CompletePhase), Err(ActionError::GameOver));
    assert_eq!(engine.apply(Command::EndRound), Err(ActionError::GameOver));
    assert_eq!(engine.state(), &over);

    engine.apply(Command::EndGame).unwrap();
    let state = engine.state();
    assert_eq!(state.stage, Stage::WaitingToStart);
    assert_eq!(state.player_count(), 0);
    assert_eq!(state.draw_pile.len(), 108);
    assert!(state.discard_pile.is_empty());
    assert!(state.winners.is_empty());
    assert!(engine.result().is_none());

    assert_eq!(engine.apply(Command::EndGame), Err(ActionError::NoGameInProgress));
    assert_eq!(engine.apply(Command::EndRound), Err(ActionError::NoGameInProgress));
    assert_eq!(
        engine.apply(Command::DrawCard { from_discard: true }),
        Err(ActionError::NoGameInProgress)
    );

    engine
        .apply(Command::StartGame {
            total_players: 4,
            starting_phase: 0,
        })
        .unwrap();
    assert_eq!(engine.state().player_count(), 4);
    assert_eq!(engine.state().rounds_played, 0);
}

/// `StartGame` mid-game throws the old table away.
#[test]
fn test_restart_mid_game() {
    let mut engine = started(3, 0, 6);
    engine.apply(Command::EndRound).unwrap();
    engine.apply(Command::EndRound).unwrap();
    assert!(engine.state().players.values().any(|p| p.cumulative_score > 0));

    engine
        .apply(Command::StartGame {
            total_players: 2,
            starting_phase: 4,
        })
        .unwrap();

    let state = engine.state();
    assert_eq!(state.player_count(), 2);
    assert_eq!(state.rounds_played, 0);
    assert_eq!(state.active_player, PlayerId(0));
    for player in state.players.values() {
        assert_eq!(player.cumulative_score, 0);
        assert_eq!(player.phase_index, 4);
    }
}

/// A Skip flipped onto the discard pile at the start of a round costs the
/// opening seat its turn.
#[test]
fn test_flipped_skip_skips_opener() {
    let mut found = false;
    for seed in 0..500 {
        let mut engine = started(2, 0, seed);
        engine.apply(Command::EndRound).unwrap();
        let state = engine.state();
        if state.top_discard().is_some_and(|c| c.is_skip()) {
            assert_eq!(state.active_player, PlayerId(0), "seed {seed}");
            assert!(state.skip_queue.is_empty());
            assert!(state.can_draw);
            found = true;
            break;
        }
    }
    assert!(found, "no seed flipped a skip");
}

/// Every accepted command is recorded with its round and position.
#[test]
fn test_history_records_rounds() {
    let mut engine = started(2, 0, 8);
    engine.apply(Command::EndRound).unwrap();
    let rejected = engine.apply(Command::DiscardCard {
        card: phase_ten::CardId(0),
        target: None,
    });
    assert!(rejected.is_err());

    let history = engine.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].round, 0);
    assert_eq!(history[0].sequence, 0);
    assert_eq!(history[1].command, Command::EndRound);
    assert_eq!(history[1].round, 0);
    assert_eq!(history[1].sequence, 1);
    assert_eq!(history[1].actor, None);
}
