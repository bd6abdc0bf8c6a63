//! Property tests: card conservation, sorting, grouping, and command atomicity.

mod common;

use std::collections::HashSet;

use phase_ten::bot::play_turn;
use phase_ten::cards::{build_deck, shuffle, sorted, CardId, DECK_SIZE};
use phase_ten::phases::{best_play, PHASES};
use phase_ten::{
    Card, Command, Engine, GameConfig, GameRng, GameState, HeuristicBot, PlayerId, SortCriterion,
};
use proptest::prelude::*;

/// One random step, resolved against the current state.
#[derive(Clone, Debug)]
struct Step {
    kind: u8,
    a: u8,
    b: u8,
    flag: bool,
}

fn step() -> impl Strategy<Value = Step> {
    (0u8..11, any::<u8>(), any::<u8>(), any::<bool>()).prop_map(|(kind, a, b, flag)| Step {
        kind,
        a,
        b,
        flag,
    })
}

fn hand_card(state: &GameState, a: u8) -> CardId {
    match state.active() {
        Some(player) if !player.hand.is_empty() => player.hand[a as usize % player.hand.len()].id,
        _ => CardId(a % DECK_SIZE as u8),
    }
}

fn staged_card(state: &GameState, a: u8) -> CardId {
    let staged = state.active().map(|p| p.staged_cards()).unwrap_or_default();
    if staged.is_empty() {
        CardId(a % DECK_SIZE as u8)
    } else {
        staged[a as usize % staged.len()].id
    }
}

/// Turn a step into a command, or `None` for a whole bot turn.
fn command(state: &GameState, step: &Step) -> Option<Command> {
    let seats = state.player_count().max(1);
    let seat = PlayerId((step.b as usize % seats) as u8);
    let objective = step.b as usize % 3;
    let command = match step.kind {
        0 => Command::DrawCard {
            from_discard: step.flag,
        },
        1 => {
            let card = hand_card(state, step.a);
            let is_skip = state
                .active()
                .and_then(|p| p.hand_card(card))
                .is_some_and(|c| c.is_skip());
            Command::DiscardCard {
                card,
                target: (is_skip || step.flag).then_some(seat),
            }
        }
        2 => Command::MoveToObjectiveArea {
            objective,
            card: hand_card(state, step.a),
        },
        3 => Command::MoveFromObjectiveArea {
            objective,
            card: staged_card(state, step.a),
        },
        4 => Command::MoveBetweenObjectiveAreas {
            from: step.b as usize % 2,
            to: (step.b as usize / 2) % 2,
            card: staged_card(state, step.a),
        },
        5 => Command::CompletePhase,
        6 => Command::HitObjective {
            target: Some(seat),
            objective: step.a as usize % 2,
            card: hand_card(state, step.a),
            from_start: step.flag,
        },
        7 => Command::EndRound,
        8 => Command::SortHand {
            player: seat,
            criterion: if step.flag {
                SortCriterion::Color
            } else {
                SortCriterion::Number
            },
        },
        9 if step.a % 16 == 0 => Command::EndGame,
        9 => Command::StartGame {
            total_players: step.b as usize % 8,
            starting_phase: step.a as usize % 11,
        },
        _ => return None,
    };
    Some(command)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Shuffling only reorders: sorted by id it is the unshuffled deck again.
    #[test]
    fn prop_shuffle_preserves_deck(seed in any::<u64>()) {
        let mut deck = build_deck();
        shuffle(&mut deck, &mut GameRng::new(seed));
        deck.sort_by_key(|c| c.id);
        prop_assert_eq!(deck, build_deck());
    }

    /// Sorting is a stable permutation ordered by rank, skips and wilds last.
    #[test]
    fn prop_sort_by_number(seed in any::<u64>(), len in 0usize..20) {
        let mut deck = build_deck();
        shuffle(&mut deck, &mut GameRng::new(seed));
        let hand: Vec<Card> = deck.into_iter().take(len).collect();

        let out = sorted(&hand, SortCriterion::Number);
        let before: HashSet<CardId> = hand.iter().map(|c| c.id).collect();
        let after: HashSet<CardId> = out.iter().map(|c| c.id).collect();
        prop_assert_eq!(before, after);

        let key = |c: &Card| match (c.rank(), c.is_skip()) {
            (Some(rank), _) => rank,
            (None, true) => 100,
            (None, false) => 101,
        };
        for pair in out.windows(2) {
            prop_assert!(key(&pair[0]) <= key(&pair[1]));
        }
    }

    /// Best play hands back disjoint groups drawn from the hand, one per objective.
    #[test]
    fn prop_best_play_uses_hand_cards(seed in any::<u64>(), len in 0usize..14, phase in 0usize..10) {
        let mut deck = build_deck();
        shuffle(&mut deck, &mut GameRng::new(seed));
        let hand: Vec<Card> = deck.into_iter().take(len).collect();

        let groups = best_play(&hand, &PHASES[phase]);
        prop_assert_eq!(groups.len(), PHASES[phase].objectives.len());

        let ids: HashSet<CardId> = hand.iter().map(|c| c.id).collect();
        let mut used = HashSet::new();
        for card in groups.iter().flatten() {
            prop_assert!(ids.contains(&card.id));
            prop_assert!(used.insert(card.id), "{} used twice", card.id);
        }
    }

    /// Whatever is thrown at the engine, accepted commands keep the table
    /// consistent and refused ones change nothing.
    #[test]
    fn prop_commands_are_atomic(
        seed in any::<u64>(),
        players in 2usize..=6,
        steps in prop::collection::vec(step(), 1..120),
    ) {
        common::init_tracing();
        let mut engine = Engine::new(GameConfig::default().with_seed(seed));
        engine
            .apply(Command::StartGame { total_players: players, starting_phase: 0 })
            .unwrap();

        for step in &steps {
            let state = engine.state();
            match command(state, step) {
                Some(command) => {
                    let before = state.clone();
                    let rng = engine.rng_state();
                    let recorded = engine.history().len();
                    match engine.apply(command) {
                        Ok(()) => prop_assert_eq!(engine.history().len(), recorded + 1),
                        Err(_) => {
                            prop_assert_eq!(engine.state(), &before);
                            prop_assert_eq!(engine.rng_state(), rng);
                            prop_assert_eq!(engine.history().len(), recorded);
                        }
                    }
                }
                None if state.in_round() && !state.round_over() => {
                    play_turn(&mut engine, &HeuristicBot).ok();
                }
                None => {}
            }
            prop_assert_eq!(engine.state().check_invariants(), Ok(()));
        }
    }
}
