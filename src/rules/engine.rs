//! The engine: the single owner of a `GameState`.
//!
//! All mutation goes through [`Engine::apply`]. Each command runs against a
//! clone of the state and RNG and is committed only if every step succeeds,
//! so a rejected command leaves the snapshot exactly as it was.
//!
//! ```
//! use phase_ten::{Command, Engine, GameConfig, PlayerId};
//!
//! let mut engine = Engine::new(GameConfig::default());
//! engine.apply(Command::StartGame { total_players: 2, starting_phase: 0 }).unwrap();
//! assert_eq!(engine.state().draw_pile.len(), 87);
//!
//! // Discarding before drawing is refused and changes nothing.
//! let card = engine.state().players[PlayerId(0)].hand[0].id;
//! let before = engine.state().clone();
//! assert!(engine.apply(Command::DiscardCard { card, target: None }).is_err());
//! assert_eq!(engine.state(), &before);
//! ```

use tracing::{debug, warn};

use super::{objectives, round, turn};
use crate::cards::sort_cards;
use crate::core::{
    ActionError, ActionRecord, Command, GameConfig, GameRng, GameRngState, GameState, PlayerId, Stage,
};

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Finishers tied on the lowest score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    #[must_use]
    pub fn from_winners(mut winners: Vec<PlayerId>) -> Self {
        if winners.len() == 1 {
            GameResult::Winner(winners.remove(0))
        } else {
            GameResult::Winners(winners)
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

pub struct Engine {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    history: Vec<ActionRecord>,
}

impl Engine {
    /// An engine with an empty table, waiting for `StartGame`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_state(GameState::new(), config)
    }

    /// Resume from an existing snapshot.
    #[must_use]
    pub fn from_state(state: GameState, config: GameConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            state,
            history: Vec::new(),
        }
    }

    /// Resume from a snapshot and the RNG position saved alongside it.
    ///
    /// Unlike [`Engine::from_state`], later shuffles match the engine the
    /// snapshot was taken from.
    #[must_use]
    pub fn resume(state: GameState, config: GameConfig, rng: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(rng),
            config,
            state,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only snapshot of the table.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Accepted commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// The outcome, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state
            .game_ended()
            .then(|| GameResult::from_winners(self.state.winners.clone()))
    }

    /// Apply one command atomically.
    ///
    /// On `Err` nothing changed; the error says why the command was refused.
    pub fn apply(&mut self, command: Command) -> Result<(), ActionError> {
        let mut state = self.state.clone();
        let mut rng = self.rng.clone();

        if let Err(err) = execute(&self.config, &mut state, &mut rng, &command) {
            self.report(&command, &err);
            return Err(err);
        }

        debug_assert_eq!(
            state.check_invariants(),
            Ok(()),
            "invariant broken by {}",
            command.name()
        );

        let actor = match &command {
            Command::SortHand { player, .. } => Some(*player),
            c if c.is_turn_command() => Some(self.state.active_player),
            _ => None,
        };
        debug!(command = command.name(), actor = ?actor, "command applied");

        let record = ActionRecord::new(
            actor,
            command,
            self.state.rounds_played,
            self.history.len() as u32,
        );
        self.history.push(record);
        self.state = state;
        self.rng = rng;
        Ok(())
    }

    fn report(&self, command: &Command, err: &ActionError) {
        if err.is_caller_bug() {
            warn!(command = command.name(), error = %err, "command referenced a missing card, seat or objective");
            if self.config.strict && cfg!(debug_assertions) {
                panic!("{} rejected: {err}", command.name());
            }
        } else {
            debug!(command = command.name(), error = %err, "command rejected");
        }
    }
}

/// Refuse turn commands outside a live round.
fn ensure_turn(state: &GameState) -> Result<(), ActionError> {
    match state.stage {
        Stage::WaitingToStart => Err(ActionError::NoGameInProgress),
        Stage::GameOver => Err(ActionError::GameOver),
        Stage::InRound if state.round_over() => Err(ActionError::RoundOver),
        Stage::InRound => Ok(()),
    }
}

fn execute(
    config: &GameConfig,
    state: &mut GameState,
    rng: &mut GameRng,
    command: &Command,
) -> Result<(), ActionError> {
    if command.is_turn_command() {
        ensure_turn(state)?;
    }

    match *command {
        Command::StartGame {
            total_players,
            starting_phase,
        } => round::start_game(state, rng, config, total_players, starting_phase),
        Command::DrawCard { from_discard } => turn::draw_card(state, rng, from_discard).map(|_| ()),
        Command::DiscardCard { card, target } => turn::discard_card(state, card, target),
        Command::MoveToObjectiveArea { objective, card } => objectives::move_to(state, objective, card),
        Command::MoveFromObjectiveArea { objective, card } => objectives::move_from(state, objective, card),
        Command::MoveBetweenObjectiveAreas { from, to, card } => {
            objectives::move_between(state, from, to, card)
        }
        Command::CompletePhase => objectives::complete_phase(state),
        Command::HitObjective {
            target,
            objective,
            card,
            from_start,
        } => objectives::hit_objective(state, target, objective, card, from_start),
        Command::EndRound => match state.stage {
            Stage::WaitingToStart => Err(ActionError::NoGameInProgress),
            Stage::GameOver => Err(ActionError::GameOver),
            Stage::InRound => {
                round::end_round(state, rng, config);
                Ok(())
            }
        },
        Command::EndGame => {
            if state.stage == Stage::WaitingToStart {
                return Err(ActionError::NoGameInProgress);
            }
            round::end_game(state);
            Ok(())
        }
        Command::SortHand { player, criterion } => {
            let seat = state
                .players
                .get_mut(player)
                .ok_or(ActionError::UnknownPlayer(player))?;
            let mut hand: Vec<_> = seat.hand.iter().copied().collect();
            sort_cards(&mut hand, criterion);
            seat.hand = hand.into_iter().collect();
            Ok(())
        }
    }
}
