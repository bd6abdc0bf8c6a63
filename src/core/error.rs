//! Rejection reasons and invariant violations.
//!
//! A rejected command leaves the state untouched. Most rejections are
//! ordinary probing (wrong moment, card that does not fit); the rest mean
//! the caller referenced something that does not exist and are reported by
//! [`ActionError::is_caller_bug`].

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;

/// Why a command was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no game is in progress")]
    NoGameInProgress,

    #[error("the game is over")]
    GameOver,

    #[error("the round is over and must be ended first")]
    RoundOver,

    #[error("it is not time to draw")]
    CannotDraw,

    #[error("it is not time to discard")]
    CannotDiscard,

    #[error("the requested pile is empty")]
    EmptyPile,

    #[error("{0} has already completed their phase")]
    PhaseAlreadyCompleted(PlayerId),

    #[error("the objective areas do not satisfy the phase")]
    PhaseIncomplete,

    #[error("{0} has not completed their phase")]
    PhaseNotCompleted(PlayerId),

    #[error("{0} does not extend the objective")]
    CannotExtend(CardId),

    #[error("a skip needs a target")]
    MissingSkipTarget,

    #[error("only a skip takes a target")]
    UnexpectedTarget,

    #[error("a player cannot skip themselves")]
    SelfSkip,

    #[error("source and destination objective are the same")]
    SameObjectiveArea,

    #[error("invalid player count {0}")]
    InvalidPlayerCount(usize),

    #[error("invalid starting phase {0}")]
    InvalidStartingPhase(usize),

    #[error("{0} is not in the hand")]
    CardNotInHand(CardId),

    #[error("{card} is not in objective area {objective}")]
    CardNotInObjectiveArea { card: CardId, objective: usize },

    #[error("objective index {0} is out of range")]
    ObjectiveOutOfRange(usize),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
}

impl ActionError {
    /// Whether the command referenced a card, objective, or seat that does
    /// not exist where it claimed.
    #[must_use]
    pub fn is_caller_bug(&self) -> bool {
        matches!(
            self,
            ActionError::CardNotInHand(_)
                | ActionError::CardNotInObjectiveArea { .. }
                | ActionError::ObjectiveOutOfRange(_)
                | ActionError::UnknownPlayer(_)
        )
    }
}

/// A state that breaks card accounting or turn flags.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("expected {expected} cards, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("{0} appears more than once")]
    DuplicateCard(CardId),

    #[error("{0} is missing")]
    MissingCard(CardId),

    #[error("{0} is not a card of the deck")]
    UnknownCard(CardId),

    #[error("draw and discard flags are both {0}")]
    TurnFlags(bool),

    #[error("active player {0} is not seated")]
    ActivePlayer(PlayerId),
}
