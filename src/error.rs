//! Error types for game operations.
//!
//! Every rejected intent leaves the game state untouched, so callers that
//! want the silent-rejection behavior of a UI front end can simply drop the
//! error.

use thiserror::Error;

/// Errors that can occur when dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck to deal both hands and a first discard.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when the player plays a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a card.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// Not the player's turn.
    #[error("not the player's turn")]
    NotYourTurn,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// The card matches neither the active suit nor the active rank.
    #[error("card matches neither the active suit nor the active rank")]
    NotPlayable,
}

/// Errors that can occur when selecting a suit after an eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectSuitError {
    /// No suit selection is pending.
    #[error("no suit selection is pending")]
    InvalidState,
}

/// Errors that can occur when the player draws a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game state for drawing.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// Not the player's turn.
    #[error("not the player's turn")]
    NotYourTurn,
}

/// Errors that can occur when the opponent takes its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AiTurnError {
    /// The game state changed since this move was scheduled.
    #[error("the game state changed since this move was scheduled")]
    Superseded,
    /// Invalid game state for an opponent move.
    #[error("invalid game state for an opponent move")]
    InvalidState,
    /// Not the opponent's turn.
    #[error("not the opponent's turn")]
    NotAiTurn,
}
