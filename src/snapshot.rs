//! Read-only state snapshot for presentation layers.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::game::{GameStatus, Turn};

/// A point-in-time view of the game, safe to hand to a renderer.
///
/// The opponent's hand is exposed only as a count; the engine tracks the
/// full identities but never reveals them through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Number of cards left in the draw pile.
    pub deck_len: usize,
    /// The player's hand, full identities, in hand order.
    pub player_hand: Vec<Card>,
    /// Number of cards in the opponent's hand.
    pub ai_hand_len: usize,
    /// The top of the discard pile, if the game has started.
    pub discard_top: Option<Card>,
    /// The suit the next play must match.
    ///
    /// `None` unless the status is [`GameStatus::Playing`] or
    /// [`GameStatus::SelectingSuit`]. May diverge from the discard top's
    /// own suit after an eight-driven suit change.
    pub active_suit: Option<Suit>,
    /// The rank the next play must match.
    ///
    /// `None` under the same conditions as `active_suit`.
    pub active_rank: Option<Rank>,
    /// Whose move it is.
    pub turn: Turn,
    /// Current game status.
    pub status: GameStatus,
    /// The winner, once the game is over.
    pub winner: Option<Turn>,
    /// Human-readable description of the last action, for display.
    pub message: String,
}
