use alloc::format;
use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::error::AiTurnError;

use super::{Game, GameStatus, Turn};

/// What the opponent did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiOutcome {
    /// Played a card; the active suit and rank now match it.
    Played(Card),
    /// Played an eight and declared a new active suit.
    PlayedEight(Suit),
    /// Had no playable card and drew one instead; the turn passed back.
    Drew,
    /// Had no playable card and the deck was empty; the turn passed back
    /// without a draw.
    Passed,
}

/// Picks the suit the opponent holds the most of.
///
/// Ties break by [`Suit::ALL`] enumeration order: the first suit reaching
/// the maximum count wins.
fn most_held_suit(cards: &[Card]) -> Suit {
    let mut best = Suit::Hearts;
    let mut best_count = 0;

    for suit in Suit::ALL {
        let count = cards.iter().filter(|card| card.suit == suit).count();
        if count > best_count {
            best = suit;
            best_count = count;
        }
    }

    best
}

impl Game {
    /// Opponent intent: take one turn.
    ///
    /// Intended to run as a deferred action some delay after the turn
    /// passes to the opponent; capture [`generation`](Game::generation)
    /// when scheduling and pass it here so a move computed against a
    /// superseded state (a restarted game, for instance) is discarded
    /// instead of applied.
    ///
    /// The opponent plays the first playable non-eight in hand order,
    /// falling back to the first playable eight. After playing an eight it
    /// declares the suit it holds the most of. With no playable card it
    /// draws once (without attempting to play the drawn card) or, if the
    /// deck is empty, simply passes; either way the turn returns to the
    /// player.
    ///
    /// # Errors
    ///
    /// Returns an error, with no state change, if the state version has
    /// changed since `generation` was captured, no game is in progress, or
    /// it is not the opponent's turn.
    pub fn ai_play(&self, generation: u64) -> Result<AiOutcome, AiTurnError> {
        if generation != self.generation() {
            return Err(AiTurnError::Superseded);
        }
        if *self.status.lock() != GameStatus::Playing {
            return Err(AiTurnError::InvalidState);
        }
        if *self.turn.lock() != Turn::Ai {
            return Err(AiTurnError::NotAiTurn);
        }

        let hand = self.ai_hand.lock();
        let playable: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|card| self.is_card_playable(*card))
            .collect();
        drop(hand);

        let Some(&first) = playable.first() else {
            return Ok(self.draw_or_pass());
        };

        // Hold eights back while any other candidate exists.
        let chosen = playable
            .iter()
            .copied()
            .find(|card| card.rank != Rank::Eight)
            .unwrap_or(first);

        let mut hand = self.ai_hand.lock();
        if let Some(index) = hand.iter().position(|held| *held == chosen) {
            hand.remove(index);
        }
        let remaining = hand.clone();
        drop(hand);
        self.discard_pile.lock().push(chosen);

        if remaining.is_empty() {
            *self.status.lock() = GameStatus::GameOver;
            *self.winner.lock() = Some(Turn::Ai);
            self.set_message("AI cleared its hand. AI wins!");
            self.bump_generation();
            return Ok(AiOutcome::Played(chosen));
        }

        if chosen.rank == Rank::Eight {
            let suit = most_held_suit(&remaining);
            *self.current_suit.lock() = suit;
            *self.current_rank.lock() = Rank::Eight;
            *self.turn.lock() = Turn::Player;
            self.set_message(format!(
                "AI played an 8 and changed suit to {suit}. Your turn!"
            ));
            self.bump_generation();
            return Ok(AiOutcome::PlayedEight(suit));
        }

        *self.current_suit.lock() = chosen.suit;
        *self.current_rank.lock() = chosen.rank;
        *self.turn.lock() = Turn::Player;
        self.set_message(format!("AI played {chosen}. Your turn!"));
        self.bump_generation();

        Ok(AiOutcome::Played(chosen))
    }

    /// No playable card: draw once if possible, then pass the turn back.
    fn draw_or_pass(&self) -> AiOutcome {
        let drawn = self.deck.lock().pop();

        let outcome = match drawn {
            Some(card) => {
                self.ai_hand.lock().push(card);
                self.set_message("AI couldn't play and drew a card. Your turn!");
                AiOutcome::Drew
            }
            None => {
                self.set_message("AI has no moves and deck is empty. Your turn!");
                AiOutcome::Passed
            }
        };

        *self.turn.lock() = Turn::Player;
        self.bump_generation();
        outcome
    }
}
