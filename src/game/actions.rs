use alloc::format;

use crate::card::{Card, Rank, Suit};
use crate::error::{DrawError, PlayError, SelectSuitError};

use super::{Game, GameStatus, Turn};

impl Game {
    /// Returns whether the card may legally be played right now.
    ///
    /// A card is playable if it is an eight (always a wildcard), or its
    /// suit matches the active suit, or its rank matches the active rank.
    /// This is the single rule predicate; player validation and the
    /// opponent's candidate filtering both use it unchanged.
    ///
    /// Meaningful only once a game has been dealt.
    #[must_use]
    pub fn is_card_playable(&self, card: Card) -> bool {
        card.rank == Rank::Eight
            || card.suit == *self.current_suit.lock()
            || card.rank == *self.current_rank.lock()
    }

    /// Player intent: play a card from the hand onto the discard pile.
    ///
    /// On success the card becomes the discard top. Emptying the hand ends
    /// the game with the player as winner. Playing an eight holds the turn
    /// and enters suit selection (see [`select_suit`](Game::select_suit));
    /// any other card sets the active suit and rank from itself and passes
    /// the turn to the opponent.
    ///
    /// # Errors
    ///
    /// Returns an error, with no state change, if no game is in progress,
    /// it is not the player's turn, the card is not in the player's hand,
    /// or the card matches neither the active suit nor the active rank.
    pub fn play_card(&self, card: Card) -> Result<(), PlayError> {
        if *self.status.lock() != GameStatus::Playing {
            return Err(PlayError::InvalidState);
        }
        if *self.turn.lock() != Turn::Player {
            return Err(PlayError::NotYourTurn);
        }

        let mut hand = self.player_hand.lock();
        let index = hand
            .iter()
            .position(|held| *held == card)
            .ok_or(PlayError::CardNotInHand)?;
        if !self.is_card_playable(card) {
            return Err(PlayError::NotPlayable);
        }

        hand.remove(index);
        let hand_empty = hand.is_empty();
        drop(hand);
        self.discard_pile.lock().push(card);

        if hand_empty {
            // Game over; the stale active suit/rank no longer matter.
            *self.status.lock() = GameStatus::GameOver;
            *self.winner.lock() = Some(Turn::Player);
            self.set_message("You cleared your hand. You win!");
            self.bump_generation();
            return Ok(());
        }

        if card.rank == Rank::Eight {
            // Active suit/rank stay as they were until a suit is declared.
            *self.status.lock() = GameStatus::SelectingSuit;
            self.set_message("Choose a new suit!");
        } else {
            *self.current_suit.lock() = card.suit;
            *self.current_rank.lock() = card.rank;
            *self.turn.lock() = Turn::Ai;
            self.set_message("AI is thinking...");
        }
        self.bump_generation();

        Ok(())
    }

    /// Player intent: declare the suit after playing an eight.
    ///
    /// Sets the active suit to the choice and the active rank to eight (the
    /// discard top is the eight just played), then passes the turn to the
    /// opponent.
    ///
    /// # Errors
    ///
    /// Returns an error, with no state change, if no suit selection is
    /// pending.
    pub fn select_suit(&self, suit: Suit) -> Result<(), SelectSuitError> {
        if *self.status.lock() != GameStatus::SelectingSuit {
            return Err(SelectSuitError::InvalidState);
        }

        *self.current_suit.lock() = suit;
        *self.current_rank.lock() = Rank::Eight;
        *self.status.lock() = GameStatus::Playing;
        *self.turn.lock() = Turn::Ai;
        self.set_message(format!("Suit changed to {suit}. AI's turn."));
        self.bump_generation();

        Ok(())
    }

    /// Player intent: draw a card from the deck.
    ///
    /// Drawing does not end the player's turn; the player may attempt a
    /// play afterwards. If the deck is empty no card is drawn and the turn
    /// is skipped to the opponent instead, returning `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error, with no state change, if no game is in progress or
    /// it is not the player's turn.
    pub fn draw_card(&self) -> Result<Option<Card>, DrawError> {
        if *self.status.lock() != GameStatus::Playing {
            return Err(DrawError::InvalidState);
        }
        if *self.turn.lock() != Turn::Player {
            return Err(DrawError::NotYourTurn);
        }

        let Some(card) = self.deck.lock().pop() else {
            *self.turn.lock() = Turn::Ai;
            self.set_message("Deck is empty! Skipping turn.");
            self.bump_generation();
            return Ok(None);
        };

        self.player_hand.lock().push(card);
        self.set_message("You drew a card.");
        self.bump_generation();

        Ok(Some(card))
    }
}
