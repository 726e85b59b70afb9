//! Game engine and state management.

use core::sync::atomic::{AtomicU64, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::snapshot::GameSnapshot;

mod actions;
mod ai;
pub mod state;

pub use ai::AiOutcome;
pub use state::{GameStatus, Turn};

/// Number of cards dealt to each side at the start of a game.
pub const INITIAL_HAND_SIZE: usize = 8;

/// Cards consumed by a deal: two hands plus the first discard.
const DEAL_SIZE: usize = 2 * INITIAL_HAND_SIZE + 1;

/// A Crazy Eights game engine for one human player against a computer
/// opponent.
///
/// The game owns the deck, both hands, the discard pile, and the active
/// suit/rank that the next play must match. All mutation goes through the
/// intent methods ([`play_card`](Game::play_card),
/// [`select_suit`](Game::select_suit), [`draw_card`](Game::draw_card),
/// [`ai_play`](Game::ai_play)); a rejected intent leaves the state
/// untouched.
///
/// # Example
///
/// ```
/// use c8rs::{Game, GameStatus, Turn};
///
/// let game = Game::new(42);
/// game.start();
/// assert_eq!(game.status(), GameStatus::Playing);
/// assert_eq!(game.turn(), Turn::Player);
/// assert_eq!(game.player_hand().len(), 8);
/// ```
pub struct Game {
    /// Cards in the draw pile. Dealing removes from the front, drawing
    /// removes from the back.
    pub deck: Mutex<Vec<Card>>,
    /// The player's hand, in deal/draw order.
    pub player_hand: Mutex<Vec<Card>>,
    /// The opponent's hand, in deal/draw order.
    pub ai_hand: Mutex<Vec<Card>>,
    /// Played cards, most recent last. Only the top card is rules-relevant.
    pub discard_pile: Mutex<Vec<Card>>,
    /// The suit the next play must match. Meaningful only once a game has
    /// been dealt; may diverge from the discard top's suit after an eight.
    pub current_suit: Mutex<Suit>,
    /// The rank the next play must match. Always the discard top's rank
    /// while the status is `Playing`.
    pub current_rank: Mutex<Rank>,
    /// Whose move it is.
    pub turn: Mutex<Turn>,
    /// Current game status.
    pub status: Mutex<GameStatus>,
    /// The winner, once one side has emptied its hand.
    pub winner: Mutex<Option<Turn>>,
    /// Last-action message for display.
    message: Mutex<String>,
    /// State version, bumped on every successful mutation. Deferred
    /// opponent moves carry the generation they were scheduled under and
    /// are discarded on mismatch.
    generation: AtomicU64,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck is built and shuffled immediately; call
    /// [`start`](Game::start) to deal.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::{DECK_SIZE, Game, GameStatus};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.status(), GameStatus::Start);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::create_deck(&mut rng);

        Self {
            deck: Mutex::new(deck),
            player_hand: Mutex::new(Vec::new()),
            ai_hand: Mutex::new(Vec::new()),
            discard_pile: Mutex::new(Vec::new()),
            current_suit: Mutex::new(Suit::Hearts),
            current_rank: Mutex::new(Rank::Ace),
            turn: Mutex::new(Turn::Player),
            status: Mutex::new(GameStatus::Start),
            winner: Mutex::new(None),
            message: Mutex::new(String::from("Welcome to Crazy Eights!")),
            generation: AtomicU64::new(0),
            rng: Mutex::new(rng),
        }
    }

    /// Creates and shuffles a full 52-card deck.
    fn create_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Starts a fresh game, discarding any game in progress.
    ///
    /// Rebuilds a shuffled deck, deals [`INITIAL_HAND_SIZE`] cards to each
    /// side, flips the first discard, and hands the turn to the player.
    /// Any pending opponent move is invalidated through the generation
    /// counter.
    pub fn start(&self) {
        {
            let mut rng = self.rng.lock();
            *self.deck.lock() = Self::create_deck(&mut rng);
        }
        self.deal_round();
    }

    /// Deals a fresh game from the current deck contents, without
    /// reshuffling.
    ///
    /// [`start`](Game::start) is the normal entry point; this exists so a
    /// caller can play out a known deck arrangement.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than 17 cards (two hands of
    /// eight plus the first discard).
    pub fn deal(&self) -> Result<(), DealError> {
        if self.cards_remaining() < DEAL_SIZE {
            return Err(DealError::NotEnoughCards);
        }
        self.deal_round();
        Ok(())
    }

    /// Deals both hands and the first discard from the front of the deck.
    ///
    /// The first discard is the first non-eight in the remainder; eights
    /// have no matching suit of their own and may not open the pile. If
    /// only eights remain, the first card is used regardless.
    fn deal_round(&self) {
        let mut deck = self.deck.lock();
        let player: Vec<Card> = deck.drain(..INITIAL_HAND_SIZE).collect();
        let ai: Vec<Card> = deck.drain(..INITIAL_HAND_SIZE).collect();

        let first_index = deck
            .iter()
            .position(|card| card.rank != Rank::Eight)
            .unwrap_or(0);
        let first_discard = deck.remove(first_index);
        drop(deck);

        *self.player_hand.lock() = player;
        *self.ai_hand.lock() = ai;
        *self.discard_pile.lock() = alloc::vec![first_discard];
        *self.current_suit.lock() = first_discard.suit;
        *self.current_rank.lock() = first_discard.rank;
        *self.turn.lock() = Turn::Player;
        *self.status.lock() = GameStatus::Playing;
        *self.winner.lock() = None;
        self.set_message("Your turn! Match the suit or rank.");
        self.bump_generation();
    }

    /// Sets the last-action message.
    fn set_message(&self, message: impl Into<String>) {
        *self.message.lock() = message.into();
    }

    /// Advances the state version.
    fn bump_generation(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns the current state version.
    ///
    /// Capture this when scheduling a deferred opponent move and pass it to
    /// [`ai_play`](Game::ai_play); the move is rejected if the state has
    /// changed in the meantime.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        *self.status.lock()
    }

    /// Returns whose move it is.
    pub fn turn(&self) -> Turn {
        *self.turn.lock()
    }

    /// Returns the winner, once one side has emptied its hand.
    pub fn winner(&self) -> Option<Turn> {
        *self.winner.lock()
    }

    /// Returns the suit the next play must match.
    pub fn current_suit(&self) -> Suit {
        *self.current_suit.lock()
    }

    /// Returns the rank the next play must match.
    pub fn current_rank(&self) -> Rank {
        *self.current_rank.lock()
    }

    /// Returns the number of cards remaining in the draw pile.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the top of the discard pile.
    pub fn discard_top(&self) -> Option<Card> {
        self.discard_pile.lock().last().copied()
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Vec<Card> {
        self.player_hand.lock().clone()
    }

    /// Returns the number of cards in the opponent's hand.
    pub fn ai_hand_len(&self) -> usize {
        self.ai_hand.lock().len()
    }

    /// Returns the last-action message.
    pub fn message(&self) -> String {
        self.message.lock().clone()
    }

    /// Returns a read-only snapshot for a presentation layer.
    ///
    /// The opponent's hand appears only as a count. The active suit and
    /// rank are `None` unless the status is [`GameStatus::Playing`] or
    /// [`GameStatus::SelectingSuit`].
    pub fn snapshot(&self) -> GameSnapshot {
        let status = self.status();
        let active = matches!(status, GameStatus::Playing | GameStatus::SelectingSuit);

        GameSnapshot {
            deck_len: self.cards_remaining(),
            player_hand: self.player_hand(),
            ai_hand_len: self.ai_hand_len(),
            discard_top: self.discard_top(),
            active_suit: active.then(|| self.current_suit()),
            active_rank: active.then(|| self.current_rank()),
            turn: self.turn(),
            status,
            winner: self.winner(),
            message: self.message(),
        }
    }
}
