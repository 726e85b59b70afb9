//! A Crazy Eights game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full game flow for a
//! single human player against a computer opponent: dealing, matching the
//! discard by suit or rank, the eight-as-wildcard suit change, and the
//! opponent's move selection. Rendering is left to the caller, which reads
//! a [`GameSnapshot`] after every transition.
//!
//! # Example
//!
//! ```
//! use c8rs::{Game, GameStatus};
//!
//! let game = Game::new(42);
//! game.start();
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{AiTurnError, DealError, DrawError, PlayError, SelectSuitError};
pub use game::{AiOutcome, Game, GameStatus, INITIAL_HAND_SIZE, Turn};
pub use snapshot::GameSnapshot;
