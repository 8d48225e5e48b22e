//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round: the opening deal,
//! player hits, stands and a single pair split, dealer play, and the result.
//! A game holds no randomness or session of its own; persist it between
//! actions with [`GameSnapshot`] and show it to players with [`GameView`].
//!
//! # Example
//!
//! ```
//! use blackjack_core::Game;
//!
//! let mut game = Game::from_seed(42);
//! while !game.is_game_over() && game.player_hand().value() < 17 {
//!     game.hit().unwrap();
//! }
//! if !game.is_game_over() {
//!     game.stand().unwrap();
//! }
//!
//! let view = game.state();
//! assert!(view.game_over);
//! assert!(!view.result_message.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, CardError, DealError, SnapshotError};
pub use game::{
    ActiveHand, DealerShowing, Game, GameSnapshot, GameView, HandView, Phase, PlayerHands,
};
pub use hand::Hand;
pub use result::{GameResult, HandOutcome, Showdown};
