//! A rule engine for the card game Set with optional `no_std` support.
//!
//! The crate provides a [`Game`] value that owns the deck, the table, the
//! current selection and the score. A presentation layer renders the read-only
//! accessors and forwards player intents through [`Game::choose`],
//! [`Game::deal_more`], [`Game::shuffle_table`] and [`Game::new_game`].
//!
//! # Example
//!
//! ```
//! use setrs::{EvalStatus, Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! assert_eq!(game.table().len(), 12);
//! assert_eq!(game.cards_left(), 69);
//! assert_eq!(game.status(), EvalStatus::None);
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
pub mod options;
pub mod rules;

// Re-export main types
pub use card::{Card, CardId, Color, DECK_SIZE, Number, Shading, Symbol};
pub use deck::create_shuffled_deck;
pub use error::ChooseError;
pub use game::{ChooseOutcome, DealOutcome, EvalStatus, Game};
pub use options::{GameOptions, TapPolicy};
pub use rules::{SET_SIZE, all_same_or_all_different, find_set, is_set};
