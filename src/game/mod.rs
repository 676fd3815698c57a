//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardId};
use crate::deck::create_shuffled_deck;
use crate::options::GameOptions;
use crate::rules;

mod dealing;
mod selection;
pub mod state;

pub use state::{ChooseOutcome, DealOutcome, EvalStatus};

/// A Set game: deck, table, selection, discard pile and score.
///
/// `Game` is a plain value owned by a single controller. Every mutation goes
/// through `&mut self`, and the accessors return the state a presentation
/// layer needs to render after each call.
#[derive(Debug, Clone)]
pub struct Game {
    /// Remaining cards; the front is dealt next.
    deck: Vec<Card>,
    /// Face-up cards in display order.
    table: Vec<Card>,
    /// Tentatively chosen cards (at most three).
    selected: Vec<Card>,
    /// Matched cards removed from play.
    discard: Vec<Card>,
    /// Result of the last completed trio check.
    status: EvalStatus,
    score: i32,
    options: GameOptions,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game with the given seed and deals the opening table.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.table().len(), 12);
    /// assert_eq!(game.score(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut game = Self {
            deck: Vec::new(),
            table: Vec::new(),
            selected: Vec::new(),
            discard: Vec::new(),
            status: EvalStatus::None,
            score: 0,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.new_game();
        game
    }

    /// Resets everything and deals a fresh, reshuffled deck.
    ///
    /// The options and the random stream carry over, so consecutive games
    /// from the same seed differ from each other but replay identically.
    pub fn new_game(&mut self) {
        self.table.clear();
        self.selected.clear();
        self.discard.clear();
        self.status = EvalStatus::None;
        self.score = 0;
        self.deck = create_shuffled_deck(&mut self.rng);
        self.deal_initial_cards();
    }

    /// Randomly reorders the table.
    ///
    /// Deck, selection and score are untouched; the selection stays valid
    /// because it is tracked by card id.
    pub fn shuffle_table(&mut self) {
        self.table.shuffle(&mut self.rng);
    }

    /// Returns the remaining deck, next card first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    /// Returns the face-up cards in display order.
    #[must_use]
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    /// Returns the selected cards in the order they were chosen.
    #[must_use]
    pub fn selected(&self) -> &[Card] {
        &self.selected
    }

    /// Returns the matched cards, oldest first.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the result of the last completed trio check.
    #[must_use]
    pub const fn status(&self) -> EvalStatus {
        self.status
    }

    /// Returns the current score. It may be negative.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns whether the deal action can do anything.
    ///
    /// This is `true` while a found Set waits to be replaced, or while the
    /// deck still has cards and the table is below its limit.
    #[must_use]
    pub fn can_deal_more(&self) -> bool {
        self.status == EvalStatus::Found || (!self.deck.is_empty() && !self.table_is_full())
    }

    /// Returns the table positions of the selected cards, in table order.
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        self.table
            .iter()
            .enumerate()
            .filter(|(_, card)| self.is_selected(card.id))
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns the first Set on the table, if there is one.
    #[must_use]
    pub fn find_set(&self) -> Option<[Card; 3]> {
        rules::find_set(&self.table)
    }

    /// Returns the table position of the card with the given id.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.table.iter().position(|card| card.id == id)
    }

    fn is_on_table(&self, id: CardId) -> bool {
        self.position_of(id).is_some()
    }

    fn is_selected(&self, id: CardId) -> bool {
        self.selected.iter().any(|card| card.id == id)
    }

    fn table_is_full(&self) -> bool {
        self.options
            .table_limit
            .is_some_and(|limit| self.table.len() >= limit)
    }
}
