//! Error types for game operations.

use thiserror::Error;

/// Errors from the checked selection entry points.
///
/// [`Game::choose`](crate::Game::choose) itself never fails; these are
/// returned by [`Game::choose_at`](crate::Game::choose_at) and
/// [`Game::try_choose`](crate::Game::try_choose).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChooseError {
    /// Table position does not exist.
    #[error("table position {index} is out of range (table has {len} cards)")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of cards on the table.
        len: usize,
    },
    /// Card is not on the table.
    #[error("card is not on the table")]
    NotOnTable,
}
