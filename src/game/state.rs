//! Game state types.

/// Result of the most recent completed trio check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvalStatus {
    /// No pending result.
    #[default]
    None,
    /// The three selected cards form a Set.
    Found,
    /// The three selected cards do not form a Set.
    Fail,
}

/// What a call to [`Game::choose`](super::Game::choose) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// Card was added to the selection.
    Selected,
    /// Card was removed from the selection.
    Deselected,
    /// Nothing changed.
    Ignored,
    /// Card completed a Set.
    SetFound,
    /// Card completed a trio that is not a Set.
    SetFailed,
    /// A found Set was discarded and replaced.
    MatchResolved {
        /// Whether the tapped card started a new selection.
        reselected: bool,
    },
    /// A failed trio was cleared.
    MismatchCleared {
        /// Whether the tapped card started a new selection.
        reselected: bool,
    },
}

/// What a call to [`Game::deal_more`](super::Game::deal_more) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealOutcome {
    /// Cards were drawn onto the end of the table.
    Drew(usize),
    /// A found Set was discarded and replaced instead of drawing.
    ResolvedMatch,
}
