//! Game configuration options.

/// What a tap does when it lands on a resolved evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TapPolicy {
    /// The tapped card starts a new one-card selection when it is still on
    /// the table and was not part of the resolved trio.
    #[default]
    StartSelection,
    /// The tap only acknowledges the result; the selection stays empty.
    Acknowledge,
}

/// Configuration options for a Set game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use setrs::{GameOptions, TapPolicy};
///
/// let options = GameOptions::default()
///     .with_table_limit(Some(24))
///     .with_after_mismatch(TapPolicy::Acknowledge);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt onto an empty table at the start of a game.
    pub initial_deal: usize,
    /// Cards added by a normal draw.
    pub deal_size: usize,
    /// Points awarded for a Set.
    pub set_reward: i32,
    /// Points deducted for three cards that are not a Set.
    pub mismatch_penalty: i32,
    /// Maximum number of cards a normal draw may fill the table to.
    /// `None` for no limit.
    pub table_limit: Option<usize>,
    /// Tap handling while a found Set is displayed.
    pub after_match: TapPolicy,
    /// Tap handling while a failed trio is displayed.
    pub after_mismatch: TapPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_deal: 12,
            deal_size: 3,
            set_reward: 3,
            mismatch_penalty: 1,
            table_limit: None,
            after_match: TapPolicy::StartSelection,
            after_mismatch: TapPolicy::StartSelection,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards in the opening deal.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_deal(15);
    /// assert_eq!(options.initial_deal, 15);
    /// ```
    #[must_use]
    pub const fn with_initial_deal(mut self, cards: usize) -> Self {
        self.initial_deal = cards;
        self
    }

    /// Sets the number of cards added by a normal draw.
    #[must_use]
    pub const fn with_deal_size(mut self, cards: usize) -> Self {
        self.deal_size = cards;
        self
    }

    /// Sets the points awarded for a Set.
    #[must_use]
    pub const fn with_set_reward(mut self, points: i32) -> Self {
        self.set_reward = points;
        self
    }

    /// Sets the points deducted for a failed trio.
    #[must_use]
    pub const fn with_mismatch_penalty(mut self, points: i32) -> Self {
        self.mismatch_penalty = points;
        self
    }

    /// Sets the table limit for normal draws.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_table_limit(Some(24));
    /// assert_eq!(options.table_limit, Some(24));
    /// ```
    #[must_use]
    pub const fn with_table_limit(mut self, limit: Option<usize>) -> Self {
        self.table_limit = limit;
        self
    }

    /// Sets how a tap on a found Set is handled.
    #[must_use]
    pub const fn with_after_match(mut self, policy: TapPolicy) -> Self {
        self.after_match = policy;
        self
    }

    /// Sets how a tap on a failed trio is handled.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{GameOptions, TapPolicy};
    ///
    /// let options = GameOptions::default().with_after_mismatch(TapPolicy::Acknowledge);
    /// assert_eq!(options.after_mismatch, TapPolicy::Acknowledge);
    /// ```
    #[must_use]
    pub const fn with_after_mismatch(mut self, policy: TapPolicy) -> Self {
        self.after_mismatch = policy;
        self
    }
}
