//! Table rule options.

/// Rules for the blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjbot::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks. Zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjbot::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjbot::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
