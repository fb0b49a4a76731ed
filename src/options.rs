//! Game configuration options.

/// Configuration options for a pontoon game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pontoon::GameOptions;
///
/// let options = GameOptions::default()
///     .with_packs(2)
///     .with_penetration(0.75);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of 52-card packs in the deck.
    pub packs: u8,
    /// Deck penetration (fraction of the deck played before the
    /// between-hands reshuffle). 0 to disable reshuffling.
    pub penetration: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            packs: 1,
            penetration: 0.5,
        }
    }
}

impl GameOptions {
    /// Sets the number of 52-card packs.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::GameOptions;
    ///
    /// let options = GameOptions::default().with_packs(2);
    /// assert_eq!(options.packs, 2);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.75);
    /// assert_eq!(options.penetration, 0.75);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}
