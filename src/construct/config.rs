//! Construction configuration.

/// Configuration for [`create_balanced_seating`](super::create_balanced_seating).
///
/// # Examples
///
/// ```
/// use u_seating::construct::ConstructConfig;
///
/// let config = ConstructConfig::default()
///     .with_trials(200)
///     .with_parallel(false);
/// assert_eq!(config.trials, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructConfig {
    /// Number of random re-deals tried after the initial deal.
    pub trials: usize,

    /// Whether to run the re-deals in parallel using rayon.
    ///
    /// Seeded results are identical either way.
    pub parallel: bool,
}

impl Default for ConstructConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            parallel: true,
        }
    }
}

impl ConstructConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
