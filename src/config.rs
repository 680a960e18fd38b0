/// Knobs for the sampling core.
///
/// Percentage selections that sum to less than 100 leave a dead zone. A draw
/// landing there is redrawn up to `max_redraws` times; after that the sampler
/// draws straight inside the live span, which yields the same distribution
/// as redrawing forever would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_redraws: u32,
}

impl Config {
    pub const DEFAULT_MAX_REDRAWS: u32 = 32;

    pub const fn new() -> Self {
        Self {
            max_redraws: Self::DEFAULT_MAX_REDRAWS,
        }
    }

    /// Override the dead-zone redraw limit. Zero skips redrawing entirely.
    pub const fn max_redraws(mut self, max_redraws: u32) -> Self {
        self.max_redraws = max_redraws;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
