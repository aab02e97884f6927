//! Uniform-draw selection between the two line formatters.

use rand::Rng;

use crate::config::Config;
use crate::formatter::{NamedFormatter, FORMATTERS};

/// Pick a formatter for one uniform draw.
///
/// The boundary is exclusive on the first branch: a draw exactly equal to
/// `threshold` selects the second formatter.
pub fn choose(draw: f64, threshold: f64) -> &'static NamedFormatter {
    if draw > threshold {
        &FORMATTERS[0]
    } else {
        &FORMATTERS[1]
    }
}

/// Draws one formatter per call and applies it to the configured input.
///
/// Generic over the RNG so tests can substitute a seeded source.
pub struct Selector<R: Rng> {
    rng: R,
    config: Config,
}

impl<R: Rng> Selector<R> {
    pub fn new(rng: R, config: Config) -> Self {
        Self { rng, config }
    }

    /// Draw a uniform `f64` in [0, 1) and pick the matching formatter.
    pub fn pick(&mut self) -> &'static NamedFormatter {
        let draw: f64 = self.rng.gen();
        choose(draw, self.config.threshold)
    }

    /// Pick a formatter and format the configured input with it.
    pub fn line(&mut self) -> String {
        self.pick().apply(&self.config.input)
    }
}
