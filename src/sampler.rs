use log::{debug, trace};

use crate::config::Config;
use crate::error::PickError;
use crate::random::RandomSource;
use crate::table::DistributionTable;

/// Draws positions from a [`DistributionTable`] with replacement.
///
/// A point in `[0, total)` is drawn uniformly and mapped to its owner. Points
/// in a percentage dead zone are redrawn, at most `config.max_redraws` times;
/// after that the point is drawn inside the live span directly.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    table: &'a DistributionTable,
    config: &'a Config,
}

impl<'a> Sampler<'a> {
    pub fn new(table: &'a DistributionTable, config: &'a Config) -> Self {
        Self { table, config }
    }

    /// Draw one position.
    ///
    /// # Errors
    /// [`PickError::SamplingExhausted`] if the table owns no points at all.
    pub fn draw_one<S: RandomSource + ?Sized>(&self, rng: &mut S) -> Result<usize, PickError> {
        let live = self.table.live_total();
        if live <= 0 {
            return Err(PickError::SamplingExhausted);
        }

        for attempt in 0..=self.config.max_redraws {
            let point = rng.next_int_below(self.table.total())?;
            match self.table.locate(point) {
                Some(pos) => return Ok(pos),
                None => trace!("point {point} is dead space (attempt {attempt}), redrawing"),
            }
        }

        debug!(
            "no live point after {} redraws, drawing inside [0, {live})",
            self.config.max_redraws
        );
        let point = rng.next_int_below(live)?;
        self.table.locate(point).ok_or(PickError::SamplingExhausted)
    }

    /// Draw `n` independent positions, duplicates allowed, in draw order.
    ///
    /// # Errors
    /// * [`PickError::InvalidCount`] if `n == 0`.
    /// * Anything [`draw_one`](Self::draw_one) reports.
    pub fn draw<S: RandomSource + ?Sized>(
        &self,
        rng: &mut S,
        n: usize,
    ) -> Result<Vec<usize>, PickError> {
        if n == 0 {
            return Err(PickError::InvalidCount { requested: n });
        }
        (0..n).map(|_| self.draw_one(rng)).collect()
    }
}
