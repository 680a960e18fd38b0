//! Draws without replacement.

use log::trace;

use crate::config::Config;
use crate::error::PickError;
use crate::random::RandomSource;
use crate::sampler::Sampler;
use crate::table::{DistributionTable, Span};

/// Draws distinct positions, each step proportional among the positions not
/// drawn yet.
///
/// Every step lays out a fresh table over the live entries only, spanning
/// their sum. Percentage lists lose their fixed 100 here: once an entry is
/// gone the complement means nothing, so the live percentages are treated as
/// plain weights from the first step on. O(n * m).
#[derive(Debug, Clone)]
pub struct DistinctSampler<'a> {
    priorities: &'a [i32],
    config: &'a Config,
}

impl<'a> DistinctSampler<'a> {
    pub fn new(priorities: &'a [i32], config: &'a Config) -> Self {
        Self { priorities, config }
    }

    /// Draw `n` positions, all different, in draw order.
    ///
    /// # Errors
    /// * [`PickError::InvalidCount`] if `n == 0`.
    /// * [`PickError::NotEnoughValues`] if `n` exceeds the number of entries.
    pub fn draw<S: RandomSource + ?Sized>(
        &self,
        rng: &mut S,
        n: usize,
    ) -> Result<Vec<usize>, PickError> {
        if n == 0 {
            return Err(PickError::InvalidCount { requested: n });
        }
        if n > self.priorities.len() {
            return Err(PickError::NotEnoughValues {
                requested: n,
                available: self.priorities.len(),
            });
        }

        let mut live: Vec<(usize, i32)> =
            self.priorities.iter().copied().enumerate().collect();
        let mut picked = Vec::with_capacity(n);

        while picked.len() < n {
            let table = DistributionTable::build(live.iter().copied(), Span::Sum)?;
            let pos = Sampler::new(&table, self.config).draw_one(rng)?;
            live.retain(|&(p, _)| p != pos);
            trace!("picked position {pos}, {} live entries left", live.len());
            picked.push(pos);
        }

        Ok(picked)
    }
}
