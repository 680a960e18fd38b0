//! Cumulative distribution over registered entries.

use crate::error::PickError;
use crate::priority::PERCENT;

/// What the sample space of a table spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Exactly the sum of the priorities.
    Sum,
    /// A fixed total; whatever the priorities leave over is dead.
    Fixed(i32),
}

impl Span {
    pub const PERCENTAGE: Span = Span::Fixed(PERCENT);
}

/// Half-open intervals `[before, before + priority)` laid end to end, one per
/// entry, in the order the entries were given.
///
/// Built fresh for every draw and dropped afterwards.
#[derive(Debug, Clone)]
pub struct DistributionTable {
    /// Exclusive upper boundary of each interval; strictly increasing.
    bounds: Vec<i32>,
    /// Original entry position owning each interval.
    positions: Vec<usize>,
    total: i32,
}

impl DistributionTable {
    /// Lay out `(position, priority)` pairs. O(n).
    ///
    /// # Errors
    /// * [`PickError::InvalidPriority`] for a priority `<= 0`.
    /// * [`PickError::PercentageOverflow`] if the priorities overrun a fixed span.
    /// * [`PickError::PriorityOverflow`] if they overrun `i32`.
    pub fn build<I>(entries: I, span: Span) -> Result<Self, PickError>
    where
        I: IntoIterator<Item = (usize, i32)>,
    {
        let entries = entries.into_iter();
        let (lower, _) = entries.size_hint();
        let mut bounds = Vec::with_capacity(lower);
        let mut positions = Vec::with_capacity(lower);

        let mut running = 0i64;
        for (pos, priority) in entries {
            if priority <= 0 {
                return Err(PickError::InvalidPriority { priority });
            }
            running += i64::from(priority);
            let bound = i32::try_from(running)
                .map_err(|_| PickError::PriorityOverflow { sum: running })?;
            bounds.push(bound);
            positions.push(pos);
        }

        let total = match span {
            Span::Sum => bounds.last().copied().unwrap_or(0),
            Span::Fixed(fixed) => {
                if running > i64::from(fixed) {
                    return Err(PickError::PercentageOverflow { sum: running });
                }
                fixed
            }
        };

        Ok(Self {
            bounds,
            positions,
            total,
        })
    }

    /// Table over `priorities`, positions `0..n`.
    pub fn from_priorities(priorities: &[i32], span: Span) -> Result<Self, PickError> {
        Self::build(priorities.iter().copied().enumerate(), span)
    }

    /// Entry position owning `point`, or `None` if `point` is dead space or
    /// outside `[0, total)`. O(log n).
    pub fn locate(&self, point: i32) -> Option<usize> {
        if point < 0 {
            return None;
        }
        let slot = self.bounds.partition_point(|&b| b <= point);
        self.positions.get(slot).copied()
    }

    /// Size of the sample space.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Part of the sample space owned by some entry: `[0, live_total)`.
    pub fn live_total(&self) -> i32 {
        self.bounds.last().copied().unwrap_or(0)
    }

    /// Whether some points are owned by nobody.
    pub fn has_dead_zone(&self) -> bool {
        self.live_total() < self.total
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}
