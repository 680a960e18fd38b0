//! Validated (value, priority) pairs.

use std::fmt;

use crate::config::Config;
use crate::error::PickError;
use crate::pick::{Draw, draw_indices};
use crate::random::RandomSource;

/// Fixed denominator of percentage selections.
pub const PERCENT: i32 = 100;

/// How the priorities of one selection are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityKind {
    /// Relative to each other; shares always cover the whole sample space.
    Weight,
    /// Out of a fixed 100. Whatever the entries leave over is never picked.
    Percentage,
}

impl fmt::Display for PriorityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityKind::Weight => write!(f, "weight"),
            PriorityKind::Percentage => write!(f, "percentage"),
        }
    }
}

/// One registered candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<T> {
    pub value: T,
    pub priority: i32,
}

/// An ordered list of candidates whose priorities all share one kind.
///
/// Every priority is `> 0`; percentage lists never sum past 100 and weight
/// lists never sum past `i32::MAX`. Values are opaque: entries are told
/// apart by position only.
#[derive(Debug, Clone)]
pub struct Entries<T> {
    values: Vec<T>,
    priorities: Vec<i32>,
    kind: Option<PriorityKind>,
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Entries<T> {
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            priorities: Vec::new(),
            kind: None,
        }
    }

    /// Build from any `(value, priority)` iterator of a single kind.
    ///
    /// # Errors
    /// Same as [`register`](Self::register).
    pub fn from_pairs<I>(pairs: I, kind: PriorityKind) -> Result<Self, PickError>
    where
        I: IntoIterator<Item = (T, i32)>,
    {
        let mut entries = Self::new();
        for (value, priority) in pairs {
            entries.register(value, priority, kind)?;
        }
        Ok(entries)
    }

    /// Append one candidate.
    ///
    /// # Errors
    /// * [`PickError::InvalidPriority`] if `priority <= 0`.
    /// * [`PickError::MixedPriorityKind`] if earlier entries use another kind.
    /// * [`PickError::PercentageOverflow`] / [`PickError::PriorityOverflow`]
    ///   if the new total no longer fits its kind.
    pub fn register(
        &mut self,
        value: T,
        priority: i32,
        kind: PriorityKind,
    ) -> Result<(), PickError> {
        check_priority(priority)?;
        self.check_kind(kind)?;
        check_total(kind, self.sum() + i64::from(priority))?;

        self.values.push(value);
        self.priorities.push(priority);
        self.kind = Some(kind);
        Ok(())
    }

    /// Append many candidates at once. Nothing is registered unless the whole
    /// batch is valid.
    ///
    /// # Errors
    /// * [`PickError::CountMismatch`] if the two lists differ in length.
    /// * Anything [`register`](Self::register) reports.
    pub fn register_batch<V, P>(
        &mut self,
        values: V,
        priorities: P,
        kind: PriorityKind,
    ) -> Result<(), PickError>
    where
        V: IntoIterator<Item = T>,
        P: IntoIterator<Item = i32>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let priorities: Vec<i32> = priorities.into_iter().collect();
        if values.len() != priorities.len() {
            return Err(PickError::CountMismatch {
                values: values.len(),
                priorities: priorities.len(),
            });
        }
        for &p in &priorities {
            check_priority(p)?;
        }
        self.check_kind(kind)?;
        let added: i64 = priorities.iter().map(|&p| i64::from(p)).sum();
        check_total(kind, self.sum() + added)?;

        self.values.extend(values);
        self.priorities.extend(priorities);
        if !self.values.is_empty() {
            self.kind = Some(kind);
        }
        Ok(())
    }

    /// Confirm a percentage list leaves no negative dead zone. A sum below 100
    /// is fine; the rest is simply never picked.
    ///
    /// # Errors
    /// [`PickError::PercentageOverflow`] if the percentages sum past 100.
    pub fn finalize_for_percentage(&self) -> Result<(), PickError> {
        match self.kind {
            Some(PriorityKind::Percentage) => check_total(PriorityKind::Percentage, self.sum()),
            _ => Ok(()),
        }
    }

    /// The kind shared by all entries; `None` until something is registered.
    pub fn kind(&self) -> Option<PriorityKind> {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn priorities(&self) -> &[i32] {
        &self.priorities
    }

    pub fn iter(&self) -> impl Iterator<Item = Entry<&T>> {
        self.values
            .iter()
            .zip(&self.priorities)
            .map(|(value, &priority)| Entry { value, priority })
    }

    /// Sum of all priorities, widened so it cannot overflow.
    pub fn sum(&self) -> i64 {
        self.priorities.iter().map(|&p| i64::from(p)).sum()
    }

    /// Original positions drawn by `draw`, in draw order.
    ///
    /// # Errors
    /// See [`draw_indices`].
    pub fn draw<S: RandomSource + ?Sized>(
        &self,
        draw: Draw,
        rng: &mut S,
        config: &Config,
    ) -> Result<Vec<usize>, PickError> {
        self.finalize_for_percentage()?;
        let kind = self.kind.unwrap_or(PriorityKind::Weight);
        draw_indices(kind, &self.priorities, draw, rng, config)
    }

    /// Draw one value.
    pub fn pick_one<S: RandomSource + ?Sized>(&self, rng: &mut S) -> Result<T, PickError>
    where
        T: Clone,
    {
        let idx = self.draw(Draw::One, rng, &Config::default())?;
        Ok(self.values[idx[0]].clone())
    }

    /// Draw `n` values with replacement.
    pub fn pick<S: RandomSource + ?Sized>(&self, n: usize, rng: &mut S) -> Result<Vec<T>, PickError>
    where
        T: Clone,
    {
        let idx = self.draw(Draw::WithReplacement(n), rng, &Config::default())?;
        Ok(idx.into_iter().map(|i| self.values[i].clone()).collect())
    }

    /// Draw `n` values at distinct positions.
    pub fn pick_distinct<S: RandomSource + ?Sized>(
        &self,
        n: usize,
        rng: &mut S,
    ) -> Result<Vec<T>, PickError>
    where
        T: Clone,
    {
        let idx = self.draw(Draw::Distinct(n), rng, &Config::default())?;
        Ok(idx.into_iter().map(|i| self.values[i].clone()).collect())
    }

    fn check_kind(&self, requested: PriorityKind) -> Result<(), PickError> {
        match self.kind {
            Some(existing) if existing != requested => {
                Err(PickError::MixedPriorityKind { existing, requested })
            }
            _ => Ok(()),
        }
    }
}

fn check_priority(priority: i32) -> Result<(), PickError> {
    if priority <= 0 {
        return Err(PickError::InvalidPriority { priority });
    }
    Ok(())
}

fn check_total(kind: PriorityKind, sum: i64) -> Result<(), PickError> {
    match kind {
        PriorityKind::Percentage if sum > i64::from(PERCENT) => {
            Err(PickError::PercentageOverflow { sum })
        }
        PriorityKind::Weight if sum > i64::from(i32::MAX) => {
            Err(PickError::PriorityOverflow { sum })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PriorityKind::*;

    #[test]
    fn rejects_non_positive_priorities() {
        let mut e = Entries::new();
        for kind in [Weight, Percentage] {
            assert_eq!(
                e.register("a", 0, kind),
                Err(PickError::InvalidPriority { priority: 0 })
            );
            assert_eq!(
                e.register("a", -3, kind),
                Err(PickError::InvalidPriority { priority: -3 })
            );
        }
        assert!(e.is_empty());
        assert_eq!(e.kind(), None);
    }

    #[test]
    fn rejects_mixed_kinds() {
        let mut e = Entries::new();
        e.register("a", 10, Percentage).unwrap();
        assert_eq!(
            e.register("b", 1, Weight),
            Err(PickError::MixedPriorityKind {
                existing: Percentage,
                requested: Weight
            })
        );
        assert!(matches!(
            e.register_batch(["c"], [2], Weight),
            Err(PickError::MixedPriorityKind { .. })
        ));
        assert_eq!(e.len(), 1);
    }

    #[test]
    fn batch_validates_before_registering() {
        let mut e = Entries::new();
        assert_eq!(
            e.register_batch(["a", "b", "c"], [1, 2], Weight),
            Err(PickError::CountMismatch {
                values: 3,
                priorities: 2
            })
        );
        assert_eq!(
            e.register_batch(["a", "b"], [1, 0], Weight),
            Err(PickError::InvalidPriority { priority: 0 })
        );
        assert!(e.is_empty());

        e.register_batch(["a", "b"], [1, 3], Weight).unwrap();
        assert_eq!(e.priorities(), &[1, 3]);
        assert_eq!(e.kind(), Some(Weight));
    }

    #[test]
    fn percentages_cap_at_one_hundred() {
        let mut e = Entries::new();
        e.register("a", 60, Percentage).unwrap();
        e.register("b", 40, Percentage).unwrap();
        assert!(e.finalize_for_percentage().is_ok());
        assert_eq!(
            e.register("c", 1, Percentage),
            Err(PickError::PercentageOverflow { sum: 101 })
        );
        assert!(matches!(
            Entries::from_pairs([("x", 70), ("y", 31)], Percentage),
            Err(PickError::PercentageOverflow { sum: 101 })
        ));
        // dead mass is legal
        let e = Entries::from_pairs([("x", 30)], Percentage).unwrap();
        assert!(e.finalize_for_percentage().is_ok());
    }

    #[test]
    fn batch_percentages_cap_at_one_hundred() {
        let mut e = Entries::new();
        assert_eq!(
            e.register_batch(["a", "b"], [70, 31], Percentage),
            Err(PickError::PercentageOverflow { sum: 101 })
        );
        assert!(e.is_empty());

        // a batch appended to earlier entries counts against their total
        e.register("a", 60, Percentage).unwrap();
        assert_eq!(
            e.register_batch(["b", "c"], [30, 11], Percentage),
            Err(PickError::PercentageOverflow { sum: 101 })
        );
        assert_eq!(e.len(), 1);
        e.register_batch(["b", "c"], [30, 10], Percentage).unwrap();
        assert_eq!(e.sum(), 100);
    }

    #[test]
    fn weights_must_fit_i32() {
        let mut e = Entries::new();
        e.register("a", i32::MAX, Weight).unwrap();
        assert!(matches!(
            e.register("b", 1, Weight),
            Err(PickError::PriorityOverflow { .. })
        ));
    }

    #[test]
    fn iterates_in_registration_order() {
        let e = Entries::from_pairs([("a", 1), ("b", 3)], Weight).unwrap();
        let got: Vec<_> = e.iter().map(|en| (*en.value, en.priority)).collect();
        assert_eq!(got, vec![("a", 1), ("b", 3)]);
        assert_eq!(e.sum(), 4);
    }
}
