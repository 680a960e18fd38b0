//! Fluent, type-state front end.
//!
//! Each state only exposes the calls that are legal next, so a weight can't
//! follow a weight, a percentage selection can't take a weight, and a
//! selection that still has a value waiting for its priority can't be
//! picked from. All real work is delegated to [`Entries`] and the samplers.

use std::marker::PhantomData;

use rand::rngs::ThreadRng;

use crate::config::Config;
use crate::error::PickError;
use crate::pick::{Draw, draw_indices};
use crate::priority::{Entries, PriorityKind};
use crate::random::RandomSource;

mod sealed {
    pub trait Sealed {}
}

/// Priority kind marker: relative weights.
#[derive(Debug, Clone, Copy)]
pub struct Weight;

/// Priority kind marker: percentages out of 100.
#[derive(Debug, Clone, Copy)]
pub struct Percentage;

pub trait Kind: sealed::Sealed {
    const KIND: PriorityKind;
}

impl sealed::Sealed for Weight {}
impl Kind for Weight {
    const KIND: PriorityKind = PriorityKind::Weight;
}

impl sealed::Sealed for Percentage {}
impl Kind for Percentage {
    const KIND: PriorityKind = PriorityKind::Percentage;
}

/// A single value, no priority yet.
#[derive(Debug)]
pub struct Genesis;

/// Two or more values without priorities; equal odds.
#[derive(Debug)]
pub struct Uniform;

/// Values given as a list; priorities may follow as a list.
#[derive(Debug)]
pub struct Listed;

/// A single value with a priority. Needs a second value.
#[derive(Debug)]
pub struct Lone<K>(PhantomData<K>);

/// The last value is still missing its priority.
#[derive(Debug)]
pub struct Awaiting<K>(PhantomData<K>);

/// Every value has a priority; ready to pick.
#[derive(Debug)]
pub struct Ready<K>(PhantomData<K>);

/// States a selection can be picked from.
pub trait Drawable: sealed::Sealed {
    #[doc(hidden)]
    const UNIFORM: bool;
}

impl sealed::Sealed for Uniform {}
impl Drawable for Uniform {
    const UNIFORM: bool = true;
}

impl sealed::Sealed for Listed {}
impl Drawable for Listed {
    const UNIFORM: bool = true;
}

impl<K: Kind> sealed::Sealed for Ready<K> {}
impl<K: Kind> Drawable for Ready<K> {
    const UNIFORM: bool = false;
}

/// Entry point: owns the random source and hands out selections.
///
/// ```rust,ignore
/// use randpick::RandomPicker;
///
/// let mut rng = rand::rng();
/// let variant = RandomPicker::new(&mut rng)
///     .value("control")
///     .with_percentage(50)?
///     .and_value("treatment")
///     .with_percentage(10)?
///     .pick_one()?;
/// ```
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
    config: Config,
}

/// A picker backed by the thread-local RNG.
pub fn picker() -> RandomPicker<ThreadRng> {
    RandomPicker::new(rand::rng())
}

impl<R: RandomSource> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Start a selection with its first value.
    pub fn value<T>(self, value: T) -> Selection<T, R, Genesis> {
        Selection {
            rng: self.rng,
            config: self.config,
            entries: Entries::new(),
            pending: vec![value],
            _state: PhantomData,
        }
    }

    /// Start a selection with all of its values.
    ///
    /// # Errors
    /// [`PickError::NotEnoughValues`] if fewer than two values are given.
    pub fn values<T, I>(self, values: I) -> Result<Selection<T, R, Listed>, PickError>
    where
        I: IntoIterator<Item = T>,
    {
        let pending: Vec<T> = values.into_iter().collect();
        if pending.len() < 2 {
            return Err(PickError::NotEnoughValues {
                requested: 2,
                available: pending.len(),
            });
        }
        Ok(Selection {
            rng: self.rng,
            config: self.config,
            entries: Entries::new(),
            pending,
            _state: PhantomData,
        })
    }
}

/// A selection under construction. `S` is the builder state.
#[derive(Debug)]
pub struct Selection<T, R, S> {
    rng: R,
    config: Config,
    /// Values that already have a priority.
    entries: Entries<T>,
    /// Values still without one.
    pending: Vec<T>,
    _state: PhantomData<S>,
}

impl<T, R, S> Selection<T, R, S> {
    fn into_state<N>(self) -> Selection<T, R, N> {
        Selection {
            rng: self.rng,
            config: self.config,
            entries: self.entries,
            pending: self.pending,
            _state: PhantomData,
        }
    }

    fn push<N>(mut self, value: T) -> Selection<T, R, N> {
        self.pending.push(value);
        self.into_state()
    }

    /// Give every pending value its priority, in order.
    fn prioritize<N, P>(
        mut self,
        priorities: P,
        kind: PriorityKind,
    ) -> Result<Selection<T, R, N>, PickError>
    where
        P: IntoIterator<Item = i32>,
    {
        let pending = std::mem::take(&mut self.pending);
        self.entries.register_batch(pending, priorities, kind)?;
        Ok(self.into_state())
    }

    /// Number of values registered so far.
    pub fn len(&self) -> usize {
        self.entries.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, R> Selection<T, R, Genesis> {
    pub fn and_value(self, value: T) -> Selection<T, R, Uniform> {
        self.push(value)
    }

    pub fn with_weight(self, weight: i32) -> Result<Selection<T, R, Lone<Weight>>, PickError> {
        self.prioritize([weight], PriorityKind::Weight)
    }

    pub fn with_percentage(
        self,
        percentage: i32,
    ) -> Result<Selection<T, R, Lone<Percentage>>, PickError> {
        self.prioritize([percentage], PriorityKind::Percentage)
    }
}

impl<T, R> Selection<T, R, Uniform> {
    pub fn and_value(self, value: T) -> Selection<T, R, Uniform> {
        self.push(value)
    }
}

impl<T, R> Selection<T, R, Listed> {
    /// Weights for every listed value, in order.
    ///
    /// # Errors
    /// [`PickError::CountMismatch`] or [`PickError::InvalidPriority`].
    pub fn with_weights<P>(self, weights: P) -> Result<Selection<T, R, Ready<Weight>>, PickError>
    where
        P: IntoIterator<Item = i32>,
    {
        self.prioritize(weights, PriorityKind::Weight)
    }

    /// Percentages for every listed value, in order.
    ///
    /// # Errors
    /// [`PickError::CountMismatch`], [`PickError::InvalidPriority`] or
    /// [`PickError::PercentageOverflow`].
    pub fn with_percentages<P>(
        self,
        percentages: P,
    ) -> Result<Selection<T, R, Ready<Percentage>>, PickError>
    where
        P: IntoIterator<Item = i32>,
    {
        self.prioritize(percentages, PriorityKind::Percentage)
    }
}

impl<T, R, K: Kind> Selection<T, R, Lone<K>> {
    pub fn and_value(self, value: T) -> Selection<T, R, Awaiting<K>> {
        self.push(value)
    }
}

impl<T, R, K: Kind> Selection<T, R, Ready<K>> {
    pub fn and_value(self, value: T) -> Selection<T, R, Awaiting<K>> {
        self.push(value)
    }

    /// The validated candidates.
    pub fn entries(&self) -> &Entries<T> {
        &self.entries
    }

    pub fn into_entries(self) -> Entries<T> {
        self.entries
    }
}

impl<T, R> Selection<T, R, Awaiting<Weight>> {
    pub fn with_weight(self, weight: i32) -> Result<Selection<T, R, Ready<Weight>>, PickError> {
        self.prioritize([weight], Weight::KIND)
    }
}

impl<T, R> Selection<T, R, Awaiting<Percentage>> {
    pub fn with_percentage(
        self,
        percentage: i32,
    ) -> Result<Selection<T, R, Ready<Percentage>>, PickError> {
        self.prioritize([percentage], Percentage::KIND)
    }
}

impl<T, R: RandomSource, S: Drawable> Selection<T, R, S> {
    fn draw(&mut self, draw: Draw) -> Result<Vec<usize>, PickError> {
        if S::UNIFORM {
            let ones = vec![1; self.pending.len()];
            draw_indices(PriorityKind::Weight, &ones, draw, &mut self.rng, &self.config)
        } else {
            self.entries.draw(draw, &mut self.rng, &self.config)
        }
    }

    fn candidates(&self) -> &[T] {
        if S::UNIFORM {
            &self.pending
        } else {
            self.entries.values()
        }
    }

    /// Draw one value.
    pub fn pick_one(&mut self) -> Result<T, PickError>
    where
        T: Clone,
    {
        let idx = self.draw(Draw::One)?;
        Ok(self.candidates()[idx[0]].clone())
    }

    /// Draw `n` values with replacement, in draw order.
    ///
    /// # Errors
    /// [`PickError::InvalidCount`] if `n == 0`.
    pub fn pick(&mut self, n: usize) -> Result<Vec<T>, PickError>
    where
        T: Clone,
    {
        let idx = self.draw(Draw::WithReplacement(n))?;
        let values = self.candidates();
        Ok(idx.into_iter().map(|i| values[i].clone()).collect())
    }

    /// Draw `n` values at distinct positions, in draw order.
    ///
    /// # Errors
    /// * [`PickError::InvalidCount`] if `n == 0`.
    /// * [`PickError::NotEnoughValues`] if `n` exceeds the number of values.
    pub fn pick_distinct(&mut self, n: usize) -> Result<Vec<T>, PickError>
    where
        T: Clone,
    {
        let idx = self.draw(Draw::Distinct(n))?;
        let values = self.candidates();
        Ok(idx.into_iter().map(|i| values[i].clone()).collect())
    }
}
