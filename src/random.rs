//! Uniform random numbers consumed by the samplers.

use rand::{Rng, RngCore};

use crate::error::PickError;

/// A source of uniformly distributed numbers.
///
/// Every [`rand::RngCore`] is a `RandomSource`, so `rand::rng()`, seeded
/// `StdRng`s and `&mut` references to them can be handed to a picker as is.
/// [`ScriptedSource`] replays a fixed script for deterministic tests.
pub trait RandomSource {
    /// Any `i32`.
    fn next_int(&mut self) -> i32;

    /// An `i32` in `[0, bound)`.
    ///
    /// # Errors
    /// [`PickError::InvalidBound`] if `bound <= 0`.
    fn next_int_below(&mut self, bound: i32) -> Result<i32, PickError>;

    /// An `i32` in `[min, max)`.
    ///
    /// # Errors
    /// [`PickError::InvalidBound`] if `max <= min`.
    fn next_int_between(&mut self, min: i32, max: i32) -> Result<i32, PickError>;

    /// An `f64` in `[0.0, 1.0)`.
    fn next_double(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn next_int(&mut self) -> i32 {
        self.random()
    }

    #[inline]
    fn next_int_below(&mut self, bound: i32) -> Result<i32, PickError> {
        self.next_int_between(0, bound)
    }

    #[inline]
    fn next_int_between(&mut self, min: i32, max: i32) -> Result<i32, PickError> {
        if max <= min {
            return Err(PickError::InvalidBound { min, max });
        }
        Ok(self.random_range(min..max))
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        self.random()
    }
}

/// Replays a fixed, cyclic script of numbers.
///
/// Integers are reduced into the requested range with a Euclidean remainder,
/// so a script can be written in terms of table points directly. Doubles are
/// clamped into `[0.0, 1.0)`. An empty script yields zeros.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    ints: Vec<i32>,
    doubles: Vec<f64>,
    next_int: usize,
    next_double: usize,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = i32>>(ints: I) -> Self {
        Self {
            ints: ints.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_doubles<I: IntoIterator<Item = f64>>(mut self, doubles: I) -> Self {
        self.doubles = doubles.into_iter().collect();
        self
    }

    /// Number of integers handed out so far.
    pub fn ints_drawn(&self) -> usize {
        self.next_int
    }

    fn raw_int(&mut self) -> i32 {
        if self.ints.is_empty() {
            return 0;
        }
        let v = self.ints[self.next_int % self.ints.len()];
        self.next_int += 1;
        v
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self) -> i32 {
        self.raw_int()
    }

    fn next_int_below(&mut self, bound: i32) -> Result<i32, PickError> {
        self.next_int_between(0, bound)
    }

    fn next_int_between(&mut self, min: i32, max: i32) -> Result<i32, PickError> {
        if max <= min {
            return Err(PickError::InvalidBound { min, max });
        }
        let span = i64::from(max) - i64::from(min);
        let offset = i64::from(self.raw_int()).rem_euclid(span);
        // min + offset < max, so this always fits back into an i32
        Ok((i64::from(min) + offset) as i32)
    }

    fn next_double(&mut self) -> f64 {
        if self.doubles.is_empty() {
            return 0.0;
        }
        let v = self.doubles[self.next_double % self.doubles.len()];
        self.next_double += 1;
        if v.is_finite() {
            v.clamp(0.0, 1.0 - f64::EPSILON)
        } else {
            0.0
        }
    }
}
