//! # randpick
//!
//! Pick values at random according to weights or percentages: rollout
//! percentages for feature flags, weighted A/B buckets, or a random choice
//! among configuration variants.
//!
//! Candidates are laid out as a cumulative distribution table and a point is
//! drawn into it; the owner of that point is the pick. Three kinds of draw
//! are supported: one value, `n` values with replacement, and `n` values at
//! distinct positions (without replacement, still proportional among what is
//! left).
//!
//! There are three ways in:
//!
//! 1. The **fluent builder** starting at [`RandomPicker`] (or [`picker`]).
//! 2. **Ad-hoc pairs** with [`Entries::from_pairs`].
//! 3. **Compile-time enums** with the [`Pickable`] derive macro (from the
//!    companion `randpick_macros` crate).
//!
//! ## Quick start (builder)
//!
//! ```rust,ignore
//! use randpick::RandomPicker;
//!
//! # fn main() -> Result<(), randpick::PickError> {
//! let mut rng = rand::rng();
//! let tier = RandomPicker::new(&mut rng)
//!     .value("common")
//!     .with_weight(60)?
//!     .and_value("rare")
//!     .with_weight(9)?
//!     .and_value("legendary")
//!     .with_weight(1)?
//!     .pick_one()?;
//! println!("you got: {tier}");
//! # Ok(()) }
//! ```
//!
//! ## Quick start (enum + macro)
//!
//! ```rust,ignore
//! use randpick::Pickable;
//!
//! #[derive(Copy, Clone, Debug, Pickable)]
//! enum Variant {
//!     #[percentage(90)] Control,
//!     #[percentage(5)]  NewCheckout,
//!     #[percentage(5)]  NewSearch,
//! }
//!
//! # fn main() -> Result<(), randpick::PickError> {
//! let mut rng = rand::rng();
//! let v = Variant::pick_one(&mut rng)?;
//! # Ok(()) }
//! ```
//!
//! ## Weights vs. percentages
//! * **Weights** are relative: `[1, 3]` picks the second value 75% of the time.
//! * **Percentages** are out of a fixed 100 and may sum to less. The rest is
//!   a dead zone that is never picked: a single value at 30% behaves like a
//!   rollout where 70% of draws are redrawn. Distinct draws drop the fixed
//!   100 and share out the live percentages instead.
//!
//! ## Performance
//! * **Build**: O(n) per draw call; tables are never cached.
//! * **Sample**: O(log n) per point (binary search over cumulative bounds).
//! * **Distinct**: O(n * m), one fresh table per pick.
//!
//! ## Randomness
//! Any [`rand::RngCore`] works as a [`RandomSource`]. For exact tests, use
//! [`ScriptedSource`].

extern crate self as randpick;

pub mod builder;
mod config;
mod distinct;
mod error;
mod pick;
mod priority;
mod random;
mod sampler;
mod table;

pub use builder::{RandomPicker, Selection, picker};
pub use config::Config;
pub use distinct::DistinctSampler;
pub use error::PickError;
pub use pick::{Draw, draw_indices};
pub use priority::{Entries, Entry, PERCENT, PriorityKind};
pub use random::{RandomSource, ScriptedSource};
pub use sampler::Sampler;
pub use table::{DistributionTable, Span};

/// Derive macro imported from `randpick_macros`.
/// See the crate-level example for usage.
pub use randpick_macros::Pickable;

/// Trait implemented by the `Pickable` derive macro.
///
/// Each variant and its priority is exposed via [`Pickable::ENTRIES`], all
/// of kind [`Pickable::KIND`].
pub trait Pickable: Sized + 'static {
    const KIND: PriorityKind;

    /// All `(variant, priority)` pairs, in declaration order.
    const ENTRIES: &'static [(Self, i32)];

    /// Validated candidates built from [`ENTRIES`](Self::ENTRIES).
    ///
    /// # Errors
    /// See [`Entries::register`]: non-positive priorities and percentages
    /// summing past 100 are rejected.
    fn entries() -> Result<Entries<Self>, PickError>
    where
        Self: Copy,
    {
        Entries::from_pairs(Self::ENTRIES.iter().copied(), Self::KIND)
    }

    /// Draw one variant.
    fn pick_one<S: RandomSource + ?Sized>(rng: &mut S) -> Result<Self, PickError>
    where
        Self: Copy,
    {
        Self::entries()?.pick_one(rng)
    }

    /// Draw `n` variants with replacement.
    fn pick<S: RandomSource + ?Sized>(n: usize, rng: &mut S) -> Result<Vec<Self>, PickError>
    where
        Self: Copy,
    {
        Self::entries()?.pick(n, rng)
    }

    /// Draw `n` distinct variants.
    fn pick_distinct<S: RandomSource + ?Sized>(
        n: usize,
        rng: &mut S,
    ) -> Result<Vec<Self>, PickError>
    where
        Self: Copy,
    {
        Self::entries()?.pick_distinct(n, rng)
    }
}
