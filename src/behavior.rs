//! Re-evaluated-on-demand computations over current state.
//!
//! # Overview
//! - A [`Behavior`] owns one zero-argument [`FixedThunk`]; [`sample`]
//!   re-executes the stored computation on every call, never memoizing.
//! - Whether a behavior tracks a live cell or freezes a past value is an
//!   explicit constructor choice: [`Behavior::tracking`] captures the cell by
//!   reference, [`Behavior::snapshot`] samples once and captures the value.
//! - `map`/`lift2`/`lift3` build derived behaviors whose closures capture the
//!   operand behaviors by value (cloned); each sample pulls fresh samples
//!   from the operands.
//!
//! # Capacity
//! Composition grows the captured footprint: a derived closure carries a
//! value-copy of each operand behavior, buffer included. The output capacity
//! `OUT` is therefore an explicit const parameter, named at the composition
//! site through a turbofish or a binding annotation; an undersized `OUT` is
//! a compile error at the composition site, never a runtime failure. Const
//! parameter defaults do not participate in inference, so a constructor in
//! the middle of a chain also needs its value type pinned, as in
//! `Behavior::<i32>::tracking(&cell)`.
//!
//! ```
//! use cellflow::{Behavior, Cell};
//!
//! let celsius = Cell::new(20);
//! let fahrenheit: Behavior<'_, i32, 128> =
//!     Behavior::<i32>::tracking(&celsius).map(|c| c * 9 / 5 + 32);
//!
//! assert_eq!(fahrenheit.sample(), 68);
//! celsius.set_value(25);
//! assert_eq!(fahrenheit.sample(), 77);
//! ```
//!
//! [`sample`]: Behavior::sample

use crate::cell::Cell;
use crate::fixed_fn::{DEFAULT_CAPACITY, FixedThunk};

/// Current value of a computation, re-evaluated on every sample.
pub struct Behavior<'f, T, const CAP: usize = DEFAULT_CAPACITY> {
    thunk: FixedThunk<'f, T, CAP>,
}

impl<'f, T, const CAP: usize> Behavior<'f, T, CAP> {
    /// A behavior holding no computation; samples to `T::default()`.
    pub const fn vacant() -> Self {
        Self {
            thunk: FixedThunk::vacant(),
        }
    }

    /// Build a behavior from an arbitrary computation.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> T + Clone + 'f,
    {
        Self {
            thunk: FixedThunk::new(f),
        }
    }

    /// A behavior that always samples to `value`.
    pub fn constant(value: T) -> Self
    where
        T: Clone + 'f,
    {
        Self::new(move || value.clone())
    }

    /// Track a live reference: the behavior reads `cell` at every sample, so
    /// later `set_value` calls are visible.
    pub fn tracking(cell: &'f Cell<T>) -> Self
    where
        T: Clone,
    {
        Self::new(move || cell.value())
    }

    /// Freeze a snapshot: the cell is sampled once, now, and the behavior
    /// stays at that value regardless of later mutation.
    pub fn snapshot(cell: &Cell<T>) -> Self
    where
        T: Clone + 'f,
    {
        Self::constant(cell.value())
    }

    /// Whether a computation is stored.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.thunk.is_set()
    }

    /// Execute the stored computation and return its result. Every call
    /// recomputes; a vacant behavior yields `T::default()`.
    #[inline]
    pub fn sample(&self) -> T
    where
        T: Default,
    {
        self.thunk.call()
    }

    /// Derive a behavior sampling as `f(self.sample())`. The new closure
    /// captures a value-copy of `self`; pick `OUT` large enough to hold it
    /// (a `CAP`-byte behavior needs roughly `CAP + 32` bytes plus `f`'s
    /// captures).
    pub fn map<U, F, const OUT: usize>(&self, f: F) -> Behavior<'f, U, OUT>
    where
        F: Fn(T) -> U + Clone + 'f,
        T: Default + 'f,
    {
        let inner = self.clone();
        Behavior::new(move || f(inner.sample()))
    }
}

impl<'f, T, const CAP: usize> Clone for Behavior<'f, T, CAP> {
    fn clone(&self) -> Self {
        Self {
            thunk: self.thunk.clone(),
        }
    }
}

impl<'f, T, const CAP: usize> Default for Behavior<'f, T, CAP> {
    fn default() -> Self {
        Self::vacant()
    }
}

/// Lift a two-argument function over behaviors: the result samples as
/// `combine(a.sample(), b.sample())`, recomputed fresh on every call.
/// Operand behaviors are captured by value inside the new closure.
pub fn lift2<'f, A, B, R, F, const CA: usize, const CB: usize, const OUT: usize>(
    combine: F,
    a: &Behavior<'f, A, CA>,
    b: &Behavior<'f, B, CB>,
) -> Behavior<'f, R, OUT>
where
    F: Fn(A, B) -> R + Clone + 'f,
    A: Default + 'f,
    B: Default + 'f,
{
    let (a, b) = (a.clone(), b.clone());
    Behavior::new(move || combine(a.sample(), b.sample()))
}

/// Three-operand [`lift2`].
pub fn lift3<'f, A, B, C, R, F, const CA: usize, const CB: usize, const CC: usize, const OUT: usize>(
    combine: F,
    a: &Behavior<'f, A, CA>,
    b: &Behavior<'f, B, CB>,
    c: &Behavior<'f, C, CC>,
) -> Behavior<'f, R, OUT>
where
    F: Fn(A, B, C) -> R + Clone + 'f,
    A: Default + 'f,
    B: Default + 'f,
    C: Default + 'f,
{
    let (a, b, c) = (a.clone(), b.clone(), c.clone());
    Behavior::new(move || combine(a.sample(), b.sample(), c.sample()))
}
