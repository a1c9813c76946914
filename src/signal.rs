//! Discrete event occurrences and their algebra.
//!
//! A [`Signal`] is a possibly-absent, single-instant value: either it
//! occurred in the current activation and carries a payload, or it did not
//! and its payload is a default-constructed placeholder with no meaning.
//! Signals are created per activation and never accumulate history.
//!
//! [`merge`] substitutes `Default::default()` for a non-occurring operand;
//! that is only sound when the type's default is neutral for the combiner
//! (zero for addition, one for multiplication, ...). The primitive does not
//! validate this — it is the caller's responsibility.

/// A possibly-absent, single-instant value.
#[derive(Clone, Copy, Debug)]
pub struct Signal<T> {
    value: T,
    occurred: bool,
}

impl<T: Default> Signal<T> {
    /// A signal that did not occur. The payload is `T::default()` and is
    /// semantically undefined.
    pub fn silent() -> Self {
        Self {
            value: T::default(),
            occurred: false,
        }
    }
}

impl<T> Signal<T> {
    /// A signal that occurred with `value`.
    pub const fn fired(value: T) -> Self {
        Self {
            value,
            occurred: true,
        }
    }

    /// Whether this instance carries a value from the current activation.
    #[inline]
    pub const fn occurred(&self) -> bool {
        self.occurred
    }

    /// The carried payload. Meaningless unless [`occurred`](Self::occurred)
    /// is true.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Mark the signal occurred with a new payload.
    pub fn fire(&mut self, value: T) {
        self.value = value;
        self.occurred = true;
    }

    /// Clear the occurrence flag. The payload is left in place but is no
    /// longer meaningful.
    pub fn reset(&mut self) {
        self.occurred = false;
    }

    /// Occurred signal of `f(value)` if this occurred, else a silent signal
    /// of the mapped type.
    pub fn map<U, F>(&self, f: F) -> Signal<U>
    where
        U: Default,
        F: FnOnce(&T) -> U,
    {
        if self.occurred {
            Signal::fired(f(&self.value))
        } else {
            Signal::silent()
        }
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::silent()
    }
}

/// Pass `signal` through unchanged if it occurred and `predicate` holds;
/// otherwise a silent signal.
pub fn filter<T, F>(signal: &Signal<T>, predicate: F) -> Signal<T>
where
    T: Clone + Default,
    F: FnOnce(&T) -> bool,
{
    if signal.occurred() && predicate(signal.value()) {
        Signal::fired(signal.value().clone())
    } else {
        Signal::silent()
    }
}

/// Combine two signals into one that occurs when either operand occurred.
/// A missing operand is substituted with its type's default; see the module
/// docs for when that substitution is sound.
pub fn merge<T, U, R, F>(a: &Signal<T>, b: &Signal<U>, combine: F) -> Signal<R>
where
    T: Clone + Default,
    U: Clone + Default,
    R: Default,
    F: FnOnce(T, U) -> R,
{
    match (a.occurred(), b.occurred()) {
        (true, true) => Signal::fired(combine(a.value().clone(), b.value().clone())),
        (true, false) => Signal::fired(combine(a.value().clone(), U::default())),
        (false, true) => Signal::fired(combine(T::default(), b.value().clone())),
        (false, false) => Signal::silent(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Signal, filter, merge};

    #[test]
    fn silent_signal_has_not_occurred() {
        let signal = Signal::<i32>::silent();
        assert!(!signal.occurred());
    }

    #[test]
    fn fired_signal_carries_its_value() {
        let signal = Signal::fired(42);
        assert!(signal.occurred());
        assert_eq!(*signal.value(), 42);
    }

    #[test]
    fn reset_then_fire_round_trip() {
        let mut signal = Signal::fired(42);

        signal.reset();
        assert!(!signal.occurred());

        signal.fire(100);
        assert!(signal.occurred());
        assert_eq!(*signal.value(), 100);
    }

    #[test]
    fn map_transforms_an_occurred_signal() {
        let mapped = Signal::fired(100).map(|v| v * 2);
        assert!(mapped.occurred());
        assert_eq!(*mapped.value(), 200);
    }

    #[test]
    fn map_propagates_silence() {
        let mapped = Signal::<i32>::silent().map(|v| v * 2);
        assert!(!mapped.occurred());
    }

    #[test]
    fn filter_keeps_passing_values() {
        let kept = filter(&Signal::fired(10), |v| *v > 5);
        assert!(kept.occurred());
        assert_eq!(*kept.value(), 10);
    }

    #[test]
    fn filter_drops_failing_values() {
        let dropped = filter(&Signal::fired(10), |v| *v > 15);
        assert!(!dropped.occurred());
    }

    #[test]
    fn merge_combines_both_occurrences() {
        let sum = merge(&Signal::fired(10), &Signal::fired(20), |a, b| a + b);
        assert!(sum.occurred());
        assert_eq!(*sum.value(), 30);
    }

    #[test]
    fn merge_substitutes_default_for_missing_operand() {
        let sum = merge(&Signal::fired(10), &Signal::<i32>::silent(), |a, b| a + b);
        assert!(sum.occurred());
        assert_eq!(*sum.value(), 10);

        let sum = merge(&Signal::<i32>::silent(), &Signal::fired(20), |a, b| a + b);
        assert!(sum.occurred());
        assert_eq!(*sum.value(), 20);
    }

    #[test]
    fn merge_of_two_silent_signals_is_silent() {
        let none = merge(&Signal::<i32>::silent(), &Signal::<i32>::silent(), |a, b| {
            a + b
        });
        assert!(!none.occurred());
    }
}
