//! Terminal consumers of signal occurrences.
//!
//! A [`Sink`] is the end of a signal pipeline: actuation, logging, alarms.
//! Its stored handler runs if and only if the processed signal occurred; a
//! silent signal (or a vacant sink) has no observable effect.

use crate::fixed_fn::{DEFAULT_CAPACITY, FixedHandler};
use crate::signal::Signal;

/// Consumer invoked only on signal occurrence.
pub struct Sink<'f, T, const CAP: usize = DEFAULT_CAPACITY> {
    handler: FixedHandler<'f, T, CAP>,
}

impl<'f, T, const CAP: usize> Sink<'f, T, CAP> {
    /// A sink holding no handler; [`process`](Self::process) does nothing.
    pub const fn vacant() -> Self {
        Self {
            handler: FixedHandler::vacant(),
        }
    }

    /// Store `f` as the handler. Fails to compile if `f` does not fit in
    /// `CAP` bytes.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) + Clone + 'f,
    {
        Self {
            handler: FixedHandler::new(f),
        }
    }

    /// Whether a handler is stored.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.handler.is_set()
    }

    /// Invoke the handler with the signal's payload iff the signal occurred.
    pub fn process(&self, signal: &Signal<T>) {
        if signal.occurred() {
            self.handler.call(signal.value());
        }
    }
}

impl<'f, T, const CAP: usize> Clone for Sink<'f, T, CAP> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
        }
    }
}

impl<'f, T, const CAP: usize> Default for Sink<'f, T, CAP> {
    fn default() -> Self {
        Self::vacant()
    }
}
