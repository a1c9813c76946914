//! Current-value storage for a time-varying quantity.
//!
//! A [`Cell`] holds exactly one value: no history, no subscribers, no
//! dependency awareness. Writes go through `&self` (interior mutability) so
//! that a live `Behavior` can keep observing a cell that application code
//! continues to mutate. Cells are single-threaded (`!Sync`); serialize any
//! interrupt-context access externally before touching one.

use core::cell::RefCell;
use core::fmt;

/// Mutable single-value holder.
///
/// Values are expected to be small `Copy`-ish types on embedded targets;
/// [`value`](Cell::value) returns a clone so no borrow of the inner storage
/// ever escapes into user code.
pub struct Cell<T> {
    value: RefCell<T>,
}

impl<T> Cell<T> {
    /// Create a cell with an explicit initial value.
    pub const fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
        }
    }

    /// Read the current value.
    #[inline]
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Replace the current value unconditionally. No validation, no
    /// notification: dependents stay stale until the caller recomputes them.
    #[inline]
    pub fn set_value(&self, next: T) {
        self.value.replace(next);
    }

    /// One-shot projection: returns a new, independent cell holding
    /// `project(current)` evaluated now. Later mutation of `self` does not
    /// affect the returned cell.
    pub fn map<U, F>(&self, project: F) -> Cell<U>
    where
        F: FnOnce(&T) -> U,
    {
        Cell::new(project(&*self.value.borrow()))
    }
}

impl<T: Clone> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Cell::new(self.value())
    }
}

impl<T: Default> Default for Cell<T> {
    fn default() -> Self {
        Cell::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cell").field(&*self.value.borrow()).finish()
    }
}
