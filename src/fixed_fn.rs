//! Type-erased callables stored in a fixed-capacity inline buffer.
//!
//! # Overview
//! - A stored callable lives entirely inside a `CAP`-byte buffer owned by the
//!   wrapper; there is no heap allocation, no reference counting and no `dyn`
//!   pointer to external storage.
//! - Two wrappers cover the signatures the crate needs: [`FixedThunk`] for
//!   `Fn() -> R` and [`FixedHandler`] for `Fn(&T)`.
//! - A callable whose size exceeds `CAP` (or whose alignment exceeds the
//!   buffer's 16-byte alignment) is rejected when the program is compiled,
//!   never at runtime.
//! - Calling a vacant wrapper yields `R::default()` (or does nothing for a
//!   handler) instead of failing.
//!
//! # Layout
//! Each wrapper owns a slot: the aligned byte buffer plus bound `copy`
//! and `destroy` function pointers, and adds its own bound `invoke` pointer.
//! The three pointers are simultaneously `None` (vacant) or simultaneously
//! `Some` (holding exactly one live value). Cloning runs the bound copier
//! into a fresh buffer, so clones carry independent value-copies of the
//! captured state; dropping runs the bound destroyer exactly once.
//!
//! # Notes
//! - Stored callables must be `Clone`; the bound copier is how a wrapper
//!   duplicates its payload without knowing its type.
//! - The wrappers are `!Send` and `!Sync`: the stored callable's auto traits
//!   are erased, and the crate's contract is single-threaded anyway.

use core::marker::PhantomData;
use core::mem::MaybeUninit;

/// Default buffer capacity, in bytes, for [`FixedThunk`] and [`FixedHandler`]
/// (and the `Behavior`/`Sink` types built on them).
pub const DEFAULT_CAPACITY: usize = 64;

/// Buffer alignment. Callables with a stricter alignment are rejected at
/// compile time.
pub const MAX_ALIGN: usize = 16;

type InvokeThunk<R> = unsafe fn(*const u8) -> R;
type InvokeHandler<T> = unsafe fn(*const u8, &T);
type CopyFn = unsafe fn(*mut u8, *const u8);
type DestroyFn = unsafe fn(*mut u8);

#[repr(align(16))]
struct Storage<const CAP: usize>(MaybeUninit<[u8; CAP]>);

unsafe fn invoke_thunk<R, F: Fn() -> R>(callee: *const u8) -> R {
    unsafe { (*callee.cast::<F>())() }
}

unsafe fn invoke_handler<T, F: Fn(&T)>(callee: *const u8, arg: &T) {
    unsafe { (*callee.cast::<F>())(arg) }
}

unsafe fn copy_value<F: Clone>(dst: *mut u8, src: *const u8) {
    let duplicate = unsafe { (*src.cast::<F>()).clone() };
    unsafe { dst.cast::<F>().write(duplicate) };
}

unsafe fn destroy_value<F>(target: *mut u8) {
    unsafe { target.cast::<F>().drop_in_place() };
}

/// Buffer plus the bound copy/destroy pair. `copy`/`destroy` are `Some` iff
/// the buffer holds a live value. Carries `'f` so that dropck keeps captured
/// borrows live until the destroyer has run.
struct Slot<'f, const CAP: usize> {
    bytes: Storage<CAP>,
    copy: Option<CopyFn>,
    destroy: Option<DestroyFn>,
    _capture: PhantomData<&'f ()>,
}

impl<'f, const CAP: usize> Slot<'f, CAP> {
    const fn vacant() -> Self {
        Self {
            bytes: Storage(MaybeUninit::uninit()),
            copy: None,
            destroy: None,
            _capture: PhantomData,
        }
    }

    /// Move `value` into the buffer. Size and alignment bounds are checked
    /// when this function is instantiated, so an oversized callable is a
    /// compile error at the construction site.
    fn emplace<F: Clone + 'f>(value: F) -> Self {
        const {
            assert!(
                size_of::<F>() <= CAP,
                "stored callable exceeds the configured capacity"
            )
        };
        const {
            assert!(
                align_of::<F>() <= MAX_ALIGN,
                "stored callable exceeds the buffer alignment"
            )
        };

        let mut slot = Self::vacant();
        unsafe { slot.bytes.0.as_mut_ptr().cast::<F>().write(value) };
        slot.copy = Some(copy_value::<F>);
        slot.destroy = Some(destroy_value::<F>);
        slot
    }

    #[inline]
    fn payload(&self) -> *const u8 {
        self.bytes.0.as_ptr().cast()
    }

    #[inline]
    fn payload_mut(&mut self) -> *mut u8 {
        self.bytes.0.as_mut_ptr().cast()
    }
}

impl<'f, const CAP: usize> Clone for Slot<'f, CAP> {
    fn clone(&self) -> Self {
        let mut fresh = Self::vacant();
        if let Some(copy) = self.copy {
            unsafe { copy(fresh.payload_mut(), self.payload()) };
            fresh.copy = self.copy;
            fresh.destroy = self.destroy;
        }
        fresh
    }
}

impl<'f, const CAP: usize> Drop for Slot<'f, CAP> {
    fn drop(&mut self) {
        if let Some(destroy) = self.destroy {
            unsafe { destroy(self.payload_mut()) };
        }
    }
}

/// Zero-argument callable producing `R`, stored inline.
///
/// `'f` bounds any borrows captured by the stored closure.
pub struct FixedThunk<'f, R, const CAP: usize = DEFAULT_CAPACITY> {
    slot: Slot<'f, CAP>,
    invoke: Option<InvokeThunk<R>>,
    // Erasing the callable erases its auto traits; opt out of Send/Sync.
    _not_sync: PhantomData<*const ()>,
}

impl<'f, R, const CAP: usize> FixedThunk<'f, R, CAP> {
    /// A thunk holding no callable. [`call`](Self::call) yields
    /// `R::default()`.
    pub const fn vacant() -> Self {
        Self {
            slot: Slot::vacant(),
            invoke: None,
            _not_sync: PhantomData,
        }
    }

    /// Store `f` in place. Fails to compile if `f` does not fit in `CAP`
    /// bytes.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> R + Clone + 'f,
    {
        Self {
            slot: Slot::emplace(f),
            invoke: Some(invoke_thunk::<R, F>),
            _not_sync: PhantomData,
        }
    }

    /// Whether a callable is currently held.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.invoke.is_some()
    }

    /// Invoke the stored callable, or produce `R::default()` when vacant.
    #[inline]
    pub fn call(&self) -> R
    where
        R: Default,
    {
        match self.invoke {
            Some(invoke) => unsafe { invoke(self.slot.payload()) },
            None => R::default(),
        }
    }
}

impl<'f, R, const CAP: usize> Clone for FixedThunk<'f, R, CAP> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            invoke: self.invoke,
            _not_sync: PhantomData,
        }
    }
}

impl<'f, R, const CAP: usize> Default for FixedThunk<'f, R, CAP> {
    fn default() -> Self {
        Self::vacant()
    }
}

/// Callable consuming `&T`, stored inline. Calling a vacant handler does
/// nothing.
pub struct FixedHandler<'f, T, const CAP: usize = DEFAULT_CAPACITY> {
    slot: Slot<'f, CAP>,
    invoke: Option<InvokeHandler<T>>,
    _not_sync: PhantomData<*const ()>,
}

impl<'f, T, const CAP: usize> FixedHandler<'f, T, CAP> {
    /// A handler holding no callable.
    pub const fn vacant() -> Self {
        Self {
            slot: Slot::vacant(),
            invoke: None,
            _not_sync: PhantomData,
        }
    }

    /// Store `f` in place. Fails to compile if `f` does not fit in `CAP`
    /// bytes.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) + Clone + 'f,
    {
        Self {
            slot: Slot::emplace(f),
            invoke: Some(invoke_handler::<T, F>),
            _not_sync: PhantomData,
        }
    }

    /// Whether a callable is currently held.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.invoke.is_some()
    }

    /// Invoke the stored callable with `arg`; no-op when vacant.
    #[inline]
    pub fn call(&self, arg: &T) {
        if let Some(invoke) = self.invoke {
            unsafe { invoke(self.slot.payload(), arg) };
        }
    }
}

impl<'f, T, const CAP: usize> Clone for FixedHandler<'f, T, CAP> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            invoke: self.invoke,
            _not_sync: PhantomData,
        }
    }
}

impl<'f, T, const CAP: usize> Default for FixedHandler<'f, T, CAP> {
    fn default() -> Self {
        Self::vacant()
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedHandler, FixedThunk};
    use std::rc::Rc;

    #[test]
    fn vacant_thunk_yields_default() {
        let thunk = FixedThunk::<i32>::vacant();
        assert!(!thunk.is_set());
        assert_eq!(thunk.call(), 0);
    }

    #[test]
    fn vacant_handler_is_noop() {
        let handler = FixedHandler::<i32>::vacant();
        assert!(!handler.is_set());
        handler.call(&42);
    }

    #[test]
    fn stores_and_invokes() {
        let base = 40;
        let thunk = FixedThunk::<i32>::new(move || base + 2);
        assert!(thunk.is_set());
        assert_eq!(thunk.call(), 42);
    }

    #[test]
    fn handler_sees_argument() {
        let seen = core::cell::Cell::new(0);
        let handler = FixedHandler::<i32>::new(|v| seen.set(*v));
        handler.call(&7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn clones_carry_independent_captured_state() {
        let counter = FixedThunk::<u32>::new({
            let count = core::cell::Cell::new(0u32);
            move || {
                count.set(count.get() + 1);
                count.get()
            }
        });

        assert_eq!(counter.call(), 1);
        assert_eq!(counter.call(), 2);

        // The twin starts from a copy of the captured state at clone time.
        let twin = counter.clone();
        assert_eq!(twin.call(), 3);
        assert_eq!(counter.call(), 3);
        assert_eq!(twin.call(), 4);
    }

    #[test]
    fn drops_stored_callable_exactly_once() {
        let payload = Rc::new(());

        let thunk = FixedThunk::<()>::new({
            let held = Rc::clone(&payload);
            move || {
                let _ = &held;
            }
        });
        assert_eq!(Rc::strong_count(&payload), 2);

        let twin = thunk.clone();
        assert_eq!(Rc::strong_count(&payload), 3);

        drop(thunk);
        assert_eq!(Rc::strong_count(&payload), 2);
        drop(twin);
        assert_eq!(Rc::strong_count(&payload), 1);
    }

    #[test]
    fn reassignment_drops_prior_value() {
        let payload = Rc::new(());
        let calls = core::cell::Cell::new(0u32);

        let mut thunk = FixedThunk::<()>::new({
            let held = Rc::clone(&payload);
            move || {
                let _ = &held;
            }
        });
        assert_eq!(Rc::strong_count(&payload), 2);

        thunk = FixedThunk::<()>::new({
            let calls = &calls;
            move || calls.set(calls.get() + 1)
        });
        assert_eq!(Rc::strong_count(&payload), 1);

        // The replacement is live and invocable.
        thunk.call();
        assert_eq!(calls.get(), 1);
    }
}
