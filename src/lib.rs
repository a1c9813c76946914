//! Reactive dataflow primitives for no-std embedded targets.
//!
//! # Highlights
//! - Continuous values ([`Cell`]), sampled computations ([`Behavior`]),
//!   discrete occurrences ([`Signal`]) and terminal consumers ([`Sink`]).
//! - Zero dynamic allocation: every closure lives in a fixed-capacity inline
//!   buffer ([`FixedThunk`]/[`FixedHandler`]), sized by a const parameter.
//! - No dispatch machinery: recomputation is explicit and caller-ordered.
//!
//! # Quick start
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
//! # No-std
//! The crate is `#![no_std]` by default. Tests require `std`.
//!
//! # Safety and concurrency
//! Single-threaded, synchronous execution: every operation runs to completion
//! on the caller's thread and the types are `!Sync`. Access from interrupt
//! handlers or other threads must be serialized externally before any
//! operation is invoked.
//!
//! # Semantics
//! - A callable larger than its configured buffer is rejected when the
//!   program is compiled; invoking a vacant callable yields a silent default.
//! - `Behavior::sample` re-executes its computation on every call, never
//!   memoizing; whether it tracks a live cell or a frozen snapshot is an
//!   explicit constructor choice.
//! - [`ReactiveGraph`] stores no dependency metadata: after an upstream
//!   write, the caller re-issues `update_cell` for each downstream cell in a
//!   valid order, or those cells go stale.
#![no_std]

pub mod behavior;
pub mod cell;
pub mod fixed_fn;
pub mod graph;
pub mod signal;
pub mod sink;

pub use behavior::{Behavior, lift2, lift3};
pub use cell::Cell;
pub use fixed_fn::{DEFAULT_CAPACITY, FixedHandler, FixedThunk, MAX_ALIGN};
pub use graph::{CellAt, ReactiveGraph};
pub use signal::{Signal, filter, merge};
pub use sink::Sink;

#[cfg(test)]
extern crate std;
