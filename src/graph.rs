//! Fixed-layout cell containers with caller-driven recomputation.
//!
//! # Overview
//! - A [`ReactiveGraph`] owns a heterogeneous tuple of [`Cell`]s by value and
//!   stores no dependency metadata. Despite the name it is a storage
//!   container with one recompute primitive, not a dependency scheduler.
//! - Cells are addressed by compile-time position through the [`CellAt`]
//!   trait; an out-of-range index is an unsatisfied trait bound, never a
//!   runtime condition.
//! - Nothing propagates automatically: after mutating an upstream cell the
//!   caller must re-issue [`update_cell`] for every downstream cell, in a
//!   valid dependency order, or those cells go stale.
//!
//! ```
//! use cellflow::{Cell, ReactiveGraph};
//!
//! let graph = ReactiveGraph::new((Cell::new(5), Cell::new(10), Cell::new(0)));
//!
//! // c = a + b, recomputed when the caller says so.
//! graph.update_cell::<2, _>(|cells| cells.0.value() + cells.1.value());
//! assert_eq!(graph.get_cell::<2>().value(), 15);
//!
//! graph.get_cell::<0>().set_value(7);
//! assert_eq!(graph.get_cell::<2>().value(), 15); // stale until re-issued
//! graph.update_cell::<2, _>(|cells| cells.0.value() + cells.1.value());
//! assert_eq!(graph.get_cell::<2>().value(), 17);
//! ```
//!
//! [`update_cell`]: ReactiveGraph::update_cell

use crate::cell::Cell;

/// Compile-time indexed access to the cell at position `I` of a cell tuple.
///
/// Implemented for tuples of `Cell`s up to arity 8. Requesting an index the
/// tuple does not have fails to compile.
pub trait CellAt<const I: usize> {
    /// Value type of the cell at position `I`.
    type Value;

    /// The cell at position `I`.
    fn cell(&self) -> &Cell<Self::Value>;
}

macro_rules! impl_cell_at {
    ($idx:tt => $V:ident in ($($T:ident),+)) => {
        impl<$($T),+> CellAt<$idx> for ($(Cell<$T>,)+) {
            type Value = $V;

            #[inline]
            fn cell(&self) -> &Cell<$V> {
                &self.$idx
            }
        }
    };
}

impl_cell_at!(0 => A in (A));

impl_cell_at!(0 => A in (A, B));
impl_cell_at!(1 => B in (A, B));

impl_cell_at!(0 => A in (A, B, C));
impl_cell_at!(1 => B in (A, B, C));
impl_cell_at!(2 => C in (A, B, C));

impl_cell_at!(0 => A in (A, B, C, D));
impl_cell_at!(1 => B in (A, B, C, D));
impl_cell_at!(2 => C in (A, B, C, D));
impl_cell_at!(3 => D in (A, B, C, D));

impl_cell_at!(0 => A in (A, B, C, D, E));
impl_cell_at!(1 => B in (A, B, C, D, E));
impl_cell_at!(2 => C in (A, B, C, D, E));
impl_cell_at!(3 => D in (A, B, C, D, E));
impl_cell_at!(4 => E in (A, B, C, D, E));

impl_cell_at!(0 => A in (A, B, C, D, E, F));
impl_cell_at!(1 => B in (A, B, C, D, E, F));
impl_cell_at!(2 => C in (A, B, C, D, E, F));
impl_cell_at!(3 => D in (A, B, C, D, E, F));
impl_cell_at!(4 => E in (A, B, C, D, E, F));
impl_cell_at!(5 => F in (A, B, C, D, E, F));

impl_cell_at!(0 => A in (A, B, C, D, E, F, G));
impl_cell_at!(1 => B in (A, B, C, D, E, F, G));
impl_cell_at!(2 => C in (A, B, C, D, E, F, G));
impl_cell_at!(3 => D in (A, B, C, D, E, F, G));
impl_cell_at!(4 => E in (A, B, C, D, E, F, G));
impl_cell_at!(5 => F in (A, B, C, D, E, F, G));
impl_cell_at!(6 => G in (A, B, C, D, E, F, G));

impl_cell_at!(0 => A in (A, B, C, D, E, F, G, H));
impl_cell_at!(1 => B in (A, B, C, D, E, F, G, H));
impl_cell_at!(2 => C in (A, B, C, D, E, F, G, H));
impl_cell_at!(3 => D in (A, B, C, D, E, F, G, H));
impl_cell_at!(4 => E in (A, B, C, D, E, F, G, H));
impl_cell_at!(5 => F in (A, B, C, D, E, F, G, H));
impl_cell_at!(6 => G in (A, B, C, D, E, F, G, H));
impl_cell_at!(7 => H in (A, B, C, D, E, F, G, H));

/// Fixed-size, indexed ownership of a cell set plus an indexed recompute
/// primitive.
pub struct ReactiveGraph<Cells> {
    cells: Cells,
}

impl<Cells> ReactiveGraph<Cells> {
    /// Take ownership of the full cell set.
    pub const fn new(cells: Cells) -> Self {
        Self { cells }
    }

    /// The cell at compile-time position `I`.
    pub fn get_cell<const I: usize>(&self) -> &Cell<<Cells as CellAt<I>>::Value>
    where
        Cells: CellAt<I>,
    {
        <Cells as CellAt<I>>::cell(&self.cells)
    }

    /// Recompute the cell at position `I`: `recompute` reads the full cell
    /// set first, then its result is written into cell `I`. The read happens
    /// before the write, so `recompute` may legally read the very cell it is
    /// about to overwrite (it observes the pre-update value).
    pub fn update_cell<const I: usize, F>(&self, recompute: F)
    where
        Cells: CellAt<I>,
        F: FnOnce(&Cells) -> <Cells as CellAt<I>>::Value,
    {
        let next = recompute(&self.cells);
        <Cells as CellAt<I>>::cell(&self.cells).set_value(next);
    }

    /// Read-only access to the whole cell set.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }
}
