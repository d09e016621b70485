//! Geometry fields over the first two logical axes.
//!
//! A [`GeomField`] stores `slots` values per `(i, j)` zone. Zones are laid out
//! `i`-major, `j`-minor, and the slots of one zone are contiguous, so each
//! zone is a disjoint chunk of the backing buffer.

use core::marker::PhantomData;

use bytemuck::Pod;

use crate::data::storage::{Storage, VecStorage};
use crate::debug_invariants::DebugInvariants;
use crate::geometry_error::GeometryError;

/// Shaped `(slot, i, j)` field backed by a [`Storage`].
#[derive(Clone, Debug)]
pub struct GeomField<V, S: Storage<V> = VecStorage<V>> {
    name: &'static str,
    n1: usize,
    n2: usize,
    slots: usize,
    storage: S,
    _pd: PhantomData<V>,
}

impl<V, S> GeomField<V, S>
where
    V: Clone,
    S: Storage<V>,
{
    /// Allocate an `n1 x n2` field with `slots` entries per zone, filled with `fill`.
    pub fn new(name: &'static str, n1: usize, n2: usize, slots: usize, fill: V) -> Self {
        Self {
            name,
            n1,
            n2,
            slots,
            storage: S::with_len(n1 * n2 * slots, fill),
            _pd: PhantomData,
        }
    }
}

impl<V, S: Storage<V>> GeomField<V, S> {
    /// Label used in logs and invariant errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `(n1, n2, slots)`.
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.n1, self.n2, self.slots)
    }

    #[inline]
    fn offset(&self, slot: usize, i: usize, j: usize) -> usize {
        (i * self.n2 + j) * self.slots + slot
    }

    /// Value at `(slot, i, j)`.
    ///
    /// # Panics
    /// Panics if the flat offset is outside the buffer.
    #[inline]
    pub fn get(&self, slot: usize, i: usize, j: usize) -> &V {
        &self.storage.as_slice()[self.offset(slot, i, j)]
    }

    /// The whole buffer in zone-major order.
    pub fn as_slice(&self) -> &[V] {
        self.storage.as_slice()
    }

    /// Mutable buffer; chunk it by `slots` to get one zone per chunk.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [V] {
        self.storage.as_mut_slice()
    }
}

impl<V: Pod, S: Storage<V>> GeomField<V, S> {
    /// Zero-copy view of the buffer as scalars, for staging to a device.
    pub fn as_scalars<T: Pod>(&self) -> &[T] {
        bytemuck::cast_slice(self.storage.as_slice())
    }
}

impl<V, S: Storage<V>> DebugInvariants for GeomField<V, S> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "GeomField invalid");
    }

    fn validate_invariants(&self) -> Result<(), GeometryError> {
        let expected = self.n1 * self.n2 * self.slots;
        if self.storage.len() != expected {
            return Err(GeometryError::InvariantViolation(format!(
                "field `{}` holds {} values, shape {}x{}x{} needs {expected}",
                self.name,
                self.storage.len(),
                self.n1,
                self.n2,
                self.slots
            )));
        }
        Ok(())
    }
}
