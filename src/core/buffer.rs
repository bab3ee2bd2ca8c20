//! Grow-only buffer backing array shapes and elements.
//!
//! Result arrays are reused across many primitive calls, so a buffer keeps
//! its allocation when the logical length drops and only reallocates when a
//! request exceeds what it already holds.

use std::fmt;

use super::error::{AllocationStage, KernelError, KernelResult};

/// A buffer with a logical length that never shrinks its allocation.
///
/// Entries past `len` are initialized storage but not part of the value.
#[derive(Clone)]
pub struct GrowBuffer<T> {
    data: Vec<T>,
    len: usize,
    stage: AllocationStage,
}

impl<T: fmt::Debug> fmt::Debug for GrowBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.data[..self.len]).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowBuffer<T> {}

impl<T> GrowBuffer<T> {
    /// Create an empty buffer whose allocation failures report `stage`.
    pub const fn new(stage: AllocationStage) -> Self {
        Self {
            data: Vec::new(),
            len: 0,
            stage,
        }
    }

    /// Take ownership of an already allocated vector.
    pub fn from_vec(stage: AllocationStage, data: Vec<T>) -> Self {
        let len = data.len();
        Self { data, len, stage }
    }

    /// Logical length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of entries the buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Whether any memory is held.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.data.capacity() > 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Drop the allocation and return to the empty state.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.len = 0;
    }

    /// Buffer kind reported on allocation failure.
    #[inline]
    pub fn stage(&self) -> AllocationStage {
        self.stage
    }
}

impl<T: Copy + Default> GrowBuffer<T> {
    /// Set the logical length to `needed`, growing the allocation only if
    /// `needed` exceeds the current capacity. Existing entries are kept.
    pub fn ensure_len(&mut self, needed: usize) -> KernelResult<()> {
        if needed > self.data.len() {
            let additional = needed - self.data.len();
            if let Err(e) = self.data.try_reserve_exact(additional) {
                log::error!("cannot grow {} buffer to {} entries: {}", self.stage(), needed, e);
                return Err(KernelError::AllocationFailure {
                    stage: self.stage(),
                    requested: needed,
                });
            }
            log::trace!("grew {} buffer {} -> {}", self.stage(), self.data.len(), needed);
            self.data.resize(needed, T::default());
        }
        self.len = needed;
        Ok(())
    }

    /// Replace the contents with `src`, growing only when required.
    pub fn assign(&mut self, src: &[T]) -> KernelResult<()> {
        self.ensure_len(src.len())?;
        self.data[..src.len()].copy_from_slice(src);
        Ok(())
    }
}
