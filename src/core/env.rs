//! Environments: fixed-length blocks of arrays for one call scope.
//!
//! Generated code addresses its arrays by slot index. When the scope ends
//! the whole block is cleaned, which frees every array but keeps the block.

use super::array::Array;
use super::error::{AllocationStage, KernelError, KernelResult};

/// Free exactly `count` consecutive arrays, starting at the first.
///
/// `count` past the end of the slice is clamped.
pub fn clean_env(env: &mut [Array], count: usize) {
    let count = count.min(env.len());
    for arr in &mut env[..count] {
        arr.free();
    }
    log::debug!("cleaned {} environment slots", count);
}

/// An ordered, fixed-length block of arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    slots: Vec<Array>,
}

impl Environment {
    /// Allocate a block of `len` empty arrays.
    pub fn with_len(len: usize) -> KernelResult<Self> {
        let mut slots = Vec::new();
        if slots.try_reserve_exact(len).is_err() {
            log::error!("cannot allocate environment of {} slots", len);
            return Err(KernelError::AllocationFailure {
                stage: AllocationStage::Header,
                requested: len,
            });
        }
        slots.resize_with(len, Array::new);
        Ok(Self { slots })
    }

    /// Wrap arrays the caller already owns.
    pub fn from_arrays(slots: Vec<Array>) -> Self {
        Self { slots }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: usize) -> KernelResult<&Array> {
        let len = self.slots.len();
        self.slots.get(slot).ok_or(KernelError::InvalidSlot { slot, len })
    }

    pub fn get_mut(&mut self, slot: usize) -> KernelResult<&mut Array> {
        let len = self.slots.len();
        self.slots.get_mut(slot).ok_or(KernelError::InvalidSlot { slot, len })
    }

    /// Store `array` in `slot`, dropping what was there.
    pub fn set(&mut self, slot: usize, array: Array) -> KernelResult<()> {
        *self.get_mut(slot)? = array;
        Ok(())
    }

    /// Deep-copy slot `source` into slot `target`.
    ///
    /// Copying a slot onto itself is a no-op and touches no memory.
    pub fn copy(&mut self, target: usize, source: usize) -> KernelResult<()> {
        let len = self.slots.len();
        if target >= len {
            return Err(KernelError::InvalidSlot { slot: target, len });
        }
        if source >= len {
            return Err(KernelError::InvalidSlot { slot: source, len });
        }
        if target == source {
            return Ok(());
        }
        let (tgt, src) = if target < source {
            let (lo, hi) = self.slots.split_at_mut(source);
            (&mut lo[target], &hi[0])
        } else {
            let (lo, hi) = self.slots.split_at_mut(target);
            (&mut hi[0], &lo[source])
        };
        tgt.copy_from(src)
    }

    /// Move the array out of `slot`, leaving an empty array behind.
    pub fn take(&mut self, slot: usize) -> KernelResult<Array> {
        Ok(std::mem::take(self.get_mut(slot)?))
    }

    /// Free the first `count` arrays.
    pub fn clean(&mut self, count: usize) {
        clean_env(&mut self.slots, count);
    }

    /// Free every array in the block.
    pub fn clean_all(&mut self) {
        let len = self.slots.len();
        self.clean(len);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Array> {
        self.slots.iter()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Array] {
        &mut self.slots
    }
}
