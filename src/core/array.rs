//! The array value type.
//!
//! An array is a rank, a shape of `rank` dimension sizes, and `size` signed
//! 64-bit elements in row-major order. A scalar has rank 0, an empty shape
//! and exactly one element. The canonical empty array (rank 0, size 0, no
//! memory held) is what `free` leaves behind.
//!
//! Arrays own their shape and element buffers outright. Result arrays are
//! resized in place by the primitives; their buffers only ever grow.

use std::fmt;

use super::buffer::GrowBuffer;
use super::error::{AllocationStage, KernelError, KernelResult};

/// A rank-polymorphic array of 64-bit signed integers.
#[derive(Clone, PartialEq, Eq)]
pub struct Array {
    shape: GrowBuffer<u32>,
    elements: GrowBuffer<i64>,
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array{{shape: {:?}, elements: {:?}}}", self.shape(), self.elements())
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.elements().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if *v < 0 {
                // APL high minus
                write!(f, "¯{}", v.unsigned_abs())?;
            } else {
                write!(f, "{}", v)?;
            }
        }
        Ok(())
    }
}

impl Array {
    /// The canonical empty array: rank 0, size 0, no memory held.
    pub const fn new() -> Self {
        Self {
            shape: GrowBuffer::new(AllocationStage::Shape),
            elements: GrowBuffer::new(AllocationStage::Elements),
        }
    }

    /// A rank-0 array holding one element.
    pub fn scalar(value: i64) -> Self {
        Self {
            shape: GrowBuffer::new(AllocationStage::Shape),
            elements: GrowBuffer::from_vec(AllocationStage::Elements, vec![value]),
        }
    }

    /// A rank-1 array.
    ///
    /// # Panics
    ///
    /// Panics if `values` is longer than a single dimension can describe
    /// (`u32::MAX` elements). Use [`Array::from_parts`] for host data.
    pub fn vector(values: &[i64]) -> Self {
        Self {
            shape: GrowBuffer::from_vec(AllocationStage::Shape, vec![Self::dimension(values.len())]),
            elements: GrowBuffer::from_vec(AllocationStage::Elements, values.to_vec()),
        }
    }

    /// Build an array from a shape and row-major elements, validating that
    /// the element count agrees with the shape.
    pub fn from_parts(shape: &[u32], elements: &[i64]) -> KernelResult<Self> {
        // A shape whose product overflows describes no real buffer.
        let expected = Self::expected_size(shape).unwrap_or(usize::MAX);
        if expected != elements.len() {
            return Err(KernelError::MalformedArray {
                rank: shape.len(),
                size: elements.len(),
                expected,
            });
        }
        let mut arr = Self::new();
        arr.shape.assign(shape)?;
        arr.elements.assign(elements)?;
        Ok(arr)
    }

    /// Element count implied by a shape. Rank 0 implies one element.
    ///
    /// Returns `None` when the product of the dimensions overflows `usize`.
    pub fn expected_size(shape: &[u32]) -> Option<usize> {
        shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d as usize))
    }

    fn dimension(len: usize) -> u32 {
        match u32::try_from(len) {
            Ok(d) => d,
            Err(_) => panic!("vector of {} elements exceeds the dimension range", len),
        }
    }

    /// Number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn shape(&self) -> &[u32] {
        self.shape.as_slice()
    }

    #[inline]
    pub fn elements(&self) -> &[i64] {
        self.elements.as_slice()
    }

    #[inline]
    pub fn elements_mut(&mut self) -> &mut [i64] {
        self.elements.as_mut_slice()
    }

    /// True when rank is zero.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.rank() == 0
    }

    /// True for the state `free` leaves behind.
    pub fn is_empty_state(&self) -> bool {
        self.rank() == 0 && self.size() == 0 && !self.holds_memory()
    }

    /// Whether either buffer still holds an allocation.
    pub fn holds_memory(&self) -> bool {
        self.shape.is_allocated() || self.elements.is_allocated()
    }

    /// Equal rank and pairwise equal dimensions.
    pub fn same_shape(&self, other: &Array) -> bool {
        self.shape() == other.shape()
    }

    /// Shape slots available without reallocating.
    pub fn shape_capacity(&self) -> usize {
        self.shape.capacity()
    }

    /// Element slots available without reallocating.
    pub fn element_capacity(&self) -> usize {
        self.elements.capacity()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Buffer Lifecycle
    // ═══════════════════════════════════════════════════════════════════

    /// Release both buffers and reset to the canonical empty state.
    ///
    /// Safe to call any number of times.
    pub fn free(&mut self) {
        self.shape.release();
        self.elements.release();
    }

    /// Deep-copy `src` into `self`, reusing existing capacity.
    ///
    /// On failure `self` is left in a valid but unspecified state.
    pub fn copy_from(&mut self, src: &Array) -> KernelResult<()> {
        self.shape.assign(src.shape())?;
        self.elements.assign(src.elements())?;
        Ok(())
    }

    /// Set the rank to `rank`, growing the shape buffer only if needed.
    ///
    /// New dimensions are zero until written.
    pub fn ensure_capacity_shape(&mut self, rank: usize) -> KernelResult<()> {
        self.shape.ensure_len(rank)
    }

    /// Set the size to `size`, growing the element buffer only if needed.
    pub fn ensure_capacity_elements(&mut self, size: usize) -> KernelResult<()> {
        self.elements.ensure_len(size)
    }

    /// Replace the shape with `shape`, growing only if needed.
    pub fn set_shape(&mut self, shape: &[u32]) -> KernelResult<()> {
        self.shape.assign(shape)
    }
}
