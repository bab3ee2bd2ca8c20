//! Host marshaling boundary.
//!
//! Host code never sees an `Array`'s buffers directly. It reads an array
//! through the accessors here and creates arrays with `make_owned_array`,
//! which deep-copies the host's data so the host may reuse its buffers as
//! soon as the call returns.

use crate::core::{Array, KernelError, KernelResult};

// ═══════════════════════════════════════════════════════════════════════════════
// Accessors
// ═══════════════════════════════════════════════════════════════════════════════

/// Number of elements.
#[inline]
pub fn get_size(array: &Array) -> usize {
    array.size()
}

/// Number of dimensions.
#[inline]
pub fn get_rank(array: &Array) -> usize {
    array.rank()
}

/// Copy the array's elements into `buffer`.
///
/// Copies `min(buffer.len(), size)` elements and returns that count.
pub fn get_elements_into(buffer: &mut [i64], array: &Array) -> usize {
    copy_prefix(buffer, array.elements())
}

/// Copy the array's shape into `buffer`.
///
/// Copies `min(buffer.len(), rank)` dimensions and returns that count.
pub fn get_shape_into(buffer: &mut [u32], array: &Array) -> usize {
    copy_prefix(buffer, array.shape())
}

fn copy_prefix<T: Copy>(dst: &mut [T], src: &[T]) -> usize {
    let n = dst.len().min(src.len());
    dst[..n].copy_from_slice(&src[..n]);
    n
}

// ═══════════════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════════════

/// Create an array that owns copies of `shape_in[..rank]` and
/// `data_in[..size]`.
///
/// Fails with `MalformedArray` when the inputs are shorter than `rank` and
/// `size` claim, or when `size` is not the element count the shape implies.
/// Allocation failures carry the stage that failed.
pub fn make_owned_array(
    rank: usize,
    size: usize,
    shape_in: &[u32],
    data_in: &[i64],
) -> KernelResult<Array> {
    if shape_in.len() < rank || data_in.len() < size {
        log::warn!(
            "make_owned_array: rank {} size {} but host passed {} dims, {} elements",
            rank,
            size,
            shape_in.len(),
            data_in.len()
        );
        return Err(KernelError::MalformedArray {
            rank,
            size: data_in.len().min(size),
            expected: size,
        });
    }
    Array::from_parts(&shape_in[..rank], &data_in[..size])
}
