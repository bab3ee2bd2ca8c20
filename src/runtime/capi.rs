//! C ABI over the host boundary.
//!
//! Arrays cross the boundary as opaque `*mut Array` handles created by
//! `aplrt_new_array` or `aplrt_make_array` and destroyed by
//! `aplrt_drop_array`. Every fallible call returns the status of
//! `KernelError::code`, 0 on success.

use std::os::raw::c_int;
use std::ptr;
use std::slice;

use crate::core::{Array, KernelConfig, KernelError, KernelResult, Valence};
use crate::dispatch::{self, Operand};

use super::ffi;
use super::kernel::lookup_symbol;

/// Status for a null handle where one is required.
const NULL_HANDLE: c_int = 14;

macro_rules! handle_or_return {
    ($ptr:expr, $on_null:expr) => {
        if $ptr.is_null() {
            log::warn!("null array handle at {}", stringify!($ptr));
            return $on_null;
        } else {
            &*$ptr
        }
    };
}

/// Host slice from a pointer and length. A null pointer is only valid with
/// length zero.
unsafe fn host_slice<'a, T>(data: *const T, len: usize) -> Option<&'a [T]> {
    if len == 0 {
        Some(&[])
    } else if data.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(data, len))
    }
}

fn code_of(result: KernelResult<()>) -> c_int {
    match result {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("capi: {}", e);
            e.code()
        }
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Allocate an empty array, typically a result scratch array.
///
/// # Safety
/// The returned handle must be destroyed with `aplrt_drop_array`.
#[no_mangle]
pub unsafe extern "C" fn aplrt_new_array() -> *mut Array {
    Box::into_raw(Box::new(Array::new()))
}

/// Deep-copy host data into a new array and store its handle in `out`.
///
/// `out` is set to null on failure.
///
/// # Safety
/// `shape` must point to `rank` values and `data` to `size` values (either
/// may be null when its count is zero). `out` must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn aplrt_make_array(
    rank: usize,
    size: usize,
    shape: *const u32,
    data: *const i64,
    out: *mut *mut Array,
) -> c_int {
    if out.is_null() {
        return NULL_HANDLE;
    }
    *out = ptr::null_mut();
    let (Some(shape), Some(data)) = (host_slice(shape, rank), host_slice(data, size)) else {
        return NULL_HANDLE;
    };
    match ffi::make_owned_array(rank, size, shape, data) {
        Ok(array) => {
            *out = Box::into_raw(Box::new(array));
            0
        }
        Err(e) => e.code(),
    }
}

/// Release an array's buffers, leaving the empty array. Idempotent.
///
/// # Safety
/// `array` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn aplrt_free_array(array: *mut Array) {
    if let Some(array) = array.as_mut() {
        array.free();
    }
}

/// Destroy a handle.
///
/// # Safety
/// `array` must be null or a live handle, which is invalid afterwards.
#[no_mangle]
pub unsafe extern "C" fn aplrt_drop_array(array: *mut Array) {
    if !array.is_null() {
        drop(Box::from_raw(array));
    }
}

/// Deep-copy `source` into `target`. Passing the same handle twice is a
/// no-op.
///
/// # Safety
/// Both handles must be live.
#[no_mangle]
pub unsafe extern "C" fn aplrt_copy_array(target: *mut Array, source: *const Array) -> c_int {
    if ptr::eq(target, source) {
        return 0;
    }
    if target.is_null() {
        return NULL_HANDLE;
    }
    let source = handle_or_return!(source, NULL_HANDLE);
    code_of((*target).copy_from(source))
}

// ============================================================================
// Accessors
// ============================================================================

/// # Safety
/// `array` must be null or a live handle. Null reads as size 0.
#[no_mangle]
pub unsafe extern "C" fn aplrt_get_size(array: *const Array) -> usize {
    ffi::get_size(handle_or_return!(array, 0))
}

/// # Safety
/// `array` must be null or a live handle. Null reads as rank 0.
#[no_mangle]
pub unsafe extern "C" fn aplrt_get_rank(array: *const Array) -> usize {
    ffi::get_rank(handle_or_return!(array, 0))
}

/// Copy up to `len` elements into `buffer`; returns how many were copied.
///
/// # Safety
/// `buffer` must be valid for `len` writes.
#[no_mangle]
pub unsafe extern "C" fn aplrt_get_elements(array: *const Array, buffer: *mut i64, len: usize) -> usize {
    let array = handle_or_return!(array, 0);
    if buffer.is_null() || len == 0 {
        return 0;
    }
    ffi::get_elements_into(slice::from_raw_parts_mut(buffer, len), array)
}

/// Copy up to `len` dimensions into `buffer`; returns how many were copied.
///
/// # Safety
/// `buffer` must be valid for `len` writes.
#[no_mangle]
pub unsafe extern "C" fn aplrt_get_shape(array: *const Array, buffer: *mut u32, len: usize) -> usize {
    let array = handle_or_return!(array, 0);
    if buffer.is_null() || len == 0 {
        return 0;
    }
    ffi::get_shape_into(slice::from_raw_parts_mut(buffer, len), array)
}

// ============================================================================
// Primitives
// ============================================================================

/// Run the primitive with APL glyph `symbol` (a Unicode scalar value) under
/// the default configuration. `left` is null for the monadic form.
///
/// `res` may be the same handle as either operand.
///
/// # Safety
/// `res` and `right` must be live handles; `left` must be null or live.
#[no_mangle]
pub unsafe extern "C" fn aplrt_apply(
    symbol: u32,
    res: *mut Array,
    left: *const Array,
    right: *const Array,
) -> c_int {
    if res.is_null() || right.is_null() {
        return NULL_HANDLE;
    }
    let dyadic = !left.is_null();
    let prim = match char::from_u32(symbol) {
        Some(c) => lookup_symbol(c, dyadic),
        None => Err(KernelError::UnsupportedOperation {
            primitive: "unknown",
            valence: if dyadic { Valence::Dyadic } else { Valence::Monadic },
        }),
    };
    let prim = match prim {
        Ok(p) => p,
        Err(e) => return e.code(),
    };

    // Resolve aliasing on raw pointers before any reference to `res` exists.
    let operand = |p: *const Array| {
        if ptr::eq(p, res) {
            Operand::Result
        } else {
            Operand::Array(&*p)
        }
    };
    let left = if dyadic { Some(operand(left)) } else { None };
    let right = operand(right);
    code_of(dispatch::scalar_fn(&prim, &KernelConfig::PERMISSIVE, &mut *res, left, right))
}
