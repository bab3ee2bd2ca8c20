//! Runtime layer: configuration-bound execution and the host boundary.
//!
//! - `kernel`: `Kernel`, which runs primitives under a `KernelConfig`, on
//!   arrays or on environment slots
//! - `ffi`: the host marshaling contract (accessors and `make_owned_array`)
//! - `capi`: `extern "C"` wrappers, behind the `c-abi` feature
//!
//! # Layer 3 - depends on every other layer

pub mod ffi;
pub mod kernel;

#[cfg(feature = "c-abi")]
pub mod capi;

pub use ffi::{get_elements_into, get_rank, get_shape_into, get_size, make_owned_array};
pub use kernel::Kernel;
