//! Conformability dispatcher for scalar primitives.
//!
//! The dispatcher implements APL scalar extension once. Each primitive only
//! supplies element functions through the `ScalarFunction` trait:
//!
//! - `traits`: the `ScalarFunction` interface and element-level status
//! - `conform`: shape classification, result sizing and the element loop
//!
//! # Layer 1 - depends on core

pub mod conform;
pub mod traits;

pub use conform::{apply, scalar_fn, Conformability, Operand};
pub use traits::{ElementError, ElementResult, ScalarFunction};
