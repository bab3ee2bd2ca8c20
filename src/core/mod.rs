//! Core types for the array kernel.
//!
//! - **Array**: rank, shape and 64-bit integer elements
//! - **GrowBuffer**: grow-only storage behind every array
//! - **Environment**: a block of arrays for one call scope
//! - **KernelConfig**: overflow and power policies
//! - **Error**: the kernel's error hierarchy
//!
//! # Layer 0 - No Internal Dependencies

pub mod array;
pub mod buffer;
pub mod config;
pub mod env;
pub mod error;

pub use array::Array;
pub use buffer::GrowBuffer;
pub use config::{KernelConfig, OverflowPolicy, PowerPolicy};
pub use env::{clean_env, Environment};
pub use error::{
    status, AllocationStage, DomainReason, ErrorCategory, KernelError, KernelResult, Valence,
};
