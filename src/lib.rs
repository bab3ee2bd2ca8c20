// ═══════════════════════════════════════════════════════════════════════════
// Layer 0: Core (No internal dependencies)
// ═══════════════════════════════════════════════════════════════════════════
pub mod core;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 1: Dispatch (depends on core)
// ═══════════════════════════════════════════════════════════════════════════
pub mod dispatch;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 2: Primitives (depends on core, dispatch)
// ═══════════════════════════════════════════════════════════════════════════
pub mod primitives;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 3: Runtime (depends on all)
// ═══════════════════════════════════════════════════════════════════════════
pub mod runtime;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use crate::core::error::{AllocationStage, DomainReason, ErrorCategory, KernelError, KernelResult, Valence, status};
pub use crate::core::{clean_env, Array, Environment, GrowBuffer, KernelConfig, OverflowPolicy, PowerPolicy};
pub use dispatch::{scalar_fn, Conformability, ElementError, ElementResult, Operand, ScalarFunction};
pub use primitives::{
    add, divide, equal, greater, greater_or_equal, less, less_or_equal, magnitude, multiply, not,
    not_equal, power, subtract, Primitive,
};
pub use runtime::{get_elements_into, get_rank, get_shape_into, get_size, make_owned_array, Kernel};
