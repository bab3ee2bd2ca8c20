//! Error types for the array kernel.
//!
//! Every failure inside the kernel is reported as a value. Nothing in the
//! primitive or buffer paths panics or aborts; the caller decides whether to
//! retry, discard the result, or surface the error to the user.
//!
//! # Error Categories
//!
//! - **Allocation**: a shape, element, or header buffer could not be grown
//! - **Domain**: an operation is undefined for the operand values
//! - **Conformability**: operand shapes cannot be combined
//! - **Valence**: a primitive was called in a form it does not define
//! - **Boundary**: host-supplied data or configuration is malformed

use std::fmt;

use thiserror::Error;

/// Which buffer an allocation failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationStage {
    /// The array header or environment block itself.
    Header,
    /// The element buffer.
    Elements,
    /// The shape buffer.
    Shape,
}

impl fmt::Display for AllocationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationStage::Header => write!(f, "header"),
            AllocationStage::Elements => write!(f, "element"),
            AllocationStage::Shape => write!(f, "shape"),
        }
    }
}

/// Why a single element could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainReason {
    /// Division or reciprocal with a zero divisor.
    DivideByZero,
    /// Zero raised to a negative power.
    ZeroToNegativePower,
    /// Integer result does not fit in 64 bits (only under `OverflowPolicy::Error`).
    Overflow,
    /// Real-valued intermediate was NaN or infinite and cannot become an integer.
    NotFinite,
}

impl fmt::Display for DomainReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainReason::DivideByZero => write!(f, "divide by zero"),
            DomainReason::ZeroToNegativePower => write!(f, "zero to a negative power"),
            DomainReason::Overflow => write!(f, "integer overflow"),
            DomainReason::NotFinite => write!(f, "result is not a finite number"),
        }
    }
}

/// Monadic (one argument) or dyadic (two arguments) form of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Valence {
    Monadic,
    Dyadic,
}

impl fmt::Display for Valence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valence::Monadic => write!(f, "monadic"),
            Valence::Dyadic => write!(f, "dyadic"),
        }
    }
}

/// Error type for every fallible kernel operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// A buffer could not be grown to the requested number of entries.
    #[error("allocation failure: cannot grow {stage} buffer to {requested} entries")]
    AllocationFailure {
        stage: AllocationStage,
        requested: usize,
    },

    /// An element had no defined result for its operand values.
    #[error("DOMAIN ERROR: {primitive}: {reason} at element {position}")]
    DomainError {
        primitive: &'static str,
        reason: DomainReason,
        position: usize,
    },

    /// Operands are neither identically shaped nor scalar-extensible.
    #[error("LENGTH ERROR: {primitive}: shapes {left:?} and {right:?} do not conform")]
    ShapeMismatch {
        primitive: &'static str,
        left: Vec<u32>,
        right: Vec<u32>,
    },

    /// The primitive has no form with the given valence.
    #[error("VALENCE ERROR: {primitive} has no {valence} form")]
    UnsupportedOperation {
        primitive: &'static str,
        valence: Valence,
    },

    /// Host data whose element count disagrees with its shape.
    #[error("malformed array: rank {rank} with {size} elements, shape implies {expected}")]
    MalformedArray {
        rank: usize,
        size: usize,
        expected: usize,
    },

    /// An environment slot index past the end of the block.
    #[error("environment slot {slot} out of range (length {len})")]
    InvalidSlot {
        slot: usize,
        len: usize,
    },

    /// Configuration could not be parsed.
    #[error("invalid kernel configuration: {0}")]
    InvalidConfig(String),
}

/// Error category for filtering and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Allocation,
    Domain,
    Conformability,
    Valence,
    Boundary,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Allocation => write!(f, "allocation"),
            ErrorCategory::Domain => write!(f, "domain"),
            ErrorCategory::Conformability => write!(f, "conformability"),
            ErrorCategory::Valence => write!(f, "valence"),
            ErrorCategory::Boundary => write!(f, "boundary"),
        }
    }
}

impl KernelError {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            KernelError::AllocationFailure { .. } => ErrorCategory::Allocation,
            KernelError::DomainError { .. } => ErrorCategory::Domain,
            KernelError::ShapeMismatch { .. } => ErrorCategory::Conformability,
            KernelError::UnsupportedOperation { .. } => ErrorCategory::Valence,
            KernelError::MalformedArray { .. } |
            KernelError::InvalidSlot { .. } |
            KernelError::InvalidConfig(_) => ErrorCategory::Boundary,
        }
    }

    /// Integer status reported to host callers. Zero is reserved for success.
    ///
    /// Allocation codes follow the host boundary's stage numbering:
    /// 1 header, 2 elements, 3 shape.
    pub fn code(&self) -> i32 {
        match self {
            KernelError::AllocationFailure { stage: AllocationStage::Header, .. } => 1,
            KernelError::AllocationFailure { stage: AllocationStage::Elements, .. } => 2,
            KernelError::AllocationFailure { stage: AllocationStage::Shape, .. } => 3,
            KernelError::DomainError { .. } => 11,
            KernelError::ShapeMismatch { .. } => 12,
            KernelError::UnsupportedOperation { .. } => 13,
            KernelError::MalformedArray { .. } => 14,
            KernelError::InvalidConfig(_) => 15,
            KernelError::InvalidSlot { .. } => 16,
        }
    }

    /// Whether the caller may retry the same call after freeing memory.
    pub fn is_retryable(&self) -> bool {
        matches!(self, KernelError::AllocationFailure { .. })
    }
}

/// Result type alias for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

/// Collapse a result into the integer status a host caller sees.
pub fn status<T>(result: &KernelResult<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.code(),
    }
}
