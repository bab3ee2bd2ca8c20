//! The element-function interface every scalar primitive implements.
//!
//! A scalar primitive is fully described by what it does to one element
//! (monadic) or one pair of elements (dyadic). Shape handling lives in the
//! dispatcher and is shared by every implementation.

use crate::core::{DomainReason, KernelConfig, Valence};

/// Why an element function produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementError {
    /// Undefined for these operand values.
    Domain(DomainReason),
    /// The primitive has no form with this valence.
    Unsupported,
}

impl From<DomainReason> for ElementError {
    fn from(reason: DomainReason) -> Self {
        ElementError::Domain(reason)
    }
}

/// Outcome of one element computation.
pub type ElementResult = Result<i64, ElementError>;

/// A scalar primitive: a monadic and a dyadic element function.
///
/// Implementations are pure. Nothing carries over from one element to the
/// next within a dispatch.
pub trait ScalarFunction {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// APL glyph.
    fn symbol(&self) -> char;

    /// Whether a form with this valence exists.
    ///
    /// Checked before the result is touched, so an unsupported call fails
    /// even when the operands are empty.
    fn supports(&self, valence: Valence) -> bool {
        let _ = valence;
        true
    }

    /// Compute `f r`.
    fn monadic(&self, _right: i64, _config: &KernelConfig) -> ElementResult {
        Err(ElementError::Unsupported)
    }

    /// Compute `l f r`.
    fn dyadic(&self, _left: i64, _right: i64, _config: &KernelConfig) -> ElementResult {
        Err(ElementError::Unsupported)
    }
}
