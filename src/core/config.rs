//! Kernel configuration.
//!
//! Array elements are always 64-bit signed integers. The configuration
//! decides what happens at the two places where that representation is
//! lossy: integer overflow, and the real-valued intermediate used by
//! exponential and power.

use serde::{Deserialize, Serialize};

use super::error::{KernelError, KernelResult};

/// Configuration for element-level arithmetic behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// How to handle results that do not fit in an `i64`.
    pub overflow: OverflowPolicy,
    /// How exponential and power turn their result back into an integer.
    pub power: PowerPolicy,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::PERMISSIVE
    }
}

impl KernelConfig {
    /// Two's complement wrapping and truncated real powers.
    pub const PERMISSIVE: Self = Self {
        overflow: OverflowPolicy::Wrap,
        power: PowerPolicy::Truncate,
    };

    /// Strict mode: overflow is a domain error and integer powers are exact.
    pub fn strict() -> Self {
        Self {
            overflow: OverflowPolicy::Error,
            power: PowerPolicy::Exact,
        }
    }

    /// Permissive mode, the default.
    pub fn permissive() -> Self {
        Self::PERMISSIVE
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> KernelResult<Self> {
        serde_json::from_str(text).map_err(|e| KernelError::InvalidConfig(e.to_string()))
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> KernelResult<String> {
        serde_json::to_string(self).map_err(|e| KernelError::InvalidConfig(e.to_string()))
    }
}

/// Policy for integer overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Wrap modulo 2^64.
    Wrap,
    /// Report a domain error.
    Error,
}

/// Policy for converting exponential and power results back to integers.
///
/// With `Truncate` the result of `f64::exp` / `f64::powf` is truncated toward
/// zero and saturated to the `i64` range; a NaN result is a domain error.
/// Precision is lost silently once magnitudes exceed 2^53.
///
/// With `Exact` a non-negative integer exponent is computed with integer
/// arithmetic under the overflow policy. Negative exponents and monadic
/// exponential still go through `Truncate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerPolicy {
    Truncate,
    Exact,
}
