//! Arithmetic primitives: `+ - × ÷ * |`.
//!
//! Integer results that overflow follow `OverflowPolicy`. Exponential and
//! power go through `f64` and come back according to `PowerPolicy`.

use crate::core::{DomainReason, KernelConfig, OverflowPolicy, PowerPolicy};
use crate::dispatch::{ElementResult, ScalarFunction};

/// Resolve an `overflowing_*` result under the overflow policy.
#[inline]
fn settle(config: &KernelConfig, (value, overflowed): (i64, bool)) -> ElementResult {
    if overflowed && config.overflow == OverflowPolicy::Error {
        Err(DomainReason::Overflow.into())
    } else {
        Ok(value)
    }
}

/// Truncate a real intermediate toward zero.
///
/// Out-of-range values saturate to `i64::MIN`/`i64::MAX`, or are an overflow
/// under `OverflowPolicy::Error`. NaN is never representable.
pub(crate) fn truncate_real(config: &KernelConfig, x: f64) -> ElementResult {
    if x.is_nan() {
        return Err(DomainReason::NotFinite.into());
    }
    let t = x.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    let in_range = t >= i64::MIN as f64 && t < i64::MAX as f64;
    if !in_range && config.overflow == OverflowPolicy::Error {
        return Err(DomainReason::Overflow.into());
    }
    Ok(t as i64)
}

/// Integer power by squaring, reporting whether any step overflowed.
fn pow_exact(base: i64, mut exp: u64) -> (i64, bool) {
    let mut acc: i64 = 1;
    let mut b = base;
    let mut overflowed = false;
    while exp > 0 {
        if exp & 1 == 1 {
            let (v, o) = acc.overflowing_mul(b);
            acc = v;
            overflowed |= o;
        }
        exp >>= 1;
        if exp > 0 {
            let (v, o) = b.overflowing_mul(b);
            b = v;
            overflowed |= o;
        }
    }
    (acc, overflowed)
}

/// `+`: identity / addition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl ScalarFunction for Add {
    fn name(&self) -> &'static str {
        "add"
    }

    fn symbol(&self) -> char {
        '+'
    }

    fn monadic(&self, right: i64, _config: &KernelConfig) -> ElementResult {
        Ok(right)
    }

    fn dyadic(&self, left: i64, right: i64, config: &KernelConfig) -> ElementResult {
        settle(config, left.overflowing_add(right))
    }
}

/// `-`: negation / subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subtract;

impl ScalarFunction for Subtract {
    fn name(&self) -> &'static str {
        "subtract"
    }

    fn symbol(&self) -> char {
        '-'
    }

    fn monadic(&self, right: i64, config: &KernelConfig) -> ElementResult {
        settle(config, right.overflowing_neg())
    }

    fn dyadic(&self, left: i64, right: i64, config: &KernelConfig) -> ElementResult {
        settle(config, left.overflowing_sub(right))
    }
}

/// `×`: signum / multiplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiply;

impl ScalarFunction for Multiply {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn symbol(&self) -> char {
        '×'
    }

    fn monadic(&self, right: i64, _config: &KernelConfig) -> ElementResult {
        Ok(right.signum())
    }

    fn dyadic(&self, left: i64, right: i64, config: &KernelConfig) -> ElementResult {
        settle(config, left.overflowing_mul(right))
    }
}

/// `÷`: reciprocal / division, truncating toward zero.
///
/// A zero divisor is a domain error in both forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct Divide;

impl ScalarFunction for Divide {
    fn name(&self) -> &'static str {
        "divide"
    }

    fn symbol(&self) -> char {
        '÷'
    }

    fn monadic(&self, right: i64, config: &KernelConfig) -> ElementResult {
        self.dyadic(1, right, config)
    }

    fn dyadic(&self, left: i64, right: i64, config: &KernelConfig) -> ElementResult {
        if right == 0 {
            return Err(DomainReason::DivideByZero.into());
        }
        settle(config, left.overflowing_div(right))
    }
}

/// `*`: exponential / power.
///
/// Zero to a negative power is a domain error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Power;

impl ScalarFunction for Power {
    fn name(&self) -> &'static str {
        "power"
    }

    fn symbol(&self) -> char {
        '*'
    }

    fn monadic(&self, right: i64, config: &KernelConfig) -> ElementResult {
        truncate_real(config, (right as f64).exp())
    }

    fn dyadic(&self, left: i64, right: i64, config: &KernelConfig) -> ElementResult {
        if left == 0 && right < 0 {
            return Err(DomainReason::ZeroToNegativePower.into());
        }
        match config.power {
            PowerPolicy::Exact if right >= 0 => settle(config, pow_exact(left, right as u64)),
            _ => truncate_real(config, (left as f64).powf(right as f64)),
        }
    }
}

/// `|`: magnitude / residue.
///
/// Residue with a zero left operand passes the right operand through.
/// Otherwise the remainder truncates toward zero and takes the sign of the
/// right operand.
#[derive(Debug, Clone, Copy, Default)]
pub struct Magnitude;

impl ScalarFunction for Magnitude {
    fn name(&self) -> &'static str {
        "magnitude"
    }

    fn symbol(&self) -> char {
        '|'
    }

    fn monadic(&self, right: i64, config: &KernelConfig) -> ElementResult {
        settle(config, right.overflowing_abs())
    }

    fn dyadic(&self, left: i64, right: i64, _config: &KernelConfig) -> ElementResult {
        if left == 0 {
            return Ok(right);
        }
        // MIN rem -1 is exactly zero, so no policy applies.
        Ok(right.wrapping_rem(left))
    }
}
