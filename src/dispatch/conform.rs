//! Scalar-extension conformability and the element loop.
//!
//! `scalar_fn` decides how the operands line up, sizes the result once, then
//! runs the element function left to right over the flattened elements. The
//! first failing element stops the loop; whatever was written before it
//! stays in the result.

use crate::core::{Array, KernelConfig, KernelError, KernelResult, Valence};

use super::traits::{ElementError, ScalarFunction};

/// An operand of a dispatch.
///
/// `Result` names the result array itself, which lets a caller compute
/// `r ← r + x` in place without holding two references to `r`.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Array(&'a Array),
    Result,
}

impl<'a> From<&'a Array> for Operand<'a> {
    fn from(array: &'a Array) -> Self {
        Operand::Array(array)
    }
}

/// How the operands of a scalar function line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conformability {
    /// No left operand; the result takes the right operand's shape.
    Monadic,
    /// Equal rank and equal dimensions.
    Identical,
    /// Left is a scalar paired with every element of the right.
    LeftScalar,
    /// Right is a scalar paired with every element of the left.
    RightScalar,
}

impl Conformability {
    /// Classify operand shapes. `None` means they do not conform.
    ///
    /// Identical shapes win over scalar extension, so two scalars are
    /// `Identical`.
    pub fn classify(left: Option<&[u32]>, right: &[u32]) -> Option<Self> {
        match left {
            None => Some(Conformability::Monadic),
            Some(l) if l == right => Some(Conformability::Identical),
            Some(l) if l.is_empty() => Some(Conformability::LeftScalar),
            Some(_) if right.is_empty() => Some(Conformability::RightScalar),
            Some(_) => None,
        }
    }
}

/// Where the loop reads one side's elements from.
enum Source<'a> {
    Slice(&'a [i64]),
    Fixed(i64),
    Result,
}

impl Source<'_> {
    #[inline]
    fn at(&self, i: usize, result: &[i64]) -> i64 {
        match self {
            Source::Slice(s) => s[i],
            Source::Fixed(v) => *v,
            Source::Result => result[i],
        }
    }
}

fn view<'a>(op: Operand<'a>, res: &'a Array) -> &'a Array {
    match op {
        Operand::Array(a) => a,
        Operand::Result => res,
    }
}

/// The single element of a scalar operand.
fn fixed_element(arr: &Array) -> KernelResult<i64> {
    arr.elements().first().copied().ok_or(KernelError::MalformedArray {
        rank: 0,
        size: 0,
        expected: 1,
    })
}

fn element_error<F: ScalarFunction + ?Sized>(
    f: &F,
    valence: Valence,
    error: ElementError,
    position: usize,
) -> KernelError {
    match error {
        ElementError::Domain(reason) => {
            log::warn!("DOMAIN ERROR: {}: {} at element {}", f.name(), reason, position);
            KernelError::DomainError {
                primitive: f.name(),
                reason,
                position,
            }
        }
        ElementError::Unsupported => KernelError::UnsupportedOperation {
            primitive: f.name(),
            valence,
        },
    }
}

/// Apply a scalar function under APL conformability rules.
///
/// The result is resized before any element is read or written. A scalar
/// operand that aliases the result is read before the resize.
pub fn scalar_fn<F: ScalarFunction + ?Sized>(
    f: &F,
    config: &KernelConfig,
    res: &mut Array,
    left: Option<Operand<'_>>,
    right: Operand<'_>,
) -> KernelResult<()> {
    let valence = if left.is_some() { Valence::Dyadic } else { Valence::Monadic };
    if !f.supports(valence) {
        log::debug!("{}: no {} form", f.name(), valence);
        return Err(KernelError::UnsupportedOperation {
            primitive: f.name(),
            valence,
        });
    }

    let case = {
        let r = view(right, res);
        let l = left.map(|op| view(op, res));
        match Conformability::classify(l.map(Array::shape), r.shape()) {
            Some(case) => case,
            None => {
                return Err(KernelError::ShapeMismatch {
                    primitive: f.name(),
                    left: l.map(|a| a.shape().to_vec()).unwrap_or_default(),
                    right: r.shape().to_vec(),
                });
            }
        }
    };

    // (pattern the result copies, left source, right source)
    let (pattern, left_src, right_src) = match (case, left) {
        (Conformability::Monadic, _) | (_, None) => (right, None, source(right)),
        (Conformability::Identical, Some(l)) => {
            let (ls, rs) = (view(l, res).size(), view(right, res).size());
            if ls != rs {
                return Err(KernelError::MalformedArray {
                    rank: view(l, res).rank(),
                    size: ls.min(rs),
                    expected: ls.max(rs),
                });
            }
            (l, Some(source(l)), source(right))
        }
        (Conformability::LeftScalar, Some(l)) => {
            let fixed = fixed_element(view(l, res))?;
            (right, Some(Source::Fixed(fixed)), source(right))
        }
        (Conformability::RightScalar, Some(l)) => {
            let fixed = fixed_element(view(right, res))?;
            (l, Some(source(l)), Source::Fixed(fixed))
        }
    };

    if let Operand::Array(p) = pattern {
        res.ensure_capacity_elements(p.size())?;
        res.set_shape(p.shape())?;
    }
    let size = res.size();
    log::debug!("{}: {:?} over {} elements", f.name(), case, size);

    let out = res.elements_mut();
    match left_src {
        None => {
            for i in 0..size {
                let r = right_src.at(i, out);
                out[i] = f
                    .monadic(r, config)
                    .map_err(|e| element_error(f, valence, e, i))?;
            }
        }
        Some(left_src) => {
            for i in 0..size {
                let l = left_src.at(i, out);
                let r = right_src.at(i, out);
                out[i] = f
                    .dyadic(l, r, config)
                    .map_err(|e| element_error(f, valence, e, i))?;
            }
        }
    }
    Ok(())
}

fn source(op: Operand<'_>) -> Source<'_> {
    match op {
        Operand::Array(a) => Source::Slice(a.elements()),
        Operand::Result => Source::Result,
    }
}

/// Apply a scalar function to operands that are distinct from the result.
pub fn apply<F: ScalarFunction + ?Sized>(
    f: &F,
    config: &KernelConfig,
    res: &mut Array,
    left: Option<&Array>,
    right: &Array,
) -> KernelResult<()> {
    scalar_fn(f, config, res, left.map(Operand::Array), Operand::Array(right))
}
