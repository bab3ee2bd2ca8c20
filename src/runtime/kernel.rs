//! The configuration-bound entry point for running primitives.

use crate::core::{Array, Environment, KernelConfig, KernelError, KernelResult, Valence};
use crate::dispatch::{self, Operand, ScalarFunction};
use crate::primitives::Primitive;

/// Runs scalar functions under one `KernelConfig`.
///
/// The kernel holds no state besides its configuration; all arrays belong to
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kernel {
    config: KernelConfig,
}

impl Kernel {
    pub fn new(config: KernelConfig) -> Self {
        log::debug!("kernel: overflow {:?}, power {:?}", config.overflow, config.power);
        Self { config }
    }

    /// Build a kernel from a JSON configuration.
    pub fn from_json(text: &str) -> KernelResult<Self> {
        KernelConfig::from_json(text).map(Self::new)
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// `res ← [left] f right` with operands distinct from `res`.
    pub fn apply<F: ScalarFunction + ?Sized>(
        &self,
        f: &F,
        res: &mut Array,
        left: Option<&Array>,
        right: &Array,
    ) -> KernelResult<()> {
        dispatch::apply(f, &self.config, res, left, right)
    }

    /// Like `apply`, but either operand may be `Operand::Result`.
    pub fn apply_operands<F: ScalarFunction + ?Sized>(
        &self,
        f: &F,
        res: &mut Array,
        left: Option<Operand<'_>>,
        right: Operand<'_>,
    ) -> KernelResult<()> {
        dispatch::scalar_fn(f, &self.config, res, left, right)
    }

    /// Run a primitive looked up by glyph.
    ///
    /// An unknown glyph is reported as an unsupported operation.
    pub fn apply_symbol(
        &self,
        symbol: char,
        res: &mut Array,
        left: Option<&Array>,
        right: &Array,
    ) -> KernelResult<()> {
        let prim = lookup_symbol(symbol, left.is_some())?;
        self.apply(&prim, res, left, right)
    }

    /// Run `f` over environment slots.
    ///
    /// The result slot may also appear as an operand slot. All slots are
    /// checked before anything is touched; the result slot holds the outcome
    /// afterwards whether or not the dispatch succeeded.
    pub fn apply_in<F: ScalarFunction + ?Sized>(
        &self,
        env: &mut Environment,
        f: &F,
        res_slot: usize,
        left_slot: Option<usize>,
        right_slot: usize,
    ) -> KernelResult<()> {
        let len = env.len();
        for slot in [Some(res_slot), left_slot, Some(right_slot)].into_iter().flatten() {
            if slot >= len {
                return Err(KernelError::InvalidSlot { slot, len });
            }
        }

        let mut res = env.take(res_slot)?;
        let outcome = {
            let operand = |slot: usize| {
                if slot == res_slot {
                    Ok(Operand::Result)
                } else {
                    env.get(slot).map(Operand::Array)
                }
            };
            match (left_slot.map(|s| operand(s)).transpose(), operand(right_slot)) {
                (Ok(left), Ok(right)) => self.apply_operands(f, &mut res, left, right),
                (Err(e), _) | (_, Err(e)) => Err(e),
            }
        };
        env.set(res_slot, res)?;
        outcome
    }
}

pub(crate) fn lookup_symbol(symbol: char, dyadic: bool) -> KernelResult<Primitive> {
    Primitive::from_symbol(symbol).ok_or(KernelError::UnsupportedOperation {
        primitive: "unknown",
        valence: if dyadic { Valence::Dyadic } else { Valence::Monadic },
    })
}

impl Environment {
    /// Run a primitive over slots under the default configuration.
    ///
    /// See `Kernel::apply_in`.
    pub fn apply(
        &mut self,
        primitive: Primitive,
        res_slot: usize,
        left_slot: Option<usize>,
        right_slot: usize,
    ) -> KernelResult<()> {
        Kernel::default().apply_in(self, &primitive, res_slot, left_slot, right_slot)
    }
}
