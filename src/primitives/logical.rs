//! Logical primitives.

use crate::core::{KernelConfig, Valence};
use crate::dispatch::{ElementResult, ScalarFunction};

/// `~`: logical not. Zero maps to 1, anything else to 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Not;

impl ScalarFunction for Not {
    fn name(&self) -> &'static str {
        "not"
    }

    fn symbol(&self) -> char {
        '~'
    }

    fn supports(&self, valence: Valence) -> bool {
        valence == Valence::Monadic
    }

    fn monadic(&self, right: i64, _config: &KernelConfig) -> ElementResult {
        Ok((right == 0) as i64)
    }
}
