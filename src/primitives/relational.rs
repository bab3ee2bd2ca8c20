//! Relational primitives: `< ≤ = ≥ > ≠`.
//!
//! Every relational is dyadic only and yields 0 or 1.

use crate::core::{KernelConfig, Valence};
use crate::dispatch::{ElementResult, ScalarFunction};

macro_rules! relational {
    ($(#[$doc:meta])* $ty:ident, $name:literal, $symbol:literal, $op:tt) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $ty;

        impl ScalarFunction for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn symbol(&self) -> char {
                $symbol
            }

            fn supports(&self, valence: Valence) -> bool {
                valence == Valence::Dyadic
            }

            fn dyadic(&self, left: i64, right: i64, _config: &KernelConfig) -> ElementResult {
                Ok((left $op right) as i64)
            }
        }
    };
}

relational!(
    /// `<`
    Less, "less", '<', <
);
relational!(
    /// `≤`
    LessOrEqual, "less_or_equal", '≤', <=
);
relational!(
    /// `=`
    Equal, "equal", '=', ==
);
relational!(
    /// `≥`
    GreaterOrEqual, "greater_or_equal", '≥', >=
);
relational!(
    /// `>`
    Greater, "greater", '>', >
);
relational!(
    /// `≠`
    NotEqual, "not_equal", '≠', !=
);
