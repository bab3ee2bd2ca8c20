//! The APL scalar primitives.
//!
//! Each primitive is a unit type implementing `ScalarFunction`. `Primitive`
//! names all of them so callers can dispatch by glyph or name at runtime.
//!
//! The free functions (`add`, `subtract`, ...) run a primitive under the
//! default configuration. Use `runtime::Kernel` for any other configuration.
//!
//! # Layer 2 - depends on core and dispatch

pub mod arithmetic;
pub mod logical;
pub mod relational;

pub use arithmetic::{Add, Divide, Magnitude, Multiply, Power, Subtract};
pub use logical::Not;
pub use relational::{Equal, Greater, GreaterOrEqual, Less, LessOrEqual, NotEqual};

use std::fmt;

use crate::core::{Array, KernelConfig, KernelResult, Valence};
use crate::dispatch::{self, ElementResult, ScalarFunction};

/// Every scalar primitive the kernel provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Magnitude,
    Less,
    LessOrEqual,
    Equal,
    GreaterOrEqual,
    Greater,
    NotEqual,
    Not,
}

impl Primitive {
    pub const ALL: [Primitive; 13] = [
        Primitive::Add,
        Primitive::Subtract,
        Primitive::Multiply,
        Primitive::Divide,
        Primitive::Power,
        Primitive::Magnitude,
        Primitive::Less,
        Primitive::LessOrEqual,
        Primitive::Equal,
        Primitive::GreaterOrEqual,
        Primitive::Greater,
        Primitive::NotEqual,
        Primitive::Not,
    ];

    /// The element functions behind this primitive.
    pub fn function(self) -> &'static dyn ScalarFunction {
        match self {
            Primitive::Add => &Add,
            Primitive::Subtract => &Subtract,
            Primitive::Multiply => &Multiply,
            Primitive::Divide => &Divide,
            Primitive::Power => &Power,
            Primitive::Magnitude => &Magnitude,
            Primitive::Less => &Less,
            Primitive::LessOrEqual => &LessOrEqual,
            Primitive::Equal => &Equal,
            Primitive::GreaterOrEqual => &GreaterOrEqual,
            Primitive::Greater => &Greater,
            Primitive::NotEqual => &NotEqual,
            Primitive::Not => &Not,
        }
    }

    /// Look a primitive up by its APL glyph. `!` is accepted for `~`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        if symbol == '!' {
            return Some(Primitive::Not);
        }
        Self::ALL.into_iter().find(|p| p.symbol() == symbol)
    }

    /// Look a primitive up by name, e.g. `"greater_or_equal"`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn name(self) -> &'static str {
        self.function().name()
    }

    pub fn symbol(self) -> char {
        self.function().symbol()
    }

    /// Whether this is one of the dyadic-only comparison primitives.
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Primitive::Less
                | Primitive::LessOrEqual
                | Primitive::Equal
                | Primitive::GreaterOrEqual
                | Primitive::Greater
                | Primitive::NotEqual
        )
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl ScalarFunction for Primitive {
    fn name(&self) -> &'static str {
        Primitive::name(*self)
    }

    fn symbol(&self) -> char {
        Primitive::symbol(*self)
    }

    fn supports(&self, valence: Valence) -> bool {
        self.function().supports(valence)
    }

    fn monadic(&self, right: i64, config: &KernelConfig) -> ElementResult {
        self.function().monadic(right, config)
    }

    fn dyadic(&self, left: i64, right: i64, config: &KernelConfig) -> ElementResult {
        self.function().dyadic(left, right, config)
    }
}

macro_rules! entry_points {
    ($($(#[$doc:meta])* $fn_name:ident => $prim:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $fn_name(res: &mut Array, left: Option<&Array>, right: &Array) -> KernelResult<()> {
                dispatch::apply(&$prim, &KernelConfig::PERMISSIVE, res, left, right)
            }
        )*
    };
}

entry_points! {
    /// `res ← [left] + right`
    add => Add;
    /// `res ← [left] - right`
    subtract => Subtract;
    /// `res ← [left] × right`
    multiply => Multiply;
    /// `res ← [left] ÷ right`
    divide => Divide;
    /// `res ← [left] * right`
    power => Power;
    /// `res ← [left] | right`
    magnitude => Magnitude;
    /// `res ← left < right`
    less => Less;
    /// `res ← left ≤ right`
    less_or_equal => LessOrEqual;
    /// `res ← left = right`
    equal => Equal;
    /// `res ← left ≥ right`
    greater_or_equal => GreaterOrEqual;
    /// `res ← left > right`
    greater => Greater;
    /// `res ← left ≠ right`
    not_equal => NotEqual;
    /// `res ← ~right`
    not => Not;
}
