//! Integration tests for the primitive table.
//!
//! Component: Primitive Operations
//!
//! Each primitive is exercised through the public free functions and the
//! `Primitive` table, covering both valences and every domain rule.

#![cfg(test)]

use crate::common::*;

use aplrt::*;

// =============================================================================
// Arithmetic
// =============================================================================

mod arithmetic {
    use super::*;

    #[test]
    fn add_and_identity() {
        assert_eq!(dyadic(Primitive::Add, &[1, -2, 3], &[4, 5, -6]), vec![5, 3, -3]);
        assert_eq!(monadic(Primitive::Add, &[-1, 0, 9]), vec![-1, 0, 9]);
    }

    #[test]
    fn subtract_and_negate() {
        assert_eq!(dyadic(Primitive::Subtract, &[5, 0], &[3, 4]), vec![2, -4]);
        assert_eq!(monadic(Primitive::Subtract, &[3, -2, 0]), vec![-3, 2, 0]);
    }

    #[test]
    fn multiply_and_signum() {
        assert_eq!(dyadic(Primitive::Multiply, &[2, -3], &[4, 5]), vec![8, -15]);
        assert_eq!(monadic(Primitive::Multiply, &[-5, 0, 7]), vec![-1, 0, 1]);
    }

    #[test]
    fn divide_truncates_toward_zero() {
        assert_eq!(dyadic(Primitive::Divide, &[7, -7, 7, -7], &[2, 2, -2, -2]), vec![3, -3, -3, 3]);
    }

    #[test]
    fn reciprocal_is_integral() {
        assert_eq!(monadic(Primitive::Divide, &[1, -1, 2, 100]), vec![1, -1, 0, 0]);
        let result = run(Primitive::Divide, None, &vector(&[5, 0]));
        assert_domain_error(&result, DomainReason::DivideByZero, 1);
    }

    #[test]
    fn exponential_truncates() {
        assert_eq!(monadic(Primitive::Power, &[0, 1, 2, 3, -1]), vec![1, 2, 7, 20, 0]);
    }

    #[test]
    fn power() {
        assert_eq!(dyadic(Primitive::Power, &[2, 3, -2, 10, 2], &[10, 3, 3, 0, -2]), vec![1024, 27, -8, 1, 0]);
    }

    #[test]
    fn zero_to_negative_power() {
        let result = run(Primitive::Power, Some(&vector(&[0, 0])), &vector(&[2, -3]));
        assert_domain_error(&result, DomainReason::ZeroToNegativePower, 1);
    }

    #[test]
    fn magnitude() {
        assert_eq!(monadic(Primitive::Magnitude, &[-9, 0, 9]), vec![9, 0, 9]);
    }

    #[test]
    fn residue() {
        assert_eq!(dyadic(Primitive::Magnitude, &[3, 3, 5, 0], &[10, -10, 3, 17]), vec![1, -1, 3, 17]);
    }

    #[test]
    fn residue_zero_left_scalar_passes_through() {
        let right = vector(&[-4, 0, 4, i64::MAX]);
        let res = run(Primitive::Magnitude, Some(&scalar(0)), &right).unwrap();
        assert_eq!(res, right);
    }
}

// =============================================================================
// Relational and Logical
// =============================================================================

mod relational {
    use super::*;

    const L: [i64; 3] = [1, 2, 3];
    const R: [i64; 3] = [2, 2, 2];

    #[test]
    fn comparisons() {
        assert_eq!(dyadic(Primitive::Less, &L, &R), vec![1, 0, 0]);
        assert_eq!(dyadic(Primitive::LessOrEqual, &L, &R), vec![1, 1, 0]);
        assert_eq!(dyadic(Primitive::Equal, &L, &R), vec![0, 1, 0]);
        assert_eq!(dyadic(Primitive::GreaterOrEqual, &L, &R), vec![0, 1, 1]);
        assert_eq!(dyadic(Primitive::Greater, &L, &R), vec![0, 0, 1]);
        assert_eq!(dyadic(Primitive::NotEqual, &L, &R), vec![1, 0, 1]);
    }

    #[test]
    fn equal_is_boolean_not_copy() {
        assert_eq!(dyadic(Primitive::Equal, &[1, 2, 3], &[1, 0, 3]), vec![1, 0, 1]);
    }

    #[test]
    fn every_relational_rejects_monadic() {
        for prim in Primitive::ALL.into_iter().filter(|p| p.is_relational()) {
            let mut res = vector(&[42]);
            let result = Kernel::default().apply(&prim, &mut res, None, &vector(&[1, 2]));
            assert_unsupported(&result, Valence::Monadic);
            assert_eq!(res.elements(), &[42], "{} touched the result", prim.name());
        }
    }

    #[test]
    fn not() {
        assert_eq!(monadic(Primitive::Not, &[0, 1, 5, -1]), vec![1, 0, 0, 0]);
    }

    #[test]
    fn dyadic_not_is_unsupported() {
        let result = run(Primitive::Not, Some(&scalar(1)), &scalar(0));
        assert_unsupported(&result, Valence::Dyadic);
    }
}

// =============================================================================
// Primitive Table
// =============================================================================

mod table {
    use super::*;

    #[test]
    fn glyph_lookup() {
        let glyphs = "+-×÷*|<≤=≥>≠~";
        let found: Vec<Primitive> = glyphs.chars().filter_map(Primitive::from_symbol).collect();
        assert_eq!(found, Primitive::ALL.to_vec());
    }

    #[test]
    fn name_lookup() {
        assert_eq!(Primitive::from_name("magnitude"), Some(Primitive::Magnitude));
        assert_eq!(Primitive::from_name("not_equal"), Some(Primitive::NotEqual));
        assert_eq!(Primitive::from_name("Add"), None);
    }

    #[test]
    fn free_functions_match_table() {
        let (l, r) = (vector(&[6, -3]), vector(&[4, 2]));
        let mut via_fn = Array::new();
        greater_or_equal(&mut via_fn, Some(&l), &r).unwrap();
        let via_table = run(Primitive::GreaterOrEqual, Some(&l), &r).unwrap();
        assert_eq!(via_fn, via_table);
    }

    #[test]
    fn custom_scalar_function() {
        // Any ScalarFunction runs through the same dispatcher.
        struct Max;
        impl ScalarFunction for Max {
            fn name(&self) -> &'static str {
                "max"
            }
            fn symbol(&self) -> char {
                '⌈'
            }
            fn dyadic(&self, left: i64, right: i64, _config: &KernelConfig) -> ElementResult {
                Ok(left.max(right))
            }
        }

        let mut res = Array::new();
        Kernel::default().apply(&Max, &mut res, Some(&scalar(2)), &vector(&[1, 5, 2])).unwrap();
        assert_eq!(res.elements(), &[2, 5, 2]);

        let result = Kernel::default().apply(&Max, &mut res, None, &vector(&[1]));
        assert_unsupported(&result, Valence::Monadic);
    }
}
