//! Integration tests for the host boundary and configuration.
//!
//! Component: Marshaling boundary, KernelConfig
//!
//! These tests verify:
//! - Host data is deep-copied on the way in
//! - Accessors read back exactly what was stored
//! - Malformed host data is rejected with a status code
//! - Configuration parses from JSON and changes element behaviour

#![cfg(test)]

use crate::common::*;

use aplrt::*;

// =============================================================================
// Marshaling
// =============================================================================

mod marshaling {
    use super::*;

    #[test]
    fn host_buffers_are_copied() {
        // Arrange
        let mut shape = vec![2u32, 2];
        let mut data = vec![1i64, 2, 3, 4];

        // Act
        let arr = make_owned_array(2, 4, &shape, &data).unwrap();
        shape.clear();
        data.iter_mut().for_each(|v| *v = -1);

        // Assert
        assert_eq!(arr.shape(), &[2, 2]);
        assert_eq!(arr.elements(), &[1, 2, 3, 4]);
    }

    #[test]
    fn read_back() {
        let arr = make_owned_array(3, 8, &[2, 2, 2], &[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(get_rank(&arr), 3);
        assert_eq!(get_size(&arr), 8);

        let mut shape = vec![0u32; get_rank(&arr)];
        let mut data = vec![0i64; get_size(&arr)];
        get_shape_into(&mut shape, &arr);
        get_elements_into(&mut data, &arr);
        assert_eq!(shape, vec![2, 2, 2]);
        assert_eq!(data, (0..8).collect::<Vec<i64>>());
    }

    #[test]
    fn result_read_back_after_primitive() {
        let left = make_owned_array(1, 3, &[3], &[1, 2, 3]).unwrap();
        let right = make_owned_array(0, 1, &[], &[2]).unwrap();
        let mut res = Array::new();

        let status = status(&power(&mut res, Some(&left), &right));

        assert_eq!(status, 0);
        let mut data = [0i64; 3];
        assert_eq!(get_elements_into(&mut data, &res), 3);
        assert_eq!(data, [1, 4, 9]);
    }

    #[test]
    fn malformed_input() {
        let cases: [(usize, usize, &[u32], &[i64]); 4] = [
            (1, 3, &[4], &[1, 2, 3]),
            (0, 2, &[], &[1, 2]),
            (2, 4, &[2], &[1, 2, 3, 4]),
            (1, 5, &[5], &[1, 2]),
        ];
        for (rank, size, shape, data) in cases {
            let err = make_owned_array(rank, size, shape, data).unwrap_err();
            assert!(matches!(err, KernelError::MalformedArray { .. }), "{:?}", err);
            assert_eq!(err.category(), ErrorCategory::Boundary);
            assert_eq!(err.code(), 14);
        }
    }

    #[test]
    fn shape_product_overflow() {
        // Dimensions whose product wraps to zero must not pass as an empty array.
        let err = make_owned_array(4, 0, &[65536, 65536, 65536, 65536], &[]).unwrap_err();
        assert!(matches!(err, KernelError::MalformedArray { rank: 4, size: 0, .. }), "{:?}", err);
        assert_eq!(err.code(), 14);

        let err = make_owned_array(2, 1, &[u32::MAX, u32::MAX], &[7]).unwrap_err();
        assert_eq!(err.code(), 14);
    }

    #[test]
    fn zero_length_dimension() {
        let arr = make_owned_array(2, 0, &[3, 0], &[]).unwrap();
        assert_eq!(get_rank(&arr), 2);
        assert_eq!(get_size(&arr), 0);
    }
}

// =============================================================================
// Status Codes
// =============================================================================

mod status_codes {
    use super::*;

    #[test]
    fn distinct_codes_per_kind() {
        let mut res = Array::new();
        let v = vector(&[1, 0]);

        assert_eq!(status(&add(&mut res, Some(&v), &v)), 0);
        assert_eq!(status(&divide(&mut res, Some(&v), &v)), 11);
        assert_eq!(status(&add(&mut res, Some(&v), &iota(3))), 12);
        assert_eq!(status(&not(&mut res, Some(&v), &v)), 13);
    }

    #[test]
    fn error_messages() {
        let mut res = Array::new();
        let err = divide(&mut res, Some(&scalar(1)), &scalar(0)).unwrap_err();
        assert!(err.to_string().starts_with("DOMAIN ERROR"));
        assert!(err.to_string().contains("divide"));

        let err = less(&mut res, None, &scalar(0)).unwrap_err();
        assert!(err.to_string().starts_with("VALENCE ERROR"));
    }
}

// =============================================================================
// Configuration
// =============================================================================

mod configuration {
    use super::*;

    #[test]
    fn default_wraps_on_overflow() {
        let res = run(Primitive::Subtract, Some(&scalar(i64::MIN)), &scalar(1)).unwrap();
        assert_eq!(res.elements(), &[i64::MAX]);
    }

    #[test]
    fn strict_reports_overflow() {
        let kernel = Kernel::new(KernelConfig::strict());
        let result = run_with(&kernel, Primitive::Subtract, Some(&vector(&[0, i64::MIN])), &scalar(1));
        assert_domain_error(&result, DomainReason::Overflow, 1);
    }

    #[test]
    fn strict_residue_of_min_by_negative_one() {
        let kernel = Kernel::new(KernelConfig::strict());
        let res = run_with(&kernel, Primitive::Magnitude, Some(&scalar(-1)), &vector(&[i64::MIN, 7])).unwrap();
        assert_eq!(res.elements(), &[0, 0]);
    }

    #[test]
    fn exact_power_from_json() {
        // Arrange
        let kernel = Kernel::from_json(r#"{ "power": "exact" }"#).unwrap();

        // Act
        let res = run_with(&kernel, Primitive::Power, Some(&scalar(3)), &vector(&[39, 40])).unwrap();

        // Assert: wrapping stays the default overflow policy
        assert_eq!(kernel.config().overflow, OverflowPolicy::Wrap);
        assert_eq!(res.elements()[0], 3i64.pow(39));
        assert_eq!(res.elements()[1], 3i64.wrapping_pow(40));
    }

    #[test]
    fn truncated_power_saturates() {
        let res = run(Primitive::Power, Some(&scalar(10)), &vector(&[30, -30])).unwrap();
        assert_eq!(res.elements(), &[i64::MAX, 0]);
    }

    #[test]
    fn config_round_trip() {
        let text = KernelConfig::strict().to_json().unwrap();
        assert!(text.contains("\"error\""));
        assert_eq!(KernelConfig::from_json(&text).unwrap(), KernelConfig::strict());
        assert_eq!(KernelConfig::from_json("{}").unwrap(), KernelConfig::default());
    }

    #[test]
    fn bad_config() {
        let err = KernelConfig::from_json(r#"{ "overflow": "saturate" }"#).unwrap_err();
        assert_eq!(err.code(), 15);
    }
}
