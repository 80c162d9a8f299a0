// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Property tests for the cast operations using proptest.
//!
//! The integer reference model clamps in `i128`, which holds every kind up
//! to 64 bits. Properties:
//!
//! 1. Saturate matches the reference clamp.
//! 2. Saturate is idempotent.
//! 3. Checked cast is `Some` exactly when saturate leaves the value unchanged.
//! 4. Mixed comparison matches the `i128` ordering.
//! 5. Float targets stay within their finite bounds and are idempotent.
//! 6. Checked float-to-integer casts accept exactly the in-range values.

use proptest::prelude::*;
use std::cmp::Ordering;

use crate::num::ops::{
    checked_cast::checked_cast,
    mixed_cmp::{cmp_mixed, max_mixed},
    saturating_cast::saturate,
};

fn reference_clamp(v: i128, lo: i128, hi: i128) -> i128 {
    v.clamp(lo, hi)
}

proptest! {
    #[test]
    fn saturate_i8_from_i64_matches_reference(v in any::<i64>()) {
        let got = saturate::<i8, _>(v);
        prop_assert_eq!(got as i128, reference_clamp(v as i128, i8::MIN as i128, i8::MAX as i128));
    }

    #[test]
    fn saturate_u16_from_i32_matches_reference(v in any::<i32>()) {
        let got = saturate::<u16, _>(v);
        prop_assert_eq!(got as i128, reference_clamp(v as i128, 0, u16::MAX as i128));
    }

    #[test]
    fn saturate_i32_from_u64_matches_reference(v in any::<u64>()) {
        let got = saturate::<i32, _>(v);
        let expected = reference_clamp(v as i128, i32::MIN as i128, i32::MAX as i128);
        prop_assert_eq!(got as i128, expected);
    }

    #[test]
    fn saturate_u64_from_i64_matches_reference(v in any::<i64>()) {
        let got = saturate::<u64, _>(v);
        prop_assert_eq!(got as i128, reference_clamp(v as i128, 0, u64::MAX as i128));
    }

    #[test]
    fn saturate_is_idempotent(v in any::<i64>()) {
        let once = saturate::<u8, _>(v);
        prop_assert_eq!(saturate::<u8, _>(once), once);
        let once = saturate::<i16, _>(v);
        prop_assert_eq!(saturate::<i16, _>(once), once);
    }

    #[test]
    fn saturate_passes_in_range_values_through(v in any::<i8>()) {
        prop_assert_eq!(saturate::<i8, _>(v as i64), v);
        prop_assert_eq!(saturate::<i32, _>(v), v as i32);
    }

    #[test]
    fn saturate_f32_from_f64_stays_in_bounds(v in any::<f64>()) {
        let got = saturate::<f32, _>(v);
        prop_assert!(got >= f32::MIN && got <= f32::MAX);
        prop_assert_eq!(saturate::<f32, _>(got), got);
        if v.is_nan() || v >= f32::MAX as f64 {
            prop_assert_eq!(got, f32::MAX);
        } else if v <= f32::MIN as f64 {
            prop_assert_eq!(got, f32::MIN);
        } else {
            prop_assert_eq!(got, v as f32);
        }
    }

    #[test]
    fn saturate_i64_from_f64_is_idempotent(v in any::<f64>()) {
        let once = saturate::<i64, _>(v);
        prop_assert_eq!(saturate::<i64, _>(once), once);
        if v >= 9_223_372_036_854_775_808.0f64 {
            prop_assert_eq!(once, i64::MAX);
        }
    }

    #[test]
    fn checked_i64_from_f64_accepts_exactly_in_range(v in any::<f64>()) {
        let bound = 9_223_372_036_854_775_808.0f64;
        let in_range = v >= -bound && v < bound;
        let got = checked_cast::<i64, _>(v);
        prop_assert_eq!(got.is_some(), in_range);
        if let Some(x) = got {
            prop_assert_eq!(x, v as i64);
        }
    }

    #[test]
    fn checked_i32_from_f32_accepts_exactly_in_range(v in any::<f32>()) {
        let in_range = v >= -2_147_483_648.0f32 && v < 2_147_483_648.0f32;
        prop_assert_eq!(checked_cast::<i32, _>(v).is_some(), in_range);
    }

    #[test]
    fn saturate_i16_from_f64_stays_in_bounds(v in any::<f64>()) {
        let got = saturate::<i16, _>(v);
        if v.is_nan() {
            prop_assert_eq!(got, i16::MAX);
        } else if v >= i16::MAX as f64 {
            prop_assert_eq!(got, i16::MAX);
        } else if v <= i16::MIN as f64 {
            prop_assert_eq!(got, i16::MIN);
        } else {
            prop_assert_eq!(got, v as i16);
        }
    }

    #[test]
    fn checked_is_some_iff_saturate_is_lossless(v in any::<i64>()) {
        let saturated = saturate::<i16, _>(v);
        match checked_cast::<i16, _>(v) {
            Some(x) => prop_assert_eq!(x as i64, v),
            None => prop_assert_ne!(saturated as i64, v),
        }
    }

    #[test]
    fn cmp_mixed_matches_wide_ordering(a in any::<i64>(), b in any::<u64>()) {
        prop_assert_eq!(cmp_mixed(a, b), Some((a as i128).cmp(&(b as i128))));
        let expected = if (a as i128) < (b as i128) { b as i128 } else { a as i128 };
        prop_assert_eq!(max_mixed(a, b), expected);
    }

    #[test]
    fn cmp_mixed_is_antisymmetric(a in any::<i32>(), b in any::<u32>()) {
        let forward = cmp_mixed(a, b).map(Ordering::reverse);
        prop_assert_eq!(forward, cmp_mixed(b, a));
    }
}
