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

//! Range-checked conversions between kinds.
//!
//! The counterpart of `saturating_cast`: the same comparison in the mixed
//! kind, but an out-of-range value yields `None` instead of a bound.

use crate::kind::catalog::Kind;
use crate::num::{
    arithmetic::Arithmetic,
    mix::{Mix, Mixed},
};
use num_traits::AsPrimitive;

/// Returns `true` if the maximum of the integer kind `target` is exactly
/// representable in `domain`.
///
/// An integer maximum `2^m - 1` wider than the float mantissa rounds up to
/// `2^m`, one past the true limit.
const fn max_is_exact(target: Kind, domain: Kind) -> bool {
    match (target.int_max(), domain) {
        (Some(max), Kind::F32) => max < (1u128 << f32::MANTISSA_DIGITS),
        (Some(max), Kind::F64) => max < (1u128 << f64::MANTISSA_DIGITS),
        _ => true,
    }
}

/// Checked conversion from `V` (no references).
///
/// Returns `None` when `value` lies outside `[Self::MIN, Self::MAX]`, or is
/// NaN. The range check is performed in `Mixed<Self, V>`. When that kind is
/// floating and cannot hold `Self::MAX` exactly, the rounded-up bound is
/// excluded. Fractional values are truncated toward zero.
///
/// # Examples
///
/// ```rust
/// # use numkind_core::num::ops::checked_cast::CheckedFrom;
///
/// assert_eq!(u8::checked_from(255i32), Some(255));
/// assert_eq!(u8::checked_from(256i32), None);
/// assert_eq!(i32::checked_from(u32::MAX), None);
/// assert_eq!(u16::checked_from(f32::NAN), None);
/// assert_eq!(i32::checked_from(2_147_483_648.0f32), None);
/// ```
pub trait CheckedFrom<V>: Sized {
    /// Converts `value`, or returns `None` if it is out of range.
    fn checked_from(value: V) -> Option<Self>;
}

impl<T, V> CheckedFrom<V> for T
where
    T: Mix<V> + AsPrimitive<Mixed<T, V>>,
    V: Arithmetic + AsPrimitive<Mixed<T, V>>,
    Mixed<T, V>: AsPrimitive<T>,
{
    #[inline(always)]
    fn checked_from(value: V) -> Option<Self> {
        let lo: Mixed<T, V> = T::MIN_VALUE.as_();
        let hi: Mixed<T, V> = T::MAX_VALUE.as_();
        let value: Mixed<T, V> = value.as_();
        let below_max = if max_is_exact(T::KIND, <Mixed<T, V> as Arithmetic>::KIND) {
            value <= hi
        } else {
            value < hi
        };
        if lo <= value && below_max {
            Some(value.as_())
        } else {
            None
        }
    }
}

/// Checked cast by value (no references).
///
/// # Examples
///
/// ```rust
/// # use numkind_core::num::ops::checked_cast::CheckedCastVal;
///
/// assert_eq!((-1i64).checked_cast_val::<u32>(), None);
/// assert_eq!(7i64.checked_cast_val::<u32>(), Some(7));
/// ```
pub trait CheckedCastVal: Arithmetic {
    /// Converts `self` into `T`, or returns `None` if it is out of range.
    #[inline(always)]
    fn checked_cast_val<T>(self) -> Option<T>
    where
        T: CheckedFrom<Self>,
    {
        T::checked_from(self)
    }
}

impl<V: Arithmetic> CheckedCastVal for V {}

/// Converts `value` into `T`, or returns `None` if it is out of range.
#[inline(always)]
pub fn checked_cast<T, V>(value: V) -> Option<T>
where
    T: CheckedFrom<V>,
{
    T::checked_from(value)
}
