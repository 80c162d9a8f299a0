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

//! Saturating conversions between kinds.
//!
//! Comparisons run in `Mixed<T, V>`, never in the narrower of the two kinds.

use crate::num::{
    arithmetic::Arithmetic,
    mix::{Mix, Mixed},
    ops::clamp_closed,
};
use num_traits::AsPrimitive;

/// Saturating conversion from `V` (no references).
///
/// The value and the bounds of `Self` are compared in `Mixed<Self, V>`, which
/// holds both ranges, and the clamped result is narrowed to `Self`. Values
/// already in range, including the bounds themselves, are returned unchanged.
///
/// Infinities clamp to the matching bound and NaN resolves to the upper
/// bound.
///
/// # Examples
///
/// ```rust
/// # use numkind_core::num::ops::saturating_cast::SaturateFrom;
///
/// assert_eq!(i8::saturate_from(300i32), 127);
/// assert_eq!(u8::saturate_from(-5i32), 0);
/// assert_eq!(u32::saturate_from(-1i64), 0);
/// assert_eq!(i16::saturate_from(1.0e9f64), i16::MAX);
/// ```
pub trait SaturateFrom<V>: Sized {
    /// Converts `value`, clamping it to `[Self::MIN, Self::MAX]`.
    fn saturate_from(value: V) -> Self;
}

impl<T, V> SaturateFrom<V> for T
where
    T: Mix<V> + AsPrimitive<Mixed<T, V>>,
    V: Arithmetic + AsPrimitive<Mixed<T, V>>,
    Mixed<T, V>: AsPrimitive<T>,
{
    #[inline(always)]
    fn saturate_from(value: V) -> Self {
        let lo: Mixed<T, V> = T::MIN_VALUE.as_();
        let hi: Mixed<T, V> = T::MAX_VALUE.as_();
        clamp_closed(value.as_(), lo, hi).as_()
    }
}

/// Saturating cast by value (no references).
///
/// Method form of `SaturateFrom`, for chaining on the source value.
///
/// # Examples
///
/// ```rust
/// # use numkind_core::num::ops::saturating_cast::SaturatingCastVal;
///
/// let count: u64 = 70_000;
/// let stored: u16 = count.saturating_cast_val();
/// assert_eq!(stored, u16::MAX);
/// ```
pub trait SaturatingCastVal: Arithmetic {
    /// Converts `self` into `T`, clamping to `T`'s bounds.
    #[inline(always)]
    fn saturating_cast_val<T>(self) -> T
    where
        T: SaturateFrom<Self>,
    {
        T::saturate_from(self)
    }
}

impl<V: Arithmetic> SaturatingCastVal for V {}

/// Converts `value` into `T`, clamping it to `T`'s bounds.
///
/// # Examples
///
/// ```rust
/// # use numkind_core::num::ops::saturating_cast::saturate;
///
/// assert_eq!(saturate::<i8, _>(300i32), 127);
/// assert_eq!(saturate::<u8, _>(-5i32), 0);
/// assert_eq!(saturate::<i16, _>(100i32), 100);
/// ```
///
/// A pair without a mixed kind does not build:
///
/// ```compile_fail
/// # use numkind_core::num::ops::saturating_cast::saturate;
/// let _ = saturate::<u128, _>(-1i128);
/// ```
#[inline(always)]
pub fn saturate<T, V>(value: V) -> T
where
    T: SaturateFrom<V>,
{
    T::saturate_from(value)
}
