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

//! Comparisons between values of different kinds.
//!
//! Comparing `-1i32` with `u32::MAX` through an `as` cast to either side
//! gives the wrong answer. Here both operands are first moved into
//! `Mixed<A, B>`; for integer pairs that move is lossless, so the comparison
//! is exact.

use crate::num::{
    arithmetic::Arithmetic,
    mix::{Mix, Mixed},
};
use num_traits::AsPrimitive;
use std::cmp::Ordering;

/// Moves `a` and `b` into their mixed kind.
///
/// # Examples
///
/// ```rust
/// # use numkind_core::num::ops::mixed_cmp::widen_pair;
///
/// let (a, b) = widen_pair(-1i8, 200u8);
/// assert_eq!((a, b), (-1i16, 200i16));
/// ```
#[inline(always)]
pub fn widen_pair<A, B>(a: A, b: B) -> (Mixed<A, B>, Mixed<A, B>)
where
    A: Mix<B> + AsPrimitive<Mixed<A, B>>,
    B: Arithmetic + AsPrimitive<Mixed<A, B>>,
{
    (a.as_(), b.as_())
}

/// Compares `a` and `b` in their mixed kind. `None` only if either side is
/// NaN.
///
/// # Examples
///
/// ```rust
/// # use numkind_core::num::ops::mixed_cmp::cmp_mixed;
/// # use std::cmp::Ordering;
///
/// assert_eq!(cmp_mixed(-1i32, u32::MAX), Some(Ordering::Less));
/// assert_eq!(cmp_mixed(u64::MAX, -1i64), Some(Ordering::Greater));
/// ```
#[inline(always)]
pub fn cmp_mixed<A, B>(a: A, b: B) -> Option<Ordering>
where
    A: Mix<B> + AsPrimitive<Mixed<A, B>>,
    B: Arithmetic + AsPrimitive<Mixed<A, B>>,
{
    let (a, b) = widen_pair(a, b);
    a.partial_cmp(&b)
}

/// The greater of `a` and `b`, in their mixed kind. Returns `a` when the two
/// are equal or unordered.
#[inline(always)]
pub fn max_mixed<A, B>(a: A, b: B) -> Mixed<A, B>
where
    A: Mix<B> + AsPrimitive<Mixed<A, B>>,
    B: Arithmetic + AsPrimitive<Mixed<A, B>>,
{
    let (a, b) = widen_pair(a, b);
    if a < b { b } else { a }
}

/// The lesser of `a` and `b`, in their mixed kind. Returns `a` when the two
/// are equal or unordered.
#[inline(always)]
pub fn min_mixed<A, B>(a: A, b: B) -> Mixed<A, B>
where
    A: Mix<B> + AsPrimitive<Mixed<A, B>>,
    B: Arithmetic + AsPrimitive<Mixed<A, B>>,
{
    let (a, b) = widen_pair(a, b);
    if b < a { b } else { a }
}
