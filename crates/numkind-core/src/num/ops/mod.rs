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

//! # Cross-Kind Operations
//!
//! By-value operations between values of possibly different kinds. Each one
//! first moves its operands into `Mixed<A, B>`, so no comparison is ever
//! performed in a kind that cannot hold both sides.
//!
//! ## Submodules
//!
//! - `saturating_cast`: `saturate`, `SaturateFrom`, `SaturatingCastVal`,
//!   clamping into the target's bounds.
//! - `checked_cast`: `checked_cast`, `CheckedFrom`, `CheckedCastVal`,
//!   returning `None` for out-of-range values.
//! - `mixed_cmp`: `widen_pair`, `cmp_mixed`, `max_mixed`, `min_mixed`.

pub mod checked_cast;
pub mod mixed_cmp;
pub mod saturating_cast;

/// Clamps `value` into `[lo, hi]` as `max(lo, min(hi, value))`.
///
/// An unordered `value` (NaN) fails every comparison and resolves to `hi`.
#[inline(always)]
pub(crate) fn clamp_closed<C: PartialOrd>(value: C, lo: C, hi: C) -> C {
    let upper = if value < hi { value } else { hi };
    if lo < upper { upper } else { lo }
}
