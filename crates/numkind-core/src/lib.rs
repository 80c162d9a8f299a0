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

//! # numkind Core
//!
//! Build-time numeric kind resolution and safe conversions between the
//! primitive arithmetic types. Given the kinds involved in an expression,
//! this crate picks the type that can hold them all, and converts runtime
//! values into a narrower type by clamping instead of wrapping.
//!
//! ## Modules
//!
//! - `kind`: Runtime descriptors of the kind ladder (`Kind`, `Ladder`,
//!   `LadderConfig`) with `const fn` extension and mixing rules, name
//!   parsing, and the `KindError` type for run-time queries.
//! - `num`: Type-level resolution (`Arithmetic`, `Extended<T>`,
//!   `Mixed<A, B>`, `mixed!`) and the cast operations built on it
//!   (`saturate`, `checked_cast`, cross-kind comparisons).
//!
//! ## Example
//!
//! ```rust
//! use numkind_core::num::mix::Mixed;
//! use numkind_core::num::ops::saturating_cast::saturate;
//!
//! // A kind that holds every i8 and every u8.
//! let both: Mixed<i8, u8> = -128;
//! assert_eq!(both, -128i16);
//!
//! // Clamp into a narrower kind, comparing in `Mixed<u8, i32>`.
//! assert_eq!(saturate::<u8, _>(-5i32), 0);
//! assert_eq!(saturate::<i8, _>(300i32), 127);
//! ```
//!
//! ## Failure model
//!
//! Unsupported kinds and resolutions that would need a rung past `i128` are
//! rejected by the compiler. Casts have no error path at run time.

pub mod kind;
pub mod num;

#[cfg(test)]
mod prop_tests;
