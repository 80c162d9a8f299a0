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

//! # Numeric Kind Resolution
//!
//! Type-level resolution of the kind ladder, evaluated entirely while the
//! program is built, plus the by-value cast operations built on top of it.
//!
//! ## Submodules
//!
//! - `arithmetic`: The sealed `Arithmetic` trait (kind descriptor and bounds
//!   as associated constants) and the `Integer`/`Float` refinements.
//! - `extend`: `Extendable` / `Extended<T>`, the strictly wider kind of the
//!   same signedness.
//! - `mix`: `Mix` / `Mixed<A, B>` and the `mixed!` macro, the kind that
//!   represents every value of its inputs.
//! - `ops`: Saturating and checked casts, and comparisons across kinds.
//!
//! Unsupported kinds, non-extendable kinds and unmixable pairs surface as
//! unsatisfied trait bounds, never as run-time errors.

use crate::kind::catalog::Kind;

pub mod arithmetic;
pub mod extend;
pub mod mix;
pub mod ops;

/// `resolved` is `Some(expected)`; usable in `const` assertions.
pub(crate) const fn resolves_to(resolved: Option<Kind>, expected: Kind) -> bool {
    match resolved {
        Some(kind) => kind.same(expected),
        None => false,
    }
}
