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

//! # Runtime Kind Descriptors
//!
//! Value-level model of the supported arithmetic kinds. The type-level
//! traits in `crate::num` resolve at compile time; this module describes the
//! same ladder with plain `Copy` values so it can be queried in `const`
//! context and for kinds only known at run time.
//!
//! ## Submodules
//!
//! - `catalog`: The `Kind` tag (width, signedness, range, names) and
//!   `Signedness`.
//! - `ladder`: `Ladder` and `LadderConfig`, with the extension and mixing
//!   rules as `const fn`s plus fallible `try_*` counterparts.
//! - `error`: `KindError` and its detail types.

pub mod catalog;
pub mod error;
pub mod ladder;
