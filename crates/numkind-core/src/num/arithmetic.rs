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

//! # Arithmetic Kinds
//!
//! Type-level side of the kind catalog. Every supported primitive implements
//! the sealed `Arithmetic` trait, which ties it to its runtime `Kind` and
//! exposes its bounds as associated constants. Any other type is an
//! unsupported kind and is rejected when the program is built.

use crate::kind::catalog::Kind;
use num_traits::PrimInt;
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// The signed rung `isize` collapses onto.
#[cfg(target_pointer_width = "64")]
pub type NativeSigned = i64;
#[cfg(target_pointer_width = "32")]
pub type NativeSigned = i32;
#[cfg(target_pointer_width = "16")]
pub type NativeSigned = i16;

/// The unsigned rung `usize` collapses onto.
pub type NativeUnsigned = <NativeSigned as Integer>::Unsigned;

/// A primitive arithmetic kind on the ladder.
///
/// # Examples
///
/// ```rust
/// # use numkind_core::kind::catalog::Kind;
/// # use numkind_core::num::arithmetic::Arithmetic;
///
/// assert_eq!(<u8 as Arithmetic>::KIND, Kind::U8);
/// assert_eq!(<i16 as Arithmetic>::MIN_VALUE, i16::MIN);
/// assert_eq!(<usize as Arithmetic>::KIND, Kind::USIZE);
/// ```
///
/// ```compile_fail
/// # use numkind_core::num::arithmetic::Arithmetic;
/// let _ = <bool as Arithmetic>::KIND;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported arithmetic kind",
    label = "unsupported kind",
    note = "supported kinds are i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32 and f64"
)]
pub trait Arithmetic:
    sealed::Sealed + Copy + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// The runtime descriptor of this kind.
    const KIND: Kind;
    /// Smallest finite value.
    const MIN_VALUE: Self;
    /// Largest finite value.
    const MAX_VALUE: Self;
}

/// An integer kind with its signed/unsigned correspondents of equal width.
pub trait Integer: Arithmetic + PrimInt {
    /// The signed kind of the same width.
    type Signed: Integer;
    /// The unsigned kind of the same width.
    type Unsigned: Integer;
}

/// A floating-point kind.
pub trait Float: Arithmetic + num_traits::Float {}

macro_rules! impl_arithmetic_for {
    ($t:ty, $kind:expr) => {
        impl sealed::Sealed for $t {}

        impl Arithmetic for $t {
            const KIND: Kind = $kind;
            const MIN_VALUE: Self = <$t>::MIN;
            const MAX_VALUE: Self = <$t>::MAX;
        }
    };
}

macro_rules! impl_integer_for {
    ($t:ty, $kind:expr, $signed:ty, $unsigned:ty) => {
        impl_arithmetic_for!($t, $kind);

        impl Integer for $t {
            type Signed = $signed;
            type Unsigned = $unsigned;
        }
    };
}

macro_rules! impl_float_for {
    ($t:ty, $kind:expr) => {
        impl_arithmetic_for!($t, $kind);

        impl Float for $t {}
    };
}

impl_integer_for!(i8, Kind::I8, i8, u8);
impl_integer_for!(i16, Kind::I16, i16, u16);
impl_integer_for!(i32, Kind::I32, i32, u32);
impl_integer_for!(i64, Kind::I64, i64, u64);
impl_integer_for!(i128, Kind::I128, i128, u128);
impl_integer_for!(isize, Kind::ISIZE, isize, usize);

impl_integer_for!(u8, Kind::U8, i8, u8);
impl_integer_for!(u16, Kind::U16, i16, u16);
impl_integer_for!(u32, Kind::U32, i32, u32);
impl_integer_for!(u64, Kind::U64, i64, u64);
impl_integer_for!(u128, Kind::U128, i128, u128);
impl_integer_for!(usize, Kind::USIZE, isize, usize);

impl_float_for!(f32, Kind::F32);
impl_float_for!(f64, Kind::F64);
