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

//! # Mixing
//!
//! `Mixed<A, B>` is the single primitive that represents every value of both
//! `A` and `B`:
//!
//! - the same type mixes to itself;
//! - a floating kind absorbs any integer kind, and `f64` absorbs `f32`;
//! - integers of equal width and opposite signedness extend the signed one;
//! - otherwise the wider integer wins, unless it is unsigned and the other
//!   one is signed, in which case the wider one's signed correspondent is
//!   extended.
//!
//! Pairs whose result would need a rung past `i128` (`u128` with any signed
//! integer) have no `Mix` implementation and fail to build. Every entry of
//! the table below is checked against `Ladder::NATIVE` at compile time.
//!
//! ```rust
//! # use numkind_core::mixed;
//! # use numkind_core::num::mix::Mixed;
//! let a: Mixed<i8, u8> = -128;
//! let b: Mixed<u32, i8> = u32::MAX as i64;
//! let c: mixed!(u8, i8, u32) = -1;
//! assert_eq!((a, b, c), (-128i16, 4_294_967_295i64, -1i64));
//! ```
//!
//! ```compile_fail
//! # use numkind_core::num::mix::Mixed;
//! let _: Mixed<u128, i8> = 0;
//! ```

use crate::kind::ladder::Ladder;
use crate::num::{
    arithmetic::{Arithmetic, NativeSigned, NativeUnsigned},
    resolves_to,
};

/// Resolution of the kind that represents both `Self` and `Rhs`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` and `{Rhs}` cannot be mixed",
    label = "no kind on the ladder represents both `{Self}` and `{Rhs}`",
    note = "mixing `u128` with a signed integer would need a signed kind wider than `i128`"
)]
pub trait Mix<Rhs: Arithmetic = Self>: Arithmetic {
    /// The mixed kind.
    type Output: Arithmetic;
}

/// The kind that represents every value of `A` and of `B`.
pub type Mixed<A, B> = <A as Mix<B>>::Output;

/// Mixes two or more kinds, folding from the right.
///
/// `mixed!(A, B, C)` is `Mixed<A, Mixed<B, C>>`.
#[macro_export]
macro_rules! mixed {
    ($t:ty $(,)?) => { $t };
    ($head:ty, $($tail:ty),+ $(,)?) => {
        $crate::num::mix::Mixed<$head, $crate::mixed!($($tail),+)>
    };
}

const fn mixes_to<A: Arithmetic, B: Arithmetic, O: Arithmetic>() -> bool {
    let ladder = Ladder::NATIVE;
    resolves_to(ladder.mix(A::KIND, B::KIND), O::KIND)
        && resolves_to(ladder.mix(B::KIND, A::KIND), O::KIND)
}

macro_rules! impl_mix_identity {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mix for $t {
                type Output = $t;
            }

            const _: () = assert!(mixes_to::<$t, $t, $t>());
        )*
    };
}

macro_rules! impl_mix_for {
    ($($a:ty, $b:ty => $out:ty;)*) => {
        $(
            impl Mix<$b> for $a {
                type Output = $out;
            }

            impl Mix<$a> for $b {
                type Output = $out;
            }

            const _: () = assert!(
                mixes_to::<$a, $b, $out>(),
                concat!(
                    "mix table disagrees with the ladder for ",
                    stringify!($a),
                    " and ",
                    stringify!($b)
                )
            );
        )*
    };
}

/// Mixes `$alias` with each `$t` in both directions, resolved through the
/// rung `$alias` collapses onto.
macro_rules! impl_mix_platform {
    ($alias:ty => $rung:ty: $($t:ty),* $(,)?) => {
        $(
            impl Mix<$t> for $alias {
                type Output = Mixed<$rung, $t>;
            }

            impl Mix<$alias> for $t {
                type Output = Mixed<$t, $rung>;
            }
        )*
    };
}

impl_mix_identity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl_mix_for! {
    // Signed with signed.
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, i128 => i128;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, i128 => i128;
    i32, i64 => i64;
    i32, i128 => i128;
    i64, i128 => i128;

    // Unsigned with unsigned.
    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u8, u128 => u128;
    u16, u32 => u32;
    u16, u64 => u64;
    u16, u128 => u128;
    u32, u64 => u64;
    u32, u128 => u128;
    u64, u128 => u128;

    // Equal width, opposite signedness.
    i8, u8 => i16;
    i16, u16 => i32;
    i32, u32 => i64;
    i64, u64 => i128;

    // Wider signed with narrower unsigned.
    i16, u8 => i16;
    i32, u8 => i32;
    i32, u16 => i32;
    i64, u8 => i64;
    i64, u16 => i64;
    i64, u32 => i64;
    i128, u8 => i128;
    i128, u16 => i128;
    i128, u32 => i128;
    i128, u64 => i128;

    // Wider unsigned with narrower signed.
    u16, i8 => i32;
    u32, i8 => i64;
    u32, i16 => i64;
    u64, i8 => i128;
    u64, i16 => i128;
    u64, i32 => i128;

    // Floating.
    f32, f64 => f64;
    f32, i8 => f32;
    f32, i16 => f32;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, i128 => f32;
    f32, u8 => f32;
    f32, u16 => f32;
    f32, u32 => f32;
    f32, u64 => f32;
    f32, u128 => f32;
    f64, i8 => f64;
    f64, i16 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, i128 => f64;
    f64, u8 => f64;
    f64, u16 => f64;
    f64, u32 => f64;
    f64, u64 => f64;
    f64, u128 => f64;
}

// A platform alias keeps its own name when mixed with itself; with any other
// kind it mixes exactly like the rung it collapses onto.
impl_mix_platform!(isize => NativeSigned: i8, i16, i32, i64, i128, u8, u16, u32, u64, f32, f64);
impl_mix_platform!(
    usize => NativeUnsigned: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64
);

impl Mix<usize> for isize {
    type Output = Mixed<NativeSigned, NativeUnsigned>;
}

impl Mix<isize> for usize {
    type Output = Mixed<NativeUnsigned, NativeSigned>;
}
