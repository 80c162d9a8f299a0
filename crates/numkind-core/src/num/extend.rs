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

//! # Extension
//!
//! `Extended<T>` is the narrowest primitive of the same signedness whose
//! maximum is strictly greater than that of `T`. The widest rungs (`i128`,
//! `u128`) and floating kinds have no extension; naming `Extended` for them
//! fails to build rather than resolving to the same type.
//!
//! ```rust
//! # use numkind_core::num::extend::Extended;
//! let wide: Extended<u8> = 300;
//! assert_eq!(wide, 300u16);
//! ```
//!
//! ```compile_fail
//! # use numkind_core::num::extend::Extended;
//! let _: Extended<i128> = 0;
//! ```

use crate::kind::ladder::Ladder;
use crate::num::{
    arithmetic::{Arithmetic, Integer, NativeSigned, NativeUnsigned},
    resolves_to,
};

/// An integer kind with a strictly wider rung of the same signedness.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be extended",
    label = "no strictly wider kind of the same signedness exists",
    note = "`i128` and `u128` are the widest rungs, and floating kinds are never extended"
)]
pub trait Extendable: Integer {
    /// The narrowest strictly wider kind.
    type Extended: Integer;
}

/// The narrowest strictly wider kind of `T`.
pub type Extended<T> = <T as Extendable>::Extended;

const fn extends_to<T: Arithmetic, W: Arithmetic>() -> bool {
    resolves_to(Ladder::NATIVE.extend(T::KIND), W::KIND)
}

macro_rules! impl_extendable_for {
    ($t:ty => $wide:ty) => {
        impl Extendable for $t {
            type Extended = $wide;
        }

        const _: () = assert!(
            extends_to::<$t, $wide>(),
            concat!("extension table disagrees with the ladder for ", stringify!($t))
        );
    };
}

impl_extendable_for!(i8 => i16);
impl_extendable_for!(i16 => i32);
impl_extendable_for!(i32 => i64);
impl_extendable_for!(i64 => i128);

impl_extendable_for!(u8 => u16);
impl_extendable_for!(u16 => u32);
impl_extendable_for!(u32 => u64);
impl_extendable_for!(u64 => u128);

impl Extendable for isize {
    type Extended = Extended<NativeSigned>;
}

impl Extendable for usize {
    type Extended = Extended<NativeUnsigned>;
}
