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

//! # Kind Catalog
//!
//! `Kind` is a closed, `Copy` descriptor with one tag per supported
//! primitive. All queries are `const fn`, so the same descriptors drive both
//! run-time resolution and the build-time checks of the type-level tables.
//!
//! `isize` and `usize` have no tag of their own: they collapse onto the rung
//! of the same width (`Kind::ISIZE`, `Kind::USIZE`).

use crate::kind::error::{KindError, UnsupportedKindError};
use std::{fmt::Display, str::FromStr};

/// Whether a kind carries a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
    /// Floating-point kinds.
    NotApplicable,
}

/// A supported arithmetic kind.
///
/// # Examples
///
/// ```rust
/// # use numkind_core::kind::catalog::{Kind, Signedness};
///
/// assert_eq!(Kind::U16.bits(), 16);
/// assert_eq!(Kind::U16.signedness(), Signedness::Unsigned);
/// assert_eq!(Kind::U16.to_signed(), Some(Kind::I16));
/// assert_eq!(Kind::I8.int_min(), Some(-128));
/// assert_eq!("u32".parse::<Kind>().unwrap(), Kind::U32);
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
}

impl Kind {
    /// Every kind in the catalog.
    pub const ALL: [Kind; 12] = [
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::I128,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::U128,
        Kind::F32,
        Kind::F64,
    ];

    /// The rung `isize` collapses onto for the compilation target.
    #[cfg(target_pointer_width = "64")]
    pub const ISIZE: Kind = Kind::I64;
    #[cfg(target_pointer_width = "32")]
    pub const ISIZE: Kind = Kind::I32;
    #[cfg(target_pointer_width = "16")]
    pub const ISIZE: Kind = Kind::I16;

    /// The rung `usize` collapses onto for the compilation target.
    pub const USIZE: Kind = match Kind::ISIZE.to_unsigned() {
        Some(kind) => kind,
        None => panic!("pointer-sized rung has no unsigned correspondent"),
    };

    /// Width in bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        match self {
            Kind::I8 | Kind::U8 => 8,
            Kind::I16 | Kind::U16 => 16,
            Kind::I32 | Kind::U32 | Kind::F32 => 32,
            Kind::I64 | Kind::U64 | Kind::F64 => 64,
            Kind::I128 | Kind::U128 => 128,
        }
    }

    #[inline(always)]
    pub const fn signedness(self) -> Signedness {
        match self {
            Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 | Kind::I128 => Signedness::Signed,
            Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 | Kind::U128 => Signedness::Unsigned,
            Kind::F32 | Kind::F64 => Signedness::NotApplicable,
        }
    }

    #[inline(always)]
    pub const fn is_float(self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    #[inline(always)]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    #[inline(always)]
    pub const fn is_signed_integer(self) -> bool {
        matches!(self.signedness(), Signedness::Signed)
    }

    #[inline(always)]
    pub const fn is_unsigned_integer(self) -> bool {
        matches!(self.signedness(), Signedness::Unsigned)
    }

    /// Smallest representable value of an integer kind, `None` for floats.
    pub const fn int_min(self) -> Option<i128> {
        match self {
            Kind::I8 => Some(i8::MIN as i128),
            Kind::I16 => Some(i16::MIN as i128),
            Kind::I32 => Some(i32::MIN as i128),
            Kind::I64 => Some(i64::MIN as i128),
            Kind::I128 => Some(i128::MIN),
            Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 | Kind::U128 => Some(0),
            Kind::F32 | Kind::F64 => None,
        }
    }

    /// Largest representable value of an integer kind, `None` for floats.
    pub const fn int_max(self) -> Option<u128> {
        match self {
            Kind::I8 => Some(i8::MAX as u128),
            Kind::I16 => Some(i16::MAX as u128),
            Kind::I32 => Some(i32::MAX as u128),
            Kind::I64 => Some(i64::MAX as u128),
            Kind::I128 => Some(i128::MAX as u128),
            Kind::U8 => Some(u8::MAX as u128),
            Kind::U16 => Some(u16::MAX as u128),
            Kind::U32 => Some(u32::MAX as u128),
            Kind::U64 => Some(u64::MAX as u128),
            Kind::U128 => Some(u128::MAX),
            Kind::F32 | Kind::F64 => None,
        }
    }

    /// Largest finite value of a floating kind, `None` for integers.
    ///
    /// The smallest finite value is its negation.
    pub fn float_max(self) -> Option<f64> {
        match self {
            Kind::F32 => Some(f32::MAX as f64),
            Kind::F64 => Some(f64::MAX),
            _ => None,
        }
    }

    /// The signed kind of the same width. Identity for signed kinds.
    pub const fn to_signed(self) -> Option<Kind> {
        match self {
            Kind::I8 | Kind::U8 => Some(Kind::I8),
            Kind::I16 | Kind::U16 => Some(Kind::I16),
            Kind::I32 | Kind::U32 => Some(Kind::I32),
            Kind::I64 | Kind::U64 => Some(Kind::I64),
            Kind::I128 | Kind::U128 => Some(Kind::I128),
            Kind::F32 | Kind::F64 => None,
        }
    }

    /// The unsigned kind of the same width. Identity for unsigned kinds.
    pub const fn to_unsigned(self) -> Option<Kind> {
        match self {
            Kind::I8 | Kind::U8 => Some(Kind::U8),
            Kind::I16 | Kind::U16 => Some(Kind::U16),
            Kind::I32 | Kind::U32 => Some(Kind::U32),
            Kind::I64 | Kind::U64 => Some(Kind::U64),
            Kind::I128 | Kind::U128 => Some(Kind::U128),
            Kind::F32 | Kind::F64 => None,
        }
    }

    /// Equality usable in `const` contexts.
    #[inline(always)]
    pub const fn same(self, other: Kind) -> bool {
        self as u8 == other as u8
    }

    /// The Rust spelling of the primitive.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = KindError;

    /// Parses a primitive name. `isize`/`usize` resolve to the rungs of the
    /// compilation target; use `Ladder::resolve` for another pointer width.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "isize" => Ok(Kind::ISIZE),
            "usize" => Ok(Kind::USIZE),
            _ => Kind::ALL
                .iter()
                .copied()
                .find(|kind| kind.name() == s)
                .ok_or_else(|| {
                    UnsupportedKindError {
                        name: s.to_string(),
                    }
                    .into()
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_and_unsigned_correspond_by_width() {
        for kind in Kind::ALL.iter().copied().filter(|k| k.is_integer()) {
            let signed = kind.to_signed().unwrap();
            let unsigned = kind.to_unsigned().unwrap();
            assert_eq!(signed.bits(), kind.bits());
            assert_eq!(unsigned.bits(), kind.bits());
            assert!(signed.is_signed_integer());
            assert!(unsigned.is_unsigned_integer());
            assert_eq!(unsigned.to_signed(), Some(signed));
        }
    }

    #[test]
    fn test_unsigned_range_is_signed_range_doubled() {
        for kind in Kind::ALL.iter().copied().filter(|k| k.is_signed_integer()) {
            let s_max = kind.int_max().unwrap();
            let u_max = kind.to_unsigned().unwrap().int_max().unwrap();
            assert_eq!(u_max, s_max * 2 + 1);
            assert_eq!(kind.int_min().unwrap(), -(s_max as i128) - 1);
        }
    }

    #[test]
    fn test_floats_have_no_integer_range() {
        assert_eq!(Kind::F32.int_min(), None);
        assert_eq!(Kind::F64.int_max(), None);
        assert_eq!(Kind::F32.to_signed(), None);
        assert_eq!(Kind::F32.signedness(), Signedness::NotApplicable);
        assert_eq!(Kind::F32.float_max(), Some(f32::MAX as f64));
        assert_eq!(Kind::I32.float_max(), None);
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for kind in Kind::ALL {
            assert_eq!(kind.to_string().parse::<Kind>(), Ok(kind));
        }
        assert_eq!("isize".parse::<Kind>(), Ok(Kind::ISIZE));
        assert_eq!("usize".parse::<Kind>(), Ok(Kind::USIZE));
        assert_eq!(Kind::USIZE.bits(), usize::BITS);
    }

    #[test]
    fn test_unknown_name_is_unsupported() {
        assert_eq!(
            "f16".parse::<Kind>(),
            Err(KindError::Unsupported(UnsupportedKindError {
                name: "f16".to_string()
            }))
        );
        assert!("bool".parse::<Kind>().is_err());
    }

    #[test]
    fn test_same_matches_eq() {
        for a in Kind::ALL {
            for b in Kind::ALL {
                assert_eq!(a.same(b), a == b);
            }
        }
    }
}
