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

//! # Kind Ladder
//!
//! The signed rungs `i8 < i16 < i32 < i64 < i128`, their unsigned
//! correspondents, and the separate `f32 < f64` sub-ladder. `Ladder` owns the
//! two resolution rules, extension and mixing, as `const fn`s so they can be
//! evaluated while the crate itself is being built.
//!
//! The top of the ladder is configurable: a `LadderConfig` whose widest
//! signed rung is `i64` collapses the ladder, removing the 128-bit kinds.
//! `Ladder::NATIVE` is the full ladder every Rust target provides and the one
//! the type-level traits in `crate::num` are checked against.

use crate::kind::{
    catalog::{Kind, Signedness},
    error::{InvalidLadderError, KindError, NonExtendableKindError, UnsupportedKindError},
};
use smallvec::SmallVec;
use std::cmp::Ordering;

const SIGNED_RUNGS: [Kind; 5] = [Kind::I8, Kind::I16, Kind::I32, Kind::I64, Kind::I128];

/// Configuration of a runtime `Ladder`.
///
/// # Examples
///
/// ```rust
/// # use numkind_core::kind::catalog::Kind;
/// # use numkind_core::kind::ladder::{Ladder, LadderConfig};
///
/// let config = LadderConfig::default().with_widest_signed(Kind::I64);
/// let ladder = Ladder::from_config(&config).unwrap();
/// assert!(ladder.is_collapsed());
/// assert!(ladder.try_extend(Kind::I64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LadderConfig {
    /// The widest ("largest native") signed rung, `i64` or `i128`.
    pub widest_signed: Kind,
    /// Width in bits `isize`/`usize` resolve to.
    pub pointer_width: u32,
}

impl LadderConfig {
    #[inline]
    pub fn with_widest_signed(mut self, widest_signed: Kind) -> Self {
        self.widest_signed = widest_signed;
        self
    }

    #[inline]
    pub fn with_pointer_width(mut self, pointer_width: u32) -> Self {
        self.pointer_width = pointer_width;
        self
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            widest_signed: Kind::I128,
            pointer_width: usize::BITS,
        }
    }
}

/// A validated kind ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ladder {
    widest_signed: Kind,
    pointer_width: u32,
}

impl Default for Ladder {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl Ladder {
    /// The full ladder of the compilation target.
    pub const NATIVE: Ladder = Ladder {
        widest_signed: Kind::I128,
        pointer_width: usize::BITS,
    };

    /// Builds a ladder from `config`.
    ///
    /// # Errors
    ///
    /// Returns `KindError::InvalidLadder` if the widest signed rung is not
    /// `i64` or `i128`, or if the pointer width is not 16, 32 or 64.
    pub fn from_config(config: &LadderConfig) -> Result<Self, KindError> {
        let widest_ok = matches!(config.widest_signed, Kind::I64 | Kind::I128);
        let pointer_ok = matches!(config.pointer_width, 16 | 32 | 64);
        if !widest_ok || !pointer_ok {
            return Err(InvalidLadderError {
                widest_signed: config.widest_signed,
                pointer_width: config.pointer_width,
            }
            .into());
        }

        let ladder = Self {
            widest_signed: config.widest_signed,
            pointer_width: config.pointer_width,
        };
        if ladder.is_collapsed() {
            tracing::debug!(
                pointer_width = ladder.pointer_width,
                "collapsing kind ladder: widest native signed rung is i64"
            );
        } else {
            tracing::debug!(
                widest_signed = %ladder.widest_signed,
                pointer_width = ladder.pointer_width,
                "configured kind ladder"
            );
        }
        Ok(ladder)
    }

    #[inline(always)]
    pub const fn widest_signed(&self) -> Kind {
        self.widest_signed
    }

    #[inline(always)]
    pub const fn pointer_width(&self) -> u32 {
        self.pointer_width
    }

    /// Returns `true` if the 64-bit rung is also the widest one.
    #[inline(always)]
    pub const fn is_collapsed(&self) -> bool {
        self.widest_signed.same(Kind::I64)
    }

    /// Returns `true` if `kind` is a rung of this ladder. Floating kinds
    /// always are.
    pub const fn contains(&self, kind: Kind) -> bool {
        match kind.to_signed() {
            Some(signed) => signed.bits() <= self.widest_signed.bits(),
            None => true,
        }
    }

    /// The signed rungs in increasing order.
    pub fn signed_rungs(&self) -> SmallVec<[Kind; 5]> {
        SIGNED_RUNGS
            .iter()
            .copied()
            .filter(|&kind| self.contains(kind))
            .collect()
    }

    /// The unsigned rungs in increasing order.
    pub fn unsigned_rungs(&self) -> SmallVec<[Kind; 5]> {
        self.signed_rungs()
            .into_iter()
            .filter_map(Kind::to_unsigned)
            .collect()
    }

    /// The rung `isize` or `usize` resolves to on this ladder.
    pub const fn pointer_sized(&self, signedness: Signedness) -> Option<Kind> {
        let signed = match self.pointer_width {
            16 => Kind::I16,
            32 => Kind::I32,
            _ => Kind::I64,
        };
        match signedness {
            Signedness::Signed => Some(signed),
            Signedness::Unsigned => signed.to_unsigned(),
            Signedness::NotApplicable => None,
        }
    }

    /// Resolves a primitive name against this ladder.
    ///
    /// # Errors
    ///
    /// Returns `KindError::Unsupported` for names outside the catalog and for
    /// 128-bit kinds on a collapsed ladder.
    pub fn resolve(&self, name: &str) -> Result<Kind, KindError> {
        let kind = match name {
            "isize" => self.pointer_sized(Signedness::Signed),
            "usize" => self.pointer_sized(Signedness::Unsigned),
            _ => name.parse::<Kind>().ok(),
        };
        match kind {
            Some(kind) if self.contains(kind) => Ok(kind),
            _ => {
                tracing::trace!(name, "rejected unsupported kind");
                Err(UnsupportedKindError {
                    name: name.to_string(),
                }
                .into())
            }
        }
    }

    /// Orders integer kinds by maximum value and floating kinds by precision.
    /// Integer and floating kinds are not comparable, and neither are kinds
    /// outside this ladder.
    pub fn compare(&self, a: Kind, b: Kind) -> Option<Ordering> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        match (a.int_max(), b.int_max()) {
            (Some(x), Some(y)) => Some(x.cmp(&y)),
            (None, None) => Some(a.bits().cmp(&b.bits())),
            _ => None,
        }
    }

    /// The narrowest rung of the same signedness whose maximum is strictly
    /// greater than that of `kind`. `None` for the widest rungs, for
    /// floating kinds and for kinds outside the ladder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numkind_core::kind::catalog::Kind;
    /// # use numkind_core::kind::ladder::Ladder;
    ///
    /// assert_eq!(Ladder::NATIVE.extend(Kind::I8), Some(Kind::I16));
    /// assert_eq!(Ladder::NATIVE.extend(Kind::U32), Some(Kind::U64));
    /// assert_eq!(Ladder::NATIVE.extend(Kind::I128), None);
    /// ```
    pub const fn extend(&self, kind: Kind) -> Option<Kind> {
        if !self.contains(kind) {
            return None;
        }
        match kind.signedness() {
            Signedness::NotApplicable => None,
            Signedness::Unsigned => match kind.to_signed() {
                Some(signed) => match self.extend(signed) {
                    Some(wider) => wider.to_unsigned(),
                    None => None,
                },
                None => None,
            },
            Signedness::Signed => {
                let limit = magnitude(kind);
                let mut i = 0;
                while i < SIGNED_RUNGS.len() {
                    let rung = SIGNED_RUNGS[i];
                    if !self.contains(rung) {
                        break;
                    }
                    if magnitude(rung) > limit {
                        return Some(rung);
                    }
                    i += 1;
                }
                None
            }
        }
    }

    /// The kind that represents every value of both `a` and `b`, or `None`
    /// when that would need an extension past the widest rung.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numkind_core::kind::catalog::Kind;
    /// # use numkind_core::kind::ladder::Ladder;
    ///
    /// let ladder = Ladder::NATIVE;
    /// assert_eq!(ladder.mix(Kind::I8, Kind::U8), Some(Kind::I16));
    /// assert_eq!(ladder.mix(Kind::U32, Kind::I8), Some(Kind::I64));
    /// assert_eq!(ladder.mix(Kind::U16, Kind::U64), Some(Kind::U64));
    /// assert_eq!(ladder.mix(Kind::I64, Kind::F32), Some(Kind::F32));
    /// assert_eq!(ladder.mix(Kind::U128, Kind::I8), None);
    /// ```
    pub const fn mix(&self, a: Kind, b: Kind) -> Option<Kind> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        if a.same(b) {
            return Some(a);
        }
        if a.is_float() || b.is_float() {
            return Some(float_common(a, b));
        }

        let (signed_a, signed_b) = match (a.to_signed(), b.to_signed()) {
            (Some(x), Some(y)) => (x, y),
            _ => return None,
        };
        // Same width, opposite signedness.
        if signed_a.same(signed_b) {
            return self.extend(signed_a);
        }

        let (wide, narrow) = if magnitude(a) > magnitude(b) {
            (a, b)
        } else {
            (b, a)
        };
        if wide.is_signed_integer() || narrow.is_unsigned_integer() {
            return Some(wide);
        }
        match wide.to_signed() {
            Some(signed) => self.extend(signed),
            None => None,
        }
    }

    /// Like `extend`, with a descriptive error.
    ///
    /// # Errors
    ///
    /// `KindError::Unsupported` if `kind` is not on this ladder,
    /// `KindError::NonExtendable` if no wider rung exists.
    pub fn try_extend(&self, kind: Kind) -> Result<Kind, KindError> {
        self.ensure_contains(kind)?;
        self.extend(kind).ok_or_else(|| {
            tracing::trace!(kind = %kind, "rejected extension past the widest rung");
            NonExtendableKindError { kind, mixing: None }.into()
        })
    }

    /// Folds `kinds` left to right with `mix`. A single kind resolves to
    /// itself.
    ///
    /// # Errors
    ///
    /// `KindError::EmptyMix` for an empty slice, `KindError::Unsupported` for
    /// kinds outside the ladder, and `KindError::NonExtendable` when a step
    /// needs a rung wider than the widest one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numkind_core::kind::catalog::Kind;
    /// # use numkind_core::kind::ladder::Ladder;
    ///
    /// let kinds = [Kind::U8, Kind::I8, Kind::U32];
    /// assert_eq!(Ladder::NATIVE.try_mix(&kinds), Ok(Kind::I64));
    /// assert!(Ladder::NATIVE.try_mix(&[]).is_err());
    /// ```
    pub fn try_mix(&self, kinds: &[Kind]) -> Result<Kind, KindError> {
        let (&first, rest) = kinds.split_first().ok_or(KindError::EmptyMix)?;
        self.ensure_contains(first)?;
        rest.iter().try_fold(first, |acc, &next| -> Result<Kind, KindError> {
            self.ensure_contains(next)?;
            self.mix(acc, next).ok_or_else(|| {
                tracing::trace!(left = %acc, right = %next, "rejected mix past the widest rung");
                NonExtendableKindError {
                    kind: self.widest_signed,
                    mixing: Some((acc, next)),
                }
                .into()
            })
        })
    }

    fn ensure_contains(&self, kind: Kind) -> Result<(), KindError> {
        if self.contains(kind) {
            Ok(())
        } else {
            tracing::trace!(kind = %kind, "kind is not a rung of this ladder");
            Err(UnsupportedKindError {
                name: kind.name().to_string(),
            }
            .into())
        }
    }
}

/// Maximum value used to order integer rungs.
#[inline(always)]
const fn magnitude(kind: Kind) -> u128 {
    match kind.int_max() {
        Some(max) => max,
        None => 0,
    }
}

/// Common real type of a pair with at least one floating kind.
#[inline(always)]
const fn float_common(a: Kind, b: Kind) -> Kind {
    if a.same(Kind::F64) || b.same(Kind::F64) {
        Kind::F64
    } else {
        Kind::F32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapsed() -> Ladder {
        Ladder::from_config(&LadderConfig::default().with_widest_signed(Kind::I64)).unwrap()
    }

    fn integers() -> impl Iterator<Item = Kind> {
        Kind::ALL.into_iter().filter(|k| k.is_integer())
    }

    /// `outer` represents every value of `inner`.
    fn holds(outer: Kind, inner: Kind) -> bool {
        outer.int_min().unwrap() <= inner.int_min().unwrap()
            && outer.int_max().unwrap() >= inner.int_max().unwrap()
    }

    #[test]
    fn test_signed_rungs_strictly_increasing() {
        for ladder in [Ladder::NATIVE, collapsed()] {
            let rungs = ladder.signed_rungs();
            assert!(rungs.windows(2).all(|w| w[0].int_max() < w[1].int_max()));
            let unsigned = ladder.unsigned_rungs();
            assert!(unsigned.windows(2).all(|w| w[0].int_max() < w[1].int_max()));
            assert_eq!(rungs.len(), unsigned.len());
        }
        assert_eq!(Ladder::NATIVE.signed_rungs().last(), Some(&Kind::I128));
        assert_eq!(collapsed().signed_rungs().last(), Some(&Kind::I64));
    }

    #[test]
    fn test_extend_is_strictly_wider_and_keeps_signedness() {
        for kind in integers() {
            if let Some(wider) = Ladder::NATIVE.extend(kind) {
                assert!(wider.int_max() > kind.int_max(), "{kind} -> {wider}");
                assert_eq!(wider.signedness(), kind.signedness());
                assert_eq!(wider.bits(), kind.bits() * 2);
            }
        }
    }

    #[test]
    fn test_extend_widest_rung_is_an_error() {
        let ladder = Ladder::NATIVE;
        assert_eq!(ladder.extend(Kind::I128), None);
        assert_eq!(ladder.extend(Kind::U128), None);
        assert_eq!(
            ladder.try_extend(Kind::U128),
            Err(KindError::NonExtendable(NonExtendableKindError {
                kind: Kind::U128,
                mixing: None
            }))
        );

        let collapsed = collapsed();
        assert_eq!(collapsed.extend(Kind::I64), None);
        assert_eq!(collapsed.extend(Kind::U64), None);
        assert_eq!(collapsed.extend(Kind::I32), Some(Kind::I64));
        assert!(matches!(
            collapsed.try_extend(Kind::I128),
            Err(KindError::Unsupported(_))
        ));
    }

    #[test]
    fn test_extend_rejects_floats() {
        assert_eq!(Ladder::NATIVE.extend(Kind::F32), None);
        assert_eq!(Ladder::NATIVE.extend(Kind::F64), None);
    }

    #[test]
    fn test_mix_identity() {
        for kind in Kind::ALL {
            assert_eq!(Ladder::NATIVE.mix(kind, kind), Some(kind));
        }
    }

    #[test]
    fn test_mix_commutative() {
        for ladder in [Ladder::NATIVE, collapsed()] {
            for a in Kind::ALL {
                for b in Kind::ALL {
                    assert_eq!(ladder.mix(a, b), ladder.mix(b, a), "{a} / {b}");
                }
            }
        }
    }

    #[test]
    fn test_mix_associative_where_defined() {
        let ladder = Ladder::NATIVE;
        let step = |x: Option<Kind>, y: Option<Kind>| match (x, y) {
            (Some(x), Some(y)) => ladder.mix(x, y),
            _ => None,
        };
        for a in Kind::ALL {
            for b in Kind::ALL {
                for c in Kind::ALL {
                    let left = step(ladder.mix(a, b), Some(c));
                    let right = step(Some(a), ladder.mix(b, c));
                    if left.is_some() && right.is_some() {
                        assert_eq!(left, right, "({a}, {b}, {c})");
                    }
                    if a.is_integer() && b.is_integer() && c.is_integer() {
                        assert_eq!(left.is_some(), right.is_some(), "({a}, {b}, {c})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_mix_holds_both_ranges() {
        for a in integers() {
            for b in integers() {
                if let Some(mixed) = Ladder::NATIVE.mix(a, b) {
                    assert!(holds(mixed, a), "{a} in {mixed}");
                    assert!(holds(mixed, b), "{b} in {mixed}");
                }
            }
        }
    }

    #[test]
    fn test_mix_is_narrowest_holding_kind() {
        for a in integers() {
            for b in integers() {
                let narrowest = integers()
                    .filter(|&k| holds(k, a) && holds(k, b))
                    .filter(|&k| {
                        let signed = a.is_signed_integer() || b.is_signed_integer();
                        !signed || k.is_signed_integer()
                    })
                    .min_by_key(|k| k.bits());
                assert_eq!(Ladder::NATIVE.mix(a, b), narrowest, "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_mix_scenarios() {
        let ladder = Ladder::NATIVE;
        assert_eq!(ladder.mix(Kind::I8, Kind::U8), Some(Kind::I16));
        assert_eq!(ladder.mix(Kind::U32, Kind::I8), Some(Kind::I64));
        assert_eq!(ladder.mix(Kind::I16, Kind::U8), Some(Kind::I16));
        assert_eq!(ladder.mix(Kind::U64, Kind::I64), Some(Kind::I128));
        assert_eq!(ladder.mix(Kind::F32, Kind::F64), Some(Kind::F64));
        assert_eq!(ladder.mix(Kind::U128, Kind::F32), Some(Kind::F32));
        assert_eq!(ladder.mix(Kind::I128, Kind::U128), None);
        assert_eq!(collapsed().mix(Kind::U64, Kind::I8), None);
        assert_eq!(collapsed().mix(Kind::U32, Kind::I8), Some(Kind::I64));
    }

    #[test]
    fn test_try_mix_folds_and_reports() {
        let ladder = Ladder::NATIVE;
        assert_eq!(ladder.try_mix(&[Kind::U16]), Ok(Kind::U16));
        assert_eq!(
            ladder.try_mix(&[Kind::I8, Kind::U8, Kind::U16]),
            Ok(Kind::I32)
        );
        assert_eq!(ladder.try_mix(&[]), Err(KindError::EmptyMix));
        assert_eq!(
            ladder.try_mix(&[Kind::U8, Kind::U128, Kind::I8]),
            Err(KindError::NonExtendable(NonExtendableKindError {
                kind: Kind::I128,
                mixing: Some((Kind::U128, Kind::I8)),
            }))
        );
        assert!(matches!(
            collapsed().try_mix(&[Kind::U8, Kind::I128]),
            Err(KindError::Unsupported(_))
        ));
    }

    #[test]
    fn test_compare_orders_by_maximum() {
        let ladder = Ladder::NATIVE;
        assert_eq!(ladder.compare(Kind::U8, Kind::I16), Some(Ordering::Less));
        assert_eq!(ladder.compare(Kind::U16, Kind::I16), Some(Ordering::Greater));
        assert_eq!(ladder.compare(Kind::F64, Kind::F32), Some(Ordering::Greater));
        assert_eq!(ladder.compare(Kind::F32, Kind::I8), None);
    }

    #[test]
    fn test_compare_rejects_kinds_off_the_ladder() {
        let ladder = collapsed();
        assert_eq!(ladder.compare(Kind::I128, Kind::I8), None);
        assert_eq!(ladder.compare(Kind::U64, Kind::U128), None);
        assert_eq!(ladder.compare(Kind::I64, Kind::U32), Some(Ordering::Greater));
        assert_eq!(
            Ladder::NATIVE.compare(Kind::I128, Kind::I8),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_from_config_validates() {
        assert!(matches!(
            Ladder::from_config(&LadderConfig::default().with_widest_signed(Kind::I32)),
            Err(KindError::InvalidLadder(_))
        ));
        assert!(matches!(
            Ladder::from_config(&LadderConfig::default().with_pointer_width(128)),
            Err(KindError::InvalidLadder(_))
        ));
        assert_eq!(
            Ladder::from_config(&LadderConfig::default()),
            Ok(Ladder::NATIVE)
        );
    }

    #[test]
    fn test_resolve_uses_configured_pointer_width() {
        let ladder =
            Ladder::from_config(&LadderConfig::default().with_pointer_width(32)).unwrap();
        assert_eq!(ladder.resolve("isize"), Ok(Kind::I32));
        assert_eq!(ladder.resolve("usize"), Ok(Kind::U32));
        assert_eq!(ladder.resolve("u128"), Ok(Kind::U128));
        assert!(collapsed().resolve("u128").is_err());
        assert!(ladder.resolve("char").is_err());
    }
}
