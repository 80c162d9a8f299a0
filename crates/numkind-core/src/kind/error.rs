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

//! Errors reported by the runtime kind descriptors.
//!
//! The type-level API never produces these: an unsupported or
//! non-extendable kind there is a build failure. They exist for callers
//! that only learn a kind at run time, e.g. from a configuration string.

use crate::kind::catalog::Kind;
use std::fmt::Display;

/// The error type for runtime kind resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindError {
    /// The requested kind is not part of the (configured) ladder.
    Unsupported(UnsupportedKindError),
    /// An extension was requested on the widest rung of its signedness.
    NonExtendable(NonExtendableKindError),
    /// `Ladder::try_mix` was called without any kind to mix.
    EmptyMix,
    /// A `LadderConfig` does not describe a valid ladder.
    InvalidLadder(InvalidLadderError),
}

/// Details about a kind that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedKindError {
    /// The name of the kind as it was requested (e.g. "f16").
    pub name: String,
}

impl std::fmt::Display for UnsupportedKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a supported arithmetic kind", self.name)
    }
}

impl std::error::Error for UnsupportedKindError {}

/// Details about a failed extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonExtendableKindError {
    /// The kind that has no strictly wider rung.
    pub kind: Kind,
    /// The pair being mixed when the extension was needed, if any.
    pub mixing: Option<(Kind, Kind)>,
}

impl std::fmt::Display for NonExtendableKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "kind {} has no strictly wider rung of the same signedness",
            self.kind
        )?;
        if let Some((left, right)) = self.mixing {
            write!(f, " (required to mix {} with {})", left, right)?;
        }
        Ok(())
    }
}

impl std::error::Error for NonExtendableKindError {}

/// Details about a rejected ladder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLadderError {
    /// The requested widest signed rung.
    pub widest_signed: Kind,
    /// The requested pointer width in bits.
    pub pointer_width: u32,
}

impl std::fmt::Display for InvalidLadderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid ladder: widest signed rung must be i64 or i128 and the pointer width 16, 32 or 64 bits (got {} and {})",
            self.widest_signed, self.pointer_width
        )
    }
}

impl std::error::Error for InvalidLadderError {}

impl Display for KindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(e) => write!(f, "Unsupported kind: {e}"),
            Self::NonExtendable(e) => write!(f, "Non-extendable kind: {e}"),
            Self::EmptyMix => write!(f, "Cannot mix an empty list of kinds"),
            Self::InvalidLadder(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for KindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unsupported(e) => Some(e),
            Self::NonExtendable(e) => Some(e),
            Self::EmptyMix => None,
            Self::InvalidLadder(e) => Some(e),
        }
    }
}

impl From<UnsupportedKindError> for KindError {
    fn from(e: UnsupportedKindError) -> Self {
        Self::Unsupported(e)
    }
}

impl From<NonExtendableKindError> for KindError {
    fn from(e: NonExtendableKindError) -> Self {
        Self::NonExtendable(e)
    }
}

impl From<InvalidLadderError> for KindError {
    fn from(e: InvalidLadderError) -> Self {
        Self::InvalidLadder(e)
    }
}
