// -*- mode: rust; -*-
//
// This file is part of ed25519-group.
// See LICENSE for licensing information.

//! Errors which may occur in the checked variants of the group operations.
//!
//! The unchecked operations never fail: they trust the caller, and a
//! violated precondition shows up as a wrong point, not as an error.
//! The `try_*` siblings test the one precondition they are named after
//! and report it with a [`PointError`].

use core::fmt;
use core::fmt::Display;

/// Errors which may occur while converting or doubling points.
///
/// This error may arise due to:
///
/// * Asking for the affine coordinates of a point whose \\(Z\\)
///   coordinate is zero.  Such a tuple does not represent any point; the
///   unchecked `to_affine` silently returns \\((0, 0)\\) for it.
///
/// * Asking for the \\(Z = 1\\) doubling of a projective point whose
///   \\(Z\\) coordinate is not one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PointError {
    /// The \\(Z\\) coordinate is zero, so there is no affine point.
    DegenerateDenominator,
    /// The \\(Z = 1\\) fast path was requested for a point with \\(Z \neq 1\\).
    DenominatorNotOne,
}

impl Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PointError::DegenerateDenominator => {
                write!(f, "Cannot dehomogenize a point with Z = 0")
            }
            PointError::DenominatorNotOne => {
                write!(f, "Z = 1 doubling requires a point with Z = 1")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PointError {}
