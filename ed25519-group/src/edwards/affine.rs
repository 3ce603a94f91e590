// -*- mode: rust; -*-
//
// This file is part of ed25519-group.
// See LICENSE for licensing information.

//! Affine points, and the bridge to arbitrary-precision integers.
//!
//! This is where coordinates enter and leave the crate.  Everything else
//! works on homogeneous coordinates and never divides.

#![allow(non_snake_case)]

use num_bigint::BigUint;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

use super::ExtendedPoint;
use crate::curve_models::ProjectivePoint;
use crate::field::FieldElement;
use crate::traits::Identity;

/// Affine Edwards point \\((x, y)\\).
#[derive(Copy, Clone, Debug)]
pub struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Default for AffinePoint {
    fn default() -> AffinePoint {
        AffinePoint::identity()
    }
}

impl Identity for AffinePoint {
    fn identity() -> AffinePoint {
        AffinePoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
        }
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

#[cfg(feature = "zeroize")]
impl DefaultIsZeroes for AffinePoint {}

impl AffinePoint {
    /// Create an `AffinePoint` from integer coordinates, reducing each
    /// modulo \\(p\\).
    ///
    /// Curve membership is not checked.
    pub fn from_biguint(x: &BigUint, y: &BigUint) -> AffinePoint {
        if !FieldElement::is_canonical(x) || !FieldElement::is_canonical(y) {
            log::trace!("affine coordinate is not reduced mod p; reducing");
        }
        AffinePoint {
            x: FieldElement::from_biguint(x),
            y: FieldElement::from_biguint(y),
        }
    }

    /// Return the coordinates as integers in \\([0, p)\\).
    pub fn to_biguint(&self) -> (BigUint, BigUint) {
        (self.x.to_biguint(), self.y.to_biguint())
    }

    /// The \\(x\\) coordinate.
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// The \\(y\\) coordinate.
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Convert to extended coordinates, with \\(Z = 1\\) and \\(T = xy\\).
    pub fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            X: self.x,
            Y: self.y,
            Z: FieldElement::ONE,
            T: &self.x * &self.y,
        }
    }

    /// Convert to projective coordinates, with \\(Z = 1\\).
    pub const fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.x,
            Y: self.y,
            Z: FieldElement::ONE,
        }
    }

    /// Double this point, returning the result in projective
    /// coordinates.
    ///
    /// This goes through [`ProjectivePoint::double_z1`], whose \\(Z = 1\\)
    /// precondition holds by construction here.
    pub fn double(&self) -> ProjectivePoint {
        self.to_projective().double_z1()
    }
}
