// -*- mode: rust; -*-
//
// This file is part of ed25519-group.
// See LICENSE for licensing information.

//! The projective model of the curve.
//!
//! # Curve representations
//!
//! Begin with the affine equation for the curve,
//! $$
//!     -x\^2 + y\^2 = 1 + dx\^2y\^2.
//! $$
//! Passing to \\(\mathbb P\^2\\) by setting \\(x = X/Z\\), \\(y = Y/Z\\)
//! and clearing denominators gives
//! $$
//!     (-X\^2 + Y\^2)Z\^2 = Z\^4 + dX\^2Y\^2.
//! $$
//! A `ProjectivePoint` is a point of this model.  Adding the coordinate
//! \\(T = XY/Z\\) gives the extended model in \\(\mathbb P\^3\\) of Hisil,
//! Wong, Carter and Dawson, used by [`ExtendedPoint`].  The two models
//! interconvert without leaving projective space:
//!
//! * extended to projective drops \\(T\\);
//! * projective to extended multiplies through by \\(Z\\), giving
//!   \\((XZ : YZ : Z\^2 : XY)\\), which needs no inversion.
//!
//! ```
//! use ed25519_group::constants;
//! use ed25519_group::curve_models::ProjectivePoint;
//!
//! let (x, y) = constants::ED25519_BASEPOINT_POINT.to_affine();
//! let doubled = ProjectivePoint::from_affine(&x, &y).double_z1();
//! assert_eq!(doubled.to_extended(), constants::ED25519_BASEPOINT_POINT.double());
//! ```
//!
//! The projective model has no complete addition law here; its use is the
//! doubling [`ProjectivePoint::double_z1`], which is cheaper than any
//! extended doubling when the input has Z = 1, e.g. right after
//! converting from affine coordinates.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::Neg;

use num_bigint::BigUint;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::edwards::{AffinePoint, ExtendedPoint};
use crate::errors::PointError;
use crate::field::FieldElement;
use crate::traits::{Identity, ValidityCheck};

// ------------------------------------------------------------------------
// Internal point representations
// ------------------------------------------------------------------------

/// A `ProjectivePoint` is a point on the curve in 𝗣²(𝔽ₚ).
/// A point (x,y) in the affine model corresponds to (x:y:1).
#[derive(Copy, Clone)]
pub struct ProjectivePoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for ProjectivePoint {
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
        }
    }
}

impl Default for ProjectivePoint {
    fn default() -> ProjectivePoint {
        ProjectivePoint::identity()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for ProjectivePoint {
    /// Reset this `ProjectivePoint` to the identity element.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = FieldElement::ONE;
        self.Z = FieldElement::ONE;
    }
}

// ------------------------------------------------------------------------
// Validity checks (for debugging, not CT)
// ------------------------------------------------------------------------

impl ValidityCheck for ProjectivePoint {
    fn is_valid(&self) -> bool {
        // Curve equation is    -x^2 + y^2 = 1 + d*x^2*y^2,
        // homogenized as (-X^2 + Y^2)*Z^2 = Z^4 + d*X^2*Y^2
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let ZZZZ = ZZ.square();
        let lhs = &(&YY - &XX) * &ZZ;
        let rhs = &ZZZZ + &(&constants::EDWARDS_D * &(&XX * &YY));

        lhs == rhs
    }
}

// ------------------------------------------------------------------------
// Constant-time assignment and equality
// ------------------------------------------------------------------------

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &ProjectivePoint, b: &ProjectivePoint, choice: Choice) -> ProjectivePoint {
        ProjectivePoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    /// Compares (X/Z, Y/Z) with (X'/Z', Y'/Z') as XZ' = X'Z and YZ' = Y'Z.
    fn ct_eq(&self, other: &ProjectivePoint) -> Choice {
        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &ProjectivePoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

// ------------------------------------------------------------------------
// Point conversions
// ------------------------------------------------------------------------

impl ProjectivePoint {
    /// Construct the point \\((x : y : 1)\\), reducing both coordinates
    /// modulo \\(p\\).
    ///
    /// The result satisfies the precondition of [`Self::double_z1`].
    /// Curve membership is not checked.
    pub fn from_affine(x: &BigUint, y: &BigUint) -> ProjectivePoint {
        AffinePoint::from_biguint(x, y).to_projective()
    }

    /// Return the affine coordinates \\((X/Z, Y/Z)\\) in \\([0, p)\\).
    ///
    /// A tuple with \\(Z = 0\\) yields \\((0, 0)\\).
    pub fn to_affine(&self) -> (BigUint, BigUint) {
        self.to_affine_point().to_biguint()
    }

    /// Return the affine coordinates, or
    /// [`PointError::DegenerateDenominator`] if \\(Z = 0\\).
    pub fn try_to_affine(&self) -> Result<(BigUint, BigUint), PointError> {
        if bool::from(self.Z.is_zero()) {
            log::debug!("refusing to dehomogenize a projective point with Z = 0");
            return Err(PointError::DegenerateDenominator);
        }
        Ok(self.to_affine())
    }

    /// Dehomogenize to an [`AffinePoint`].
    pub fn to_affine_point(&self) -> AffinePoint {
        let recip = self.Z.invert();
        AffinePoint {
            x: &self.X * &recip,
            y: &self.Y * &recip,
        }
    }

    /// Convert this point from the \\( \mathbb P\^2 \\) model to the
    /// \\( \mathbb P\^3 \\) model.
    ///
    /// This costs \\(3 \mathrm M + 1 \mathrm S\\).
    pub fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            X: &self.X * &self.Z,
            Y: &self.Y * &self.Z,
            Z: self.Z.square(),
            T: &self.X * &self.Y,
        }
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl ProjectivePoint {
    /// Double this point, assuming \\(Z = 1\\).
    ///
    /// Uses `mdbl-2008-bbjlp`, \\(1 \mathrm M + 4 \mathrm S\\).  The
    /// receiver is left untouched and the doubled point is returned.
    ///
    /// # Precondition
    ///
    /// `self` must have \\(Z = 1\\) exactly, as produced by
    /// [`ProjectivePoint::from_affine`], [`AffinePoint::to_projective`], or
    /// [`ExtendedPoint::to_projective`] applied to a point built from
    /// affine coordinates.  With any other \\(Z\\) the result is a wrong
    /// point.  This is only checked in debug builds; use
    /// [`Self::try_double_z1`] for a checked version, or
    /// [`AffinePoint::double`], which cannot be misused.
    pub fn double_z1(&self) -> ProjectivePoint {
        debug_assert!(bool::from(self.Z.is_one()));

        let C = self.X.square();
        let D = self.Y.square();
        let B = (&self.X + &self.Y).square();
        // a = -1
        let E = -&C;
        let F = &E + &D;
        let FF = F.square();

        ProjectivePoint {
            X: &(&(&B - &C) - &D) * &(&F - &constants::TWO),
            Y: &F * &(&E - &D),
            Z: &FF - &(&F + &F),
        }
    }

    /// Double this point if it has \\(Z = 1\\); otherwise return
    /// [`PointError::DenominatorNotOne`].
    pub fn try_double_z1(&self) -> Result<ProjectivePoint, PointError> {
        if !bool::from(self.Z.is_one()) {
            log::debug!("refusing Z = 1 doubling of a projective point with Z != 1");
            return Err(PointError::DenominatorNotOne);
        }
        Ok(self.double_z1())
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
        }
    }
}

define_neg_variant!(ProjectivePoint);

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl Debug for ProjectivePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ProjectivePoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?}\n}}",
            &self.X, &self.Y, &self.Z
        )
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
