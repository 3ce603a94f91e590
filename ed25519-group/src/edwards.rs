// -*- mode: rust; -*-
//
// This file is part of ed25519-group.
// See LICENSE for licensing information.

//! Group operations for the twisted Edwards curve
//!
//! \\[ -x\^2 + y\^2 = 1 + d x\^2 y\^2, \\]
//!
//! in the extended coordinates of Hisil, Wong, Carter and Dawson.
//!
//! ## Extended coordinates
//!
//! An [`ExtendedPoint`] is a tuple \\((X:Y:Z:T)\\) of field elements
//! standing for the affine point \\((x, y) = (X/Z, Y/Z)\\), with the
//! extra coordinate satisfying \\(xy = T/Z\\), i.e. \\(TZ = XY\\).
//! Scaling all four coordinates by a common nonzero factor gives the
//! same point.  The identity is \\((0:1:1:0)\\).
//!
//! Every point this module produces has \\(Z \neq 0\\).  A tuple with
//! \\(Z = 0\\) is not a point at infinity: it does not represent anything,
//! and [`ExtendedPoint::to_affine`] maps it to \\((0, 0)\\) without
//! complaint.  Use [`ExtendedPoint::try_to_affine`] where that matters.
//!
//! ## Addition and doubling
//!
//! Addition uses the unified formula `add-2008-hwcd-3`, which is complete
//! for \\(a = -1\\) and nonsquare \\(d\\): it needs no special cases, and
//! in particular \\(P + P\\) is computed correctly.  Doubling uses the
//! dedicated formula `dbl-2008-hwcd`, which is cheaper.
//!
//! Each operation reads every coordinate of its inputs before it builds
//! its output, so the compound assignments (`P += &Q`, `P += &P.clone()`,
//! `P = &P + &P`) never observe a half-written point.
//!
//! ## Validity
//!
//! Nothing here checks that a point lies on the curve.  Feeding an
//! off-curve \\((x, y)\\) to [`ExtendedPoint::from_affine`] gives a value
//! on which all operations still run, but whose results are meaningless.

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.
#![allow(non_snake_case)]

pub mod affine;

use core::borrow::Borrow;
use core::fmt::Debug;
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use core::ops::{Neg, Sub, SubAssign};

use num_bigint::BigUint;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::curve_models::ProjectivePoint;
use crate::errors::PointError;
use crate::field::FieldElement;
use crate::traits::{Identity, IsIdentity, ValidityCheck};

pub use self::affine::AffinePoint;

// ------------------------------------------------------------------------
// Internal point representations
// ------------------------------------------------------------------------

/// An `ExtendedPoint` represents a point on the Edwards form of Curve25519,
/// in extended twisted Edwards coordinates.
#[derive(Copy, Clone)]
pub struct ExtendedPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for ExtendedPoint {
    fn identity() -> ExtendedPoint {
        ExtendedPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }
}

impl Default for ExtendedPoint {
    fn default() -> ExtendedPoint {
        ExtendedPoint::identity()
    }
}

// ------------------------------------------------------------------------
// Zeroize implementations for wiping points from memory
// ------------------------------------------------------------------------

#[cfg(feature = "zeroize")]
impl Zeroize for ExtendedPoint {
    /// Reset this `ExtendedPoint` to the identity element.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = FieldElement::ONE;
        self.Z = FieldElement::ONE;
        self.T.zeroize();
    }
}

// ------------------------------------------------------------------------
// Validity checks (for debugging, not CT)
// ------------------------------------------------------------------------

impl ValidityCheck for ExtendedPoint {
    fn is_valid(&self) -> bool {
        let point_on_curve = self.to_projective().is_valid();
        let on_segre_image = (&self.X * &self.Y) == (&self.Z * &self.T);

        point_on_curve && on_segre_image
    }
}

// ------------------------------------------------------------------------
// Constant-time assignment
// ------------------------------------------------------------------------

impl ConditionallySelectable for ExtendedPoint {
    fn conditional_select(a: &ExtendedPoint, b: &ExtendedPoint, choice: Choice) -> ExtendedPoint {
        ExtendedPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

// ------------------------------------------------------------------------
// Equality
// ------------------------------------------------------------------------

impl ConstantTimeEq for ExtendedPoint {
    fn ct_eq(&self, other: &ExtendedPoint) -> Choice {
        // We would like to check that the point (X/Z, Y/Z) is equal to
        // the point (X'/Z', Y'/Z') without converting into affine
        // coordinates (x, y) and (x', y'), which requires two inversions.
        // We have that X = xZ and X' = x'Z'. Thus, x = x' is equivalent to
        // (xZ)Z' = (x'Z')Z, and similarly for the y-coordinate.

        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &ExtendedPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ExtendedPoint {}

// ------------------------------------------------------------------------
// Conversions
// ------------------------------------------------------------------------

impl ExtendedPoint {
    /// Construct the point with affine coordinates \\((x, y)\\).
    ///
    /// Both coordinates are reduced modulo \\(p\\); the result has
    /// \\(Z = 1\\) and \\(T = xy\\).
    ///
    /// The caller is responsible for \\((x, y)\\) lying on the curve.
    /// This is not checked.
    pub fn from_affine(x: &BigUint, y: &BigUint) -> ExtendedPoint {
        AffinePoint::from_biguint(x, y).to_extended()
    }

    /// Return the affine coordinates \\((X/Z, Y/Z)\\), each fully reduced
    /// into \\([0, p)\\).
    ///
    /// Since the inverse of zero is computed as zero, a tuple with
    /// \\(Z = 0\\) yields \\((0, 0)\\) rather than an error.
    pub fn to_affine(&self) -> (BigUint, BigUint) {
        self.to_affine_point().to_biguint()
    }

    /// Return the affine coordinates, or
    /// [`PointError::DegenerateDenominator`] if \\(Z = 0\\).
    pub fn try_to_affine(&self) -> Result<(BigUint, BigUint), PointError> {
        if bool::from(self.Z.is_zero()) {
            log::debug!("refusing to dehomogenize an extended point with Z = 0");
            return Err(PointError::DegenerateDenominator);
        }
        Ok(self.to_affine())
    }

    /// Dehomogenize to an [`AffinePoint`], at the cost of one inversion.
    pub fn to_affine_point(&self) -> AffinePoint {
        let recip = self.Z.invert();
        let x = &self.X * &recip;
        let y = &self.Y * &recip;
        AffinePoint { x, y }
    }

    /// Convert to a [`ProjectivePoint`] by dropping \\(T\\).
    ///
    /// The \\(Z\\) coordinate is kept as is, so the result is a suitable
    /// input for [`ProjectivePoint::double_z1`] only if this point has
    /// \\(Z = 1\\).
    pub const fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl ExtendedPoint {
    /// Add this point to itself.
    ///
    /// Uses `dbl-2008-hwcd`, 4 multiplications and 4 squarings.
    pub fn double(&self) -> ExtendedPoint {
        let A = self.X.square();
        let B = self.Y.square();
        let C = self.Z.square2();
        let D = -&A;
        let E = &(&(&self.X + &self.Y).square() - &A) - &B;
        let G = &D + &B;
        let F = &G - &C;
        let H = &D - &B;

        ExtendedPoint {
            X: &E * &F,
            Y: &G * &H,
            Z: &F * &G,
            T: &E * &H,
        }
    }

    /// Compute \\([2\^k] P \\) by successive doublings. Requires \\( k > 0 \\).
    pub fn mul_by_pow_2(&self, k: u32) -> ExtendedPoint {
        debug_assert!(k > 0);
        let mut s = *self;
        for _ in 0..k {
            s = s.double();
        }
        s
    }

    /// Multiply by the cofactor: return \\(\[8\]P\\).
    pub fn mul_by_cofactor(&self) -> ExtendedPoint {
        self.mul_by_pow_2(3)
    }

    /// Determine if this point is of small order.
    ///
    /// # Return
    ///
    /// * `true` if `self` is in the torsion subgroup \\( \mathcal E\[8\] \\);
    /// * `false` if `self` is not in the torsion subgroup \\( \mathcal E\[8\] \\).
    pub fn is_small_order(&self) -> bool {
        self.mul_by_cofactor().is_identity()
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b ExtendedPoint> for &'a ExtendedPoint {
    type Output = ExtendedPoint;

    /// Uses `add-2008-hwcd-3` with the precomputed \\(2d\\):
    /// 9 multiplications.
    fn add(self, other: &'b ExtendedPoint) -> ExtendedPoint {
        let A = &(&self.Y - &self.X) * &(&other.Y - &other.X);
        let B = &(&self.Y + &self.X) * &(&other.Y + &other.X);
        let C = &(&self.T * &constants::EDWARDS_D2) * &other.T;
        let ZZ = &self.Z * &other.Z;
        let D = &ZZ + &ZZ;
        let E = &B - &A;
        let F = &D - &C;
        let G = &D + &C;
        let H = &B + &A;

        ExtendedPoint {
            X: &E * &F,
            Y: &G * &H,
            Z: &F * &G,
            T: &E * &H,
        }
    }
}

define_add_variants!(LHS = ExtendedPoint, RHS = ExtendedPoint, Output = ExtendedPoint);

impl<'b> AddAssign<&'b ExtendedPoint> for ExtendedPoint {
    fn add_assign(&mut self, _rhs: &'b ExtendedPoint) {
        *self = (self as &ExtendedPoint) + _rhs;
    }
}

define_add_assign_variants!(LHS = ExtendedPoint, RHS = ExtendedPoint);

impl<'a, 'b> Sub<&'b ExtendedPoint> for &'a ExtendedPoint {
    type Output = ExtendedPoint;
    fn sub(self, other: &'b ExtendedPoint) -> ExtendedPoint {
        self + &(-other)
    }
}

define_sub_variants!(LHS = ExtendedPoint, RHS = ExtendedPoint, Output = ExtendedPoint);

impl<'b> SubAssign<&'b ExtendedPoint> for ExtendedPoint {
    fn sub_assign(&mut self, _rhs: &'b ExtendedPoint) {
        *self = (self as &ExtendedPoint) - _rhs;
    }
}

define_sub_assign_variants!(LHS = ExtendedPoint, RHS = ExtendedPoint);

impl<T> Sum<T> for ExtendedPoint
where
    T: Borrow<ExtendedPoint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(ExtendedPoint::identity(), |acc, item| acc + item.borrow())
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a ExtendedPoint {
    type Output = ExtendedPoint;

    fn neg(self) -> ExtendedPoint {
        ExtendedPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            T: -(&self.T),
        }
    }
}

define_neg_variant!(ExtendedPoint);

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl Debug for ExtendedPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ExtendedPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    use alloc::vec::Vec;

    /// Affine coordinates of small multiples of the basepoint, as decimal
    /// strings.
    static BASE_X: &str =
        "15112221349535400772501151409588531511454012693041857206046113283949847762202";
    static BASE_Y: &str =
        "46316835694926478169428394003475163141307993866256225615783033603165251855960";
    static BASE2_X: &str =
        "24727413235106541002554574571675588834622768167397638456726423682521233608206";
    static BASE2_Y: &str =
        "15549675580280190176352668710449542251549572066445060580507079593062643049417";
    static BASE3_X: &str =
        "46896733464454938657123544595386787789046198280132665686241321779790909858396";
    static BASE3_Y: &str =
        "8324843778533443976490377120369201138301417226297555316741202210403726505172";
    static BASE4_X: &str =
        "14582954232372986451776170844943001818709880559417862259286374126315108956272";
    static BASE4_Y: &str =
        "32483318716863467900234833297694612235682047836132991208333042722294373421359";
    static BASE5_X: &str =
        "33467004535436536005251147249499675200073690106659565782908757308821616914995";
    static BASE5_Y: &str =
        "43097193783671926753355113395909008640284023746042808659097434958891230611693";
    static BASE8_X: &str =
        "46706390780465557264338673484185971070529246228527338942042475661633188627656";
    static BASE8_Y: &str =
        "15299170165656271974649334809062094114079726227711063015095704409550798436788";

    fn affine(x: &str, y: &str) -> (BigUint, BigUint) {
        (x.parse().unwrap(), y.parse().unwrap())
    }

    fn basepoint() -> ExtendedPoint {
        let (x, y) = affine(BASE_X, BASE_Y);
        ExtendedPoint::from_affine(&x, &y)
    }

    /// Scale every coordinate of `P` by `k`.
    fn rescale(P: &ExtendedPoint, k: u64) -> ExtendedPoint {
        let k = FieldElement::from_biguint(&BigUint::from(k));
        ExtendedPoint {
            X: &P.X * &k,
            Y: &P.Y * &k,
            Z: &P.Z * &k,
            T: &P.T * &k,
        }
    }

    #[test]
    fn from_affine_matches_basepoint_constant() {
        assert_eq!(basepoint(), constants::ED25519_BASEPOINT_POINT);
        assert_eq!(basepoint().Z, FieldElement::ONE);
        assert!(basepoint().is_valid());
    }

    #[test]
    fn affine_round_trip() {
        let (x, y) = affine(BASE3_X, BASE3_Y);
        let P = ExtendedPoint::from_affine(&x, &y);
        assert_eq!(P.to_affine(), (x, y));
    }

    #[test]
    fn from_affine_reduces_inputs() {
        let p = (BigUint::from(1u8) << 255u32) - 19u32;
        let (x, y) = affine(BASE_X, BASE_Y);
        let P = ExtendedPoint::from_affine(&(&x + &p), &(&y + &p + &p));
        assert_eq!(P, basepoint());
        assert_eq!(P.to_affine(), (x, y));
    }

    /// Double the basepoint three times and compare each step against
    /// the known coordinates of [2]B, [4]B and [8]B.
    #[test]
    fn basepoint_doubling_chain() {
        let B = basepoint();
        let B2 = B.double();
        assert_eq!(B2.to_affine(), affine(BASE2_X, BASE2_Y));
        let B4 = B2.double();
        assert_eq!(B4.to_affine(), affine(BASE4_X, BASE4_Y));
        let B8 = B4.double();
        assert_eq!(B8.to_affine(), affine(BASE8_X, BASE8_Y));
        assert!(B8.is_valid());
    }

    #[test]
    fn basepoint_plus_identity() {
        let B = basepoint();
        let id = ExtendedPoint::identity();
        assert_eq!((&B + &id).to_affine(), affine(BASE_X, BASE_Y));
        assert_eq!((&id + &B).to_affine(), affine(BASE_X, BASE_Y));
    }

    #[test]
    fn identity_to_affine() {
        let (x, y) = ExtendedPoint::identity().to_affine();
        assert_eq!(x, BigUint::from(0u8));
        assert_eq!(y, BigUint::from(1u8));
        assert!(ExtendedPoint::default().is_identity());
        assert!(ExtendedPoint::identity().is_valid());
    }

    #[test]
    fn add_self_vs_double() {
        let B = basepoint();
        let B2 = &B + &B;
        assert_eq!(B2, B.double());
        assert_eq!(B2.to_affine(), affine(BASE2_X, BASE2_Y));
        assert!(B2.is_valid());
    }

    #[test]
    fn identity_double_is_identity() {
        assert!(ExtendedPoint::identity().double().is_identity());
        let id = ExtendedPoint::identity();
        assert!((&id + &id).is_identity());
    }

    #[test]
    fn add_assign_with_aliased_value() {
        let mut P = basepoint();
        let Q = P;
        P += &Q;
        assert_eq!(P.to_affine(), affine(BASE2_X, BASE2_Y));

        let mut R = basepoint();
        R = &R + &R;
        assert_eq!(R, P);
    }

    #[test]
    fn three_and_five_times_basepoint() {
        let B = basepoint();
        let B3 = &B.double() + &B;
        assert_eq!(B3.to_affine(), affine(BASE3_X, BASE3_Y));
        let B5 = &B.mul_by_pow_2(2) + &B;
        assert_eq!(B5.to_affine(), affine(BASE5_X, BASE5_Y));
        let B5_again = &B3 + &B.double();
        assert_eq!(B5, B5_again);
    }

    #[test]
    fn subtraction_and_negation() {
        let B = basepoint();
        assert!((&B - &B).is_identity());
        assert_eq!(&B.double() - &B, B);

        let (x, y) = B.to_affine();
        let p = (BigUint::from(1u8) << 255u32) - 19u32;
        let (nx, ny) = (-B).to_affine();
        assert_eq!(nx, &p - &x);
        assert_eq!(ny, y);

        let mut P = B.double();
        P -= B;
        assert_eq!(P, B);
    }

    #[test]
    fn sum_over_iterator() {
        let B = basepoint();
        let points: Vec<ExtendedPoint> = vec![B; 5];
        let s: ExtendedPoint = points.iter().sum();
        assert_eq!(s.to_affine(), affine(BASE5_X, BASE5_Y));

        let empty: Vec<ExtendedPoint> = Vec::new();
        let s: ExtendedPoint = empty.iter().sum();
        assert!(s.is_identity());
    }

    #[test]
    fn mul_by_pow_2_and_cofactor() {
        let B = basepoint();
        assert_eq!(B.mul_by_pow_2(3).to_affine(), affine(BASE8_X, BASE8_Y));
        assert_eq!(B.mul_by_cofactor(), B.double().double().double());
        assert!(!B.is_small_order());
        assert!(ExtendedPoint::identity().is_small_order());
    }

    #[test]
    fn order_two_point_is_small_order() {
        // (0, -1) has order two.
        let p = (BigUint::from(1u8) << 255u32) - 19u32;
        let P = ExtendedPoint::from_affine(&BigUint::from(0u8), &(&p - 1u32));
        assert!(P.is_valid());
        assert!(!P.is_identity());
        assert!(P.double().is_identity());
        assert!(P.is_small_order());
    }

    #[test]
    fn equality_is_projective() {
        let B = basepoint().double();
        let scaled = rescale(&B, 12345);
        assert_eq!(B, scaled);
        assert_eq!(B.to_affine(), scaled.to_affine());
        assert!(scaled.is_valid());
        assert_ne!(B, basepoint());
    }

    #[test]
    fn operations_on_rescaled_inputs() {
        let B = basepoint();
        let Bs = rescale(&B, 7);
        let B2s = rescale(&B.double(), 99);
        assert_eq!((&Bs + &B2s).to_affine(), affine(BASE3_X, BASE3_Y));
        assert_eq!(Bs.double().to_affine(), affine(BASE2_X, BASE2_Y));
    }

    #[test]
    fn degenerate_denominator() {
        let P = ExtendedPoint {
            X: FieldElement::ONE,
            Y: FieldElement::ONE,
            Z: FieldElement::ZERO,
            T: FieldElement::ZERO,
        };
        let zero = BigUint::from(0u8);
        assert_eq!(P.to_affine(), (zero.clone(), zero));
        assert_eq!(P.try_to_affine(), Err(PointError::DegenerateDenominator));
        assert_eq!(
            basepoint().try_to_affine(),
            Ok(affine(BASE_X, BASE_Y))
        );
    }

    #[test]
    fn projective_round_trip() {
        let P = basepoint().mul_by_pow_2(2);
        let Q = P.to_projective().to_extended();
        assert_eq!(P, Q);
        assert_eq!(Q.to_affine(), affine(BASE4_X, BASE4_Y));
        assert!(Q.is_valid());
    }

    #[test]
    fn conditional_select() {
        let B = basepoint();
        let id = ExtendedPoint::identity();
        assert_eq!(ExtendedPoint::conditional_select(&B, &id, Choice::from(0)), B);
        assert_eq!(ExtendedPoint::conditional_select(&B, &id, Choice::from(1)), id);
    }

    #[cfg(feature = "zeroize")]
    #[test]
    fn zeroize_resets_to_identity() {
        let mut B = basepoint();
        B.zeroize();
        assert!(B.is_identity());
    }
}
