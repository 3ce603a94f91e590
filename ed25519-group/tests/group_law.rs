// -*- mode: rust; -*-
//
// This file is part of ed25519-group.
// See LICENSE for licensing information.

//! Integration tests for the group law, over points derived from random
//! multiples of the basepoint.

#![allow(non_snake_case)]

use num_bigint::BigUint;
use rand::thread_rng;
use rand::Rng;

use ed25519_group::constants;
use ed25519_group::curve_models::ProjectivePoint;
use ed25519_group::edwards::{AffinePoint, ExtendedPoint};
use ed25519_group::field::FieldElement;
use ed25519_group::traits::{Identity, IsIdentity};
use ed25519_group::PointError;

const TRIALS: usize = 16;

/// Compute `[k]B` by double-and-add.  Only here to produce test points.
fn basepoint_mul(k: u64) -> ExtendedPoint {
    let B = constants::ED25519_BASEPOINT_POINT;
    let mut acc = ExtendedPoint::identity();
    for i in (0..64).rev() {
        acc = acc.double();
        if (k >> i) & 1 == 1 {
            acc += &B;
        }
    }
    acc
}

fn random_point<R: Rng>(rng: &mut R) -> ExtendedPoint {
    basepoint_mul(rng.gen())
}

/// Check \\(-x^2 + y^2 = 1 + d x^2 y^2\\) on integer coordinates.
fn on_curve(x: &BigUint, y: &BigUint) -> bool {
    let x = FieldElement::from_biguint(x);
    let y = FieldElement::from_biguint(y);
    let xx = x.square();
    let yy = y.square();
    let lhs = &yy - &xx;
    let rhs = &FieldElement::ONE + &(&constants::EDWARDS_D * &(&xx * &yy));
    lhs == rhs
}

#[test]
fn double_and_add_helper_is_sane() {
    let B = constants::ED25519_BASEPOINT_POINT;
    assert!(basepoint_mul(0).is_identity());
    assert_eq!(basepoint_mul(1), B);
    assert_eq!(basepoint_mul(8), B.mul_by_cofactor());
    assert_eq!(basepoint_mul(3), &B.double() + &B);
}

#[test]
fn identity_is_neutral() {
    let mut rng = thread_rng();
    let id = ExtendedPoint::identity();
    for _ in 0..TRIALS {
        let P = random_point(&mut rng);
        assert_eq!(&P + &id, P);
        assert_eq!(&id + &P, P);
        assert_eq!((&P + &id).to_affine(), P.to_affine());
    }
}

#[test]
fn addition_is_commutative() {
    let mut rng = thread_rng();
    for _ in 0..TRIALS {
        let P = random_point(&mut rng);
        let Q = random_point(&mut rng);
        assert_eq!(&P + &Q, &Q + &P);
    }
}

#[test]
fn addition_is_associative() {
    let mut rng = thread_rng();
    for _ in 0..TRIALS {
        let P = random_point(&mut rng);
        let Q = random_point(&mut rng);
        let R = random_point(&mut rng);
        let lhs = &(&P + &Q) + &R;
        let rhs = &P + &(&Q + &R);
        assert_eq!(lhs, rhs);
        assert_eq!(lhs.to_affine(), rhs.to_affine());
    }
}

#[test]
fn addition_matches_scalar_arithmetic() {
    let mut rng = thread_rng();
    for _ in 0..TRIALS {
        let a: u32 = rng.gen();
        let b: u32 = rng.gen();
        let sum = &basepoint_mul(a as u64) + &basepoint_mul(b as u64);
        assert_eq!(sum, basepoint_mul(a as u64 + b as u64));
    }
}

#[test]
fn add_self_is_double() {
    let mut rng = thread_rng();
    for _ in 0..TRIALS {
        let P = random_point(&mut rng);
        assert_eq!(&P + &P, P.double());

        let mut Q = P;
        Q += P;
        assert_eq!(Q, P.double());
    }
}

#[test]
fn inverse_cancels() {
    let mut rng = thread_rng();
    for _ in 0..TRIALS {
        let P = random_point(&mut rng);
        assert!((&P + &(-&P)).is_identity());
        assert!((&P - &P).is_identity());
    }
}

#[test]
fn affine_round_trip() {
    let mut rng = thread_rng();
    for _ in 0..TRIALS {
        let P = random_point(&mut rng);
        let (x, y) = P.to_affine();
        assert!(on_curve(&x, &y));
        let Q = ExtendedPoint::from_affine(&x, &y);
        assert_eq!(Q, P);
        assert_eq!(Q.to_affine(), (x, y));
    }
}

#[test]
fn projective_extended_round_trip() {
    let mut rng = thread_rng();
    for _ in 0..TRIALS {
        let P = random_point(&mut rng);
        let Q = P.to_projective().to_extended();
        assert_eq!(Q, P);
        assert_eq!(Q.to_affine(), P.to_affine());
        // the round trip stays usable in further arithmetic
        assert_eq!(&Q + &P, P.double());
    }
}

#[test]
fn z1_fast_path_matches_extended_double() {
    let mut rng = thread_rng();
    for _ in 0..TRIALS {
        let P = random_point(&mut rng);
        let (x, y) = P.to_affine();

        let via_projective = ProjectivePoint::from_affine(&x, &y).double_z1();
        let via_extended = ExtendedPoint::from_affine(&x, &y).double();
        assert_eq!(via_projective.to_extended(), via_extended);

        let via_affine = AffinePoint::from_biguint(&x, &y).double();
        assert_eq!(via_affine, via_projective);

        let (x2, y2) = via_projective.to_affine();
        assert!(on_curve(&x2, &y2));
    }
}

#[test]
fn checked_variants() {
    let mut rng = thread_rng();
    let P = random_point(&mut rng).double();
    let (x, y) = P.to_affine();

    assert_eq!(P.try_to_affine(), Ok((x.clone(), y.clone())));
    let proj = ProjectivePoint::from_affine(&x, &y);
    assert_eq!(proj.try_double_z1(), Ok(proj.double_z1()));

    let doubled = proj.double_z1();
    assert_eq!(doubled.try_double_z1(), Err(PointError::DenominatorNotOne));
    assert_eq!(doubled.to_extended(), P.double());
}

#[test]
fn basepoint_golden_vector_chain() {
    let B = constants::ED25519_BASEPOINT_POINT;
    let expected_8B_x: BigUint =
        "46706390780465557264338673484185971070529246228527338942042475661633188627656"
            .parse()
            .unwrap();
    let expected_8B_y: BigUint =
        "15299170165656271974649334809062094114079726227711063015095704409550798436788"
            .parse()
            .unwrap();

    let B8 = B.double().double().double();
    assert_eq!(B8.to_affine(), (expected_8B_x, expected_8B_y));

    let sum: ExtendedPoint = core::iter::repeat(B).take(8).sum();
    assert_eq!(sum, B8);
}

#[test]
fn curve_constants_are_exposed() {
    let d = constants::EDWARDS_D;
    assert_eq!(&d + &d, constants::EDWARDS_D2);
    let (x, y) = constants::ED25519_BASEPOINT_POINT.to_affine();
    assert!(on_curve(&x, &y));
}
