// -*- mode: rust; -*-
//
// This file is part of ed25519-group.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
//------------------------------------------------------------------------
// Linting:
//------------------------------------------------------------------------
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![doc(html_root_url = "https://docs.rs/ed25519-group/0.1.0")]

//! The group law of the twisted Edwards curve
//!
//! \\[ -x\^2 + y\^2 = 1 + d x\^2 y\^2 \\]
//!
//! over \\( \mathbb Z / (2\^{255} - 19) \\), i.e. the curve underlying
//! Ed25519.
//!
//! Points are held in one of two homogeneous models:
//!
//! * [`edwards::ExtendedPoint`], the \\((X:Y:Z:T)\\) model of
//!   Hisil, Wong, Carter and Dawson, with a complete addition law and a
//!   dedicated doubling formula;
//! * [`curve_models::ProjectivePoint`], the \\((X:Y:Z)\\) model, with a
//!   fast doubling for points whose \\(Z\\) coordinate is \\(1\\).
//!
//! Affine coordinates enter and leave the crate as arbitrary-precision
//! integers ([`num_bigint::BigUint`]).  Nothing in this crate encodes
//! points to bytes, multiplies by scalars, or checks that caller-supplied
//! coordinates satisfy the curve equation; those belong to the layers
//! built on top of it.
//!
//! ```
//! use ed25519_group::constants;
//! use ed25519_group::edwards::ExtendedPoint;
//! use ed25519_group::traits::Identity;
//!
//! let B = constants::ED25519_BASEPOINT_POINT;
//! let (x, y) = B.to_affine();
//!
//! let P = ExtendedPoint::from_affine(&x, &y);
//! assert_eq!(&P + &ExtendedPoint::identity(), B);
//! assert_eq!(&P + &P, B.double());
//! ```

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(test)]
extern crate alloc;

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// ed25519-group public modules
//------------------------------------------------------------------------

// Finite field arithmetic mod p = 2^255 - 19
pub mod field;

// Point operations on the Edwards form of Curve25519, in extended coordinates
pub mod edwards;

// The projective model, used for cheap doublings
pub mod curve_models;

// Useful constants, like the Ed25519 basepoint
pub mod constants;

// External (and internal) traits.
pub mod traits;

// Errors returned by the checked variants of the fast paths
pub mod errors;

//------------------------------------------------------------------------
// ed25519-group internal modules
//------------------------------------------------------------------------

// Arithmetic backends live here
pub(crate) mod backend;

pub use crate::errors::PointError;
