// -*- mode: rust; -*-
//
// This file is part of ed25519-group.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{255} - 19\\).
//!
//! The `ed25519_group::field` module provides a type alias
//! `ed25519_group::field::FieldElement` to the field element type
//! defined in the `backend` module.
//!
//! Field operations defined in terms of machine operations, such as
//! field multiplication or squaring, are defined in the backend
//! implementation.
//!
//! Field operations defined in terms of other field operations, such as
//! field inversion, and the conversions to and from arbitrary-precision
//! integers, are defined here.

use num_bigint::BigUint;

use subtle::Choice;
use subtle::ConstantTimeEq;

use crate::backend;

/// A `FieldElement` represents an element of the field
/// \\( \mathbb Z / (2\^{255} - 19)\\).
///
/// The `FieldElement` type is an alias for the 64-bit backend
/// implementation.
pub type FieldElement = backend::serial::u64::field::FieldElement51;

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality between two `FieldElement`s.  Since the
    /// internal representation is not canonical, the field elements
    /// are normalized to wire format before comparison.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

/// The modulus \\(p = 2\^{255} - 19\\) as an arbitrary-precision integer.
fn modulus() -> BigUint {
    (BigUint::from(1u8) << 255u32) - 19u32
}

impl FieldElement {
    /// Determine if this `FieldElement` is zero.
    ///
    /// # Return
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_zero(&self) -> Choice {
        let zero = [0u8; 32];
        let bytes = self.to_bytes();

        bytes.ct_eq(&zero)
    }

    /// Determine if this `FieldElement` is one.
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&FieldElement::ONE)
    }

    /// Compute (self^(2^250-1), self^11), used as a helper function
    /// within invert().
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn pow22501(&self) -> (FieldElement, FieldElement) {
        // Instead of managing which temporary variables are used
        // for what, we define as many as we need and leave stack
        // allocation to the compiler
        //
        // Each temporary variable t_i is of the form (self)^e_i.
        // Squaring t_i corresponds to multiplying e_i by 2,
        // so the pow2k function shifts e_i left by k places.
        // Multiplying t_i and t_j corresponds to adding e_i + e_j.
        //
        // Temporary t_i                      Nonzero bits of e_i
        //
        let t0  = self.square();           // 1         e_0 = 2^1
        let t1  = t0.square().square();    // 3         e_1 = 2^3
        let t2  = self * &t1;              // 3,0       e_2 = 2^3 + 2^0
        let t3  = &t0 * &t2;               // 3,1,0
        let t4  = t3.square();             // 4,2,1
        let t5  = &t2 * &t4;               // 4,3,2,1,0
        let t6  = t5.pow2k(5);             // 9,8,7,6,5
        let t7  = &t6 * &t5;               // 9,8,7,6,5,4,3,2,1,0
        let t8  = t7.pow2k(10);            // 19..10
        let t9  = &t8 * &t7;               // 19..0
        let t10 = t9.pow2k(20);            // 39..20
        let t11 = &t10 * &t9;              // 39..0
        let t12 = t11.pow2k(10);           // 49..10
        let t13 = &t12 * &t7;              // 49..0
        let t14 = t13.pow2k(50);           // 99..50
        let t15 = &t14 * &t13;             // 99..0
        let t16 = t15.pow2k(100);          // 199..100
        let t17 = &t16 * &t15;             // 199..0
        let t18 = t17.pow2k(50);           // 249..50
        let t19 = &t18 * &t13;             // 249..0

        (t19, t3)
    }

    /// Given a nonzero field element, compute its inverse.
    ///
    /// The inverse is computed as self^(p-2), since
    /// x^(p-2)x = x^(p-1) = 1 (mod p).
    ///
    /// This function returns zero on input zero.
    #[rustfmt::skip] // keep alignment of explanatory comments
    #[allow(clippy::let_and_return)]
    pub fn invert(&self) -> FieldElement {
        // The bits of p-2 = 2^255 -19 -2 are 11010111111...11.
        //
        //                                 nonzero bits of exponent
        let (t19, t3) = self.pow22501();   // t19: 249..0 ; t3: 3,1,0
        let t20 = t19.pow2k(5);            // 254..5
        let t21 = &t20 * &t3;              // 254..5,3,1,0

        t21
    }

    /// Reduce an arbitrary-precision integer modulo \\(p\\) and load it
    /// as a `FieldElement`.
    ///
    /// Any non-negative integer is accepted; values at or above \\(p\\)
    /// are reduced.
    pub fn from_biguint(n: &BigUint) -> FieldElement {
        let reduced = n % modulus();
        let mut bytes = [0u8; 32];
        // reduced < p < 2^255, so at most 32 little-endian bytes
        let le = reduced.to_bytes_le();
        bytes[..le.len()].copy_from_slice(&le);
        FieldElement::from_bytes(&bytes)
    }

    /// Return the canonical representative of this element, in
    /// \\([0, p)\\), as an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_bytes())
    }

    /// Return `true` if `n` is already a canonical representative,
    /// i.e. \\(n < p\\).
    pub(crate) fn is_canonical(n: &BigUint) -> bool {
        n < &modulus()
    }
}
