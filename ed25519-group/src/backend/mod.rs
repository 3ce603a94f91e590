// -*- mode: rust; -*-
//
// This file is part of ed25519-group.
// See LICENSE for licensing information.

//! Arithmetic backends.
//!
//! Only the serial 64-bit backend exists: field elements are five
//! `u64` limbs in radix \\(2\^{51}\\), multiplied with `u128` products.
//! The group law in [`crate::edwards`] and [`crate::curve_models`] only
//! talks to the backend through [`crate::field::FieldElement`].

pub mod serial;
