// -*- mode: rust; -*-
//
// This file is part of ed25519-group.
// See LICENSE for licensing information.

//! Curve constants: the twist parameter \\(d\\), its double \\(2d\\),
//! the field element \\(2\\), and the Ed25519 basepoint.
//!
//! The curve is
//!
//! \\[ -x\^2 + y\^2 = 1 + d x\^2 y\^2, \qquad d = -121665/121666. \\]
//!
//! These are plain `const` items.  Collaborators that want to check a
//! point against the curve equation can do so with [`EDWARDS_D`] and the
//! public [`FieldElement`](crate::field::FieldElement) arithmetic; this
//! crate never does it on their behalf.

#![allow(non_snake_case)]

pub use crate::backend::serial::u64::constants::*;
