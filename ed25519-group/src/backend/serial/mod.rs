// -*- mode: rust; -*-
//
// This file is part of ed25519-group.
// See LICENSE for licensing information.

//! Serial implementations of field arithmetic.

pub mod u64;
