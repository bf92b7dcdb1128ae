// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains the algebra used by the starklite proof system:
//!
//! * **Finite field** - arithmetic in a prime field with modulus
//!   $3 \cdot 2^{30} + 1$. The modulus was selected to have a large
//!   power-of-two multiplicative subgroup, which supports the cyclic
//!   evaluation domains used by the protocol.
//! * **Polynomials** - univariate polynomial arithmetic over the field,
//!   including Lagrange interpolation and synthetic division. Polynomials
//!   are represented as vectors of field elements in ascending coefficient
//!   order.

pub mod field;
pub use field::BaseElement;

pub mod polynom;

pub mod utils;
pub use utils::{
    batch_inversion, get_power_series, get_power_series_with_offset, log2, remove_leading_zeros,
};
