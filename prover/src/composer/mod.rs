// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::ProverChannel;
use math::{polynom, remove_leading_zeros, BaseElement};

// COMPOSITION POLYNOMIAL
// ================================================================================================

/// Combines constraint quotients into a single composition polynomial.
///
/// For every quotient a random coefficient is drawn from the channel, and the result
/// is the coefficient-weighted sum of all quotients. The coefficients are drawn in
/// the order the quotients appear, which makes the composition reproducible by a
/// verifier replaying the channel.
pub fn build_composition_poly(
    constraints: &[Vec<BaseElement>],
    channel: &mut ProverChannel,
) -> Vec<BaseElement> {
    let mut result = Vec::new();
    for constraint in constraints {
        let alpha = channel.get_random_scalar();
        result = polynom::add(&result, &polynom::mul_by_const(constraint, alpha));
    }
    remove_leading_zeros(&result)
}
