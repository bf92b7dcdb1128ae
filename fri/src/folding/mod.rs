// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Degree-respecting projection for binary FRI folding.

use math::BaseElement;


// POLYNOMIAL FOLDING
// ================================================================================================

/// Applies degree-respecting projection to polynomial `p`, reducing its degree by half.
///
/// This is equivalent to the following:
/// * Group coefficients of p so that p(x) = e(x^2) + x * o(x^2), where e contains the
///   even-indexed coefficients and o the odd-indexed ones.
/// * Compute a random linear combination of e and o as p'(x) = e(x) + beta * o(x).
///
/// The result satisfies p'(x^2) = (p(x) + p(-x)) / 2 + beta * (p(x) - p(-x)) / (2x) for
/// every non-zero x, which is the consistency relation the verifier checks on antipodal
/// evaluation pairs.
pub fn fold_poly(p: &[BaseElement], beta: BaseElement) -> Vec<BaseElement> {
    let mut result = Vec::with_capacity(p.len().div_ceil(2));
    for pair in p.chunks(2) {
        let even = pair[0];
        let odd = if pair.len() == 2 { pair[1] } else { BaseElement::ZERO };
        result.push(even + beta * odd);
    }
    result
}

/// Projects an evaluation domain onto the domain of the folded polynomial.
///
/// The projected domain consists of the squares of the first half of `domain`. When
/// `domain` is (a coset of) a multiplicative subgroup of even order listed in generator
/// order, squaring the first half covers every element of the projected domain exactly
/// once, because x and -x sit exactly half a period apart and square to the same value.
///
/// # Panics
/// Panics if the length of `domain` is not even.
pub fn fold_domain(domain: &[BaseElement]) -> Vec<BaseElement> {
    assert!(domain.len() % 2 == 0, "domain length must be even, but was {}", domain.len());
    domain[..domain.len() / 2].iter().map(|&x| x * x).collect()
}

/// Returns the index of the antipode of position `idx` within a domain of size `n`,
/// i.e. the position holding -x when position `idx` holds x.
pub fn antipode_index(idx: usize, n: usize) -> usize {
    (idx + n / 2) % n
}
