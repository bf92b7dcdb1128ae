// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Construction of constraint quotient polynomials.
//!
//! A constraint over the trace polynomial f is expressed as a numerator polynomial
//! which must vanish on a prescribed subset of the trace domain; dividing the
//! numerator by the vanishing polynomial of that subset yields a quotient whose low
//! degree certifies the constraint. Statements assemble their numerators and use the
//! helpers here to produce the quotients.

use math::{polynom, BaseElement};

use crate::{domain::StarkDomain, ProverError};


// BOUNDARY CONSTRAINTS
// ================================================================================================

/// Computes the quotient of a boundary constraint enforcing that the trace polynomial
/// evaluates to `value` at the specified trace domain step.
///
/// The quotient is (f(x) - value) / (x - g^step); the division is exact iff the trace
/// actually passes through the value.
///
/// # Errors
/// Returns an error if the trace polynomial does not evaluate to `value` at the step.
///
/// # Panics
/// Panics if `step` is out of the trace domain.
pub fn boundary_quotient(
    trace_poly: &[BaseElement],
    domain: &StarkDomain,
    step: usize,
    value: BaseElement,
) -> Result<Vec<BaseElement>, ProverError> {
    let x = domain.trace_domain()[step];
    if polynom::eval(trace_poly, x) != value {
        return Err(ProverError::UnsatisfiedBoundaryConstraint(step));
    }

    let numerator = polynom::sub(trace_poly, &[value]);
    Ok(polynom::syn_div(&numerator, 1, x))
}

// TRANSITION CONSTRAINTS
// ================================================================================================

/// Computes the quotient of a transition constraint whose numerator must vanish on the
/// first `num_transitions` points of the trace domain.
///
/// The denominator is Z(x) = prod_{i < num_transitions} (x - g^i). Since the trace
/// domain is the full cyclic subgroup of size n with vanishing polynomial x^n - 1, the
/// quotient is computed as numerator * prod_{i >= num_transitions} (x - g^i) divided
/// by (x^n - 1), which avoids a division by a large dense polynomial.
///
/// The numerator is evaluated at every constrained step before any division, so an
/// invalid witness is rejected without committing anything.
///
/// # Errors
/// Returns an error if the numerator does not vanish at one of the constrained steps.
///
/// # Panics
/// Panics if `num_transitions` is zero or exceeds the trace domain size.
pub fn transition_quotient(
    numerator: &[BaseElement],
    domain: &StarkDomain,
    num_transitions: usize,
) -> Result<Vec<BaseElement>, ProverError> {
    let g = domain.trace_domain();
    assert!(
        num_transitions > 0 && num_transitions <= g.len(),
        "number of transitions must be in (0, {}], but was {}",
        g.len(),
        num_transitions
    );

    for (step, &x) in g[..num_transitions].iter().enumerate() {
        if polynom::eval(numerator, x) != BaseElement::ZERO {
            return Err(ProverError::UnsatisfiedTransitionConstraint(step));
        }
    }

    // multiply by the factors complementary to the denominator, then divide by the
    // vanishing polynomial of the entire domain
    let mut result = numerator.to_vec();
    for &x in g[num_transitions..].iter() {
        result = polynom::mul(&result, &[-x, BaseElement::ONE]);
    }
    if result.len() <= g.len() {
        // a vanishing numerator divides trivially
        result.resize(g.len() + 1, BaseElement::ZERO);
    }
    Ok(polynom::syn_div(&result, g.len(), BaseElement::ONE))
}
