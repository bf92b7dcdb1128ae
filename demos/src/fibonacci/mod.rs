// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Square-Fibonacci statement: "I know a secret field element x such that iterating
//! x_{i+2} = x_i^2 + x_{i+1}^2 starting from (1, x) for a prescribed number of steps
//! produces the public output".

use prover::{
    boundary_quotient,
    crypto::ProverChannel,
    math::{polynom, BaseElement},
    transition_quotient, ProverError, StarkDomain, Statement,
};


// TRACE GENERATION
// ================================================================================================

/// Computes the execution trace of the square-Fibonacci recurrence.
///
/// The trace starts with the two provided elements and contains `num_steps` + 1
/// elements in total, each subsequent element being the sum of the squares of the two
/// preceding ones.
///
/// # Panics
/// Panics if fewer than two steps are requested.
pub fn compute_trace(x0: BaseElement, x1: BaseElement, num_steps: usize) -> Vec<BaseElement> {
    assert!(num_steps >= 2, "the recurrence needs at least 2 steps, but {num_steps} were requested");

    let mut trace = Vec::with_capacity(num_steps + 1);
    trace.push(x0);
    trace.push(x1);
    for i in 2..=num_steps {
        trace.push(trace[i - 2] * trace[i - 2] + trace[i - 1] * trace[i - 1]);
    }
    trace
}

// FIBONACCI STATEMENT
// ================================================================================================

/// The square-Fibonacci [Statement].
///
/// The first trace element is fixed to 1 and enforced by a boundary constraint; the
/// second element is the secret witness and is not constrained, which is what keeps it
/// hidden from the verifier.
pub struct FibSq {
    trace: Vec<BaseElement>,
}

impl FibSq {
    /// Returns a new statement for the provided secret witness and number of steps.
    pub fn new(secret: BaseElement, num_steps: usize) -> Self {
        FibSq { trace: compute_trace(BaseElement::ONE, secret, num_steps) }
    }
}

impl Statement for FibSq {
    fn trace_length(&self) -> usize {
        self.trace.len() - 1
    }

    fn trace(&self) -> Vec<BaseElement> {
        self.trace.clone()
    }

    fn public_output(&self) -> BaseElement {
        *self.trace.last().unwrap()
    }

    fn build_constraints(
        &self,
        trace_poly: &[BaseElement],
        domain: &StarkDomain,
        channel: &mut ProverChannel,
    ) -> Result<Vec<Vec<BaseElement>>, ProverError> {
        let g = domain.trace_domain();
        let num_steps = self.trace_length();

        // the recurrence constrains steps 0 through num_steps - 2: at x = g^i the
        // numerator f(g^2 x) - f(g x)^2 - f(x)^2 reads the trace at positions i,
        // i + 1 and i + 2, so it must vanish on the first num_steps - 1 domain points
        let f_g2 = polynom::scale(trace_poly, g[2]);
        let f_g1 = polynom::scale(trace_poly, g[1]);
        let mut numerator = polynom::sub(&f_g2, &polynom::mul(&f_g1, &f_g1));
        numerator = polynom::sub(&numerator, &polynom::mul(trace_poly, trace_poly));
        let transition = transition_quotient(&numerator, domain, num_steps - 1)?;

        let input = boundary_quotient(trace_poly, domain, 0, BaseElement::ONE)?;
        let output = boundary_quotient(trace_poly, domain, num_steps, self.public_output())?;

        channel.send(&self.public_output().to_string());
        Ok(vec![input, output, transition])
    }
}
