// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use crypto::ProverChannel;
use math::{polynom, BaseElement};

use super::{
    boundary_quotient, find_generator, prove, transition_quotient, Proof, ProverError,
    StarkDomain, Statement, FRI_DOMAIN_SIZE, NUM_QUERIES, TRACE_DOMAIN_SIZE,
};

// TEST STATEMENT
// ================================================================================================

/// A minimal statement iterating x_{i+1} = x_i^2; used to exercise the prover without
/// pulling in a concrete example crate.
struct SquareStatement {
    trace: Vec<BaseElement>,
}

impl SquareStatement {
    fn new(start: BaseElement, num_steps: usize) -> Self {
        let mut trace = Vec::with_capacity(num_steps + 1);
        let mut value = start;
        trace.push(value);
        for _ in 0..num_steps {
            value = value * value;
            trace.push(value);
        }
        SquareStatement { trace }
    }
}

impl Statement for SquareStatement {
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

        // f(g * x) - f(x)^2 vanishes on the first num_steps domain points when the
        // trace follows the squaring recurrence
        let shifted = polynom::scale(trace_poly, g[1]);
        let numerator = polynom::sub(&shifted, &polynom::mul(trace_poly, trace_poly));
        let transition = transition_quotient(&numerator, domain, num_steps)?;

        let input = boundary_quotient(trace_poly, domain, 0, self.trace[0])?;
        let output = boundary_quotient(trace_poly, domain, num_steps, self.public_output())?;

        channel.send(&self.public_output().to_string());
        Ok(vec![input, output, transition])
    }
}

// DOMAIN TESTS
// ================================================================================================

#[test]
fn find_generator_returns_exact_order() {
    let mut order = 2;
    while order <= TRACE_DOMAIN_SIZE {
        let g = find_generator(order).unwrap();
        assert_eq!(BaseElement::ONE, g.exp(order as u64));
        assert_ne!(BaseElement::ONE, g.exp(order as u64 / 2));
        order *= 2;
    }
}

#[test]
fn find_generator_rejects_invalid_orders() {
    // not a power of two, even though it divides the group order
    assert_eq!(Err(ProverError::InvalidDomain(3)), find_generator(3));
    assert_eq!(Err(ProverError::InvalidDomain(6)), find_generator(6));
    assert_eq!(Err(ProverError::InvalidDomain(0)), find_generator(0));
    // a power of two too large for the field
    assert_eq!(Err(ProverError::InvalidDomain(1 << 31)), find_generator(1 << 31));
}

#[test]
fn trace_domain_is_a_cyclic_subgroup() {
    let domain = StarkDomain::new().unwrap();
    let g = domain.trace_domain();
    assert_eq!(TRACE_DOMAIN_SIZE, g.len());
    assert_eq!(BaseElement::ONE, g[0]);

    // the domain contains 1024 distinct elements, and the generator has order 1024:
    // its 512-th power is -1
    let unique: HashSet<u64> = g.iter().map(|x| x.as_int()).collect();
    assert_eq!(TRACE_DOMAIN_SIZE, unique.len());
    assert_eq!(-BaseElement::ONE, g[TRACE_DOMAIN_SIZE / 2]);
    assert_eq!(BaseElement::ONE, g[1].exp(TRACE_DOMAIN_SIZE as u64));
}

#[test]
fn fri_domain_is_disjoint_from_trace_domain() {
    let domain = StarkDomain::new().unwrap();
    assert_eq!(FRI_DOMAIN_SIZE, domain.fri_domain().len());
    assert_eq!(BaseElement::GENERATOR, domain.fri_domain()[0]);

    let trace: HashSet<u64> = domain.trace_domain().iter().map(|x| x.as_int()).collect();
    assert!(domain.fri_domain().iter().all(|x| !trace.contains(&x.as_int())));
}

// PROVER TESTS
// ================================================================================================

#[test]
fn prove_square_statement() {
    let statement = SquareStatement::new(BaseElement::new(3), 8);
    let proof = prove(&statement).unwrap();
    assert!(!proof.is_empty());

    // one scalar per constraint plus one per fold, one drawn position per query
    let roots = count_root_commitments(&proof);
    let scalars =
        proof.entries().iter().filter(|e| e.starts_with("get_random_scalar:")).count();
    let positions =
        proof.entries().iter().filter(|e| e.starts_with("receive_random_int:")).count();
    assert_eq!(3 + (roots - 1), scalars);
    assert_eq!(NUM_QUERIES, positions);

    // the first entry binds the public output before any challenge is drawn
    assert_eq!(format!("send:{}", statement.public_output()), proof.entries()[0]);
}

#[test]
fn proofs_are_deterministic() {
    let s1 = SquareStatement::new(BaseElement::new(123456), 8);
    let s2 = SquareStatement::new(BaseElement::new(123456), 8);
    assert_eq!(prove(&s1).unwrap(), prove(&s2).unwrap());
}

#[test]
fn prove_rejects_tampered_trace() {
    let mut statement = SquareStatement::new(BaseElement::new(5), 8);
    statement.trace[4] += BaseElement::ONE;

    // the first violated transition is the one producing the tampered element
    assert_eq!(Err(ProverError::UnsatisfiedTransitionConstraint(3)), prove(&statement));
}

#[test]
fn prove_rejects_overlong_trace() {
    let statement = SquareStatement::new(BaseElement::new(7), TRACE_DOMAIN_SIZE);
    assert_eq!(
        Err(ProverError::TraceTooLong(TRACE_DOMAIN_SIZE, TRACE_DOMAIN_SIZE)),
        prove(&statement)
    );
}

#[test]
fn arithmetization_succeeds_at_maximum_trace_length() {
    // a trace of TRACE_DOMAIN_SIZE elements occupies the entire trace domain
    let statement = SquareStatement::new(BaseElement::new(9), TRACE_DOMAIN_SIZE - 1);
    let domain = StarkDomain::new().unwrap();
    let mut channel = ProverChannel::new();

    let trace = statement.trace();
    let trace_poly = polynom::interpolate(&domain.trace_domain()[..trace.len()], &trace, true);
    let constraints = statement.build_constraints(&trace_poly, &domain, &mut channel).unwrap();
    assert_eq!(3, constraints.len());
    for constraint in constraints.iter() {
        assert!(polynom::degree_of(constraint) < TRACE_DOMAIN_SIZE);
    }
}

#[test]
fn prove_rejects_overdegree_constraints() {
    struct BadStatement;

    impl Statement for BadStatement {
        fn trace_length(&self) -> usize {
            4
        }

        fn trace(&self) -> Vec<BaseElement> {
            vec![BaseElement::ONE; 5]
        }

        fn public_output(&self) -> BaseElement {
            BaseElement::ONE
        }

        fn build_constraints(
            &self,
            _trace_poly: &[BaseElement],
            _domain: &StarkDomain,
            _channel: &mut ProverChannel,
        ) -> Result<Vec<Vec<BaseElement>>, ProverError> {
            let mut constraint = vec![BaseElement::ZERO; TRACE_DOMAIN_SIZE + 1];
            constraint[TRACE_DOMAIN_SIZE] = BaseElement::ONE;
            Ok(vec![constraint])
        }
    }

    assert_eq!(
        Err(ProverError::CompositionDegreeTooLarge(TRACE_DOMAIN_SIZE, TRACE_DOMAIN_SIZE)),
        prove(&BadStatement)
    );
}

// HELPER FUNCTIONS
// ================================================================================================

/// Counts Merkle root commitments in the proof; roots are the only 64-character
/// messages sent over the channel.
fn count_root_commitments(proof: &Proof) -> usize {
    proof
        .entries()
        .iter()
        .filter(|e| e.starts_with("send:") && e.len() == "send:".len() + 64)
        .count()
}
