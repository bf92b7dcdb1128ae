// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains the starklite STARK prover.
//!
//! A prover proves knowledge of a witness for a [Statement]: a computation which
//! iterates some recurrence over a fixed cyclic domain and exposes its final value as
//! the public output. Proof generation runs through the following pipeline:
//!
//! 1. The execution trace produced by the statement is interpolated into a trace
//!    polynomial over the trace domain.
//! 2. The statement turns the trace polynomial into constraint quotient polynomials;
//!    each quotient is a polynomial (rather than a rational function) exactly when the
//!    corresponding constraint holds over the trace.
//! 3. The quotients are combined into a single composition polynomial using random
//!    coefficients drawn from the Fiat-Shamir channel.
//! 4. The composition polynomial is evaluated over a larger disjoint coset domain, and
//!    the resulting codeword goes through the FRI commit and decommit phases.
//!
//! The ordered log of everything sent over the channel is the proof.

use crypto::ProverChannel;
use fri::{FriOptions, FriProver};
use math::polynom;
use tracing::{event, info_span, Level};

pub use crypto;
pub use fri;
pub use math;

mod composer;
pub use composer::build_composition_poly;

mod constraints;
pub use constraints::{boundary_quotient, transition_quotient};

mod domain;
pub use domain::{find_generator, StarkDomain};

mod errors;
pub use errors::ProverError;

mod proof;
pub use proof::Proof;

mod statement;
pub use statement::Statement;

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

/// Ratio between the size of the FRI evaluation domain and the trace domain; larger
/// values improve soundness of each query.
pub const BLOWUP_FACTOR: usize = 8;

/// Size of the trace domain; traces of up to this many elements can be proven.
pub const TRACE_DOMAIN_SIZE: usize = 1024;

/// Size of the FRI evaluation domain.
pub const FRI_DOMAIN_SIZE: usize = BLOWUP_FACTOR * TRACE_DOMAIN_SIZE;

/// Number of positions opened during the FRI decommit phase.
pub const NUM_QUERIES: usize = 3;

// PROVER
// ================================================================================================

/// Generates a proof for the provided statement.
///
/// # Errors
/// Returns an error if:
/// * The trace does not fit into the trace domain, or its length is inconsistent with
///   the declared number of steps.
/// * The trace violates a constraint of the statement; such a trace cannot be proven.
/// * A constraint quotient returned by the statement exceeds the degree bound.
pub fn prove<S: Statement>(statement: &S) -> Result<Proof, ProverError> {
    let trace_length = statement.trace_length();
    if trace_length >= TRACE_DOMAIN_SIZE {
        return Err(ProverError::TraceTooLong(trace_length, TRACE_DOMAIN_SIZE));
    }
    let trace = statement.trace();
    if trace.len() != trace_length + 1 {
        return Err(ProverError::TraceLengthMismatch(trace.len(), trace_length + 1));
    }

    let domain = StarkDomain::new()?;
    let mut channel = ProverChannel::new();

    // interpolate the trace into a polynomial of degree smaller than the trace length
    let trace_poly = info_span!("interpolate_trace", num_steps = trace.len()).in_scope(|| {
        polynom::interpolate(&domain.trace_domain()[..trace.len()], &trace, true)
    });

    // let the statement bind the trace polynomial; on success the statement has
    // absorbed its public values into the channel
    let constraints = info_span!("build_constraints")
        .in_scope(|| statement.build_constraints(&trace_poly, &domain, &mut channel))?;
    for constraint in constraints.iter() {
        let degree = polynom::degree_of(constraint);
        if degree >= TRACE_DOMAIN_SIZE {
            return Err(ProverError::CompositionDegreeTooLarge(degree, TRACE_DOMAIN_SIZE));
        }
    }

    // draw a random coefficient per constraint and build the composition polynomial
    let composition_poly = info_span!("build_composition_poly", num_constraints = constraints.len())
        .in_scope(|| build_composition_poly(&constraints, &mut channel));
    event!(Level::DEBUG, "composition degree: {}", polynom::degree_of(&composition_poly));

    // commit to the composition polynomial over the FRI domain and fold it down to a
    // constant
    let mut fri_prover = FriProver::new(FriOptions::new(BLOWUP_FACTOR, NUM_QUERIES));
    info_span!("build_fri_layers", domain_size = FRI_DOMAIN_SIZE).in_scope(|| {
        fri_prover.build_layers(&mut channel, composition_poly, domain.fri_domain().to_vec())
    });
    event!(Level::DEBUG, "fri layers: {}", fri_prover.num_layers());

    // open the queried positions across all layers
    info_span!("decommit", num_queries = NUM_QUERIES)
        .in_scope(|| fri_prover.decommit(&mut channel));

    Ok(Proof::new(channel.into_proof()))
}
