// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use math::{get_power_series, get_power_series_with_offset, BaseElement};

use crate::{ProverError, FRI_DOMAIN_SIZE, TRACE_DOMAIN_SIZE};

// STARK DOMAIN
// ================================================================================================

/// Evaluation domains used by the prover.
///
/// The trace domain is the cyclic multiplicative subgroup over which execution traces
/// are interpolated. The FRI domain is a larger coset offset by the field generator;
/// offsetting makes it disjoint from the trace domain, so the vanishing polynomials in
/// constraint denominators are never zero on it.
///
/// Both domains are listed in generator order: the i-th element is the generator
/// raised to the i-th power (times the offset for the coset).
pub struct StarkDomain {
    trace_domain: Vec<BaseElement>,
    fri_domain: Vec<BaseElement>,
}

impl StarkDomain {
    /// Returns a new domain pair for the protocol sizes.
    pub fn new() -> Result<Self, ProverError> {
        let trace_generator = find_generator(TRACE_DOMAIN_SIZE)?;
        let fri_generator = find_generator(FRI_DOMAIN_SIZE)?;

        let trace_domain = get_power_series(trace_generator, TRACE_DOMAIN_SIZE);
        let fri_domain = get_power_series_with_offset(
            fri_generator,
            BaseElement::GENERATOR,
            FRI_DOMAIN_SIZE,
        );

        Ok(StarkDomain { trace_domain, fri_domain })
    }

    /// Returns the trace domain.
    pub fn trace_domain(&self) -> &[BaseElement] {
        &self.trace_domain
    }

    /// Returns the FRI evaluation domain.
    pub fn fri_domain(&self) -> &[BaseElement] {
        &self.fri_domain
    }
}

// SUBGROUP GENERATORS
// ================================================================================================

/// Returns a generator of a multiplicative subgroup of the specified order.
///
/// The generator is computed as w^((p - 1) / order), where w generates the entire
/// multiplicative group; the result has order exactly `order`.
///
/// # Errors
/// Returns an error if `order` is not a power of two or does not divide p - 1.
pub fn find_generator(order: usize) -> Result<BaseElement, ProverError> {
    if !order.is_power_of_two() {
        return Err(ProverError::InvalidDomain(order));
    }
    let group_order = BaseElement::MODULUS - 1;
    if group_order % order as u64 != 0 {
        return Err(ProverError::InvalidDomain(order));
    }
    Ok(BaseElement::GENERATOR.exp(group_order / order as u64))
}
