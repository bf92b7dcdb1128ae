// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::ProverChannel;
use math::BaseElement;

use crate::{domain::StarkDomain, ProverError};

// STATEMENT TRAIT
// ================================================================================================

/// A computational statement provable by the STARK prover.
///
/// A statement describes a computation which starts from a (possibly secret) input,
/// iterates some recurrence for a fixed number of steps, and claims a public output.
/// The prover core is agnostic to the concrete recurrence: everything
/// statement-specific is channeled through this trait.
pub trait Statement {
    /// Returns the number of steps in the execution trace; must be smaller than the
    /// trace domain size.
    fn trace_length(&self) -> usize;

    /// Returns the execution trace of the computation; the returned vector must
    /// contain exactly `trace_length() + 1` elements.
    fn trace(&self) -> Vec<BaseElement>;

    /// Returns the claimed result of the computation, i.e. the last trace element.
    fn public_output(&self) -> BaseElement;

    /// Builds the constraint quotient polynomials which bind `trace_poly` to this
    /// statement; the composition coefficients drawn by the caller are applied to the
    /// quotients in the returned order.
    ///
    /// Implementations must absorb all public values of the statement into `channel`
    /// before returning so that subsequent challenges depend on them, and must do so
    /// only after every fallible check has passed: nothing may be committed to the
    /// channel for a trace which cannot be proven.
    fn build_constraints(
        &self,
        trace_poly: &[BaseElement],
        domain: &StarkDomain,
        channel: &mut ProverChannel,
    ) -> Result<Vec<Vec<BaseElement>>, ProverError>;
}
