// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

// PROVER ERROR
// ================================================================================================

/// Represents an error returned by the prover during proof generation.
///
/// All of these indicate either a mis-constructed statement or an invalid witness;
/// none of them are recoverable, and the prover never commits anything to the channel
/// before the checks which raise them have passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProverError {
    /// This error occurs when a subgroup of the requested order does not exist in the
    /// field, either because the order does not divide the order of the multiplicative
    /// group or because it is not a power of two.
    InvalidDomain(usize),
    /// This error occurs when the declared trace length does not fit into the trace
    /// domain.
    TraceTooLong(usize, usize),
    /// This error occurs when the trace returned by a statement disagrees with its
    /// declared number of steps.
    TraceLengthMismatch(usize, usize),
    /// This error occurs when the trace polynomial does not pass through a prescribed
    /// boundary value; the trace cannot be proven.
    UnsatisfiedBoundaryConstraint(usize),
    /// This error occurs when a transition constraint does not evaluate to zero at one
    /// of the trace domain steps; the trace cannot be proven.
    UnsatisfiedTransitionConstraint(usize),
    /// This error occurs when a constraint quotient returned by a statement exceeds
    /// the degree bound imposed by the trace domain.
    CompositionDegreeTooLarge(usize, usize),
}

impl fmt::Display for ProverError {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain(order) => {
                write!(f, "the field contains no multiplicative subgroup of order {order}")
            }
            Self::TraceTooLong(length, max) => {
                write!(f, "trace length {length} exceeds the maximum of {max} steps")
            }
            Self::TraceLengthMismatch(actual, expected) => {
                write!(f, "the trace contains {actual} elements, but {expected} were expected")
            }
            Self::UnsatisfiedBoundaryConstraint(step) => {
                write!(f, "a boundary constraint was not satisfied at step {step}")
            }
            Self::UnsatisfiedTransitionConstraint(step) => {
                write!(f, "a transition constraint was not satisfied at step {step}")
            }
            Self::CompositionDegreeTooLarge(degree, max) => {
                write!(f, "a constraint quotient has degree {degree}, but the degree bound is {max}")
            }
        }
    }
}

impl core::error::Error for ProverError {}
