// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains an implementation of the FRI prover.
//!
//! FRI (Fast Reed-Solomon Interactive Oracle Proof of Proximity) establishes that a
//! committed codeword is close to the evaluations of a low-degree polynomial. The
//! prover repeatedly folds the polynomial in half with a verifier-supplied challenge,
//! commits every layer with a Merkle tree, and finally opens a set of query positions
//! together with their antipode siblings so that the verifier can replay the folds.

pub mod folding;

mod options;
pub use options::FriOptions;

mod prover;
pub use prover::{FriLayer, FriProver};
