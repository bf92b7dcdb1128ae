// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

// PROOF
// ================================================================================================

/// A generated STARK proof.
///
/// The proof is the ordered record of the Fiat-Shamir channel: every message the
/// prover sent, tagged `send:`, interleaved with the challenges logged as
/// `get_random_scalar:` and `receive_random_int:`. A verifier accepts the proof by
/// replaying the records against its own channel and checking all openings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    entries: Vec<String>,
}

impl Proof {
    /// Wraps an ordered channel log into a proof.
    pub fn new(entries: Vec<String>) -> Self {
        Proof { entries }
    }

    /// Returns the ordered proof entries.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the number of entries in the proof.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the proof contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the proof and returns its entries.
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl fmt::Display for Proof {
    /// Formats the proof with one entry per line; this is the proof file format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries.iter() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
