// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use math::BaseElement;

use crate::hash::{Hasher, Sha2_256};


// PROVER CHANNEL
// ================================================================================================

/// A Fiat-Shamir transcript simulating the verifier side of an interactive protocol.
///
/// The channel maintains a running hash chain: every message the prover sends is
/// absorbed into the state, and every verifier challenge is derived from the state and
/// advances it. The same messages sent in the same order therefore always produce the
/// same challenges, which is what makes the non-interactive proof verifiable.
///
/// Every interaction is also recorded into an append-only proof log; the ordered log is
/// the proof itself. The state is a lowercase hex string so that it can be absorbed
/// into subsequent hashes in the same ASCII encoding the rest of the protocol uses; it
/// is initialized to `"0"`.
pub struct ProverChannel {
    state: String,
    proof: Vec<String>,
}

impl ProverChannel {
    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------
    /// Returns a new prover channel with an empty proof log.
    pub fn new() -> Self {
        ProverChannel { state: String::from("0"), proof: Vec::new() }
    }

    // CHANNEL OPERATIONS
    // --------------------------------------------------------------------------------------------

    /// Absorbs a prover message into the channel state and records it in the proof log.
    ///
    /// The new state is SHA-256 of the current state concatenated with the message.
    pub fn send(&mut self, msg: &str) {
        let mut data = String::with_capacity(self.state.len() + msg.len());
        data.push_str(&self.state);
        data.push_str(msg);
        self.state = Sha2_256::hash(data.as_bytes()).to_hex();
        self.proof.push(format!("send:{msg}"));
    }

    /// Derives a pseudo-random integer in the range [min, max] from the channel state,
    /// then advances the state.
    ///
    /// The state is interpreted as a big-endian integer and reduced into the requested
    /// range; the reduction is slightly biased, which is acceptable as long as the range
    /// is much smaller than 2^256. When `show_in_proof` is true, the drawn value is
    /// recorded in the proof log.
    ///
    /// # Panics
    /// Panics if `min` is greater than `max`.
    pub fn receive_random_int(&mut self, min: u64, max: u64, show_in_proof: bool) -> u64 {
        assert!(min <= max, "empty range: min {min} is greater than max {max}");
        let num = min + reduce_state(&self.state, max - min + 1);
        self.state = Sha2_256::hash(self.state.as_bytes()).to_hex();
        if show_in_proof {
            self.proof.push(format!("receive_random_int:{num}"));
        }
        num
    }

    /// Derives a pseudo-random field element from the channel state and records it in
    /// the proof log.
    pub fn get_random_scalar(&mut self) -> BaseElement {
        let num = self.receive_random_int(0, BaseElement::MODULUS - 1, false);
        self.proof.push(format!("get_random_scalar:{num}"));
        BaseElement::new(num)
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the current channel state.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the proof log accumulated so far.
    pub fn proof(&self) -> &[String] {
        &self.proof
    }

    /// Consumes the channel and returns the accumulated proof log.
    pub fn into_proof(self) -> Vec<String> {
        self.proof
    }
}

impl Default for ProverChannel {
    fn default() -> Self {
        Self::new()
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Reduces the hex-encoded channel state modulo the specified modulus.
///
/// The state never exceeds 64 hex digits, so a running 128-bit remainder is sufficient
/// to process it digit by digit.
fn reduce_state(state: &str, modulus: u64) -> u64 {
    let m = modulus as u128;
    let mut acc = 0u128;
    for c in state.chars() {
        let digit = c.to_digit(16).expect("channel state must be a hex string") as u128;
        acc = (acc * 16 + digit) % m;
    }
    acc as u64
}
