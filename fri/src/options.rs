// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

// FRI OPTIONS
// ================================================================================================

/// FRI protocol parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FriOptions {
    blowup_factor: usize,
    num_queries: usize,
}

impl FriOptions {
    /// Returns a new [FriOptions] instantiated with the provided parameters.
    ///
    /// # Panics
    /// Panics if:
    /// * `blowup_factor` is smaller than 4 or not a power of two.
    /// * `num_queries` is zero.
    pub fn new(blowup_factor: usize, num_queries: usize) -> Self {
        assert!(
            blowup_factor >= 4 && blowup_factor.is_power_of_two(),
            "blowup factor must be a power of two and at least 4, but was {blowup_factor}"
        );
        assert!(num_queries > 0, "number of queries must be greater than zero");
        FriOptions { blowup_factor, num_queries }
    }

    /// Returns the ratio between the evaluation domain size and the maximum allowed
    /// polynomial degree bound.
    pub fn blowup_factor(&self) -> usize {
        self.blowup_factor
    }

    /// Returns the number of positions opened during the decommit phase.
    pub fn num_queries(&self) -> usize {
        self.num_queries
    }
}
