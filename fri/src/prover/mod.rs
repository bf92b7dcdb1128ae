// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crypto::{ByteDigest, MerkleTree, ProverChannel, Sha2_256};
use math::{polynom, BaseElement};

use crate::{folding, FriOptions};


// TYPES AND INTERFACES
// ================================================================================================

/// Implements the prover side of the FRI protocol.
///
/// The prover is instantiated with protocol parameters and drives two phases:
///
/// * **Commit phase** - the input polynomial is folded in half layer by layer until it
///   becomes a constant. Every layer is evaluated over its domain and committed with a
///   Merkle tree whose root is absorbed into the channel; the folding challenge for the
///   next layer is then drawn from the channel.
/// * **Decommit phase** - for every query, a position is drawn from the channel and the
///   evaluations at that position and at its antipode are opened across all layers,
///   together with their authentication paths.
///
/// All layers are retained in memory between the two phases because decommitting
/// requires access to every codeword and tree.
pub struct FriProver {
    options: FriOptions,
    layers: Vec<FriLayer>,
}

/// A single layer of the FRI protocol: the folded polynomial, its evaluation domain,
/// the codeword, and the Merkle commitment over the codeword.
pub struct FriLayer {
    poly: Vec<BaseElement>,
    domain: Vec<BaseElement>,
    evaluations: Vec<BaseElement>,
    tree: MerkleTree<Sha2_256>,
}

impl FriLayer {
    fn new(poly: Vec<BaseElement>, domain: Vec<BaseElement>) -> Self {
        let evaluations = polynom::eval_many(&poly, &domain);
        let tree = MerkleTree::new(evaluations.clone());
        FriLayer { poly, domain, evaluations, tree }
    }

    /// Returns the polynomial of this layer in coefficient form.
    pub fn poly(&self) -> &[BaseElement] {
        &self.poly
    }

    /// Returns the evaluation domain of this layer.
    pub fn domain(&self) -> &[BaseElement] {
        &self.domain
    }

    /// Returns the codeword of this layer.
    pub fn evaluations(&self) -> &[BaseElement] {
        &self.evaluations
    }

    /// Returns the Merkle commitment over the codeword of this layer.
    pub fn tree(&self) -> &MerkleTree<Sha2_256> {
        &self.tree
    }
}

// PROVER IMPLEMENTATION
// ================================================================================================

impl FriProver {
    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------
    /// Returns a new FRI prover instantiated with the provided options.
    pub fn new(options: FriOptions) -> Self {
        FriProver { options, layers: Vec::new() }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of layers computed during the last execution of the
    /// [build_layers](Self::build_layers) method.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns the layers computed during the last execution of the
    /// [build_layers](Self::build_layers) method.
    pub fn layers(&self) -> &[FriLayer] {
        &self.layers
    }

    // COMMIT PHASE
    // --------------------------------------------------------------------------------------------
    /// Executes the commit phase of the FRI protocol.
    ///
    /// The polynomial is committed over the provided domain, and then repeatedly folded
    /// with challenges drawn from the channel until it becomes a constant; each folded
    /// layer is evaluated over the half-size projected domain and committed as well.
    /// Every commitment root is absorbed into the channel, and the final constant is
    /// sent in its decimal form.
    ///
    /// # Panics
    /// Panics if:
    /// * A prior commit phase has not been decommitted yet.
    /// * The polynomial does not fit into the domain, or the domain size is not a
    ///   power of two.
    pub fn build_layers(
        &mut self,
        channel: &mut ProverChannel,
        poly: Vec<BaseElement>,
        domain: Vec<BaseElement>,
    ) {
        assert!(self.layers.is_empty(), "a prior commit phase has not been completed yet");
        assert!(!poly.is_empty(), "polynomial cannot be empty");
        assert!(
            domain.len().is_power_of_two(),
            "domain size must be a power of two, but was {}",
            domain.len()
        );
        assert!(
            polynom::degree_of(&poly) < domain.len(),
            "polynomial degree must be smaller than domain size"
        );

        let mut layer = FriLayer::new(poly, domain);
        channel.send(&layer.tree.root().to_hex());

        while polynom::degree_of(&layer.poly) > 0 {
            let beta = channel.get_random_scalar();
            let next_poly = folding::fold_poly(&layer.poly, beta);
            let next_domain = folding::fold_domain(&layer.domain);
            self.layers.push(layer);

            layer = FriLayer::new(next_poly, next_domain);
            channel.send(&layer.tree.root().to_hex());
        }

        // the last layer is a constant polynomial; send it in the clear
        channel.send(&layer.poly[0].to_string());
        self.layers.push(layer);
    }

    // DECOMMIT PHASE
    // --------------------------------------------------------------------------------------------
    /// Executes the decommit phase of the FRI protocol.
    ///
    /// For every query, a position is drawn from the channel; the first layer is opened
    /// at the position and at its two blowup-offset successors (the three points a
    /// verifier needs to evaluate one transition constraint), and every layer except
    /// the last is opened at the (folded) position and its antipode. The query range
    /// is reduced so that the offset openings always stay within the first layer.
    ///
    /// # Panics
    /// Panics if layers have not been built yet.
    pub fn decommit(&self, channel: &mut ProverChannel) {
        assert!(!self.layers.is_empty(), "FRI layers have not been built yet");

        let domain_size = self.layers[0].evaluations.len();
        assert!(
            domain_size > 2 * self.options.blowup_factor() + 2,
            "domain of size {domain_size} leaves no room for query openings"
        );
        let max_query = (domain_size - 2 * self.options.blowup_factor() - 2) as u64;
        for _ in 0..self.options.num_queries() {
            let position = channel.receive_random_int(0, max_query, true) as usize;
            self.decommit_on_query(position, channel);
        }
    }

    /// Opens a single query position across all layers.
    fn decommit_on_query(&self, position: usize, channel: &mut ProverChannel) {
        let blowup_factor = self.options.blowup_factor();
        let first_layer = &self.layers[0];

        // open the three positions of the first layer which correspond to consecutive
        // trace steps: x, g*x and g^2*x map to offsets of one and two blowup factors
        for offset in [0, blowup_factor, 2 * blowup_factor] {
            let pos = position + offset;
            channel.send(&first_layer.evaluations[pos].to_string());
            channel.send(&encode_path(&first_layer.tree.authentication_path(pos)));
        }

        self.decommit_on_layers(position, channel);
    }

    /// Opens the position and its antipode at every layer except the last one, then
    /// sends the constant value of the last layer.
    fn decommit_on_layers(&self, mut position: usize, channel: &mut ProverChannel) {
        let (last, layers) = self.layers.split_last().expect("no layers");

        for layer in layers {
            let length = layer.evaluations.len();
            position %= length;
            let sibling = folding::antipode_index(position, length);

            channel.send(&layer.evaluations[position].to_string());
            channel.send(&encode_path(&layer.tree.authentication_path(position)));
            channel.send(&layer.evaluations[sibling].to_string());
            channel.send(&encode_path(&layer.tree.authentication_path(sibling)));
        }

        channel.send(&last.evaluations[0].to_string());
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Encodes an authentication path as a comma-separated list of hex digests.
fn encode_path(path: &[ByteDigest]) -> String {
    path.iter().map(|digest| digest.to_hex()).collect::<Vec<_>>().join(",")
}
