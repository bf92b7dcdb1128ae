// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains cryptographic primitives used in starklite proof generation:
//!
//! * **Hash function** - defined via the [Hasher] trait, together with a SHA-256
//!   implementation which hashes the ASCII encodings mandated by the proof format
//!   (decimal field elements at the leaves, concatenated lowercase hex digests at
//!   internal nodes).
//! * **Merkle tree** - the commitment scheme of the protocol. The [MerkleTree]
//!   implementation pads its input to a power of two and produces top-down
//!   authentication paths.
//! * **Prover channel** - a Fiat-Shamir transcript which absorbs prover messages,
//!   derives verifier challenges from a running hash chain, and records every
//!   message into an append-only proof log.

mod hash;
pub use hash::{ByteDigest, Hasher, Sha2_256};

mod merkle;
pub use merkle::{MerkleNode, MerkleTree};

mod channel;
pub use channel::ProverChannel;
