// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt::{Debug, Display, Formatter};
use core::hash::Hash;

use math::BaseElement;
use sha2::{Digest, Sha256};

// HASHER TRAIT
// ================================================================================================

/// Defines a cryptographic hash function for the proof system.
pub trait Hasher {
    /// Digest produced by the hash function.
    type Digest: Debug + Display + Copy + Eq + Hash + Default;

    /// Returns a hash of the provided sequence of bytes.
    fn hash(bytes: &[u8]) -> Self::Digest;

    /// Returns a hash of a field element in its canonical decimal encoding.
    fn hash_element(element: &BaseElement) -> Self::Digest;

    /// Returns a hash of two digests; this is the operation used to compute internal
    /// nodes of a Merkle tree.
    fn merge(values: &[Self::Digest; 2]) -> Self::Digest;
}

// BYTE DIGEST
// ================================================================================================

/// A 256-bit digest rendered as a lowercase hex string in all wire encodings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ByteDigest([u8; 32]);

impl ByteDigest {
    /// Creates a digest from raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        ByteDigest(bytes)
    }

    /// Returns the raw bytes of this digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns this digest as a 64-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Display for ByteDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// SHA2 WITH 256-BIT OUTPUT
// ================================================================================================

/// Implementation of the [Hasher] trait for the SHA-256 hash function over the ASCII
/// encodings used by the proof format.
pub struct Sha2_256;

impl Hasher for Sha2_256 {
    type Digest = ByteDigest;

    fn hash(bytes: &[u8]) -> Self::Digest {
        ByteDigest(Sha256::digest(bytes).into())
    }

    fn hash_element(element: &BaseElement) -> Self::Digest {
        Self::hash(element.to_string().as_bytes())
    }

    fn merge(values: &[Self::Digest; 2]) -> Self::Digest {
        let mut data = String::with_capacity(128);
        data.push_str(&values[0].to_hex());
        data.push_str(&values[1].to_hex());
        Self::hash(data.as_bytes())
    }
}

// TESTS
// ================================================================================================
