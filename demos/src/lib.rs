// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Example statements for the starklite prover.
//!
//! The prover core is statement-agnostic; this crate provides concrete
//! [Statement](prover::Statement) implementations together with a small CLI driver
//! which generates proofs for them.

pub mod fibonacci;
