// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! Keyed sample index permutation.
//!
//! Applies a Fisher-Yates shuffle over all sample indices using a ChaCha20
//! PRNG seeded from the (PIN, key) pair, then truncates to the number of
//! bits needed. Embedder and extractor walk the same pseudo-random index
//! order; the extractor does not know the payload size up front, so it keeps
//! the full permutation and consumes a prefix — truncation of the same
//! shuffle, so the two sides always agree.
//!
//! # Cross-platform portability
//!
//! The Fisher-Yates shuffle uses `u32` for `gen_range` (not `usize`) to
//! ensure identical permutations on all platforms. `usize` is 32-bit on WASM
//! but 64-bit on native, which causes `rand::Rng::gen_range` to consume
//! different amounts of PRNG entropy per step — producing completely
//! different shuffles.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::stego::error::StegoError;

/// Generate the full keyed permutation of `[0, sample_count)`.
///
/// Callers must have bounded `sample_count` to `u32::MAX` already (the
/// pipeline rejects larger carriers before reaching this point).
pub fn full_permutation(seed: &[u8; 32], sample_count: usize) -> Vec<u32> {
    debug_assert!(sample_count <= u32::MAX as usize);
    let mut indices: Vec<u32> = (0..sample_count as u32).collect();
    let mut rng = ChaCha20Rng::from_seed(*seed);
    for i in (1..indices.len()).rev() {
        let j = rng.gen_range(0..=(i as u32)) as usize;
        indices.swap(i, j);
    }
    indices
}

/// Derive the `needed_bits` sample indices used for embedding.
///
/// This is the capacity gate: one bit per sample, so the message (header
/// included) must not need more bits than the carrier has samples.
///
/// # Errors
/// [`StegoError::InsufficientCapacity`] when `needed_bits > sample_count`,
/// carrying both counts so the caller can report how much is missing.
pub fn derive_indices(
    seed: &[u8; 32],
    sample_count: usize,
    needed_bits: usize,
) -> Result<Vec<u32>, StegoError> {
    if needed_bits > sample_count {
        return Err(StegoError::InsufficientCapacity {
            needed: needed_bits,
            available: sample_count,
        });
    }
    let mut indices = full_permutation(seed, sample_count);
    indices.truncate(needed_bits);
    Ok(indices)
}
