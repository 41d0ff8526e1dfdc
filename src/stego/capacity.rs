// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! Carrier capacity estimation.
//!
//! Capacity is exact for this scheme: one bit per sample, minus the 32-bit
//! length header, in whole message bytes. Useful for showing a live byte
//! budget in the UI before the user types a message.

use crate::stego::payload::LENGTH_BITS;
use crate::wav::WavAudio;

/// Maximum message size (in bytes) that the given carrier can hold.
///
/// Returns 0 if the carrier cannot hold even the length header — a carrier
/// with exactly [`LENGTH_BITS`] samples still round-trips the empty message.
pub fn estimate_capacity(audio: &WavAudio) -> usize {
    audio.sample_count().saturating_sub(LENGTH_BITS) / 8
}
