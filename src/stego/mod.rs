// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! Steganographic embedding and extraction pipelines.
//!
//! A message is framed with a 32-bit length header (`payload`), the (PIN,
//! key) pair is stretched into a ChaCha20 seed (`keying`), the seed drives a
//! Fisher-Yates permutation of all sample indices (`permute`), and one
//! payload bit is written per selected sample LSB (`embed`). Extraction
//! replays the same permutation, reads the length header from the first 32
//! positions, then gathers exactly the claimed number of message bits.
//!
//! Every call is a single synchronous pure transform over in-memory buffers:
//! no shared state, no I/O, no retries. Capacity is validated before any
//! sample is touched, and embedding mutates a decoded copy, so a failed call
//! never leaves a half-written carrier.

pub mod capacity;
pub mod embed;
pub mod error;
pub mod keying;
pub mod payload;
pub mod permute;

pub use capacity::estimate_capacity;
pub use error::StegoError;

use crate::wav::WavAudio;
use payload::LENGTH_BITS;

/// Maximum number of samples the permutation can index.
///
/// RIFF's 32-bit chunk sizes cannot actually produce more, but the bound is
/// checked at pipeline entry rather than assumed.
pub const MAX_SAMPLES: usize = u32::MAX as usize;

/// Hide a message inside a WAV carrier, keyed by the (PIN, key) pair.
///
/// Returns the stego carrier: identical format metadata and sample count,
/// differing from the input only in the LSBs of the selected samples.
///
/// # Errors
/// - [`StegoError::InvalidWav`] if the carrier is not uncompressed 16-bit PCM.
/// - [`StegoError::CarrierTooLarge`] if the carrier exceeds [`MAX_SAMPLES`].
/// - [`StegoError::InsufficientCapacity`] if the message (header included)
///   needs more bits than the carrier has samples.
pub fn hide_message(
    carrier_bytes: &[u8],
    message: &str,
    pin: &str,
    key: &str,
) -> Result<Vec<u8>, StegoError> {
    let mut audio = WavAudio::from_bytes(carrier_bytes)?;
    let sample_count = audio.sample_count();
    if sample_count > MAX_SAMPLES {
        return Err(StegoError::CarrierTooLarge);
    }

    // Capacity check comes before any bit is produced or written.
    let needed = payload::needed_bits(message);
    let seed = keying::derive_perm_seed(pin, key);
    let indices = permute::derive_indices(&seed, sample_count, needed)?;

    let bits = payload::encode_payload(message);
    embed::embed_bits(audio.samples_mut(), &bits, &indices);

    Ok(audio.to_bytes())
}

/// Recover a hidden message from a stego carrier.
///
/// With the wrong (PIN, key) pair the replayed permutation selects the wrong
/// samples: the result is an error or garbage text, never the message. There
/// is no authenticity tag distinguishing the two cases.
///
/// # Errors
/// - [`StegoError::InvalidWav`] if the carrier is not uncompressed 16-bit PCM.
/// - [`StegoError::CarrierTooLarge`] if the carrier exceeds [`MAX_SAMPLES`].
/// - [`StegoError::TruncatedPayload`] if the length header claims more bits
///   than the carrier holds (wrong key material or a non-stego carrier).
/// - [`StegoError::InvalidEncoding`] if the gathered bytes are not UTF-8.
pub fn extract_message(stego_bytes: &[u8], pin: &str, key: &str) -> Result<String, StegoError> {
    let audio = WavAudio::from_bytes(stego_bytes)?;
    let sample_count = audio.sample_count();
    if sample_count > MAX_SAMPLES {
        return Err(StegoError::CarrierTooLarge);
    }
    if sample_count < LENGTH_BITS {
        return Err(StegoError::TruncatedPayload);
    }

    let seed = keying::derive_perm_seed(pin, key);
    let indices = permute::full_permutation(&seed, sample_count);
    let samples = audio.samples();

    // Read the header first; only then is the payload bit count known.
    let mut bits = embed::extract_bits(samples, &indices[..LENGTH_BITS]);
    let msg_len = payload::parse_length(&bits)? as usize;
    let total = msg_len
        .checked_mul(8)
        .and_then(|b| b.checked_add(LENGTH_BITS))
        .ok_or(StegoError::TruncatedPayload)?;
    if total > sample_count {
        return Err(StegoError::TruncatedPayload);
    }

    bits.extend(embed::extract_bits(samples, &indices[LENGTH_BITS..total]));
    payload::decode_payload(&bits)
}
