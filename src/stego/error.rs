// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from WAV parsing through payload
//! extraction. Note that a wrong PIN/key pair is deliberately not a distinct
//! variant: it surfaces as [`StegoError::TruncatedPayload`],
//! [`StegoError::InvalidEncoding`], or garbage text, indistinguishable from
//! a non-stego carrier.

use core::fmt;

/// Errors that can occur during steganographic embedding or extraction.
#[derive(Debug)]
pub enum StegoError {
    /// The carrier could not be parsed as uncompressed 16-bit PCM WAV.
    InvalidWav(crate::wav::error::WavError),
    /// The carrier has more samples than the permutation can index.
    CarrierTooLarge,
    /// The message needs more bits than the carrier has samples.
    InsufficientCapacity {
        /// Bits required: 32-bit length header + 8 per message byte.
        needed: usize,
        /// Bits available: one per sample.
        available: usize,
    },
    /// The extracted length header claims more bits than the carrier holds
    /// (wrong key material, or not a stego carrier).
    TruncatedPayload,
    /// The extracted message bytes are not valid UTF-8.
    InvalidEncoding,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWav(e) => write!(f, "invalid WAV: {e}"),
            Self::CarrierTooLarge => write!(f, "carrier has too many samples"),
            Self::InsufficientCapacity { needed, available } => write!(
                f,
                "message needs {needed} bits but carrier holds {available}"
            ),
            Self::TruncatedPayload => write!(f, "payload truncated or absent (wrong PIN/key?)"),
            Self::InvalidEncoding => write!(f, "extracted text is not valid UTF-8"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWav(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::wav::error::WavError> for StegoError {
    fn from(e: crate::wav::error::WavError) -> Self {
        Self::InvalidWav(e)
    }
}
