// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! `fmt ` chunk parsing and validation.

use super::error::{Result, WavError};

/// WAVE format code for uncompressed PCM.
pub const FORMAT_PCM: u16 = 1;

/// Format metadata from the `fmt ` chunk.
///
/// Everything required to reserialize a container with the same layout as
/// the input. Embedding never changes any of these fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Number of interleaved channels (1 = mono, 2 = stereo, ...).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample. Always 16 for supported files.
    pub bits_per_sample: u16,
}

impl FormatInfo {
    /// Parse and validate a `fmt ` chunk payload.
    ///
    /// Only accepts format code 1 (uncompressed PCM) at 16 bits per sample.
    /// Extended `fmt ` chunks (18 or 40 bytes) are fine — the extra fields
    /// are preserved raw by the container layer and ignored here.
    ///
    /// # Errors
    /// - [`WavError::UnexpectedEof`] if the payload is shorter than 16 bytes.
    /// - [`WavError::UnsupportedCodec`] for any non-PCM format code.
    /// - [`WavError::UnsupportedBitDepth`] for bit depths other than 16.
    /// - [`WavError::InvalidChunkData`] for a zero channel count.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 16 {
            return Err(WavError::UnexpectedEof);
        }
        let format_code = u16::from_le_bytes([data[0], data[1]]);
        if format_code != FORMAT_PCM {
            return Err(WavError::UnsupportedCodec(format_code));
        }
        let channels = u16::from_le_bytes([data[2], data[3]]);
        if channels == 0 {
            return Err(WavError::InvalidChunkData("zero channel count"));
        }
        let sample_rate = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let bits_per_sample = u16::from_le_bytes([data[14], data[15]]);
        if bits_per_sample != 16 {
            return Err(WavError::UnsupportedBitDepth(bits_per_sample));
        }
        Ok(Self {
            channels,
            sample_rate,
            bits_per_sample,
        })
    }
}
