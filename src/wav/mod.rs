// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! Pure-Rust WAV sample codec (zero external dependencies).
//!
//! Reads and writes RIFF/WAVE containers, providing direct access to the raw
//! PCM samples without any resampling or format conversion. This is the
//! foundation for steganographic embedding, which operates on the sample
//! sequence only.
//!
//! Supports:
//! - Uncompressed PCM (format code 1), 16-bit signed samples
//! - Any channel count and sample rate
//! - Extended `fmt ` chunks (18/40 bytes, preserved raw)
//! - Unknown chunks (`LIST`, `cue `, `bext`, ...) preserved verbatim, in order
//! - Byte-for-byte round-trip for unmodified files
//!
//! Does NOT support:
//! - Compressed codecs (ADPCM, mu-law, MP3-in-WAV) -- rejected at parse time
//! - 8/24/32-bit or float samples -- rejected at parse time
//!
//! Multi-channel audio is exposed as one flat interleaved sample sequence;
//! channel boundaries are irrelevant to the embedding layer.

pub mod chunk;
pub mod error;
pub mod format;

use chunk::{iterate_chunks, write_chunk, RiffChunk, DATA_ID, FMT_ID};
use error::{Result, WavError};
use format::FormatInfo;

/// A decoded WAV file providing access to the raw PCM samples.
///
/// Created by parsing a WAV byte stream with [`WavAudio::from_bytes`]. After
/// modifying samples (e.g. for steganographic embedding), call
/// [`WavAudio::to_bytes`] to re-encode. The output has the same sample
/// count, bit depth, sample rate, and channel layout as the input; all
/// non-`data` chunks are written back verbatim in their original order.
#[derive(Clone)]
pub struct WavAudio {
    /// Parsed `fmt ` chunk metadata.
    format: FormatInfo,
    /// Flat interleaved 16-bit samples from the `data` chunk.
    samples: Vec<i16>,
    /// All chunks in original order (for container preservation).
    chunks: Vec<RiffChunk>,
    /// Index of the `data` chunk within `chunks`.
    data_index: usize,
}

impl WavAudio {
    /// Parse a WAV file from bytes.
    ///
    /// # Errors
    /// - [`WavError::InvalidRiff`] / [`WavError::UnexpectedEof`] for malformed containers.
    /// - [`WavError::UnsupportedCodec`] / [`WavError::UnsupportedBitDepth`] for non-PCM-16 audio.
    /// - [`WavError::MissingFmtChunk`] / [`WavError::MissingDataChunk`] for incomplete files.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let chunks = iterate_chunks(data)?;

        let mut format: Option<FormatInfo> = None;
        let mut data_index: Option<usize> = None;

        for (i, c) in chunks.iter().enumerate() {
            if c.id == FMT_ID && format.is_none() {
                format = Some(FormatInfo::parse(&c.data)?);
            } else if c.id == DATA_ID && data_index.is_none() {
                // fmt must precede data so we know how to interpret it.
                if format.is_none() {
                    return Err(WavError::MissingFmtChunk);
                }
                data_index = Some(i);
            }
        }

        let format = format.ok_or(WavError::MissingFmtChunk)?;
        let data_index = data_index.ok_or(WavError::MissingDataChunk)?;

        let raw = &chunks[data_index].data;
        if raw.len() % 2 != 0 {
            return Err(WavError::InvalidChunkData("data chunk size not sample-aligned"));
        }
        let samples: Vec<i16> = raw
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Ok(Self {
            format,
            samples,
            chunks,
            data_index,
        })
    }

    /// Reserialize the container.
    ///
    /// The `data` chunk is rebuilt from the current samples; every other
    /// chunk is written back verbatim. For an unmodified `WavAudio` the
    /// output equals the input byte-for-byte (modulo a missing pad byte at
    /// the very end of a truncated input).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for (i, c) in self.chunks.iter().enumerate() {
            if i == self.data_index {
                let mut pcm = Vec::with_capacity(self.samples.len() * 2);
                for s in &self.samples {
                    pcm.extend_from_slice(&s.to_le_bytes());
                }
                write_chunk(&mut body, &c.id, &pcm);
            } else {
                write_chunk(&mut body, &c.id, &c.data);
            }
        }

        let mut out = Vec::with_capacity(12 + body.len());
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&((4 + body.len()) as u32).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(&body);
        out
    }

    /// Format metadata (channels, sample rate, bit depth).
    pub fn format(&self) -> &FormatInfo {
        &self.format
    }

    /// The flat interleaved sample sequence.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Mutable access to the sample sequence. The length must not change;
    /// the embedding layer only flips bits in place.
    pub fn samples_mut(&mut self) -> &mut [i16] {
        &mut self.samples
    }

    /// Total number of samples across all channels.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}
