// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! Error types for WAV parsing and encoding.

use std::fmt;

/// Errors that can occur during WAV parsing or encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WavError {
    /// Input data is too short or a chunk is truncated.
    UnexpectedEof,
    /// Missing `RIFF`/`WAVE` magic at the start of the data.
    InvalidRiff,
    /// No `fmt ` chunk before the `data` chunk.
    MissingFmtChunk,
    /// No `data` chunk in the file.
    MissingDataChunk,
    /// The `fmt ` chunk declares a codec other than uncompressed PCM.
    UnsupportedCodec(u16),
    /// Bit depths other than 16-bit signed PCM are not supported.
    UnsupportedBitDepth(u16),
    /// A chunk has invalid or inconsistent length/content.
    InvalidChunkData(&'static str),
}

impl fmt::Display for WavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of WAV data"),
            Self::InvalidRiff => write!(f, "missing RIFF/WAVE magic (not a WAV)"),
            Self::MissingFmtChunk => write!(f, "missing fmt chunk"),
            Self::MissingDataChunk => write!(f, "missing data chunk"),
            Self::UnsupportedCodec(c) => write!(f, "unsupported WAV codec: format code {c}"),
            Self::UnsupportedBitDepth(b) => write!(f, "unsupported bit depth: {b}-bit"),
            Self::InvalidChunkData(msg) => write!(f, "invalid chunk data: {msg}"),
        }
    }
}

impl std::error::Error for WavError {}

pub type Result<T> = std::result::Result<T, WavError>;
