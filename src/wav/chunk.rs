// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! RIFF chunk parsing and iteration.
//!
//! Walks the chunks of a RIFF/WAVE byte stream, preserving unknown chunks
//! verbatim so the container can be reserialized byte-for-byte. Chunk sizes
//! are little-endian `u32`; odd-sized chunks are followed by a pad byte that
//! is not counted in the size field.

use super::error::{Result, WavError};

/// Chunk identifier for the `fmt ` chunk.
pub const FMT_ID: [u8; 4] = *b"fmt ";
/// Chunk identifier for the `data` chunk.
pub const DATA_ID: [u8; 4] = *b"data";

/// A raw RIFF chunk preserving the original payload bytes.
#[derive(Debug, Clone)]
pub struct RiffChunk {
    /// Four-character chunk identifier (e.g. `fmt `, `data`, `LIST`).
    pub id: [u8; 4],
    /// Chunk payload, NOT including the id, the size field, or the pad byte.
    pub data: Vec<u8>,
}

/// Iterate over the chunks of a RIFF/WAVE stream.
///
/// Verifies the 12-byte `RIFF <size> WAVE` header, then returns every chunk
/// in order. The outer RIFF size field is not trusted (some writers get it
/// wrong); only per-chunk sizes are validated against the actual data.
pub fn iterate_chunks(data: &[u8]) -> Result<Vec<RiffChunk>> {
    if data.len() < 12 {
        return Err(WavError::UnexpectedEof);
    }
    if &data[0..4] != b"RIFF" || &data[8..12] != b"WAVE" {
        return Err(WavError::InvalidRiff);
    }

    let mut chunks = Vec::new();
    let mut pos = 12;

    while pos < data.len() {
        if pos + 8 > data.len() {
            return Err(WavError::UnexpectedEof);
        }
        let id: [u8; 4] = data[pos..pos + 4].try_into().expect("4-byte slice");
        let size = u32::from_le_bytes([
            data[pos + 4],
            data[pos + 5],
            data[pos + 6],
            data[pos + 7],
        ]) as usize;

        let body_start = pos + 8;
        let body_end = body_start.checked_add(size).ok_or(WavError::UnexpectedEof)?;
        if body_end > data.len() {
            return Err(WavError::UnexpectedEof);
        }

        chunks.push(RiffChunk {
            id,
            data: data[body_start..body_end].to_vec(),
        });

        pos = body_end;
        // Word-align: odd-sized chunks carry one pad byte.
        if size % 2 == 1 && pos < data.len() {
            pos += 1;
        }
    }

    Ok(chunks)
}

/// Append a chunk (id, size field, payload, pad byte) to an output buffer.
pub fn write_chunk(out: &mut Vec<u8>, id: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(id);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        out.push(0);
    }
}
