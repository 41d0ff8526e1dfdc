// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! Container fidelity tests for the WAV codec.
//!
//! Embedding must hand back a container indistinguishable from the input
//! apart from sample LSBs, so the codec has to preserve chunk order, unknown
//! chunks, and format fields byte-for-byte.

use murmur_core::{WavAudio, WavError};

fn fmt_chunk(channels: u16, rate: u32, bits: u16) -> Vec<u8> {
    let block_align = channels * bits / 8;
    let mut fmt = Vec::new();
    fmt.extend_from_slice(&1u16.to_le_bytes());
    fmt.extend_from_slice(&channels.to_le_bytes());
    fmt.extend_from_slice(&rate.to_le_bytes());
    fmt.extend_from_slice(&(rate * block_align as u32).to_le_bytes());
    fmt.extend_from_slice(&block_align.to_le_bytes());
    fmt.extend_from_slice(&bits.to_le_bytes());
    fmt
}

fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(id);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        out.push(0);
    }
    out
}

fn riff(body: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&((4 + body.len()) as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(body);
    out
}

fn pcm_bytes(samples: &[i16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for s in samples {
        out.extend_from_slice(&s.to_le_bytes());
    }
    out
}

#[test]
fn canonical_file_roundtrips() {
    let mut body = chunk(b"fmt ", &fmt_chunk(2, 48_000, 16));
    body.extend_from_slice(&chunk(b"data", &pcm_bytes(&[1, -1, 32_000, -32_000])));
    let wav = riff(&body);

    let audio = WavAudio::from_bytes(&wav).unwrap();
    assert_eq!(audio.samples(), &[1, -1, 32_000, -32_000]);
    assert_eq!(audio.format().channels, 2);
    assert_eq!(audio.format().sample_rate, 48_000);
    assert_eq!(audio.to_bytes(), wav);
}

#[test]
fn unknown_chunks_survive_in_order() {
    // LIST before fmt, cue between fmt and data, bext after data.
    let mut body = chunk(b"LIST", b"INFOICMT\x06\x00\x00\x00hello\x00");
    body.extend_from_slice(&chunk(b"fmt ", &fmt_chunk(1, 8000, 16)));
    body.extend_from_slice(&chunk(b"cue ", &[0, 0, 0, 0]));
    body.extend_from_slice(&chunk(b"data", &pcm_bytes(&[5, 6, 7])));
    body.extend_from_slice(&chunk(b"bext", &[0xAB; 11])); // odd size -> pad byte
    let wav = riff(&body);

    let audio = WavAudio::from_bytes(&wav).unwrap();
    assert_eq!(audio.samples(), &[5, 6, 7]);
    assert_eq!(audio.to_bytes(), wav);
}

#[test]
fn extended_fmt_preserved_raw() {
    // 18-byte fmt chunk (cbSize = 0). The extra bytes must survive to_bytes.
    let mut fmt = fmt_chunk(1, 22_050, 16);
    fmt.extend_from_slice(&0u16.to_le_bytes());
    let mut body = chunk(b"fmt ", &fmt);
    body.extend_from_slice(&chunk(b"data", &pcm_bytes(&[9, 10])));
    let wav = riff(&body);

    let audio = WavAudio::from_bytes(&wav).unwrap();
    assert_eq!(audio.to_bytes(), wav);
}

#[test]
fn modified_samples_reserialize_cleanly() {
    let mut body = chunk(b"fmt ", &fmt_chunk(1, 8000, 16));
    body.extend_from_slice(&chunk(b"data", &pcm_bytes(&[100, 101, 102])));
    let wav = riff(&body);

    let mut audio = WavAudio::from_bytes(&wav).unwrap();
    for s in audio.samples_mut() {
        *s |= 1;
    }
    let out = audio.to_bytes();
    assert_eq!(out.len(), wav.len());

    let reparsed = WavAudio::from_bytes(&out).unwrap();
    assert_eq!(reparsed.samples(), &[101, 101, 103]);
    // Everything outside the data payload is untouched.
    assert_eq!(&out[..out.len() - 6], &wav[..wav.len() - 6]);
}

#[test]
fn float_wav_rejected() {
    let mut fmt = fmt_chunk(1, 44_100, 16);
    fmt[0..2].copy_from_slice(&3u16.to_le_bytes()); // IEEE float
    let mut body = chunk(b"fmt ", &fmt);
    body.extend_from_slice(&chunk(b"data", &[0; 8]));
    assert!(matches!(
        WavAudio::from_bytes(&riff(&body)),
        Err(WavError::UnsupportedCodec(3))
    ));
}

#[test]
fn eight_bit_wav_rejected() {
    let mut body = chunk(b"fmt ", &fmt_chunk(1, 8000, 8));
    body.extend_from_slice(&chunk(b"data", &[128; 8]));
    assert!(matches!(
        WavAudio::from_bytes(&riff(&body)),
        Err(WavError::UnsupportedBitDepth(8))
    ));
}

#[test]
fn truncated_data_rejected() {
    let mut body = chunk(b"fmt ", &fmt_chunk(1, 8000, 16));
    body.extend_from_slice(b"data");
    body.extend_from_slice(&100u32.to_le_bytes()); // claims 100 bytes
    body.extend_from_slice(&[0; 10]); // delivers 10
    assert!(matches!(
        WavAudio::from_bytes(&riff(&body)),
        Err(WavError::UnexpectedEof)
    ));
}
