// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! # murmur-core
//!
//! Pure-Rust audio steganography engine for hiding text messages inside WAV
//! files. A message is scattered over the least significant bits of the PCM
//! samples in a pseudo-random order keyed by the user's PIN and secret key,
//! so only someone holding the same pair can gather the bits back.
//!
//! The WAV sample codec (`wav` module) is zero-dependency (std only). The
//! steganography layer (`stego` module) uses Argon2id to turn the PIN + key
//! pair into a ChaCha20 permutation seed. The `account` module implements
//! the credential collaborator: per-account PIN / key generation and an
//! in-memory store the UI layer consults before calling the core.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use murmur_core::{hide_message, extract_message};
//!
//! let carrier = std::fs::read("voice.wav").unwrap();
//! let stego = hide_message(&carrier, "meet at noon", "1234", "deadbeef").unwrap();
//! let decoded = extract_message(&stego, "1234", "deadbeef").unwrap();
//! assert_eq!(decoded, "meet at noon");
//! ```

pub mod account;
pub mod stego;
pub mod wav;

pub use account::{generate_credentials, CredentialStore, Credentials, MemoryCredentialStore};
pub use stego::{estimate_capacity, extract_message, hide_message, StegoError, MAX_SAMPLES};
pub use wav::error::{Result as WavResult, WavError};
pub use wav::format::FormatInfo;
pub use wav::WavAudio;
