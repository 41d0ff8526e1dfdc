// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! Permutation seed derivation from the (PIN, key) pair.
//!
//! The PIN and secret key are concatenated and stretched with Argon2id into
//! a 32-byte ChaCha20 seed. The salt is fixed so that both embed and extract
//! derive the identical seed from the pair alone — the seed IS the
//! decryption key, so it must be reproducible, never random.
//!
//! No authentication material is derived: the scheme cannot tell a wrong
//! pair apart from a non-stego carrier, by design.

use argon2::Argon2;
use zeroize::Zeroizing;

/// Fixed salt for permutation seed derivation.
/// Intentionally fixed so the extractor can reproduce the seed from the
/// (PIN, key) pair alone, with domain separation from any future key use.
const PERM_SALT: &[u8; 16] = b"murmur-perm-v1\0\0";

/// Derive the 32-byte permutation seed from a PIN and secret key.
///
/// Deterministic: identical `(pin, key)` always yields an identical seed.
/// Different pairs yield different seeds except with negligible probability.
pub fn derive_perm_seed(pin: &str, key: &str) -> Zeroizing<[u8; 32]> {
    let mut secret = Zeroizing::new(String::with_capacity(pin.len() + key.len()));
    secret.push_str(pin);
    secret.push_str(key);

    let mut output = Zeroizing::new([0u8; 32]);
    Argon2::default()
        .hash_password_into(secret.as_bytes(), PERM_SALT, &mut *output)
        .expect("Argon2 seed derivation should not fail");
    output
}
