// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! Account credentials and the credential store collaborator.
//!
//! Each registered account owns a (PIN, secret key) pair generated at
//! registration time. The steganography core never sees the store — the UI
//! layer resolves an account to its pair and passes the two strings to
//! [`hide_message`](crate::hide_message) / [`extract_message`](crate::extract_message).
//!
//! The key is secret material and comes from the OS CSPRNG; the PIN is a
//! low-entropy convenience factor and any uniform source is fine. Both are
//! independent of the deterministic permutation PRNG in the stego layer,
//! which must be reproducible, not random.

use std::collections::HashMap;

use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use sha2::{Digest, Sha256};

/// The (PIN, key) pair gating a user's hidden messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// 4-digit decimal string, `"1000"`..=`"9999"`.
    pub pin: String,
    /// 8-character lowercase hex token.
    pub key: String,
}

/// Generate a fresh credential pair for a new account.
pub fn generate_credentials() -> Credentials {
    let pin = rand::thread_rng().gen_range(1000u16..=9999).to_string();

    let mut key_bytes = [0u8; 4];
    OsRng.fill_bytes(&mut key_bytes);

    Credentials {
        pin,
        key: hex::encode(key_bytes),
    }
}

/// Resolves an account identifier to its credential pair.
///
/// The core consumes only the resolved pair; implementations own lookup and
/// lifetime. [`MemoryCredentialStore`] is the in-process implementation; a
/// persistent backend would implement the same trait.
pub trait CredentialStore {
    fn get_credentials(&self, account_id: &str) -> Option<&Credentials>;
}

struct Account {
    password_digest: String,
    credentials: Credentials,
}

/// In-memory account registry keyed by email.
///
/// Explicitly constructed and passed by reference — no module-level
/// connection or global table. Passwords are stored as SHA-256 hex digests.
#[derive(Default)]
pub struct MemoryCredentialStore {
    accounts: HashMap<String, Account>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account, generating its credential pair.
    ///
    /// Returns `false` if the email is already taken.
    pub fn register(&mut self, email: &str, password: &str) -> bool {
        if self.accounts.contains_key(email) {
            return false;
        }
        self.accounts.insert(
            email.to_string(),
            Account {
                password_digest: hash_password(password),
                credentials: generate_credentials(),
            },
        );
        true
    }

    /// Check an email/password pair against the registry.
    pub fn login(&self, email: &str, password: &str) -> bool {
        self.accounts
            .get(email)
            .map(|a| a.password_digest == hash_password(password))
            .unwrap_or(false)
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get_credentials(&self, account_id: &str) -> Option<&Credentials> {
        self.accounts.get(account_id).map(|a| &a.credentials)
    }
}

fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
