// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! Payload bit framing.
//!
//! The payload is the bit sequence actually written into sample LSBs:
//!
//! ```text
//! [32 bits] message length in BYTES (big-endian u32)
//! [N*8 bits] UTF-8 message bytes, MSB first per byte
//! ```
//!
//! There is no checksum, MAC, or terminator: the length header alone delimits
//! the message. A wrong key therefore decodes to a garbage length (usually
//! far past the carrier, caught as `TruncatedPayload`) or garbage text.

use crate::stego::error::StegoError;

/// Width of the length header in bits.
pub const LENGTH_BITS: usize = 32;

/// Number of carrier bits the given message requires, header included.
pub fn needed_bits(message: &str) -> usize {
    LENGTH_BITS + message.len() * 8
}

/// Encode a message into its embeddable bit sequence (one bit per `u8`).
pub fn encode_payload(message: &str) -> Vec<u8> {
    let msg = message.as_bytes();
    let mut bytes = Vec::with_capacity(4 + msg.len());
    bytes.extend_from_slice(&(msg.len() as u32).to_be_bytes());
    bytes.extend_from_slice(msg);
    bytes_to_bits(&bytes)
}

/// Read the message byte count from the first [`LENGTH_BITS`] bits.
///
/// # Errors
/// [`StegoError::TruncatedPayload`] if fewer than 32 bits are available.
pub fn parse_length(bits: &[u8]) -> Result<u32, StegoError> {
    if bits.len() < LENGTH_BITS {
        return Err(StegoError::TruncatedPayload);
    }
    let header = bits_to_bytes(&bits[..LENGTH_BITS]);
    Ok(u32::from_be_bytes([header[0], header[1], header[2], header[3]]))
}

/// Decode a bit sequence back into the message text.
///
/// The input may hold more bits than the message needs; exactly
/// `8 * length` bits after the header are consumed.
///
/// # Errors
/// - [`StegoError::TruncatedPayload`] if the header claims more bits than available.
/// - [`StegoError::InvalidEncoding`] if the message bytes are not valid UTF-8.
pub fn decode_payload(bits: &[u8]) -> Result<String, StegoError> {
    let len = parse_length(bits)? as usize;
    let msg_bits = len
        .checked_mul(8)
        .ok_or(StegoError::TruncatedPayload)?;
    let total = LENGTH_BITS
        .checked_add(msg_bits)
        .ok_or(StegoError::TruncatedPayload)?;
    if total > bits.len() {
        return Err(StegoError::TruncatedPayload);
    }
    let msg = bits_to_bytes(&bits[LENGTH_BITS..total]);
    String::from_utf8(msg).map_err(|_| StegoError::InvalidEncoding)
}

/// Convert bytes to a bit vector (MSB first within each byte).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
/// Pads the last byte with zero bits if `bits.len()` is not a multiple of 8.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity((bits.len() + 7) / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}
