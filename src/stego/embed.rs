// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmur-core

//! LSB embedding over permuted sample positions.
//!
//! One payload bit per selected sample, in the least significant bit only.
//! Embedding changes at most 1 bit per touched sample (a sample whose LSB
//! already matches is left alone) and never touches non-indexed samples, so
//! the stego carrier differs from the original in at most `bits.len()` LSBs
//! and in nothing else.

/// Write `bits[i]` into the LSB of `samples[indices[i]]`.
///
/// Indices must be in range and `bits` and `indices` must have equal length;
/// both are guaranteed by the permutation layer.
pub fn embed_bits(samples: &mut [i16], bits: &[u8], indices: &[u32]) {
    debug_assert_eq!(bits.len(), indices.len());
    for (&bit, &idx) in bits.iter().zip(indices) {
        let s = &mut samples[idx as usize];
        *s = (*s & !1) | (bit & 1) as i16;
    }
}

/// Read back the LSB of `samples[indices[i]]` for each position.
pub fn extract_bits(samples: &[i16], indices: &[u32]) -> Vec<u8> {
    indices
        .iter()
        .map(|&idx| (samples[idx as usize] & 1) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_extract_roundtrip() {
        let mut samples = vec![100i16, -100, 0, 7, -8, i16::MAX, i16::MIN, 1];
        let bits = vec![1, 0, 1, 1, 0, 0, 1, 0];
        let indices: Vec<u32> = (0..8).collect();
        embed_bits(&mut samples, &bits, &indices);
        assert_eq!(extract_bits(&samples, &indices), bits);
    }

    #[test]
    fn only_lsb_changes() {
        let original = vec![12345i16, -12345, 0, -1, i16::MAX, i16::MIN];
        let mut samples = original.clone();
        let indices: Vec<u32> = (0..6).collect();
        embed_bits(&mut samples, &[1, 1, 1, 0, 0, 1], &indices);
        for (a, b) in original.iter().zip(&samples) {
            assert_eq!(a & !1, b & !1, "non-LSB bits changed: {a} -> {b}");
        }
    }

    #[test]
    fn non_indexed_samples_untouched() {
        let mut samples = vec![5i16; 16];
        embed_bits(&mut samples, &[0, 0], &[3, 11]);
        for (i, &s) in samples.iter().enumerate() {
            if i == 3 || i == 11 {
                assert_eq!(s, 4);
            } else {
                assert_eq!(s, 5);
            }
        }
    }

    #[test]
    fn matching_lsb_is_a_noop() {
        let mut samples = vec![4i16, 5];
        embed_bits(&mut samples, &[0, 1], &[0, 1]);
        assert_eq!(samples, vec![4, 5]);
    }

    #[test]
    fn scattered_order_respected() {
        // Bits land at indices in permutation order, not ascending order.
        let mut samples = vec![0i16; 8];
        embed_bits(&mut samples, &[1, 1, 1], &[6, 1, 4]);
        assert_eq!(samples, vec![0, 1, 0, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn negative_samples_keep_sign() {
        let mut samples = vec![-2i16, -1];
        embed_bits(&mut samples, &[1, 0], &[0, 1]);
        assert_eq!(samples, vec![-1, -2]);
        assert_eq!(extract_bits(&samples, &[0, 1]), vec![1, 0]);
    }
}
