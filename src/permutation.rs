//! Bit-reversal permutation tables
//!
//! The table for `K = 2^N` points maps every natural index to the index obtained by reversing
//! its low `N` bits. It is built by level doubling: level `i` fills every index with exactly
//! `i + 1` significant bits by reusing the entries of level `i - 1` and adding the next reversed
//! bit weight, which is `O(K)` work with no per-index bit loops.
//!
//! ## Example
//!
//! ```
//! use axfft::PermutationTable;
//!
//! let table = PermutationTable::new(8).unwrap();
//! assert_eq!(table.as_slice(), &[0, 4, 2, 6, 1, 5, 3, 7]);
//! ```
use std::ops::Deref;

use crate::error::FftError;

/// Fills `indices` with the bit-reversal permutation of `k` points.
///
/// This is the raw construction for callers that keep their own index storage. It does not
/// validate its inputs: `k` must be a power of two with `k >= 2` and `indices.len()` must be `k`.
/// Use [`PermutationTable::new`] for the checked version.
pub fn build_bit_reversal(k: usize, indices: &mut [usize]) {
    let log_n = k.ilog2() as usize;

    indices[0] = 0;
    indices[1] = 1 << (log_n - 1);
    for i in 1..log_n {
        let weight = 1 << (log_n - i - 1);
        for j in (1 << i)..(1 << (i + 1)) {
            indices[j] = indices[j - (1 << i)] + weight;
        }
    }
}

/// An immutable bit-reversal permutation for one transform size.
///
/// Build it once per size and pass it to as many transforms of that size as needed;
/// it is never mutated by the engine, so it can be shared across threads without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    indices: Vec<usize>,
    log_len: usize,
}

impl PermutationTable {
    /// Builds the table for `k` points.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::SizeTooSmall`] if `k < 2` and [`FftError::NonPowerOfTwo`]
    /// if `k` is not a power of two.
    pub fn new(k: usize) -> Result<Self, FftError> {
        if k < 2 {
            return Err(FftError::SizeTooSmall(k));
        }
        if !k.is_power_of_two() {
            return Err(FftError::NonPowerOfTwo(k));
        }

        let mut indices = vec![0; k];
        build_bit_reversal(k, &mut indices);
        let log_len = k.ilog2() as usize;
        log::debug!("built bit-reversal table for {k} points ({log_len} bits)");

        Ok(Self { indices, log_len })
    }

    /// Number of points `K`.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false`: a table covers at least two points.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// `N = log2(K)`, which is also the number of butterfly stages.
    pub fn log_len(&self) -> usize {
        self.log_len
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn get(&self, i: usize) -> Option<usize> {
        self.indices.get(i).copied()
    }
}

impl Deref for PermutationTable {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_reverse(x: usize, bits: usize) -> usize {
        x.reverse_bits() >> (usize::BITS as usize - bits)
    }

    #[test]
    fn eight_points() {
        let table = PermutationTable::new(8).unwrap();
        assert_eq!(table.as_slice(), &[0, 4, 2, 6, 1, 5, 3, 7]);
        assert_eq!(table.log_len(), 3);
    }

    #[test]
    fn two_points() {
        let table = PermutationTable::new(2).unwrap();
        assert_eq!(table.as_slice(), &[0, 1]);
    }

    #[test]
    fn matches_naive_bit_reversal() {
        for n in 1..=10 {
            let big_n = 1 << n;
            let table = PermutationTable::new(big_n).unwrap();

            let mut seen = vec![false; big_n];
            for (i, &j) in table.iter().enumerate() {
                assert_eq!(j, naive_reverse(i, n), "index {i} of {big_n}");
                assert!(!seen[j], "{j} appears twice in table of {big_n}");
                seen[j] = true;
            }
            assert!(seen.into_iter().all(|s| s));
        }
    }

    #[test]
    fn building_twice_gives_same_table() {
        for n in 1..=12 {
            assert_eq!(
                PermutationTable::new(1 << n).unwrap(),
                PermutationTable::new(1 << n).unwrap()
            );
        }
    }

    #[test]
    fn raw_builder_fills_caller_storage() {
        let mut indices = [usize::MAX; 16];
        build_bit_reversal(16, &mut indices);
        assert_eq!(
            indices.as_slice(),
            PermutationTable::new(16).unwrap().as_slice()
        );
    }

    #[test]
    fn rejects_invalid_sizes() {
        assert_eq!(PermutationTable::new(0), Err(FftError::SizeTooSmall(0)));
        assert_eq!(PermutationTable::new(1), Err(FftError::SizeTooSmall(1)));
        assert_eq!(PermutationTable::new(3), Err(FftError::NonPowerOfTwo(3)));
        assert_eq!(PermutationTable::new(24), Err(FftError::NonPowerOfTwo(24)));
    }

    #[test]
    fn lookup() {
        let table = PermutationTable::new(4).unwrap();
        assert_eq!(table.get(1), Some(2));
        assert_eq!(table.get(4), None);
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
    }
}
