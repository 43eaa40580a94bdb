//! FFT Kernels
//!
//! Building blocks of the butterfly network: the butterfly itself, per-stage loops and the
//! permutation data movement.

pub mod common;
pub mod dit;
