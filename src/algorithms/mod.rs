//! FFT Algorithm Implementations
//!
//! ## Available Algorithms
//!
//! - **DIT (Decimation-in-Time)**: processes data from small butterflies to large. Samples are
//!   addressed through the bit-reversal permutation and the output is in natural order.
//!
//! The inverse transform is not provided.

pub mod dit;
