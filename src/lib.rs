//! Radix-2 decimation-in-time FFT with precision-degradable arithmetic.
//!
//! Every twiddle factor is obtained through a [`TrigHook`] and every add, subtract and multiply
//! inside a butterfly goes through an [`ArithmeticHook`]. Swapping the exact hooks for
//! approximate ones (see [`hooks`]) shows how cheaper arithmetic affects the transform, and
//! [`quality::QualityReport`] measures by how much.
//!
//! ```
//! use axfft::hooks::{divergence_bound, ExactTrig, LookupTrig};
//! use axfft::quality::QualityReport;
//! use axfft::{Planner, Sample};
//!
//! let planner = Planner::new(8)?;
//! let signal: Vec<Sample<f64>> = (0..8).map(|i| Sample::new(i as f64, 0.0)).collect();
//!
//! let mut exact = vec![Sample::zero(); 8];
//! planner.process(&mut signal.clone(), &mut exact, &ExactTrig)?;
//!
//! let lookup = LookupTrig::<f64>::new(10);
//! let mut approx = vec![Sample::zero(); 8];
//! planner.process(&mut signal.clone(), &mut approx, &lookup)?;
//!
//! let report = QualityReport::compare(&exact, &approx, 1e-3)?;
//! let bound = divergence_bound(planner.table().log_len(), lookup.max_twiddle_error());
//! assert!(report.relative_l2.unwrap() <= bound);
//! # Ok::<(), axfft::FftError>(())
//! ```
//!
//! A longer walk through every backend lives in `demos/approx_quality.rs`, registered in
//! `Cargo.toml` as an example: `cargo run --example approx_quality`.

#[cfg(feature = "complex-nums")]
pub use crate::algorithms::dit::fft_dit_complex;
pub use crate::algorithms::dit::{fft_dit, fft_dit_with_ops, fft_dit_with_table};
pub use crate::error::FftError;
pub use crate::hooks::{ArithmeticHook, ExactArithmetic, ExactTrig, TrigHook};
pub use crate::options::{Options, StageSchedule};
pub use crate::permutation::{build_bit_reversal, PermutationTable};
pub use crate::planner::Planner;
pub use crate::sample::{FftFloat, Sample};

mod algorithms;
mod error;
pub mod hooks;
mod kernels;
pub mod options;
mod parallel;
mod permutation;
pub mod planner;
pub mod quality;
mod sample;
pub mod utils;
