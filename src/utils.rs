//! Utility functions to move between split real/imaginary buffers and samples

use num_traits::Float;

use crate::error::{check_len, FftError};
use crate::sample::Sample;

/// Utility function to combine separate slices of real and imaginary components
/// into a single vector of [`Sample`]s.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `reals.len() != imags.len()`.
pub fn samples_from_re_im<T: Float>(reals: &[T], imags: &[T]) -> Result<Vec<Sample<T>>, FftError> {
    check_len("imaginary", imags, reals.len())?;

    Ok(reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Sample::new(*z_re, *z_im))
        .collect())
}

/// Separates samples into `(reals, imags)`.
pub fn split_re_im<T: Copy>(samples: &[Sample<T>]) -> (Vec<T>, Vec<T>) {
    samples.iter().map(|z| (z.re, z.im)).unzip()
}
