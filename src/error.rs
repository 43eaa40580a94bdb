//! Input-validation errors reported by the public entry points

use std::fmt;

/// Everything that can go wrong before a transform starts.
///
/// The butterfly network itself cannot fail; all variants describe caller input that
/// violates a size or length precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The transform size is smaller than two points.
    SizeTooSmall(usize),
    /// The transform size is not a power of two.
    NonPowerOfTwo(usize),
    /// A buffer's length does not match the size of the permutation table.
    LengthMismatch {
        buffer: &'static str,
        expected: usize,
        found: usize,
    },
    /// Every compared component pair contained a NaN.
    NoValidData,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeTooSmall(k) => {
                write!(f, "transform size {k} is too small, at least 2 points are required")
            }
            FftError::NonPowerOfTwo(k) => write!(f, "transform size {k} is not a power of two"),
            FftError::LengthMismatch {
                buffer,
                expected,
                found,
            } => write!(
                f,
                "{buffer} buffer holds {found} samples but the transform size is {expected}"
            ),
            FftError::NoValidData => write!(f, "no valid (non-NaN) data to compare"),
        }
    }
}

impl std::error::Error for FftError {}

/// Checks that `buffer` holds exactly `expected` elements.
pub(crate) fn check_len<T>(
    buffer: &'static str,
    data: &[T],
    expected: usize,
) -> Result<(), FftError> {
    if data.len() == expected {
        Ok(())
    } else {
        Err(FftError::LengthMismatch {
            buffer,
            expected,
            found: data.len(),
        })
    }
}
