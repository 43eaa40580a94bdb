//! The complex sample type and the float precisions the engine runs on
use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// Float precisions supported by the transform.
///
/// On top of [`Float`] this adds the two bit-level operations the engine and the
/// reduced-precision backends need, implemented per precision below.
pub trait FftFloat: Float + FloatConst + Send + Sync + Debug + Display + 'static {
    /// Number of explicitly stored mantissa bits.
    const MANTISSA_BITS: u32;

    /// Converts a loop index into a float.
    fn from_index(n: usize) -> Self;

    /// Zeroes all but the `bits` most significant stored mantissa bits (rounds toward zero).
    ///
    /// The relative error of the result is below `2^-bits`. NaN and infinities pass through.
    fn truncate_mantissa(self, bits: u32) -> Self;
}

macro_rules! impl_fft_float_for {
    ($precision:ty, $bits:ty, $mantissa:expr) => {
        impl FftFloat for $precision {
            const MANTISSA_BITS: u32 = $mantissa;

            #[inline]
            fn from_index(n: usize) -> Self {
                n as $precision
            }

            #[inline]
            fn truncate_mantissa(self, bits: u32) -> Self {
                if bits >= Self::MANTISSA_BITS || !self.is_finite() {
                    return self;
                }
                let mask: $bits = !(((1 as $bits) << (Self::MANTISSA_BITS - bits)) - 1);
                <$precision>::from_bits(self.to_bits() & mask)
            }
        }
    };
}

impl_fft_float_for!(f32, u32, 23);
impl_fft_float_for!(f64, u64, 52);

/// A complex sample, laid out as `[re, im]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample<T> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Sample<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Multiplies both components by `factor`.
    pub fn scale(self, factor: T) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }

    /// Squared magnitude, `re^2 + im^2`.
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }
}

// SAFETY: `Sample<T>` is `repr(C)` with two fields of the same `Pod` type, so it has no padding
// and every bit pattern is valid.
#[cfg(feature = "complex-nums")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Sample<T> {}
#[cfg(feature = "complex-nums")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Sample<T> {}

#[cfg(feature = "complex-nums")]
impl<T> From<num_complex::Complex<T>> for Sample<T> {
    fn from(z: num_complex::Complex<T>) -> Self {
        Self { re: z.re, im: z.im }
    }
}

#[cfg(feature = "complex-nums")]
impl<T> From<Sample<T>> for num_complex::Complex<T> {
    fn from(z: Sample<T>) -> Self {
        num_complex::Complex::new(z.re, z.im)
    }
}
