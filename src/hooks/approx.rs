//! Reduced-accuracy backends
use crate::hooks::{ArithmeticHook, ExactTrig, TrigHook};
use crate::sample::FftFloat;

/// Twiddle factors read from a table of `entries` equally spaced points of one turn.
///
/// The argument is rounded to the nearest table point, so the angle is off by at most
/// `π / entries` radians and each twiddle by at most [`LookupTrig::max_twiddle_error`].
#[derive(Debug, Clone)]
pub struct LookupTrig<T> {
    table: Vec<(T, T)>,
}

impl<T: FftFloat> LookupTrig<T> {
    /// Builds a table with `entries` points; zero is treated as one.
    pub fn new(entries: usize) -> Self {
        let entries = entries.max(1);
        let step = T::from_index(entries);
        let table = (0..entries)
            .map(|i| ExactTrig.sin_cos(T::from_index(i) / step))
            .collect();
        Self { table }
    }

    pub fn entries(&self) -> usize {
        self.table.len()
    }

    /// Largest distance between a looked-up twiddle and the exact one, `π / entries`.
    pub fn max_twiddle_error(&self) -> f64 {
        std::f64::consts::PI / self.table.len() as f64
    }
}

impl<T: FftFloat> TrigHook<T> for LookupTrig<T> {
    #[inline]
    fn sin_cos(&self, arg: T) -> (T, T) {
        let entries = self.table.len();
        let turn = arg - arg.floor();
        let pos = (turn * T::from_index(entries)).round();
        let idx = pos.to_usize().unwrap_or(0) % entries;
        self.table[idx]
    }
}

/// Exact twiddle factors with both components truncated to `mantissa_bits` bits.
#[derive(Debug, Clone, Copy)]
pub struct TruncatedTrig {
    pub mantissa_bits: u32,
}

impl TruncatedTrig {
    pub fn new(mantissa_bits: u32) -> Self {
        Self { mantissa_bits }
    }

    /// Largest distance between a truncated twiddle and the exact one, `2^-mantissa_bits`.
    pub fn max_twiddle_error(&self) -> f64 {
        2.0f64.powi(-(self.mantissa_bits as i32))
    }
}

impl<T: FftFloat> TrigHook<T> for TruncatedTrig {
    #[inline]
    fn sin_cos(&self, arg: T) -> (T, T) {
        let (sin, cos) = ExactTrig.sin_cos(arg);
        (
            sin.truncate_mantissa(self.mantissa_bits),
            cos.truncate_mantissa(self.mantissa_bits),
        )
    }
}

/// Add, subtract and multiply with every result truncated to `mantissa_bits` bits,
/// the software counterpart of approximate floating-point instructions.
///
/// Each result has a relative error below `2^-mantissa_bits` against the exact operation on
/// the same inputs. There is no closed-form bound over a whole transform, unlike
/// [`divergence_bound`](super::divergence_bound) for twiddle errors: a butterfly subtracts
/// values of similar magnitude, the difference keeps the absolute error its inputs already
/// carry, and so its relative error can grow by far more than a fixed factor per stage.
#[derive(Debug, Clone, Copy)]
pub struct TruncatedArithmetic {
    pub mantissa_bits: u32,
}

impl TruncatedArithmetic {
    pub fn new(mantissa_bits: u32) -> Self {
        Self { mantissa_bits }
    }

    /// Largest relative error of a single operation, `2^-mantissa_bits`.
    pub fn max_relative_error(&self) -> f64 {
        2.0f64.powi(-(self.mantissa_bits as i32))
    }
}

impl<T: FftFloat> ArithmeticHook<T> for TruncatedArithmetic {
    #[inline]
    fn add(&self, a: T, b: T) -> T {
        (a + b).truncate_mantissa(self.mantissa_bits)
    }

    #[inline]
    fn sub(&self, a: T, b: T) -> T {
        (a - b).truncate_mantissa(self.mantissa_bits)
    }

    #[inline]
    fn mul(&self, a: T, b: T) -> T {
        (a * b).truncate_mantissa(self.mantissa_bits)
    }
}
