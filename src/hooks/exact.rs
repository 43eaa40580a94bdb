use crate::hooks::{ArithmeticHook, TrigHook};
use crate::sample::FftFloat;

/// Exact twiddle factors: `(-2π * arg).sin_cos()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactTrig;

impl<T: FftFloat> TrigHook<T> for ExactTrig {
    #[inline]
    fn sin_cos(&self, arg: T) -> (T, T) {
        (-T::TAU() * arg).sin_cos()
    }
}

/// Plain `+`, `-` and `*`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactArithmetic;

impl<T: FftFloat> ArithmeticHook<T> for ExactArithmetic {
    #[inline]
    fn add(&self, a: T, b: T) -> T {
        a + b
    }

    #[inline]
    fn sub(&self, a: T, b: T) -> T {
        a - b
    }

    #[inline]
    fn mul(&self, a: T, b: T) -> T {
        a * b
    }
}
