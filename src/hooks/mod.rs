//! Precision-degradable operation hooks
//!
//! Every numeric operation of the butterfly network goes through one of two traits, so a caller
//! can swap the exact implementation for a cheaper, less accurate one and measure the effect on
//! the transform's output.
//!
//! ## Twiddle argument convention
//!
//! The engine passes [`TrigHook::sin_cos`] the fraction of a turn `k / N_stage`, a value in
//! `[0, 0.5)`. The hook evaluates sine and cosine at the angle `-2π * arg`; the minus sign
//! selects the forward transform. The engine performs no scaling of its own.
//!
//! ## Backends
//!
//! - [`ExactTrig`] and [`ExactArithmetic`]: the reference behaviour
//! - [`LookupTrig`]: nearest-entry table lookup, a stand-in for a learned estimator
//! - [`TruncatedTrig`] and [`TruncatedArithmetic`]: results truncated to a reduced mantissa,
//!   a stand-in for reduced-precision instructions
//! - [`CountingTrig`] and [`CountingArithmetic`]: wrap any backend and count its invocations
//!
//! Any `Fn(T) -> (T, T) + Sync` closure can be used as a [`TrigHook`].

mod approx;
mod counting;
mod exact;

pub use approx::{LookupTrig, TruncatedArithmetic, TruncatedTrig};
pub use counting::{CountingArithmetic, CountingTrig, OpCounts};
pub use exact::{ExactArithmetic, ExactTrig};

/// Source of twiddle factors.
pub trait TrigHook<T>: Sync {
    /// Returns `(sin(-2π * arg), cos(-2π * arg))`, or an approximation of it.
    fn sin_cos(&self, arg: T) -> (T, T);
}

impl<T, F> TrigHook<T> for F
where
    F: Fn(T) -> (T, T) + Sync,
{
    #[inline]
    fn sin_cos(&self, arg: T) -> (T, T) {
        self(arg)
    }
}

/// Scalar arithmetic used inside every butterfly.
///
/// Each method is a drop-in replacement for the precise operator: two operands in, one result
/// out.
pub trait ArithmeticHook<T>: Sync {
    fn add(&self, a: T, b: T) -> T;
    fn sub(&self, a: T, b: T) -> T;
    fn mul(&self, a: T, b: T) -> T;
}

/// Upper bound on the relative L2 deviation `‖approx - exact‖ / ‖exact‖` of a transform with
/// `log_len` stages when every twiddle factor deviates from the exact one by at most
/// `twiddle_error` in magnitude and the arithmetic is exact.
///
/// Each stage scales the signal norm by exactly `√2`, and a twiddle error of `ε` perturbs that
/// stage by at most `√2 * ε`, so the relative error after `N` stages is at most `(1 + ε)^N - 1`.
pub fn divergence_bound(log_len: usize, twiddle_error: f64) -> f64 {
    (1.0 + twiddle_error).powi(log_len as i32) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_hooks() {
        let flat = |_arg: f64| (0.0, 1.0);
        assert_eq!(TrigHook::sin_cos(&flat, 0.3), (0.0, 1.0));
    }

    #[test]
    fn bound_grows_with_stages() {
        assert_eq!(divergence_bound(0, 0.1), 0.0);
        assert!((divergence_bound(1, 0.1) - 0.1).abs() < 1e-15);
        assert!(divergence_bound(10, 1e-3) > divergence_bound(5, 1e-3));
    }
}
