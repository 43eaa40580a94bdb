pub extern crate rustfft;

use rand::{distributions::Uniform, prelude::*, rngs::StdRng};
use rustfft::num_traits::Float;
use std::f64::consts::TAU;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();
    fill_uniform(&mut rng, reals, imags);
}

/// Same as [`gen_random_signal`], but reproducible: the same `seed` always yields the same signal.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_seeded_signal<T>(reals: &mut [T], imags: &mut [T], seed: u64)
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = StdRng::seed_from_u64(seed);
    fill_uniform(&mut rng, reals, imags);
}

fn fill_uniform<T, R>(rng: &mut R, reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
    R: Rng,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(rng);
        *imag = uniform_dist.sample(rng);
    }
}

/// Direct O(N^2) forward DFT, `X[f] = sum_t x[t] * exp(-2*pi*i*f*t/N)`.
///
/// Slow but obviously correct, to be used as a reference in tests.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn reference_dft(reals: &[f64], imags: &[f64]) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(reals.len(), imags.len());
    let big_n = reals.len();
    let mut out_re = vec![0.0; big_n];
    let mut out_im = vec![0.0; big_n];

    for (f, (acc_re, acc_im)) in out_re.iter_mut().zip(out_im.iter_mut()).enumerate() {
        for (t, (x_re, x_im)) in reals.iter().zip(imags.iter()).enumerate() {
            // reduce f*t modulo N first so the angle stays small
            let turn = ((f * t) % big_n) as f64 / big_n as f64;
            let (sin, cos) = (-TAU * turn).sin_cos();
            *acc_re += x_re * cos - x_im * sin;
            *acc_im += x_re * sin + x_im * cos;
        }
    }

    (out_re, out_im)
}
