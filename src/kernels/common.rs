//! Common FFT Kernels
//!
//! The butterfly shared by every stage schedule, and the data movement between natural and
//! bit-reversed order.
//!
use crate::hooks::ArithmeticHook;
use crate::sample::Sample;

/// Radix-2 DIT butterfly.
///
/// Rotates `odd` by the twiddle `cos + i*sin`, then returns `(even + t, even - t)`.
/// All six scalar additions/subtractions and four multiplications go through `ops`.
#[inline]
pub fn butterfly<T, A>(
    even: Sample<T>,
    odd: Sample<T>,
    (sin, cos): (T, T),
    ops: &A,
) -> (Sample<T>, Sample<T>)
where
    T: Copy,
    A: ArithmeticHook<T> + ?Sized,
{
    let real_term = ops.sub(ops.mul(odd.re, cos), ops.mul(odd.im, sin));
    let imag_term = ops.add(ops.mul(odd.im, cos), ops.mul(odd.re, sin));

    (
        Sample {
            re: ops.add(even.re, real_term),
            im: ops.add(even.im, imag_term),
        },
        Sample {
            re: ops.sub(even.re, real_term),
            im: ops.sub(even.im, imag_term),
        },
    )
}

/// `dst[p] = src[indices[p]]` for every `p`
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn gather<T: Copy>(indices: &[usize], src: &[Sample<T>], dst: &mut [Sample<T>]) {
    dst.iter_mut()
        .zip(indices.iter())
        .for_each(|(d, &i)| *d = src[i]);
}

/// `dst[indices[p]] = src[p]` for every `p`, the inverse of [`gather`]
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn scatter<T: Copy>(indices: &[usize], src: &[Sample<T>], dst: &mut [Sample<T>]) {
    src.iter()
        .zip(indices.iter())
        .for_each(|(s, &i)| dst[i] = *s);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{CountingArithmetic, ExactArithmetic};

    #[test]
    fn butterfly_with_unit_twiddle() {
        let (e, o) = butterfly(
            Sample::new(1.0, 2.0),
            Sample::new(3.0, 5.0),
            (0.0, 1.0),
            &ExactArithmetic,
        );
        assert_eq!(e, Sample::new(4.0, 7.0));
        assert_eq!(o, Sample::new(-2.0, -3.0));
    }

    #[test]
    fn butterfly_rotates_odd_operand() {
        // twiddle -i: (3 + 5i) * -i = 5 - 3i
        let (e, o) = butterfly(
            Sample::new(1.0, 2.0),
            Sample::new(3.0, 5.0),
            (-1.0, 0.0),
            &ExactArithmetic,
        );
        assert_eq!(e, Sample::new(6.0, -1.0));
        assert_eq!(o, Sample::new(-4.0, 5.0));
    }

    #[test]
    fn butterfly_operation_mix() {
        let ops = CountingArithmetic::new(ExactArithmetic);
        butterfly(
            Sample::new(1.0f32, 0.0),
            Sample::new(0.0, 1.0),
            (0.5, 0.5),
            &ops,
        );
        let counts = ops.counts();
        assert_eq!((counts.adds, counts.subs, counts.muls), (3, 3, 4));
    }

    #[test]
    fn gather_then_scatter_restores() {
        let indices = [0, 2, 1, 3];
        let src: Vec<_> = (0..4).map(|i| Sample::new(i as f64, 0.0)).collect();
        let mut gathered = vec![Sample::zero(); 4];
        gather(&indices, &src, &mut gathered);
        assert_eq!(gathered[1], Sample::new(2.0, 0.0));

        let mut restored = vec![Sample::zero(); 4];
        scatter(&indices, &gathered, &mut restored);
        assert_eq!(restored, src);
    }
}
