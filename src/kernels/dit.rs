//! DIT-specific FFT Kernels
//!
//! One call runs one stage of the butterfly network. Stage `s` combines blocks of
//! `chunk_size = 2^(s+1)` samples; butterfly `k` of a block pairs element `k` with element
//! `k + chunk_size / 2` and uses the twiddle argument `k / chunk_size`.
//!
use crate::hooks::{ArithmeticHook, TrigHook};
use crate::kernels::common::butterfly;
use crate::parallel::for_each_chunk_maybe_in_parallel;
use crate::sample::{FftFloat, Sample};

#[inline]
fn twiddle_arg<T: FftFloat>(k: usize, chunk_size: usize) -> T {
    T::from_index(k) / T::from_index(chunk_size)
}

/// DIT stage over a scratch buffer in natural order, addressed through `indices`.
///
/// Logical element `m` of the stage lives at `scratch[indices[m]]`.
pub fn fft_dit_stage_permuted<T, H, A>(
    scratch: &mut [Sample<T>],
    indices: &[usize],
    stage: usize,
    trig: &H,
    ops: &A,
) where
    T: FftFloat,
    H: TrigHook<T> + ?Sized,
    A: ArithmeticHook<T> + ?Sized,
{
    let dist = 1 << stage;
    let chunk_size = dist << 1;

    for start in (0..scratch.len()).step_by(chunk_size) {
        for k in 0..dist {
            let e_idx = indices[start + k];
            let o_idx = indices[start + dist + k];

            let twiddle = trig.sin_cos(twiddle_arg(k, chunk_size));
            let (even, odd) = butterfly(scratch[e_idx], scratch[o_idx], twiddle, ops);

            scratch[e_idx] = even;
            scratch[o_idx] = odd;
        }
    }
}

/// DIT butterflies for a single block already in bit-reversed order
pub fn fft_dit_chunk_n<T, H, A>(chunk: &mut [Sample<T>], trig: &H, ops: &A)
where
    T: FftFloat,
    H: TrigHook<T> + ?Sized,
    A: ArithmeticHook<T> + ?Sized,
{
    let chunk_size = chunk.len();
    let (evens, odds) = chunk.split_at_mut(chunk_size >> 1);

    evens
        .iter_mut()
        .zip(odds.iter_mut())
        .enumerate()
        .for_each(|(k, (even, odd))| {
            let twiddle = trig.sin_cos(twiddle_arg(k, chunk_size));
            (*even, *odd) = butterfly(*even, *odd, twiddle, ops);
        });
}

/// DIT stage over a buffer that already holds the samples in bit-reversed order.
///
/// The blocks of the stage are independent and are processed on multiple threads if
/// `parallel` is set (and the `parallel` feature is enabled).
pub fn fft_dit_stage_contiguous<T, H, A>(
    buf: &mut [Sample<T>],
    stage: usize,
    trig: &H,
    ops: &A,
    parallel: bool,
) where
    T: FftFloat,
    H: TrigHook<T> + ?Sized,
    A: ArithmeticHook<T> + ?Sized,
{
    let chunk_size = 2 << stage;
    for_each_chunk_maybe_in_parallel(parallel, buf, chunk_size, |chunk| {
        fft_dit_chunk_n(chunk, trig, ops)
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::hooks::{ExactArithmetic, ExactTrig};
    use crate::kernels::common::gather;
    use crate::PermutationTable;

    fn ramp(len: usize) -> Vec<Sample<f64>> {
        (0..len)
            .map(|i| Sample::new(i as f64, (len - i) as f64 * 0.5))
            .collect()
    }

    #[test]
    fn stage_args_follow_block_offsets() {
        let args = Mutex::new(Vec::new());
        let recorder = |arg: f64| {
            args.lock().unwrap().push(arg);
            ExactTrig.sin_cos(arg)
        };
        let table = PermutationTable::new(8).unwrap();
        let mut scratch = ramp(8);

        fft_dit_stage_permuted(&mut scratch, &table, 1, &recorder, &ExactArithmetic);

        assert_eq!(*args.lock().unwrap(), vec![0.0, 0.25, 0.0, 0.25]);
    }

    #[test]
    fn permuted_and_contiguous_stages_agree() {
        let table = PermutationTable::new(16).unwrap();
        let mut scratch = ramp(16);
        let mut contiguous = vec![Sample::zero(); 16];
        gather(&table, &scratch, &mut contiguous);

        for stage in 0..table.log_len() {
            fft_dit_stage_permuted(&mut scratch, &table, stage, &ExactTrig, &ExactArithmetic);
            fft_dit_stage_contiguous(&mut contiguous, stage, &ExactTrig, &ExactArithmetic, false);

            for (m, &idx) in table.iter().enumerate() {
                assert_eq!(scratch[idx], contiguous[m], "stage {stage}, element {m}");
            }
        }
    }

    #[test]
    fn first_stage_is_sum_and_difference() {
        let mut chunk = vec![Sample::new(1.0, 1.0), Sample::new(2.0, -1.0)];
        fft_dit_chunk_n(&mut chunk, &ExactTrig, &ExactArithmetic);
        assert_eq!(chunk, vec![Sample::new(3.0, 0.0), Sample::new(-1.0, 2.0)]);
    }
}
