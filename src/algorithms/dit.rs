//! Decimation-in-Time (DIT) FFT Implementation
//!
//! Forward, unnormalized radix-2 transform. The samples are combined from small butterflies
//! to large ones while being read through the bit-reversal permutation, so the result comes out
//! in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. For each stage `s = 0..log2(K)`, combine blocks of `2^(s+1)` samples
//! 2. Each butterfly asks the [`TrigHook`] for its twiddle and does its arithmetic through the
//!    [`ArithmeticHook`]
//! 3. Gather the scratch buffer through the permutation into the output
//!
//! Butterflies within a stage are independent; stages run strictly one after another.
//!
use crate::error::{check_len, FftError};
use crate::hooks::{ArithmeticHook, ExactArithmetic, TrigHook};
use crate::kernels::common::{gather, scatter};
use crate::kernels::dit::{fft_dit_stage_contiguous, fft_dit_stage_permuted};
use crate::options::{Options, StageSchedule};
use crate::permutation::PermutationTable;
use crate::sample::{FftFloat, Sample};

/// DIT FFT with a caller-supplied arithmetic backend and options
///
/// # Arguments
///
/// * `table` - Bit-reversal permutation for the transform size
/// * `input` - Samples in natural order; used as scratch space and left in its final stage state
/// * `output` - Receives the transform in natural order
/// * `trig` - Source of twiddle factors (see [`crate::hooks`] for the argument convention)
/// * `ops` - Scalar arithmetic used inside every butterfly
/// * `opts` - Options controlling how the stages are scheduled
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `input` or `output` does not hold exactly
/// `table.len()` samples. Nothing is modified in that case.
pub fn fft_dit_with_ops<T, H, A>(
    table: &PermutationTable,
    input: &mut [Sample<T>],
    output: &mut [Sample<T>],
    trig: &H,
    ops: &A,
    opts: &Options,
) -> Result<(), FftError>
where
    T: FftFloat,
    H: TrigHook<T> + ?Sized,
    A: ArithmeticHook<T> + ?Sized,
{
    check_len("input", input, table.len())?;
    check_len("output", output, table.len())?;

    let log_n = table.log_len();
    log::trace!(
        "running {log_n} DIT stages over {} points ({:?})",
        table.len(),
        opts.schedule
    );

    match opts.schedule {
        StageSchedule::Permuted => {
            for stage in 0..log_n {
                fft_dit_stage_permuted(input, table, stage, trig, ops);
            }
            gather(table, input, output);
        }
        StageSchedule::Gathered | StageSchedule::MultiThreaded => {
            let parallel = opts.schedule == StageSchedule::MultiThreaded;
            gather(table, input, output);
            for stage in 0..log_n {
                fft_dit_stage_contiguous(output, stage, trig, ops, parallel);
            }
            // leave the scratch buffer exactly as the table-addressed schedule would
            scatter(table, output, input);
        }
    }

    Ok(())
}

/// DIT FFT with a precomputed permutation table, exact arithmetic and default options
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if `input` or `output` does not hold exactly
/// `table.len()` samples.
pub fn fft_dit_with_table<T, H>(
    table: &PermutationTable,
    input: &mut [Sample<T>],
    output: &mut [Sample<T>],
    trig: &H,
) -> Result<(), FftError>
where
    T: FftFloat,
    H: TrigHook<T> + ?Sized,
{
    fft_dit_with_ops(
        table,
        input,
        output,
        trig,
        &ExactArithmetic,
        &Options::default(),
    )
}

/// DIT FFT that builds the permutation table for `input.len()` points on the fly
///
/// Use a [`crate::Planner`] instead when transforming many buffers of the same size.
///
/// # Errors
///
/// Returns [`FftError::SizeTooSmall`] or [`FftError::NonPowerOfTwo`] for an invalid
/// `input.len()`, and [`FftError::LengthMismatch`] if `output.len() != input.len()`.
pub fn fft_dit<T, H>(
    input: &mut [Sample<T>],
    output: &mut [Sample<T>],
    trig: &H,
) -> Result<(), FftError>
where
    T: FftFloat,
    H: TrigHook<T> + ?Sized,
{
    let table = PermutationTable::new(input.len())?;
    fft_dit_with_table(&table, input, output, trig)
}

/// DIT FFT over [`num_complex::Complex`] buffers, without copying
///
/// # Errors
///
/// Same as [`fft_dit`].
#[cfg(feature = "complex-nums")]
pub fn fft_dit_complex<T, H>(
    input: &mut [num_complex::Complex<T>],
    output: &mut [num_complex::Complex<T>],
    trig: &H,
) -> Result<(), FftError>
where
    T: FftFloat + bytemuck::Pod,
    H: TrigHook<T> + ?Sized,
{
    let input: &mut [Sample<T>] = bytemuck::cast_slice_mut(input);
    let output: &mut [Sample<T>] = bytemuck::cast_slice_mut(output);
    fft_dit(input, output, trig)
}
