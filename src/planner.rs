//! The planner module provides a convenient interface for planning and executing
//! many transforms of the same size. The planner builds the bit-reversal permutation
//! once and reuses it for every buffer it processes.
use crate::algorithms::dit::fft_dit_with_ops;
use crate::error::FftError;
use crate::hooks::{ArithmeticHook, ExactArithmetic, TrigHook};
use crate::options::Options;
use crate::permutation::PermutationTable;
use crate::sample::{FftFloat, Sample};

/// Reusable plan for transforms of one size.
///
/// The planner only holds immutable data, so a single instance can serve concurrent
/// transforms from several threads.
#[derive(Debug, Clone)]
pub struct Planner {
    table: PermutationTable,
    options: Options,
}

impl Planner {
    /// Create a `Planner` for an FFT of size `num_points`, with options guessed from the size.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::SizeTooSmall`] or [`FftError::NonPowerOfTwo`] for an invalid size.
    pub fn new(num_points: usize) -> Result<Self, FftError> {
        Self::with_options(num_points, Options::guess_options(num_points))
    }

    /// Create a `Planner` for an FFT of size `num_points` with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::SizeTooSmall`] or [`FftError::NonPowerOfTwo`] for an invalid size.
    pub fn with_options(num_points: usize, options: Options) -> Result<Self, FftError> {
        let table = PermutationTable::new(num_points)?;
        log::debug!(
            "planned {num_points}-point transform with {:?} schedule",
            options.schedule
        );
        Ok(Self { table, options })
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of points per transform.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always `false`: a plan covers at least two points.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Transforms `input` into `output` using exact arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if either buffer does not hold [`Self::len`] samples.
    pub fn process<T, H>(
        &self,
        input: &mut [Sample<T>],
        output: &mut [Sample<T>],
        trig: &H,
    ) -> Result<(), FftError>
    where
        T: FftFloat,
        H: TrigHook<T> + ?Sized,
    {
        self.process_with_ops(input, output, trig, &ExactArithmetic)
    }

    /// Transforms `input` into `output` routing every butterfly operation through `ops`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if either buffer does not hold [`Self::len`] samples.
    pub fn process_with_ops<T, H, A>(
        &self,
        input: &mut [Sample<T>],
        output: &mut [Sample<T>],
        trig: &H,
        ops: &A,
    ) -> Result<(), FftError>
    where
        T: FftFloat,
        H: TrigHook<T> + ?Sized,
        A: ArithmeticHook<T> + ?Sized,
    {
        fft_dit_with_ops(&self.table, input, output, trig, ops, &self.options)
    }
}
