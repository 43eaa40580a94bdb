//! Output quality of an approximate transform compared to the exact one
//!
//! Approximate backends do not fail, they deviate. [`QualityReport`] condenses that deviation
//! into the usual error metrics so backends can be ranked against each other.
use crate::error::{check_len, FftError};
use crate::sample::{FftFloat, Sample};

/// Absolute error above which a component counts as a miss, unless told otherwise.
pub const DEFAULT_MISS_THRESHOLD: f64 = 1e-5;

/// Error metrics over the flattened `(re, im)` components of two sample buffers.
///
/// Component pairs in which either side is NaN are left out of every metric.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    /// Mean absolute error
    pub mae: f64,
    /// Mean squared error
    pub mse: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Mean relative error over the components whose exact value is non-zero
    pub mre: f64,
    pub max_error: f64,
    /// RMSE divided by the range of the exact values, `None` if that range is zero
    pub nrmse: Option<f64>,
    /// Pearson correlation, `None` if either side is constant
    pub correlation: Option<f64>,
    /// Fraction of components whose absolute error exceeds the miss threshold
    pub miss_rate: f64,
    /// `1 - miss_rate`
    pub accuracy: f64,
    /// `‖approx - exact‖ / ‖exact‖`, `None` if the exact output is all zeros
    pub relative_l2: Option<f64>,
    pub valid_points: usize,
    pub total_points: usize,
}

impl QualityReport {
    /// Compares `approx` against `exact`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if the buffers differ in length and
    /// [`FftError::NoValidData`] if every component pair contains a NaN.
    pub fn compare<T: FftFloat>(
        exact: &[Sample<T>],
        approx: &[Sample<T>],
        miss_threshold: f64,
    ) -> Result<Self, FftError> {
        check_len("approximate", approx, exact.len())?;

        let to_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);
        let pairs: Vec<(f64, f64)> = exact
            .iter()
            .zip(approx.iter())
            .flat_map(|(e, a)| [(e.re, a.re), (e.im, a.im)])
            .map(|(e, a)| (to_f64(e), to_f64(a)))
            .filter(|(e, a)| !e.is_nan() && !a.is_nan())
            .collect();

        let total_points = exact.len() * 2;
        let valid_points = pairs.len();
        if valid_points == 0 {
            log::warn!("no valid data among {total_points} components");
            return Err(FftError::NoValidData);
        }
        let count = valid_points as f64;

        let mut abs_sum = 0.0;
        let mut sq_sum = 0.0;
        let mut max_error: f64 = 0.0;
        let mut misses = 0usize;
        let mut rel_sum = 0.0;
        let mut rel_count = 0usize;
        let mut exact_sq_sum = 0.0;
        let mut exact_min = f64::INFINITY;
        let mut exact_max = f64::NEG_INFINITY;

        for &(e, a) in &pairs {
            let err = (e - a).abs();
            abs_sum += err;
            sq_sum += err * err;
            max_error = max_error.max(err);
            if err > miss_threshold {
                misses += 1;
            }
            if e != 0.0 {
                rel_sum += err / e.abs();
                rel_count += 1;
            }
            exact_sq_sum += e * e;
            exact_min = exact_min.min(e);
            exact_max = exact_max.max(e);
        }

        let mse = sq_sum / count;
        let rmse = mse.sqrt();
        let range = exact_max - exact_min;
        let miss_rate = misses as f64 / count;

        let report = Self {
            mae: abs_sum / count,
            mse,
            rmse,
            mre: if rel_count > 0 {
                rel_sum / rel_count as f64
            } else {
                0.0
            },
            max_error,
            nrmse: (range > 0.0).then(|| rmse / range),
            correlation: pearson(&pairs),
            miss_rate,
            accuracy: 1.0 - miss_rate,
            relative_l2: (exact_sq_sum > 0.0).then(|| sq_sum.sqrt() / exact_sq_sum.sqrt()),
            valid_points,
            total_points,
        };
        log::debug!(
            "quality over {valid_points}/{total_points} components: rmse {:.3e}, max error {:.3e}, accuracy {:.4}",
            report.rmse,
            report.max_error,
            report.accuracy
        );

        Ok(report)
    }
}

fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    let count = pairs.len() as f64;
    let (sum_e, sum_a) = pairs
        .iter()
        .fold((0.0, 0.0), |(se, sa), (e, a)| (se + e, sa + a));
    let (mean_e, mean_a) = (sum_e / count, sum_a / count);

    let (cov, var_e, var_a) = pairs.iter().fold((0.0, 0.0, 0.0), |(c, ve, va), (e, a)| {
        let (de, da) = (e - mean_e, a - mean_a);
        (c + de * da, ve + de * de, va + da * da)
    });

    if var_e == 0.0 || var_a == 0.0 {
        return None;
    }
    let r = cov / (var_e.sqrt() * var_a.sqrt());
    (!r.is_nan()).then_some(r)
}
