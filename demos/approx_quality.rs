//! Transforms one random signal with every approximate backend and prints how far each one
//! lands from the exact result.
//!
//! Run with `RUST_LOG=debug` to see the planner and quality logs.
use axfft::hooks::{
    divergence_bound, CountingArithmetic, CountingTrig, ExactArithmetic, ExactTrig, LookupTrig,
    TruncatedArithmetic, TruncatedTrig,
};
use axfft::quality::{QualityReport, DEFAULT_MISS_THRESHOLD};
use axfft::utils::samples_from_re_im;
use axfft::{ArithmeticHook, FftError, Planner, Sample, TrigHook};
use utilities::gen_seeded_signal;

const LOG_N: usize = 10;

fn run<H, A>(
    planner: &Planner,
    signal: &[Sample<f64>],
    trig: &H,
    ops: &A,
) -> Result<Vec<Sample<f64>>, FftError>
where
    H: TrigHook<f64>,
    A: ArithmeticHook<f64>,
{
    let mut input = signal.to_vec();
    let mut output = vec![Sample::zero(); signal.len()];
    planner.process_with_ops(&mut input, &mut output, trig, ops)?;
    Ok(output)
}

fn report(
    name: &str,
    exact: &[Sample<f64>],
    approx: &[Sample<f64>],
    bound: Option<f64>,
) -> Result<(), FftError> {
    let q = QualityReport::compare(exact, approx, DEFAULT_MISS_THRESHOLD)?;
    let bound = bound.map_or_else(|| "-".to_string(), |b| format!("{b:.3e}"));
    println!(
        "{name:<28} rel-l2 {:>10.3e}  bound {bound:>10}  max {:>10.3e}  accuracy {:>6.4}",
        q.relative_l2.unwrap_or(0.0),
        q.max_error,
        q.accuracy
    );
    Ok(())
}

fn main() -> Result<(), FftError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let big_n = 1 << LOG_N;
    let mut reals = vec![0.0; big_n];
    let mut imags = vec![0.0; big_n];
    gen_seeded_signal(&mut reals, &mut imags, 2024);
    let signal = samples_from_re_im(&reals, &imags)?;

    let planner = Planner::new(big_n)?;

    let counting_trig = CountingTrig::new(ExactTrig);
    let counting_ops = CountingArithmetic::new(ExactArithmetic);
    let exact = run(&planner, &signal, &counting_trig, &counting_ops)?;
    let counts = counting_ops.counts();
    println!(
        "{big_n} points: {} twiddles, {} adds, {} subs, {} muls",
        counting_trig.calls(),
        counts.adds,
        counts.subs,
        counts.muls
    );
    let exact_trig = counting_trig.into_inner();

    for entries in [100, 1000, 10_000] {
        let hook = LookupTrig::<f64>::new(entries);
        let approx = run(&planner, &signal, &hook, &ExactArithmetic)?;
        let bound = divergence_bound(LOG_N, hook.max_twiddle_error());
        let name = format!("lookup trig ({entries})");
        report(&name, &exact, &approx, Some(bound))?;
    }

    for bits in [6, 10, 16] {
        let hook = TruncatedTrig::new(bits);
        let approx = run(&planner, &signal, &hook, &ExactArithmetic)?;
        let bound = divergence_bound(LOG_N, hook.max_twiddle_error());
        let name = format!("truncated trig ({bits} bits)");
        report(&name, &exact, &approx, Some(bound))?;
    }

    for bits in [8, 12, 20] {
        let ops = TruncatedArithmetic::new(bits);
        let approx = run(&planner, &signal, &exact_trig, &ops)?;
        let name = format!("truncated arith ({bits} bits)");
        report(&name, &exact, &approx, None)?;
    }

    Ok(())
}
