use axfft::hooks::{ExactArithmetic, ExactTrig, LookupTrig, TruncatedArithmetic, TruncatedTrig};
use axfft::utils::samples_from_re_im;
use axfft::{Options, PermutationTable, Planner, Sample, StageSchedule};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use utilities::gen_random_signal;

const LENGTHS: &[usize] = &[6, 8, 10, 12, 14, 16, 18, 20];

fn generate_samples(n: usize) -> Vec<Sample<f64>> {
    let mut reals = vec![0.0; n];
    let mut imags = vec![0.0; n];
    gen_random_signal(&mut reals, &mut imags);
    samples_from_re_im(&reals, &imags).unwrap()
}

fn benchmark_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Permutation table");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::new("build", len), |b| {
            b.iter(|| PermutationTable::new(len).unwrap());
        });
    }
    group.finish();
}

fn benchmark_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward f64 backends");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));
        let planner = Planner::new(len).unwrap();
        let lookup = LookupTrig::<f64>::new(4096);
        let truncated_trig = TruncatedTrig::new(12);
        let truncated_ops = TruncatedArithmetic::new(12);

        group.bench_function(BenchmarkId::new("exact", len), |b| {
            b.iter_batched(
                || (generate_samples(len), vec![Sample::zero(); len]),
                |(mut input, mut output)| {
                    planner
                        .process(&mut input, &mut output, &ExactTrig)
                        .unwrap();
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("lookup trig", len), |b| {
            b.iter_batched(
                || (generate_samples(len), vec![Sample::zero(); len]),
                |(mut input, mut output)| {
                    planner.process(&mut input, &mut output, &lookup).unwrap();
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("truncated trig + arithmetic", len), |b| {
            b.iter_batched(
                || (generate_samples(len), vec![Sample::zero(); len]),
                |(mut input, mut output)| {
                    planner
                        .process_with_ops(&mut input, &mut output, &truncated_trig, &truncated_ops)
                        .unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_schedules(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward f64 schedules");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        for schedule in [
            StageSchedule::Permuted,
            StageSchedule::Gathered,
            StageSchedule::MultiThreaded,
        ] {
            let planner =
                Planner::with_options(len, Options::default().with_schedule(schedule)).unwrap();
            group.bench_function(BenchmarkId::new(format!("{schedule:?}"), len), |b| {
                b.iter_batched(
                    || (generate_samples(len), vec![Sample::zero(); len]),
                    |(mut input, mut output)| {
                        planner
                            .process_with_ops(&mut input, &mut output, &ExactTrig, &ExactArithmetic)
                            .unwrap();
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_permutation,
    benchmark_backends,
    benchmark_schedules
);
criterion_main!(benches);
