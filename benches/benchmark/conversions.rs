use crate::common::configure_criterion;
use criterion::{criterion_group, BenchmarkId, Criterion};
use error_or::convert::{collect_errors, error_or_to_result, result_to_error_or, split_errors};
use error_or::{Error, ErrorOr};
use std::hint::black_box;

pub fn bench_result_conversions(c: &mut Criterion) {
    c.bench_function("conversions/result_to_error_or", |b| {
        b.iter(|| black_box(result_to_error_or(black_box(Err::<u32, Error>(Error::default())))))
    });

    c.bench_function("conversions/error_or_to_result", |b| {
        b.iter(|| black_box(error_or_to_result(black_box(ErrorOr::ok(7u32)))))
    });

    c.bench_function("conversions/split_errors", |b| {
        b.iter(|| {
            let failed = ErrorOr::<u32>::from_errors(vec![
                Error::validation("a", "x"),
                Error::validation("b", "y"),
            ]);
            black_box(split_errors(failed).count())
        })
    });
}

pub fn bench_accumulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions/collect");

    for size in [10usize, 100, 1000] {
        let mixed: Vec<ErrorOr<usize>> = (0..size)
            .map(|i| {
                if i % 10 == 0 {
                    ErrorOr::from_error(Error::validation(format!("item_{i}"), "invalid"))
                } else {
                    ErrorOr::ok(i)
                }
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("from_iterator", size), &mixed, |b, mixed| {
            b.iter(|| black_box(mixed.iter().cloned().collect::<ErrorOr<Vec<usize>>>()))
        });

        let errors: Vec<Error> = (0..size / 10)
            .map(|i| Error::validation(format!("item_{i}"), "invalid"))
            .collect();
        group.bench_with_input(BenchmarkId::new("collect_errors", size), &errors, |b, errors| {
            b.iter(|| black_box(collect_errors(errors.iter().cloned())))
        });
    }
    group.finish();
}

criterion_group! {
    name = conversion_benches;
    config = configure_criterion();
    targets =
        bench_result_conversions,
        bench_accumulation,
}
