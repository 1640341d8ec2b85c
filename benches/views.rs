use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ezy::{feature, Iterable, StrongType};

type Numbers = StrongType<Vec<u64>, (), feature::Iterable>;

fn view_chain(c: &mut Criterion) {
    let values: Vec<u64> = (0..10_000).collect();

    c.bench_function("filter_map_take", |b| {
        b.iter(|| {
            let view = ezy::take(ezy::map(ezy::filter(&values, |x| **x % 3 == 0), |x| x * 2), 1_000);
            ezy::accumulate(view, 0u64, |sum, x| sum + x)
        })
    });

    c.bench_function("std_filter_map_take", |b| {
        b.iter(|| {
            values
                .iter()
                .filter(|x| **x % 3 == 0)
                .map(|x| x * 2)
                .take(1_000)
                .sum::<u64>()
        })
    });

    c.bench_function("chunk_flatten", |b| {
        b.iter(|| {
            let chunks = ezy::chunk(&values, black_box(64)).unwrap();
            ezy::size(ezy::flatten(chunks))
        })
    });

    let numbers = Numbers::new(values.clone());
    c.bench_function("iterable_chain", |b| {
        b.iter(|| {
            numbers
                .iter()
                .filter(|x| **x % 2 == 0)
                .map(|x| x + 1)
                .step_by(black_box(3))
                .unwrap()
                .accumulate(0u64, |sum, x| sum + x)
        })
    });
}

fn progression(c: &mut Criterion) {
    c.bench_function("range_by", |b| {
        b.iter(|| {
            let range = ezy::range_by(0u64, black_box(100_000), 7).unwrap();
            ezy::accumulate(range, 0u64, |sum, x| sum ^ x)
        })
    });
}

criterion_group!(benches, view_chain, progression);
criterion_main!(benches);
