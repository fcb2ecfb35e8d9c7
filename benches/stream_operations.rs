use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memo_stream::sequences::{fibs, ints, primes};
use memo_stream::stream::{filter, iterate, merge, reduce};

fn bench_basic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_operations");

    for size in [1_000usize, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("map_filter", size), size, |b, &size| {
            b.iter(|| {
                let s = iterate(0u64, |x| x + 1)
                    .map(|x| black_box(x * 2))
                    .filter(|x| black_box(x % 4 == 0));
                black_box(s.nth(size / 2))
            });
        });

        group.bench_with_input(BenchmarkId::new("scan", size), size, |b, &size| {
            b.iter(|| {
                let s = reduce(&iterate(0u64, |x| x + 1), 0u64, |acc, x| acc + x);
                black_box(s.nth(size))
            });
        });

        group.bench_with_input(BenchmarkId::new("merge", size), size, |b, &size| {
            b.iter(|| {
                let evens = filter(&iterate(0u64, |x| x + 1), |x| x % 2 == 0);
                let threes = filter(&iterate(0u64, |x| x + 1), |x| x % 3 == 0);
                black_box(merge(&evens, &threes).nth(size))
            });
        });
    }

    group.finish();
}

fn bench_self_referential(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_referential");

    group.bench_function("ints_10k", |b| {
        b.iter(|| black_box(ints::<u64>().nth(10_000)))
    });

    group.bench_function("fibs_90", |b| {
        b.iter(|| black_box(fibs::<u64>().nth(90)))
    });

    for n in [50usize, 200].iter() {
        group.bench_with_input(BenchmarkId::new("primes", n), n, |b, &n| {
            b.iter(|| black_box(primes::<u64>().nth(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_basic_operations, bench_self_referential);
criterion_main!(benches);
