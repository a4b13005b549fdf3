use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use simplevec::{SimpleVector, reserve};
use simplevec_testkit::data_gen::random_values;
use std::hint::black_box;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_vs_vec");

    for &size in &[16usize, 1024, 65536] {
        group.throughput(Throughput::Elements(size as u64));
        let values = random_values(size as u64, size);

        group.bench_with_input(
            BenchmarkId::new("simple_vector_push_back", size),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut v = SimpleVector::new();
                    for &x in values {
                        v.push_back(black_box(x));
                    }
                    black_box(v)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("simple_vector_reserved", size),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut v = SimpleVector::from(reserve(values.len()));
                    for &x in values {
                        v.push_back(black_box(x));
                    }
                    black_box(v)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("vec_push", size), &values, |b, values| {
            b.iter(|| {
                let mut v = Vec::new();
                for &x in values {
                    v.push(black_box(x));
                }
                black_box(v)
            });
        });
    }

    group.finish();
}

fn bench_insert_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase_front");

    for &size in &[64usize, 4096] {
        let values = random_values(7, size);
        let base = SimpleVector::from(values.clone());

        group.bench_with_input(
            BenchmarkId::new("simple_vector", size),
            &base,
            |b, base| {
                let mut v = base.clone();
                v.reserve(v.len() + 1);
                b.iter(|| {
                    v.insert(0, black_box(1));
                    v.erase(0);
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("vec", size), &values, |b, values| {
            let mut v = values.clone();
            v.reserve(1);
            b.iter(|| {
                v.insert(0, black_box(1));
                v.remove(0);
            });
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("resize_grow_shrink", |b| {
        let mut v = SimpleVector::<u64>::new();
        b.iter(|| {
            v.resize(black_box(4096));
            v.resize(black_box(16));
        });
    });
}

criterion_group!(benches, bench_push_back, bench_insert_erase_front, bench_resize);
criterion_main!(benches);
