use criterion::{black_box, criterion_group, criterion_main, Criterion};
use etl::collections::Vector;

const SIZE: usize = 256;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("Vector Push/Pop");

    group.bench_function("std::Vec", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(SIZE);
            for i in 0..SIZE {
                v.push(black_box(i as u32));
            }
            while let Some(x) = v.pop() {
                black_box(x);
            }
        })
    });

    group.bench_function("etl::Vector", |b| {
        b.iter(|| {
            let mut v: Vector<u32, SIZE> = Vector::new();
            for i in 0..SIZE {
                let _ = v.push(black_box(i as u32));
            }
            while let Some(x) = v.pop() {
                black_box(x);
            }
        })
    });

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("Vector Insert Front");

    group.bench_function("std::Vec", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(64);
            for i in 0..64u32 {
                v.insert(0, black_box(i));
            }
            v
        })
    });

    group.bench_function("etl::Vector", |b| {
        b.iter(|| {
            let mut v: Vector<u32, 64> = Vector::new();
            for i in 0..64u32 {
                let _ = v.insert(0, black_box(i));
            }
            v
        })
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_insert_front);
criterion_main!(benches);
