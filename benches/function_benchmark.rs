use criterion::{black_box, criterion_group, criterion_main, Criterion};
use etl::function::{Delegate, InplaceFunction};

fn scale(x: u64) -> u64 {
    x.wrapping_mul(3)
}

fn bench_invoke(c: &mut Criterion) {
    let mut group = c.benchmark_group("Callable Invoke");
    let offset = black_box(17u64);

    let boxed: Box<dyn Fn(u64) -> u64> = Box::new(move |x| x.wrapping_add(offset));
    let inplace: InplaceFunction<fn(u64) -> u64> =
        InplaceFunction::from_callable(move |x: u64| x.wrapping_add(offset));
    let closure = move |x: u64| x.wrapping_add(offset);
    let delegate: Delegate<'_, fn(u64) -> u64> = Delegate::from_callable(&closure);
    let free: InplaceFunction<fn(u64) -> u64> = InplaceFunction::from_fn(scale);

    group.bench_function("Box<dyn Fn>", |b| b.iter(|| boxed(black_box(5))));
    group.bench_function("InplaceFunction closure", |b| {
        b.iter(|| inplace.call((black_box(5),)))
    });
    group.bench_function("InplaceFunction fn", |b| b.iter(|| free.call((black_box(5),))));
    group.bench_function("Delegate functor", |b| b.iter(|| delegate.call((black_box(5),))));

    group.finish();
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("Callable Construct");
    let captured = black_box([1u64, 2, 3]);

    group.bench_function("Box<dyn Fn>", |b| {
        b.iter(|| {
            let f: Box<dyn Fn() -> u64> = Box::new(move || captured.iter().sum());
            black_box(f)
        })
    });
    group.bench_function("InplaceFunction", |b| {
        b.iter(|| {
            let f: InplaceFunction<fn() -> u64> =
                InplaceFunction::from_callable(move || captured.iter().sum::<u64>());
            black_box(f)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_invoke, bench_construct);
criterion_main!(benches);
