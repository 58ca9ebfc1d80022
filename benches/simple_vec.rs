use std::{hint::black_box};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use simple_vector::{reserve, SimpleVec};
use smallvec::SmallVec;
use arrayvec::ArrayVec;


pub fn push(c: &mut Criterion) {

    let mut group = c.benchmark_group("Push");
    group.sample_size(1000);
    group.bench_function(
        BenchmarkId::new("SimpleVec", "push"),
        |b| b.iter_batched_ref(
            || SimpleVec::<u8>::from(reserve(16)), 
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "push"),
        |b| b.iter_batched_ref(
            || Vec::<u8>::with_capacity(16), 
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("SmallVec", "push"),
        |b| b.iter_batched_ref(
            || SmallVec::<[u8; 16]>::new(), 
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("ArrayVec", "push"),
        |b| b.iter_batched_ref(
            || ArrayVec::<u8, 16>::new(), 
            |vec| { black_box({ vec.push(black_box(128)); }) },
            BatchSize::SmallInput
        )
    );
    group.finish();
}

pub fn grow(c: &mut Criterion) {

    let mut group = c.benchmark_group("Grow");
    for n in [16usize, 256, 4096] {
        group.bench_with_input(
            BenchmarkId::new("SimpleVec", n), 
            &n,
            |b, &n| b.iter(|| {
                let mut vec = SimpleVec::<u64>::new();
                for i in 0..n { vec.push(black_box(i as u64)); }
                vec
            })
        );
        group.bench_with_input(
            BenchmarkId::new("Vec", n), 
            &n,
            |b, &n| b.iter(|| {
                let mut vec = Vec::<u64>::new();
                for i in 0..n { vec.push(black_box(i as u64)); }
                vec
            })
        );
        group.bench_with_input(
            BenchmarkId::new("SmallVec", n), 
            &n,
            |b, &n| b.iter(|| {
                let mut vec = SmallVec::<[u64; 16]>::new();
                for i in 0..n { vec.push(black_box(i as u64)); }
                vec
            })
        );
    }
    group.finish();
}

pub fn insert_front(c: &mut Criterion) {

    let mut group = c.benchmark_group("Insert front");
    group.bench_function(
        BenchmarkId::new("SimpleVec", "insert-0"),
        |b| b.iter_batched_ref(
            || SimpleVec::<u32>::from_iter(0..256),
            |vec| black_box({ vec.insert(0, black_box(7)); }),
            BatchSize::SmallInput
        )
    );
    group.bench_function(
        BenchmarkId::new("Vec", "insert-0"),
        |b| b.iter_batched_ref(
            || Vec::<u32>::from_iter(0..256),
            |vec| black_box({ vec.insert(0, black_box(7)); }),
            BatchSize::SmallInput
        )
    );
    group.finish();
}

criterion_group!(benches, push, grow, insert_front);
criterion_main!(benches);
