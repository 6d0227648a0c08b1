// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use runk_core::{Kind, Number, Rounding, Value, convert, convert_by, convert_value, max};
use std::hint::black_box;

const SAMPLES: usize = 4096;

fn floats(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES)
        .map(|_| match rng.random_range(0..32) {
            0 => f64::NAN,
            1 => f64::INFINITY,
            2 => f64::NEG_INFINITY,
            _ => rng.random_range(-1e12..1e12),
        })
        .collect()
}

fn bench_typed<T: Number>(c: &mut Criterion, data: &[f64]) {
    let mut group = c.benchmark_group("convert_f64_to");
    group.throughput(Throughput::Elements(data.len() as u64));
    group.bench_with_input(BenchmarkId::from_parameter(T::KIND), data, |b, data| {
        b.iter(|| {
            for &x in data {
                black_box(convert::<T, f64>(black_box(x)));
            }
        })
    });
    group.finish();
}

fn bench_float_to_integer(c: &mut Criterion) {
    let data = floats(42);
    bench_typed::<i8>(c, &data);
    bench_typed::<i32>(c, &data);
    bench_typed::<u64>(c, &data);
    bench_typed::<f32>(c, &data);
}

fn bench_rounding_policies(c: &mut Criterion) {
    let data = floats(7);
    let mut group = c.benchmark_group("rounding_policy");
    group.throughput(Throughput::Elements(data.len() as u64));
    for rounding in [
        Rounding::HalfAwayFromZero,
        Rounding::HalfToEven,
        Rounding::Floor,
        Rounding::Trunc,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(rounding),
            &data,
            |b, data| {
                b.iter(|| {
                    for &x in data {
                        black_box(convert_by::<i32, f64>(black_box(x), rounding));
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_kind_level(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1234);
    let values: Vec<Value> = (0..SAMPLES)
        .map(|_| match rng.random_range(0..3) {
            0 => Value::Signed(rng.random()),
            1 => Value::Unsigned(rng.random()),
            _ => Value::Float(rng.random_range(-1e20..1e20)),
        })
        .collect();

    let mut group = c.benchmark_group("convert_value");
    group.throughput(Throughput::Elements((values.len() * Kind::COUNT) as u64));
    group.bench_function("all_kinds", |b| {
        b.iter(|| {
            for &v in &values {
                for kind in Kind::ALL {
                    black_box(convert_value(black_box(v), kind, Rounding::default()));
                }
            }
        })
    });
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let data = floats(99);
    c.bench_function("max_f64", |b| b.iter(|| max(black_box(&data).iter().copied())));
}

criterion_group!(
    benches,
    bench_float_to_integer,
    bench_rounding_policies,
    bench_kind_level,
    bench_reduce
);
criterion_main!(benches);
