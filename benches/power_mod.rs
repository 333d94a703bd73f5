use rsamath::numtheory::power_mod;
use rsamath::primitives::U2048;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_power_mod(c: &mut Criterion) {
    // 256-bit odd modulus; the bit-at-a-time reduction inside mul_mod
    // dominates the runtime
    let n: U2048 = "B3D1A9C7E5F02648B3D1A9C7E5F02648B3D1A9C7E5F02648B3D1A9C7E5F02649"
        .parse()
        .unwrap();
    let base: U2048 = "7E2C4A6810F3B5D97E2C4A6810F3B5D9".parse().unwrap();
    let exp: U2048 = "10001".parse().unwrap();

    c.bench_function("power_mod 256-bit modulus", |b| {
        b.iter(|| power_mod(black_box(&base), black_box(&exp), black_box(&n)))
    });
}

criterion_group!(benches, bench_power_mod);
criterion_main!(benches);
