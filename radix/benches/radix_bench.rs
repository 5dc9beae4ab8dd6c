use criterion::{black_box, criterion_group, criterion_main, Criterion};
use randtag_radix::{format_uint, parse_uint};

/// Deterministic pseudo-random u64 samples (64-bit LCG).
fn sample_u64s(count: usize, mut state: u64) -> Vec<u64> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        out.push(state);
    }
    out
}

fn bench_format(c: &mut Criterion) {
    let samples = sample_u64s(256, 42);

    // One function per radix path: decimal chunking, shift/mask, and
    // the general division loop.
    for base in [10u32, 16, 62] {
        c.bench_function(&format!("format_uint_base{}", base), |b| {
            b.iter(|| {
                for &v in &samples {
                    black_box(format_uint(black_box(v), base));
                }
            });
        });
    }

    c.bench_function("format_uint_small_cache", |b| {
        b.iter(|| {
            for v in 0..100u64 {
                black_box(format_uint(black_box(v), 10));
            }
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let samples = sample_u64s(256, 42);

    for base in [10u32, 16, 62] {
        let encoded: Vec<String> = samples.iter().map(|&v| format_uint(v, base)).collect();
        c.bench_function(&format!("parse_uint_base{}", base), |b| {
            b.iter(|| {
                for s in &encoded {
                    black_box(parse_uint(black_box(s.as_str()), base, 64).unwrap());
                }
            });
        });
    }
}

criterion_group!(benches, bench_format, bench_parse);
criterion_main!(benches);
