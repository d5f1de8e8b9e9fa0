use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decimul::{karatsuba_mul, schoolbook_mul, BigInt, Karatsuba};
use rand::{Rng, SeedableRng};

fn random_bigint(rng: &mut rand_chacha::ChaCha8Rng, digits: usize) -> BigInt {
    let s: String = (0..digits)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect();
    s.parse().expect("generated string is decimal")
}
fn bench_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut group = c.benchmark_group("mul");
    for &digits in [1_000, 10_000].iter() {
        let a = random_bigint(&mut rng, digits);
        let b = random_bigint(&mut rng, digits);
        group.bench_with_input(BenchmarkId::new("schoolbook", digits), &digits, |bench, _| {
            bench.iter(|| schoolbook_mul(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("karatsuba", digits), &digits, |bench, _| {
            bench.iter(|| karatsuba_mul(black_box(&a), black_box(&b), None))
        });
        // A larger base case trades recursion overhead for quadratic work at the leaves.
        let wide = Karatsuba::new()
            .with_base_case_digits(200)
            .expect("base case above minimum");
        group.bench_with_input(
            BenchmarkId::new("karatsuba_base_200", digits),
            &digits,
            |bench, _| bench.iter(|| wide.multiply(black_box(&a), black_box(&b), None)),
        );
    }
    group.finish();
}
#[cfg(feature = "parallel")]
fn bench_mul_parallel(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 10_000);
    let b = random_bigint(&mut rng, 10_000);
    let parallel = Karatsuba::new().with_parallel_min_digits(1_000);
    c.bench_function("karatsuba_parallel_10k", |bench| {
        bench.iter(|| parallel.multiply(black_box(&a), black_box(&b), None))
    });
}
#[cfg(not(feature = "parallel"))]
fn bench_mul_parallel(_c: &mut Criterion) {}
fn bench_add_assign(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut a = random_bigint(&mut rng, 18_000);
    let b = random_bigint(&mut rng, 18_000);
    c.bench_function("add_assign", |bench| {
        bench.iter(|| a += &b);
    });
}
fn bench_split_at_digit(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 10_000);
    c.bench_function("split_at_digit_10k", |bench| {
        bench.iter(|| black_box(&a).split_at_digit(5_003))
    });
}

fn config() -> Criterion {
    Criterion::default().sample_size(10)
}
criterion_group!(
    name = benches;
    config = config();
    targets =
        bench_mul,
        bench_mul_parallel,
        bench_add_assign,
        bench_split_at_digit,
);
criterion_main!(benches);
