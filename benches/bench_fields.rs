#![allow(non_snake_case)]

mod benchmark_fields {
    use criterion::{Criterion, black_box, criterion_group};
    use pairing::fields::Field;
    use pairing::fields::bls12_377::Bls12377Fp;
    use pairing::fields::bn254::{Bn254Fp, Bn254Fp12};
    use pairing::utilities::drng::DRNG;
    use std::time::Duration;

    fn random<F: Field>(rng: &mut DRNG) -> F {
        let mut x = F::ZERO;
        x.set_random(rng).unwrap();
        x
    }

    fn bench_fp(c: &mut Criterion) {
        let mut rng = DRNG::from_seed("bench_fp".as_bytes());
        let a: Bn254Fp = random(&mut rng);
        let b: Bn254Fp = random(&mut rng);
        let s = a.square();

        c.bench_function("bn254 fp multiplication", |bench| {
            bench.iter(|| black_box(a) * black_box(b))
        });
        c.bench_function("bn254 fp squaring", |bench| {
            bench.iter(|| black_box(a).square())
        });
        c.bench_function("bn254 fp inversion", |bench| {
            bench.iter(|| black_box(a).invert())
        });
        c.bench_function("bn254 fp square root", |bench| {
            bench.iter(|| black_box(s).sqrt())
        });

        // p = 1 mod 2^46, so Tonelli-Shanks does real work here
        let x: Bls12377Fp = random(&mut rng);
        let t = x.square();
        c.bench_function("bls12-377 fp square root", |bench| {
            bench.iter(|| black_box(t).sqrt())
        });
    }

    fn bench_fp12(c: &mut Criterion) {
        let mut rng = DRNG::from_seed("bench_fp12".as_bytes());
        let a: Bn254Fp12 = random(&mut rng);
        let b: Bn254Fp12 = random(&mut rng);

        let g = a.conjugate() * a.invert();
        let h = g.frobenius_square() * g;

        c.bench_function("bn254 fp12 multiplication", |bench| {
            bench.iter(|| black_box(a) * black_box(b))
        });
        c.bench_function("bn254 fp12 squaring", |bench| {
            bench.iter(|| black_box(a).square())
        });
        c.bench_function("bn254 fp12 frobenius", |bench| {
            bench.iter(|| black_box(a).frobenius())
        });
        c.bench_function("bn254 fp12 cyclotomic squaring", |bench| {
            bench.iter(|| black_box(h).cyclotomic_square())
        });
        c.bench_function("bn254 fp12 inversion", |bench| {
            bench.iter(|| black_box(a).invert())
        });
    }

    criterion_group! {
        name = benchmark_fields;
        config = Criterion::default().measurement_time(Duration::from_secs(5));
        targets = bench_fp, bench_fp12
    }
}

fn main() {
    benchmark_fields::benchmark_fields();
}
