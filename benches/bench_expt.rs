#![allow(non_snake_case)]

mod benchmark_expt {
    use criterion::{Criterion, black_box, criterion_group};
    use pairing::fields::Field;
    use pairing::fields::bn254::Bn254Fp12;
    use pairing::pairing::bn254::{BN254_X, expt};
    use pairing::utilities::drng::DRNG;
    use std::time::Duration;

    fn bench_expt(c: &mut Criterion) {
        let mut rng = DRNG::from_seed("bench_expt".as_bytes());
        let mut f = Bn254Fp12::ZERO;
        f.set_random(&mut rng).unwrap();

        // Move f into the cyclotomic subgroup.
        let g = f.conjugate() * f.invert();
        let h = g.frobenius_square() * g;

        assert!(expt(&h) == h.cyclotomic_exp(BN254_X));

        c.bench_function("bn254 expt addition chain", |b| {
            b.iter(|| expt(black_box(&h)))
        });
        c.bench_function("bn254 expt square-and-multiply", |b| {
            b.iter(|| black_box(h).cyclotomic_exp(black_box(BN254_X)))
        });
    }

    criterion_group! {
        name = benchmark_expt;
        config = Criterion::default().measurement_time(Duration::from_secs(10));
        targets = bench_expt
    }
}

fn main() {
    benchmark_expt::benchmark_expt();
}
