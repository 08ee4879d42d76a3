#![allow(non_snake_case)]

#[cfg(test)]
mod test_tower {
    use pairing::fields::Field;
    use pairing::fields::bn254::{Bn254Fp, Bn254Fp2, Bn254Fp6, Bn254Fp12};
    use pairing::utilities::drng::DRNG;

    fn random<F: Field>(rng: &mut DRNG) -> F {
        let mut x = F::ZERO;
        x.set_random(rng).unwrap();
        x
    }

    fn check_axioms<F: Field>(rng: &mut DRNG, n: usize) {
        for _ in 0..n {
            let a: F = random(rng);
            let b: F = random(rng);
            let c: F = random(rng);

            assert!(a * b == b * a);
            assert!((a * b) * c == a * (b * c));
            assert!(a * (b + c) == a * b + a * c);
            assert!(a.square() == a * a);
            assert!(a.double() == a + a);
            assert!(a - a == F::ZERO);
            assert!(a * a.invert() == F::ONE);
            assert!(F::ZERO.invert() == F::ZERO);
            if b.is_zero() == 0 {
                assert!((a / b) * b == a);
            }
            assert!(a / F::ZERO == F::ZERO);
            assert_eq!(F::ONE.is_one(), u32::MAX);
            assert_eq!(F::ZERO.is_one(), 0);

            let enc = a.encode();
            assert_eq!(enc.len(), F::ENCODED_LENGTH);
            assert!(F::decode(&enc).unwrap() == a);
        }
        assert!(F::decode(&[0u8; 3]).is_err());
    }

    #[test]
    fn fp2_arithmetic() {
        let mut rng = DRNG::from_seed("fp2_arithmetic".as_bytes());
        check_axioms::<Bn254Fp2>(&mut rng, 20);

        // u^2 = -1
        let u = Bn254Fp2::new(Bn254Fp::ZERO, Bn254Fp::ONE);
        assert!(u.square() == -Bn254Fp2::ONE);

        let a: Bn254Fp2 = random(&mut rng);
        let k: Bn254Fp = random(&mut rng);
        assert!(a * a.conjugate() == Bn254Fp2::from_base(a.norm()));
        assert!(a.mul_by_fp(&k) == a * Bn254Fp2::from_base(k));

        let x = Bn254Fp2::new(Bn254Fp::from_u64(1), Bn254Fp::from_u64(2));
        assert_eq!(x.to_string(), "1+2*u");

        // most significant component first
        let enc = x.encode();
        assert_eq!(&enc[..32], &Bn254Fp::from_u64(2).encode()[..]);
        assert_eq!(&enc[32..], &Bn254Fp::from_u64(1).encode()[..]);
    }

    #[test]
    fn fp6_arithmetic() {
        let mut rng = DRNG::from_seed("fp6_arithmetic".as_bytes());
        check_axioms::<Bn254Fp6>(&mut rng, 10);

        let v = Bn254Fp6::new(Bn254Fp2::ZERO, Bn254Fp2::ONE, Bn254Fp2::ZERO);
        let xi = Bn254Fp2::new(Bn254Fp::from_u64(9), Bn254Fp::from_u64(1));
        assert!(v.square() * v == Bn254Fp6::new(xi, Bn254Fp2::ZERO, Bn254Fp2::ZERO));

        for _ in 0..10 {
            let a: Bn254Fp6 = random(&mut rng);
            let b0: Bn254Fp2 = random(&mut rng);
            let b1: Bn254Fp2 = random(&mut rng);

            assert!(a.mul_by_nonresidue() == a * v);
            assert!(a.mul_by_fp2(&b0) == a * Bn254Fp6::new(b0, Bn254Fp2::ZERO, Bn254Fp2::ZERO));
            assert!(a.mul_by_01(&b0, &b1) == a * Bn254Fp6::new(b0, b1, Bn254Fp2::ZERO));
            assert!(a.mul_by_1(&b1) == a * Bn254Fp6::new(Bn254Fp2::ZERO, b1, Bn254Fp2::ZERO));
        }

        // Only the top component set exercises the corrected cofactor.
        let t = Bn254Fp6::new(Bn254Fp2::ZERO, Bn254Fp2::ZERO, xi);
        assert!(t * t.invert() == Bn254Fp6::ONE);

        let enc = t.encode();
        assert_eq!(&enc[..64], &xi.encode()[..]);
        assert!(enc[64..].iter().all(|b| *b == 0));
    }

    #[test]
    fn fp12_arithmetic() {
        let mut rng = DRNG::from_seed("fp12_arithmetic".as_bytes());
        check_axioms::<Bn254Fp12>(&mut rng, 5);

        // w^2 = v
        let w = Bn254Fp12::new(Bn254Fp6::ZERO, Bn254Fp6::ONE);
        let v = Bn254Fp6::new(Bn254Fp2::ZERO, Bn254Fp2::ONE, Bn254Fp2::ZERO);
        assert!(w.square() == Bn254Fp12::new(v, Bn254Fp6::ZERO));

        for _ in 0..5 {
            let a: Bn254Fp12 = random(&mut rng);
            let d0: Bn254Fp2 = random(&mut rng);
            let d3: Bn254Fp2 = random(&mut rng);
            let d4: Bn254Fp2 = random(&mut rng);
            let sparse = Bn254Fp12::new(
                Bn254Fp6::new(d0, Bn254Fp2::ZERO, Bn254Fp2::ZERO),
                Bn254Fp6::new(d3, d4, Bn254Fp2::ZERO),
            );
            assert!(a.mul_by_034(&d0, &d3, &d4) == a * sparse);
            assert!(a.conjugate().conjugate() == a);
        }
    }

    /// f^((p^6 - 1)(p^2 + 1)) lies in the cyclotomic subgroup.
    fn cyclotomic_element(rng: &mut DRNG) -> Bn254Fp12 {
        let f: Bn254Fp12 = random(rng);
        let g = f.conjugate() * f.invert();
        g.frobenius_square() * g
    }

    #[test]
    fn frobenius_is_the_q_power() {
        let mut rng = DRNG::from_seed("frobenius_is_the_q_power".as_bytes());
        let q = Bn254Fp::modulus();
        let q1 = q.to_u64_digits();
        let q2 = q.pow(2u32).to_u64_digits();

        for _ in 0..3 {
            let a: Bn254Fp12 = random(&mut rng);
            let b: Bn254Fp12 = random(&mut rng);
            assert!(a.frobenius() == a.pow_vartime(&q1));
            assert!(a.frobenius_square() == a.pow_vartime(&q2));
            assert!(a.frobenius().frobenius() == a.frobenius_square());
            assert!((a * b).frobenius() == a.frobenius() * b.frobenius());

            let mut f = a;
            for _ in 0..12 {
                f = f.frobenius();
            }
            assert!(f == a);
            for _ in 0..6 {
                f = f.frobenius_square();
            }
            assert!(f == a);
        }

        let k = Bn254Fp12::from_u64(7);
        assert!(k.frobenius() == k);
        assert!(k.frobenius_square() == k);
    }

    #[test]
    fn unitary_inverse() {
        let mut rng = DRNG::from_seed("unitary_inverse".as_bytes());
        for _ in 0..3 {
            let h = cyclotomic_element(&mut rng);
            assert!(h.inverse_unitary() == h.invert());
            assert!(h.inverse_unitary() == h.conjugate());
            assert_eq!((h * h.inverse_unitary()).is_one(), u32::MAX);
        }
    }

    #[test]
    fn cyclotomic_square_matches_square() {
        let mut rng = DRNG::from_seed("cyclotomic_square_matches_square".as_bytes());
        for _ in 0..3 {
            let h = cyclotomic_element(&mut rng);
            assert!(h.conjugate() * h == Bn254Fp12::ONE);
            assert!(h.cyclotomic_square() == h.square());

            let e = 0x9D2F_0001_7C3Bu64;
            assert!(h.cyclotomic_exp(e) == h.pow_vartime(&[e]));
            assert!(h.cyclotomic_exp(0) == Bn254Fp12::ONE);
        }
    }
}
