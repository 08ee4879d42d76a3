#![allow(non_snake_case)]

#[cfg(test)]
mod test_expt {
    use pairing::fields::Field;
    use pairing::fields::bn254::Bn254Fp12;
    use pairing::pairing::bn254::{BN254_EXPT_CHAIN, BN254_X, expt};
    use pairing::pairing::expt::{ExptStep, chain_exponent, parse_chain, run_chain};
    use pairing::utilities::drng::DRNG;

    fn cyclotomic_element(rng: &mut DRNG) -> Bn254Fp12 {
        let mut f = Bn254Fp12::ZERO;
        f.set_random(rng).unwrap();
        let g = f.conjugate() * f.invert();
        g.frobenius_square() * g
    }

    #[test]
    fn chain_spells_the_seed() {
        assert_eq!(BN254_EXPT_CHAIN.len(), 85);
        assert_eq!(chain_exponent(&BN254_EXPT_CHAIN), Some(BN254_X));
        assert_eq!(BN254_X, 4965661367192848881);
        let squares = BN254_EXPT_CHAIN
            .iter()
            .filter(|s| **s == ExptStep::Square)
            .count();
        assert_eq!(squares, 62);
    }

    #[test]
    fn expt_matches_exponentiation() {
        let mut rng = DRNG::from_seed("expt_matches_exponentiation".as_bytes());
        for _ in 0..2 {
            let h = cyclotomic_element(&mut rng);
            let r = expt(&h);
            assert!(r == h.cyclotomic_exp(BN254_X));
            assert!(r == h.pow_vartime(&[BN254_X]));
        }
        assert!(expt(&Bn254Fp12::ONE) == Bn254Fp12::ONE);
    }

    #[test]
    fn short_chains() {
        let mut rng = DRNG::from_seed("short_chains".as_bytes());
        let h = cyclotomic_element(&mut rng);

        // 1 -> 2 -> 3 -> 6 -> 5
        const CHAIN: [ExptStep; 4] = parse_chain(b"SXSI");
        assert_eq!(chain_exponent(&CHAIN), Some(5));
        assert!(run_chain(&h, &CHAIN) == h.pow_vartime(&[5]));
        assert!(run_chain(&h, &[]) == h);

        assert_eq!(ExptStep::from_char(b'S'), Some(ExptStep::Square));
        assert_eq!(ExptStep::from_char(b'?'), None);
        assert_eq!(chain_exponent(&[ExptStep::MulByBaseInverse; 2]), None);
    }
}
