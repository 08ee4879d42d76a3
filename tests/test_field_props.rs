#![allow(non_snake_case)]

#[cfg(test)]
mod test_field_props {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use pairing::fields::Field;
    use pairing::fields::bls12_377::Bls12377Fp;
    use pairing::fields::bn254::Bn254Fp;
    use pairing::fields::goldilocks::Goldilocks;

    fn limbs_to_biguint(limbs: &[u64]) -> BigUint {
        let digits: Vec<u32> = limbs
            .iter()
            .flat_map(|w| [*w as u32, (*w >> 32) as u32])
            .collect();
        BigUint::from_slice(&digits)
    }

    proptest! {
        #[test]
        fn bn254_matches_big_integers(a in any::<[u64; 4]>(), b in any::<[u64; 4]>()) {
            let q = Bn254Fp::modulus();
            let x = Bn254Fp::from_regular(a);
            let y = Bn254Fp::from_regular(b);
            let (ba, bb) = (limbs_to_biguint(&a) % &q, limbs_to_biguint(&b) % &q);

            prop_assert_eq!(x.to_biguint(), ba.clone());
            prop_assert_eq!((x * y).to_biguint(), (&ba * &bb) % &q);
            prop_assert_eq!((x + y).to_biguint(), (&ba + &bb) % &q);
            prop_assert_eq!((x - y).to_biguint(), (&ba + &q - &bb) % &q);
        }

        #[test]
        fn order_and_bits_match_big_integers(a in any::<[u64; 4]>(), b in any::<[u64; 4]>(), i in 0usize..260) {
            let q = Bn254Fp::modulus();
            let x = Bn254Fp::from_regular(a);
            let y = Bn254Fp::from_regular(b);
            let (ba, bb) = (x.to_biguint(), y.to_biguint());

            prop_assert_eq!(x.cmp(&y), ba.cmp(&bb));
            prop_assert_eq!(x.bit(i), ba.bit(i as u64));
            prop_assert_eq!(x.bit_len() as u64, ba.bits());
            prop_assert_eq!(x.lexicographically_largest() == u32::MAX, &ba > &((&q - 1u32) >> 1u32));
            if y.is_zero() == 0 {
                prop_assert_eq!((x / y) * y, x);
            }
        }

        #[test]
        fn bls12_377_axioms(a in any::<[u64; 6]>(), b in any::<[u64; 6]>(), c in any::<[u64; 6]>()) {
            let x = Bls12377Fp::from_regular(a);
            let y = Bls12377Fp::from_regular(b);
            let z = Bls12377Fp::from_regular(c);

            prop_assert_eq!(x * (y + z), x * y + x * z);
            prop_assert_eq!((x * y) * z, x * (y * z));
            prop_assert_eq!(x + Bls12377Fp::ZERO, x);
            prop_assert_eq!(x - x, Bls12377Fp::ZERO);
            prop_assert_eq!(Bls12377Fp::decode(&x.encode()).unwrap(), x);
            if x.is_zero() == 0 {
                prop_assert_eq!(x * x.invert(), Bls12377Fp::ONE);
            }
        }

        #[test]
        fn goldilocks_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            const Q: u128 = 0xFFFFFFFF00000001;
            let x = Goldilocks::from_u64(a);
            let y = Goldilocks::from_u64(b);
            let (wa, wb) = (a as u128 % Q, b as u128 % Q);

            prop_assert_eq!(x.to_regular()[0] as u128, wa);
            prop_assert_eq!((x * y).to_regular()[0] as u128, (wa * wb) % Q);
            prop_assert_eq!((x + y).to_regular()[0] as u128, (wa + wb) % Q);
            prop_assert_eq!((x - y).to_regular()[0] as u128, (wa + Q - wb) % Q);
        }

        #[test]
        fn text_round_trips(a in any::<[u64; 4]>(), base in 2u32..=36) {
            let x = Bn254Fp::from_regular(a);
            let t = x.text(base);
            if base == 10 {
                prop_assert_eq!(t.parse::<Bn254Fp>().unwrap(), x);
            } else {
                let v = BigUint::parse_bytes(t.as_bytes(), base).unwrap();
                prop_assert_eq!(v, x.to_biguint());
            }
        }

        #[test]
        fn sqrt_of_square(a in any::<[u64; 6]>()) {
            let x = Bls12377Fp::from_regular(a);
            let r = x.square().sqrt().unwrap();
            prop_assert!(r == x || r == -x);
        }
    }
}
