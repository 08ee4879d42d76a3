#![allow(non_snake_case)]

#[cfg(test)]
mod test_hash_to_curve {
    use pairing::HashToCurveError;
    use pairing::elliptic::bls12_377::Bls12377G1Isogeny;
    use pairing::elliptic::isogeny::IsogenyMap;
    use pairing::fields::Field;
    use pairing::fields::bls12_377::{Bls12377Fp, Bls12377FpParams};
    use pairing::hash_to_curve::bls12_377::{Bls12377G1Sswu, SUITE_NU, SUITE_RO, encode_to_g1, hash_to_g1};
    use pairing::hash_to_curve::{SswuParams, expand_message_xmd, hash_to_field, sqrt_ratio, sswu_map};
    use pairing::utilities::drng::DRNG;

    fn fp(s: &str) -> Bls12377Fp {
        s.parse().unwrap()
    }

    fn dst(suite: &str) -> Vec<u8> {
        format!("QUUX-V01-CS02-with-{suite}").into_bytes()
    }

    #[test]
    fn expand_message_vectors() {
        let dst = b"QUUX-V01-CS02-with-expander-SHA256-128";
        let out = expand_message_xmd(b"", dst, 0x20).unwrap();
        assert_eq!(
            hex::encode(out),
            "68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235"
        );
        let out = expand_message_xmd(b"abc", dst, 0x20).unwrap();
        assert_eq!(
            hex::encode(out),
            "d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615"
        );
        let out = expand_message_xmd(b"", dst, 0x80).unwrap();
        assert_eq!(
            hex::encode(out),
            "af84c27ccfd45d41914fdff5df25293e221afc53d8ad2ac06d5e3e29485dadbe\
             e0d121587713a3e0dd4d5e69e93eb7cd4f5df4cd103e188cf60cb02edc3edf18\
             eda8576c412b18ffb658e3dd6ec849469b979d444cf7b26911a08e63cf31f9dc\
             c541708d3491184472c2c29bb749d4286b004ceb5ee6b9a7fa5b646c993f0ced"
        );
    }

    #[test]
    fn expand_message_limits() {
        let long_dst = vec![0x41u8; 256];
        assert_eq!(
            expand_message_xmd(b"msg", &long_dst, 32),
            Err(HashToCurveError::DstTooLong(256))
        );
        assert!(expand_message_xmd(b"msg", &long_dst[..255], 32).is_ok());
        assert_eq!(
            expand_message_xmd(b"msg", b"dst", 255 * 32 + 1),
            Err(HashToCurveError::OutputTooLong(255 * 32 + 1))
        );
        assert_eq!(expand_message_xmd(b"msg", b"dst", 255 * 32).unwrap().len(), 255 * 32);
        assert!(hash_to_g1(b"msg", &long_dst).is_err());
    }

    #[test]
    fn hash_to_field_vector() {
        let u = hash_to_field::<Bls12377FpParams, 6>(b"abc", &dst(SUITE_RO), 2, Bls12377G1Sswu::L).unwrap();
        assert_eq!(u.len(), 2);
        assert!(u[0] == fp("0xcf409921dcdce7de4b3541144bbb5c41592a95278af448bb6f6287e5a71b71c8148a03b8f98cf6e654b2a93bf89c5b"));
        assert!(u[1] == fp("0xbccdefe8cbec53dad21b03a0d1f05e1e4c401a7f20ff349043ff1afe8074ea4edb457a2181d6388a41be08445f1099"));
    }

    #[test]
    fn sqrt_ratio_cases() {
        let mut rng = DRNG::from_seed("sqrt_ratio_cases".as_bytes());
        let z = Bls12377G1Sswu::Z;
        for _ in 0..10 {
            let mut u = Bls12377Fp::ZERO;
            let mut v = Bls12377Fp::ZERO;
            u.set_random(&mut rng).unwrap();
            v.set_random(&mut rng).unwrap();

            let (is_qr, r) = sqrt_ratio::<Bls12377G1Sswu, 6>(&u, &v);
            let ratio = u * v.invert();
            if is_qr == u32::MAX {
                assert_eq!(ratio.legendre(), 1);
                assert!(r.square() * v == u);
            } else {
                assert_eq!(is_qr, 0);
                assert_eq!(ratio.legendre(), -1);
                assert!(r.square() * v == z * u);
            }
        }
        let (is_qr, r) = sqrt_ratio::<Bls12377G1Sswu, 6>(&Bls12377Fp::ZERO, &Bls12377Fp::ONE);
        assert_eq!(is_qr, u32::MAX);
        assert!(r == Bls12377Fp::ZERO);

        assert!(Bls12377G1Sswu::mul_by_z(&Bls12377Fp::from_u64(3)) == z * Bls12377Fp::from_u64(3));
        assert!(z == -Bls12377Fp::from_u64(11));
    }

    #[test]
    fn sswu_map_vector() {
        let P = sswu_map::<Bls12377G1Sswu, 6>(&Bls12377Fp::ONE);
        assert_eq!(P.is_on_curve(), u32::MAX);
        assert!(P.X == fp("0xf0ed6eee975127ee3c6208a834be339fcb13a75f03b61de50247e5a72f8693ce8d8eb7d28f5c31b60e3ae147ae149c"));
        assert!(P.Y == fp("0x1abd5f00685509d0dff6d80ebf39f5fd16aaffe60c4a32b5a23c4bcf7df9a3c9c9cd13b2ed1a5bfb9c3b5fe231c22bd"));

        let Q = Bls12377G1Isogeny::map_affine(&P);
        assert!(Q.X == fp("0xe17358f612472df1947258904ca4f9225b6ac2721f4d252ebba94e20422167ea86d84e2c4c73e5f436504ba562d661"));
        assert!(Q.Y == fp("0x19cbc3d207d868c59ee5757e39e37193b12f0d2946a4781e8e5594a61828866c586596544a5ac1b3c4b4aa0caeeaf26"));

        let R = Q.to_jacobian().clear_cofactor().to_affine();
        assert!(R.X == fp("0x12fbf336f5675cf3d30e093331b401682fe87d37e6246060a3b1a2deebe8137dae6f47e2fe0b195580823e6af0f2441"));
        assert!(R.Y == fp("0xbf3dc4d3ec3631b2c64e0d44d3435e2088b485046eacc1f5977afea2edd471d91949e1339d3169be3acb8d05b7b582"));

        // u = 0 hits the exceptional case of the map
        let E = sswu_map::<Bls12377G1Sswu, 6>(&Bls12377Fp::ZERO);
        assert_eq!(E.is_on_curve(), u32::MAX);
        assert_eq!(E.is_zero(), 0);
    }

    #[test]
    fn encode_to_curve_vectors() {
        let dst = dst(SUITE_NU);
        let P = encode_to_g1(b"", &dst).unwrap().to_affine();
        assert!(P.X == fp("0xdb0d9bd783c7c9a0acdd198f062b779a6da64565446264cd0b573db5e0ec2d992e91f418a3eb59d62de7b0efbe3054"));
        assert!(P.Y == fp("0x7be93d6c8075a0e4a1c20b620db45649c1d069fb1a40bb307b8475732b797d26cc0604c996308e45094ecaeeb88a3"));

        let P = encode_to_g1(b"abc", &dst).unwrap().to_affine();
        assert!(P.X == fp("0x758f295f9f43df48897e3c9914e79e3f77b0b66059861853d9518466446496fe8c861cec63439c3bf36e1f3b4c8472"));
        assert!(P.Y == fp("0xc568a3aca1e2822db3ccfa50de4fb85dafd3c6b8b74aa36b3aa7faf4fc04bfe9e3a1668859696c925c55d4986fd642"));
    }

    #[test]
    fn hash_to_curve_vectors() {
        let dst = dst(SUITE_RO);
        let P = hash_to_g1(b"", &dst).unwrap().to_affine();
        assert!(P.X == fp("0x123184bf576b5d69c00311c57eb503e3df99ab60156a2bc34228e46cd1b0c8a15304f0de63602ae32bbb08a7f44c2c9"));
        assert!(P.Y == fp("0x3234a1216cd750614603355043bea88ab844970e6fedb6189a36914f5d6d27defb30d914b56ef7fb7f8e05bd10f322"));

        let P = hash_to_g1(b"abc", &dst).unwrap().to_affine();
        assert!(P.X == fp("0x15756bc7b5a8140577878f75009f8a0009bf1820719354863a52057d0758b27ff7d843e177fc618146edec267d1510f"));
        assert!(P.Y == fp("0x72ee643c9440a5325e6f64ec61047820f4a38dbd01f017d8b95440dc116a5608a875005aa6f16bf6aeb2650d46e834"));

        let P = hash_to_g1(b"abcdef0123456789", &dst).unwrap().to_affine();
        assert!(P.X == fp("0x1a6d66a21a28362895c867fa2a65e5e54fd85171a0a8327faec0f7272dd5fbfeaafb311d7e83c85dfabbc790fb8031f"));
        assert!(P.Y == fp("0x95ffa9ea2d47cebf6ffcb202d16a2c9039ae4888e98552c0d5cfe72ccf23dd8d9f128c2754f66179bb2dfc38b66eba"));
    }

    #[test]
    fn outputs_lie_in_g1() {
        let dst = dst(SUITE_RO);
        for msg in [&b"a"[..], &b"q128_"[..], &b"message to hash"[..]] {
            let P = hash_to_g1(msg, &dst).unwrap();
            assert_eq!(P.is_on_curve(), u32::MAX);
            assert_eq!(P.is_in_subgroup(), u32::MAX);
            assert!(P == hash_to_g1(msg, &dst).unwrap());

            let Q = encode_to_g1(msg, &dst).unwrap();
            assert_eq!(Q.is_in_subgroup(), u32::MAX);
            assert!(P != Q);
        }
        assert!(hash_to_g1(b"a", b"one tag").unwrap() != hash_to_g1(b"a", b"another tag").unwrap());
    }
}

#[cfg(test)]
mod test_hash_to_curve_long_messages {
    #[cfg(feature = "kat-tests")]
    use pairing::fields::bls12_377::Bls12377Fp;
    #[cfg(feature = "kat-tests")]
    use pairing::hash_to_curve::bls12_377::{SUITE_NU, SUITE_RO, encode_to_g1, hash_to_g1};

    #[cfg(feature = "kat-tests")]
    fn check(
        suite: &str,
        msg: &[u8],
        x: &str,
        y: &str,
        f: fn(&[u8], &[u8]) -> Result<pairing::elliptic::bls12_377::Bls12377G1Point, pairing::HashToCurveError>,
    ) {
        let dst = format!("QUUX-V01-CS02-with-{suite}");
        let P = f(msg, dst.as_bytes()).unwrap().to_affine();
        assert!(P.X == x.parse::<Bls12377Fp>().unwrap());
        assert!(P.Y == y.parse::<Bls12377Fp>().unwrap());
    }

    #[test]
    #[cfg(feature = "kat-tests")]
    fn test_long_message_values() {
        let q128 = [b"q128_".to_vec(), vec![b'q'; 128]].concat();
        let a512 = [b"a512_".to_vec(), vec![b'a'; 512]].concat();

        check(
            SUITE_RO,
            &q128,
            "0x9574af6ebc91ea9e337178cbd5c83ecb9d42fed22b3272c3e50b1840c5089fe5bec9808eaaba8a06ced26a30b82747",
            "0xe17f71be6d1f16327980223a45215e765c9f2e6f7d71dc753d8001a50c247bbca7db2f47aaf90c22a7e4d7d81d7967",
            hash_to_g1,
        );
        check(
            SUITE_NU,
            &q128,
            "0xd6caff8bad03770cbc9f51ab8a318c82d24fa11cb6b3a966abf3b6a0c378e16badce5613987cfd3b65c4e23b3b9c83",
            "0x243d0e947525edd053509329888744b6e646ec5b527379d38442a44920892377b64ae5dbd0afd05894a078ae9aed6b",
            encode_to_g1,
        );
        check(
            SUITE_RO,
            &a512,
            "0xc54bd72909539ce2c7558b081a7ab7cf8643cb5c02e87d233f6458c69c1a9270ebb0a6c42083ba38835a2698a57cde",
            "0x4e7aef0cd3751800633f0408694c6376917e3d44443a2a09cf38f861543c7c27ce9c7ec2b182eb9d908a408979ace",
            hash_to_g1,
        );
        check(
            SUITE_NU,
            &a512,
            "0x11ebccdddbbdb516004f549343cfeb2ac955140a5862bca41956658aeb2468faa9e2985bd3c13be5b496519f54dbab1",
            "0x312d0ff67c1f4356e9954078c7d0cd63c4723eebb32d36bd512d0d32171ea52e8a6f709275171ae7bd87e35c8e0a18",
            encode_to_g1,
        );
    }
}
