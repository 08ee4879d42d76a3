//! BN254 G1: y^2 = x^3 + 3 over GF(p), and the sextic twist
//! G2: y^2 = x^3 + 3/(9 + u) over GF(p^2).

use super::curve::CurveParams;
use super::projective_point::JacobianPoint;
use crate::fields::Field;
use crate::fields::bn254::{Bn254Fp, Bn254Fp2};
use crate::fields::fp2::Fp2;

const ORDER: [u64; 4] = [
    0x43E1F593F0000001,
    0x2833E84879B97091,
    0xB85045B68181585D,
    0x30644E72E131A029,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254G1;

impl CurveParams for Bn254G1 {
    type Base = Bn254Fp;

    const A: Bn254Fp = Bn254Fp::ZERO;
    const B: Bn254Fp = Bn254Fp::from_regular([3, 0, 0, 0]);
    const HAS_A: bool = false;

    const GENERATOR: (Bn254Fp, Bn254Fp) = (
        Bn254Fp::from_regular([1, 0, 0, 0]),
        Bn254Fp::from_regular([2, 0, 0, 0]),
    );

    const ORDER: &'static [u64] = &ORDER;
    const COFACTOR: &'static [u64] = &[1];
    const NAME: &'static str = "bn254::G1";

    // The curve has prime order.
    fn clear_cofactor(P: &JacobianPoint<Self>) -> JacobianPoint<Self> {
        *P
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254G2;

impl CurveParams for Bn254G2 {
    type Base = Bn254Fp2;

    const A: Bn254Fp2 = Bn254Fp2::ZERO;
    const B: Bn254Fp2 = Fp2::new(
        Bn254Fp::from_regular([
            0x3267E6DC24A138E5,
            0xB5B4C5E559DBEFA3,
            0x81BE18991BE06AC3,
            0x2B149D40CEB8AAAE,
        ]),
        Bn254Fp::from_regular([
            0xE4A2BD0685C315D2,
            0xA74FA084E52D1852,
            0xCD2CAFADEED8FDF4,
            0x009713B03AF0FED4,
        ]),
    );
    const HAS_A: bool = false;

    const GENERATOR: (Bn254Fp2, Bn254Fp2) = (
        Fp2::new(
            Bn254Fp::from_regular([
                0x46DEBD5CD992F6ED,
                0x674322D4F75EDADD,
                0x426A00665E5C4479,
                0x1800DEEF121F1E76,
            ]),
            Bn254Fp::from_regular([
                0x97E485B7AEF312C2,
                0xF1AA493335A9E712,
                0x7260BFB731FB5D25,
                0x198E9393920D483A,
            ]),
        ),
        Fp2::new(
            Bn254Fp::from_regular([
                0x4CE6CC0166FA7DAA,
                0xE3D1E7690C43D37B,
                0x4AAB71808DCB408F,
                0x12C85EA5DB8C6DEB,
            ]),
            Bn254Fp::from_regular([
                0x55ACDADCD122975B,
                0xBC4B313370B38EF3,
                0xEC9E99AD690C3395,
                0x090689D0585FF075,
            ]),
        ),
    );

    const ORDER: &'static [u64] = &ORDER;
    const COFACTOR: &'static [u64] = &[
        0x345F2299C0F9FA8D,
        0x06CEECDA572A2489,
        0xB85045B68181585E,
        0x30644E72E131A029,
    ];
    const NAME: &'static str = "bn254::G2";
}

pub type Bn254G1Point = JacobianPoint<Bn254G1>;
pub type Bn254G2Point = JacobianPoint<Bn254G2>;
