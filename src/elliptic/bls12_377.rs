//! BLS12-377 G1: y^2 = x^3 + 1 over GF(p), and the curve
//! E': y^2 = x^3 + A'*x + 22 which is 2-isogenous to it and has A' != 0,
//! as needed by the simplified SWU map.

use super::curve::CurveParams;
use super::isogeny::IsogenyMap;
use super::projective_point::JacobianPoint;
use crate::fields::Field;
use crate::fields::bls12_377::Bls12377Fp;

/// Curve parameter x of the BLS12 family.
pub const BLS12_377_X: u64 = 0x8508C00000000001;

const ORDER: [u64; 4] = [
    0x0A11800000000001,
    0x59AA76FED0000001,
    0x60B44D1E5C37B001,
    0x12AB655E9A2CA556,
];

const COFACTOR: [u64; 2] = [0x0000000000000000, 0x170B5D4430000000];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12377G1;

impl CurveParams for Bls12377G1 {
    type Base = Bls12377Fp;

    const A: Bls12377Fp = Bls12377Fp::ZERO;
    const B: Bls12377Fp = Bls12377Fp::ONE;
    const HAS_A: bool = false;

    const GENERATOR: (Bls12377Fp, Bls12377Fp) = (
        Bls12377Fp::from_regular([
            0xEAB9B16EB21BE9EF,
            0xD5481512FFCD394E,
            0x188282C8BD37CB5C,
            0x85951E2CAA9D41BB,
            0xC8FC6225BF87FF54,
            0x008848DEFE740A67,
        ]),
        Bls12377Fp::from_regular([
            0xFD82DE55559C8EA6,
            0xC2FE3D3634A9591A,
            0x6D182AD44FB82305,
            0xBD7FB348CA3E52D9,
            0x1F674F5D30AFEEC4,
            0x01914A69C5102EFF,
        ]),
    );

    const ORDER: &'static [u64] = &ORDER;
    const COFACTOR: &'static [u64] = &COFACTOR;
    const NAME: &'static str = "bls12_377::G1";

    /// [1 - x]P, which lands in G1 for every point of the curve.
    fn clear_cofactor(P: &JacobianPoint<Self>) -> JacobianPoint<Self> {
        *P - P.mul_vartime(&[BLS12_377_X])
    }
}

pub type Bls12377G1Point = JacobianPoint<Bls12377G1>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12377G1Iso;

impl CurveParams for Bls12377G1Iso {
    type Base = Bls12377Fp;

    const A: Bls12377Fp = Bls12377Fp::from_regular([
        0xB9857FFFFFFFFFF2,
        0x0A0BF847BFFFFFF8,
        0x860F40FDE03873FC,
        0x6212919CEFB9B37E,
        0x34B3C4687866D161,
        0x01AE3A4617C510EA,
    ]);
    const B: Bls12377Fp = Bls12377Fp::from_regular([22, 0, 0, 0, 0, 0]);
    const HAS_A: bool = true;

    const GENERATOR: (Bls12377Fp, Bls12377Fp) = (
        Bls12377Fp::from_regular([
            0xFEFB1604F2AFE426,
            0xDE12791C7BD2B80F,
            0xC24CF11B85253615,
            0x304F04EA684D79A4,
            0x6153799AE6B5E9FF,
            0x0080B18BE92AC389,
        ]),
        Bls12377Fp::from_regular([
            0xEC9E8105CC34BBB5,
            0xBA7730282A20528E,
            0xE5EAAF2EF27B327B,
            0xD42D8DE9E6EA1304,
            0x7190F04FBFED9BC9,
            0x003D6484E4EC29DB,
        ]),
    );

    const ORDER: &'static [u64] = &ORDER;
    const COFACTOR: &'static [u64] = &COFACTOR;
    const NAME: &'static str = "bls12_377::G1'";
}

/// The 2-isogeny E' -> E.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12377G1Isogeny;

impl IsogenyMap for Bls12377G1Isogeny {
    type Domain = Bls12377G1Iso;
    type Codomain = Bls12377G1;

    const X_NUM: &'static [Bls12377Fp] = &[
        Bls12377Fp::from_regular([
            0x0000000000000000,
            0xDD6EF419B8000000,
            0x82C4BB2E1A3C84FF,
            0x0A661FD85974D6AA,
            0x0D65810BEBA93DBB,
            0x0142ABB491D3CCB0,
        ]),
        Bls12377Fp::from_regular([
            0x4284600000000001,
            0x22910BE648000000,
            0xE2F689A3CB86F600,
            0x30CD57BE9A2CA555,
            0x04D9D782EE8A7B76,
            0x0000000000000000,
        ]),
        Bls12377Fp::from_regular([
            0x63C6900000000001,
            0x114885F324000000,
            0x573689A3CB86F600,
            0x539A237640B7CEAB,
            0x14AC44505178F6EC,
            0x0142ABB491D3CCB0,
        ]),
    ];

    const X_DEN: &'static [Bls12377Fp] = &[Bls12377Fp::from_regular([
        0x0A11800000000004,
        0x8A442F9920000001,
        0x8BDA268F2E1BD800,
        0xC3355EFA68B29557,
        0x13675E0BBA29EDD8,
        0x0000000000000000,
    ])];

    const Y_NUM: &'static [Bls12377Fp] = &[
        Bls12377Fp::from_regular([
            0x63C68FFFFFFFFFFF,
            0x114885F324000000,
            0x573689A3CB86F600,
            0x539A237640B7CEAB,
            0x14AC44505178F6EC,
            0x0142ABB491D3CCB0,
        ]),
        Bls12377Fp::from_regular([
            0x0A11800000000002,
            0x8481584814000001,
            0xF6FAF06C327B4380,
            0x9A46644922460E73,
            0x6AF848E30C1B7822,
            0x0035C748C2F8A21D,
        ]),
        Bls12377Fp::from_regular([
            0xA64AF00000000002,
            0x3F5F407B84000000,
            0x63EB7F8D8E4F1500,
            0xD645709767BD81C8,
            0x6A6446249C205DCE,
            0x00D71D230BE28875,
        ]),
        Bls12377Fp::from_regular([
            0x7467A80000000001,
            0x1429F19BAA000000,
            0x3B14F5E9C2C81F00,
            0xB6DE7EB4A0D6711D,
            0x6D73A5085F0D2013,
            0x017872FD54CC6ECD,
        ]),
    ];

    const Y_DEN: &'static [Bls12377Fp] = &[
        Bls12377Fp::from_regular([
            0x8508BFFFFFFFFFF9,
            0x170B5D4430000000,
            0x1EF3622FBA094800,
            0x1A22D9F300F5138F,
            0xC63B05C06CA1493B,
            0x01AE3A4617C510EA,
        ]),
        Bls12377Fp::from_regular([
            0x3C6900000000000C,
            0x3D991D96C0000006,
            0x471CE75B14A71003,
            0x934039DE742F800D,
            0x746C34465CFB9314,
            0x0000000000000000,
        ]),
        Bls12377Fp::from_regular([
            0x1E3480000000000C,
            0x9ECC8ECB60000003,
            0xA38E73AD8A538801,
            0x49A01CEF3A17C006,
            0x3A361A232E7DC98A,
            0x0000000000000000,
        ]),
    ];
}
