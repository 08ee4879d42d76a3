//! The BLS12377G1_XMD:SHA-256_SSWU suites.

use super::SswuParams;
use crate::elliptic::bls12_377::{Bls12377G1, Bls12377G1Iso, Bls12377G1Isogeny, Bls12377G1Point};
use crate::error::HashToCurveError;
use crate::fields::Field;
use crate::fields::bls12_377::{Bls12377Fp, Bls12377FpParams};

pub const SUITE_RO: &str = "BLS12377G1_XMD:SHA-256_SSWU_RO_";
pub const SUITE_NU: &str = "BLS12377G1_XMD:SHA-256_SSWU_NU_";

#[derive(Clone, Copy, Debug)]
pub struct Bls12377G1Sswu;

impl SswuParams<6> for Bls12377G1Sswu {
    type Params = Bls12377FpParams;
    type Iso = Bls12377G1Iso;
    type Curve = Bls12377G1;
    type Isogeny = Bls12377G1Isogeny;

    // -11
    const Z: Bls12377Fp = Bls12377Fp::from_regular([
        0x8508BFFFFFFFFFF6,
        0x170B5D4430000000,
        0x1EF3622FBA094800,
        0x1A22D9F300F5138F,
        0xC63B05C06CA1493B,
        0x01AE3A4617C510EA,
    ]);

    const C6: Bls12377Fp = Bls12377Fp::from_regular([
        0x8C382ED4842D29AF,
        0xE8F55B4C58132AE2,
        0x3D243A1D9DA7D2A9,
        0xF1C9CACF3D44AC21,
        0x3C182950CF089D71,
        0x01AD52FD9C8819E4,
    ]);

    const C7: Bls12377Fp = Bls12377Fp::from_regular([
        0xD2D01CEE9C2A4315,
        0x9CB3EFC6E43768FE,
        0x0B19EC24A680121D,
        0xD7B2C85E52B398AB,
        0xC48C6B328C0C0E05,
        0x00DA473E7B43EFEC,
    ]);

    const L: usize = 64;

    /// -11*x = -(8*x + 2*x + x)
    #[inline(always)]
    fn mul_by_z(x: &Bls12377Fp) -> Bls12377Fp {
        let x2 = x.double();
        let x8 = x2.double().double();
        -(x8 + x2 + *x)
    }
}

/// Hash to G1 with the random oracle construction.
pub fn hash_to_g1(msg: &[u8], dst: &[u8]) -> Result<Bls12377G1Point, HashToCurveError> {
    super::hash_to_curve::<Bls12377G1Sswu, 6>(msg, dst)
}

/// Hash to G1 with the non-uniform encoding.
pub fn encode_to_g1(msg: &[u8], dst: &[u8]) -> Result<Bls12377G1Point, HashToCurveError> {
    super::encode_to_curve::<Bls12377G1Sswu, 6>(msg, dst)
}
