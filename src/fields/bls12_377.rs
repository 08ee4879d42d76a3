//! Fields of the BLS12-377 curve.

use super::fp::{FieldParams, Fp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12377FpParams;

impl FieldParams<6> for Bls12377FpParams {
    const MODULUS: [u64; 6] = [
        0x8508C00000000001,
        0x170B5D4430000000,
        0x1EF3622FBA094800,
        0x1A22D9F300F5138F,
        0xC63B05C06CA1493B,
        0x01AE3A4617C510EA,
    ];

    // 5^((p - 1) / 2^46)
    const ROOT_OF_UNITY: [u64; 6] = [
        0xBA6B5EF26B00BBE8,
        0x1EA03D28CC795186,
        0xC6EAA2BC56228AC4,
        0xD14FCACA7022110E,
        0x8FE9DEE6AA914B0A,
        0x00382D3D99CDBC5D,
    ];

    const NAME: &'static str = "bls12_377::Fp";
}

/// The scalar field, of prime order r.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12377FrParams;

impl FieldParams<4> for Bls12377FrParams {
    const MODULUS: [u64; 4] = [
        0x0A11800000000001,
        0x59AA76FED0000001,
        0x60B44D1E5C37B001,
        0x12AB655E9A2CA556,
    ];

    // 11^((r - 1) / 2^47)
    const ROOT_OF_UNITY: [u64; 4] = [
        0x726869AAA623875C,
        0xE5C1F1B84059D4CD,
        0x480B0DA08D4FF39B,
        0x0F4F58D6B338DB36,
    ];

    const NAME: &'static str = "bls12_377::Fr";
}

pub type Bls12377Fp = Fp<Bls12377FpParams, 6>;
pub type Bls12377Fr = Fp<Bls12377FrParams, 4>;
