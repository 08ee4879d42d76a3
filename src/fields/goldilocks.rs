//! The 64-bit Goldilocks field, q = 2^64 - 2^32 + 1, which runs the
//! single-word Montgomery reduction.

use super::fp::{FieldParams, Fp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoldilocksParams;

impl FieldParams<1> for GoldilocksParams {
    const MODULUS: [u64; 1] = [0xFFFFFFFF00000001];

    // 7^((q - 1) / 2^32)
    const ROOT_OF_UNITY: [u64; 1] = [0x185629DCDA58878C];

    const NAME: &'static str = "goldilocks::Fp";
}

pub type Goldilocks = Fp<GoldilocksParams, 1>;
