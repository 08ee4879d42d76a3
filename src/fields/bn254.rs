//! Fields of the BN254 curve and its extension tower:
//! GF(p^2) = GF(p)[u]/(u^2 + 1), GF(p^6) = GF(p^2)[v]/(v^3 - (9 + u)),
//! GF(p^12) = GF(p^6)[w]/(w^2 - v).

use super::Field;
use super::fp::{FieldParams, Fp};
use super::fp2::{Fp2, Fp2Config};
use super::fp6::{Fp6, Fp6Config};
use super::fp12::{Fp12, Fp12Config};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254FpParams;

impl FieldParams<4> for Bn254FpParams {
    const MODULUS: [u64; 4] = [
        0x3C208C16D87CFD47,
        0x97816A916871CA8D,
        0xB85045B68181585D,
        0x30644E72E131A029,
    ];

    // p = 3 mod 4, so the 2-Sylow subgroup is {1, -1}
    const ROOT_OF_UNITY: [u64; 4] = [
        0x3C208C16D87CFD46,
        0x97816A916871CA8D,
        0xB85045B68181585D,
        0x30644E72E131A029,
    ];

    const NAME: &'static str = "bn254::Fp";
}

/// The scalar field, of prime order r.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254FrParams;

impl FieldParams<4> for Bn254FrParams {
    const MODULUS: [u64; 4] = [
        0x43E1F593F0000001,
        0x2833E84879B97091,
        0xB85045B68181585D,
        0x30644E72E131A029,
    ];

    // 5^((r - 1) / 2^28)
    const ROOT_OF_UNITY: [u64; 4] = [
        0x9BD61B6E725B19F0,
        0x402D111E41112ED4,
        0x00E0A7EB8EF62ABC,
        0x2A3C09F0A58A7E85,
    ];

    const NAME: &'static str = "bn254::Fr";
}

pub type Bn254Fp = Fp<Bn254FpParams, 4>;
pub type Bn254Fr = Fp<Bn254FrParams, 4>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254Fp2Config;

impl Fp2Config for Bn254Fp2Config {
    type Fp = Bn254Fp;

    const NONRESIDUE: Bn254Fp = Bn254Fp::from_regular([
        0x3C208C16D87CFD46,
        0x97816A916871CA8D,
        0xB85045B68181585D,
        0x30644E72E131A029,
    ]);

    #[inline(always)]
    fn mul_fp_by_nonresidue(x: &Bn254Fp) -> Bn254Fp {
        -*x
    }
}

pub type Bn254Fp2 = Fp2<Bn254Fp2Config>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254Fp6Config;

impl Fp6Config for Bn254Fp6Config {
    type Fp2Config = Bn254Fp2Config;

    // 9 + u
    const NONRESIDUE: Bn254Fp2 = Fp2::new(
        Bn254Fp::from_regular([9, 0, 0, 0]),
        Bn254Fp::from_regular([1, 0, 0, 0]),
    );

    const NONRESIDUE_INV: Bn254Fp2 = Fp2::new(
        Bn254Fp::from_regular([
            0x8E3855034733BBD1,
            0xA1928902B8EA8194,
            0x50CA36ACB4F65E7F,
            0x2E9F1362305EA3AB,
        ]),
        Bn254Fp::from_regular([
            0x1EF69C66BCE9B020,
            0xF21B7C8D3CB039CF,
            0x1499BE5E509E8F8F,
            0x20753ADCA9C6BFB8,
        ]),
    );

    /// (9 + u)(a0 + a1 u) = (9 a0 - a1) + (9 a1 + a0) u
    #[inline(always)]
    fn mul_fp2_by_nonresidue(x: &Bn254Fp2) -> Bn254Fp2 {
        let mut t0 = x.c0;
        t0.set_double().set_double().set_double();
        t0 += x.c0;
        let mut t1 = x.c1;
        t1.set_double().set_double().set_double();
        t1 += x.c1;
        Fp2::new(t0 - x.c1, t1 + x.c0)
    }
}

pub type Bn254Fp6 = Fp6<Bn254Fp6Config>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254Fp12Config;

impl Fp12Config for Bn254Fp12Config {
    type Fp6Config = Bn254Fp6Config;

    const FROBENIUS_COEFF: [Bn254Fp2; 6] = [
        Bn254Fp2::ONE,
        Fp2::new(
            Bn254Fp::from_regular([
                0xD60B35DADCC9E470,
                0x5C521E08292F2176,
                0xE8B99FDD76E68B60,
                0x1284B71C2865A7DF,
            ]),
            Bn254Fp::from_regular([
                0xCA5CF05F80F362AC,
                0x747992778EEEC7E5,
                0xA6327CFE12150B8E,
                0x246996F3B4FAE7E6,
            ]),
        ),
        Fp2::new(
            Bn254Fp::from_regular([
                0x99E39557176F553D,
                0xB78CC310C2C3330C,
                0x4C0BEC3CF559B143,
                0x2FB347984F7911F7,
            ]),
            Bn254Fp::from_regular([
                0x1665D51C640FCBA2,
                0x32AE2A1D0B7C9DCE,
                0x4BA4CC8BD75A0794,
                0x16C9E55061EBAE20,
            ]),
        ),
        Fp2::new(
            Bn254Fp::from_regular([
                0xDC54014671A0135A,
                0xDBAAE0EDA9C95998,
                0xDC5EC698B6E2F9B9,
                0x063CF305489AF5DC,
            ]),
            Bn254Fp::from_regular([
                0x82D37F632623B0E3,
                0x21807DC98FA25BD2,
                0x0704B5A7EC796F2B,
                0x07C03CBCAC41049A,
            ]),
        ),
        Fp2::new(
            Bn254Fp::from_regular([
                0x848A1F55921EA762,
                0xD33365F7BE94EC72,
                0x80F3C0B75A181E84,
                0x05B54F5E64EEA801,
            ]),
            Bn254Fp::from_regular([
                0xC13B4711CD2B8126,
                0x3685D2EA1BDEC763,
                0x9F3A80B03B0B1C92,
                0x2C145EDBE7FD8AEE,
            ]),
        ),
        Fp2::new(
            Bn254Fp::from_regular([
                0x2EA2C810EAB7692F,
                0x425C459B55AA1BD3,
                0xE93A3661A4353FF4,
                0x0183C1E74F798649,
            ]),
            Bn254Fp::from_regular([
                0x24C6B8EE6E0C2C4B,
                0xB080CB99678E2AC0,
                0xA27FB246C7729F7D,
                0x12ACF2CA76FD0675,
            ]),
        ),
    ];

    const FROBENIUS_SQUARE_COEFF: [Bn254Fp; 6] = [
        Bn254Fp::ONE,
        Bn254Fp::from_regular([
            0xE4BD44E5607CFD49,
            0xC28F069FBB966E3D,
            0x5E6DD9E7E0ACCCB0,
            0x30644E72E131A029,
        ]),
        Bn254Fp::from_regular([
            0xE4BD44E5607CFD48,
            0xC28F069FBB966E3D,
            0x5E6DD9E7E0ACCCB0,
            0x30644E72E131A029,
        ]),
        Bn254Fp::from_regular([
            0x3C208C16D87CFD46,
            0x97816A916871CA8D,
            0xB85045B68181585D,
            0x30644E72E131A029,
        ]),
        Bn254Fp::from_regular([
            0x5763473177FFFFFE,
            0xD4F263F1ACDB5C4F,
            0x59E26BCEA0D48BAC,
            0x0000000000000000,
        ]),
        Bn254Fp::from_regular([
            0x5763473177FFFFFF,
            0xD4F263F1ACDB5C4F,
            0x59E26BCEA0D48BAC,
            0x0000000000000000,
        ]),
    ];
}

pub type Bn254Fp12 = Fp12<Bn254Fp12Config>;
