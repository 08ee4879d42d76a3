//! Hashing arbitrary messages to points of the prime order subgroup
//! (RFC 9380), through the simplified SWU map onto an isogenous curve.

use crate::elliptic::curve::CurveParams;
use crate::elliptic::isogeny::IsogenyMap;
use crate::elliptic::projective_point::JacobianPoint;
use crate::error::HashToCurveError;
use crate::fields::fp::{FieldParams, Fp};

pub mod bls12_377;
pub mod expand;
pub mod sswu;

pub use expand::{expand_message_xmd, hash_to_field};
pub use sswu::{sqrt_ratio, sswu_map};

/// Parameters of a suite: the SSWU curve E', the isogeny E' -> E and the
/// constants of the square-root-of-ratio routine.
pub trait SswuParams<const N: usize>: 'static {
    type Params: FieldParams<N>;
    type Iso: CurveParams<Base = Fp<Self::Params, N>>;
    type Curve: CurveParams<Base = Fp<Self::Params, N>>;
    type Isogeny: IsogenyMap<Domain = Self::Iso, Codomain = Self::Curve>;

    /// Non-square Z of the map.
    const Z: Fp<Self::Params, N>;

    /// Z^c2 where c2 = (q - 1) / 2^s is odd.
    const C6: Fp<Self::Params, N>;

    /// Z^((c2 + 1) / 2)
    const C7: Fp<Self::Params, N>;

    /// Bytes of expanded message per field element.
    const L: usize;

    fn mul_by_z(x: &Fp<Self::Params, N>) -> Fp<Self::Params, N> {
        *x * Self::Z
    }
}

/// Map a field element to E, without clearing the cofactor.
pub fn map_to_curve<H: SswuParams<N>, const N: usize>(
    u: &Fp<H::Params, N>,
) -> JacobianPoint<H::Curve> {
    let P = sswu_map::<H, N>(u);
    H::Isogeny::map_affine(&P).to_jacobian()
}

/// Non-uniform encoding: a single field element is mapped.
pub fn encode_to_curve<H: SswuParams<N>, const N: usize>(
    msg: &[u8],
    dst: &[u8],
) -> Result<JacobianPoint<H::Curve>, HashToCurveError> {
    log::trace!("encode_to_curve on {} ({} bytes)", <H::Curve as CurveParams>::NAME, msg.len());
    let u = hash_to_field::<H::Params, N>(msg, dst, 1, H::L)?;
    Ok(map_to_curve::<H, N>(&u[0]).clear_cofactor())
}

/// Random oracle: two field elements are mapped and the sum is cleared.
pub fn hash_to_curve<H: SswuParams<N>, const N: usize>(
    msg: &[u8],
    dst: &[u8],
) -> Result<JacobianPoint<H::Curve>, HashToCurveError> {
    log::trace!("hash_to_curve on {} ({} bytes)", <H::Curve as CurveParams>::NAME, msg.len());
    let u = hash_to_field::<H::Params, N>(msg, dst, 2, H::L)?;
    let Q0 = map_to_curve::<H, N>(&u[0]);
    let Q1 = map_to_curve::<H, N>(&u[1]);
    Ok((Q0 + Q1).clear_cofactor())
}
