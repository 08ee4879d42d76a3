//! The simplified Shallue-van de Woestijne-Ulas map, in the straight-line
//! form of RFC 9380, appendix F.2.

use super::SswuParams;
use crate::elliptic::curve::CurveParams;
use crate::elliptic::point::AffinePoint;
use crate::fields::Field;
use crate::fields::fp::{FieldParams, Fp};

/// x^(2^n)
fn square_n<P: FieldParams<N>, const N: usize>(x: &Fp<P, N>, n: u32) -> Fp<P, N> {
    let mut r = *x;
    for _ in 0..n {
        r.set_square();
    }
    r
}

/// Return (0xFFFFFFFF, sqrt(u/v)) if u/v is a square, and
/// (0x00000000, sqrt(Z*u/v)) otherwise (RFC 9380, F.2.1.1).
pub fn sqrt_ratio<H: SswuParams<N>, const N: usize>(
    u: &Fp<H::Params, N>,
    v: &Fp<H::Params, N>,
) -> (u32, Fp<H::Params, N>) {
    let c1 = H::Params::TWO_ADICITY;

    let mut tv1 = H::C6;
    // v^(2^c1 - 1)
    let mut tv2 = *v;
    for _ in 1..c1 {
        tv2.set_square();
        tv2 *= *v;
    }
    let mut tv3 = tv2.square() * *v;
    let mut tv5 = (*u * tv3).pow_vartime(&H::Params::SQRT_EXP) * tv2;
    tv2 = tv5 * *v;
    tv3 = tv5 * *u;
    let mut tv4 = tv3 * tv2;
    let is_qr = square_n(&tv4, c1 - 1).equals(&Fp::<H::Params, N>::ONE);
    tv2 = tv3 * H::C7;
    tv5 = tv4 * tv1;
    tv3 = Fp::<H::Params, N>::select(&tv2, &tv3, is_qr);
    tv4 = Fp::<H::Params, N>::select(&tv5, &tv4, is_qr);

    for i in (2..=c1).rev() {
        let e1 = square_n(&tv4, i - 2).equals(&Fp::<H::Params, N>::ONE);
        tv2 = tv3 * tv1;
        tv1.set_square();
        tv5 = tv4 * tv1;
        tv3 = Fp::<H::Params, N>::select(&tv2, &tv3, e1);
        tv4 = Fp::<H::Params, N>::select(&tv5, &tv4, e1);
    }

    (is_qr, tv3)
}

/// Map a field element to a point of the isogenous curve. Every input,
/// including the exceptional ones, takes the same sequence of operations.
pub fn sswu_map<H: SswuParams<N>, const N: usize>(u: &Fp<H::Params, N>) -> AffinePoint<H::Iso> {
    let a = <H::Iso as CurveParams>::A;
    let b = <H::Iso as CurveParams>::B;

    let tv1 = H::mul_by_z(&u.square());
    let mut tv2 = tv1.square() + tv1;
    let tv3 = b * (tv2 + Fp::<H::Params, N>::ONE);
    // Z when tv2 == 0, -tv2 otherwise
    let tv4 = a * Fp::<H::Params, N>::select(&-tv2, &H::Z, tv2.is_zero());

    let tv6 = tv4.square();
    tv2 = (tv3.square() + a * tv6) * tv3;
    let tv6 = tv6 * tv4;
    tv2 += b * tv6;

    let x = tv1 * tv3;
    let (is_gx1_square, y1) = sqrt_ratio::<H, N>(&tv2, &tv6);
    let y = tv1 * *u * y1;
    let x = Fp::<H::Params, N>::select(&x, &tv3, is_gx1_square);
    let mut y = Fp::<H::Params, N>::select(&y, &y1, is_gx1_square);

    let e1 = u.sgn0() ^ y.sgn0();
    y.set_condneg(e1.wrapping_neg());

    AffinePoint::new(x * tv4.invert(), y)
}
