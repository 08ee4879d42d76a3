use core::fmt::Debug;

use super::curve::CurveParams;
use super::point::AffinePoint;
use super::projective_point::JacobianPoint;
use crate::fields::Field;

type Base<I> = <<I as IsogenyMap>::Domain as CurveParams>::Base;

/// A rational map (x, y) -> (x_num(x) / x_den(x), y * y_num(x) / y_den(x))
/// between two curves over the same field.
///
/// Coefficients are listed from the constant term upwards. Both
/// denominators are monic and their leading 1 is left out.
pub trait IsogenyMap: 'static + Copy + Clone + Debug + Send + Sync {
    type Domain: CurveParams;
    type Codomain: CurveParams<Base = Base<Self>>;

    const X_NUM: &'static [Base<Self>];
    const X_DEN: &'static [Base<Self>];
    const Y_NUM: &'static [Base<Self>];
    const Y_DEN: &'static [Base<Self>];

    /// Image of an affine point. Points of the kernel, where a denominator
    /// vanishes, map to the point-at-infinity.
    fn map_affine(P: &AffinePoint<Self::Domain>) -> AffinePoint<Self::Codomain> {
        let x = P.X;
        let xn = horner(Self::X_NUM, &x, false);
        let yn = horner(Self::Y_NUM, &x, false);
        let mut den = [horner(Self::X_DEN, &x, true), horner(Self::Y_DEN, &x, true)];
        let kernel = den[0].is_zero() | den[1].is_zero();
        <Base<Self> as Field>::batch_invert(&mut den);

        let R = AffinePoint::new(xn * den[0], P.Y * yn * den[1]);
        R.with_infinity((kernel | P.is_zero()) != 0)
    }

    fn map(P: &JacobianPoint<Self::Domain>) -> JacobianPoint<Self::Codomain> {
        Self::map_affine(&P.to_affine()).to_jacobian()
    }
}

/// Evaluate sum(c[i] * x^i), adding x^len(c) when `monic` is set.
pub fn horner<F: Field>(c: &[F], x: &F, monic: bool) -> F {
    let (last, rest) = match c.split_last() {
        Some(s) => s,
        None => return if monic { F::ONE } else { F::ZERO },
    };
    let mut acc = *last;
    if monic {
        acc += *x;
    }
    for ci in rest.iter().rev() {
        acc *= *x;
        acc += *ci;
    }
    acc
}
