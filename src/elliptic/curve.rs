use core::fmt::Debug;

use super::projective_point::JacobianPoint;
use crate::fields::Field;

/// Short Weierstrass curve y^2 = x^3 + A*x + B over the field `Base`,
/// together with the prime order subgroup used for pairings.
pub trait CurveParams: 'static + Copy + Clone + Debug + PartialEq + Eq + Send + Sync {
    type Base: Field;

    const A: Self::Base;
    const B: Self::Base;

    /// Set when A is non-zero, so that the group law has to carry the A terms.
    const HAS_A: bool;

    /// Affine coordinates of a generator of the prime order subgroup.
    const GENERATOR: (Self::Base, Self::Base);

    /// Order r of the prime order subgroup, little-endian words.
    const ORDER: &'static [u64];

    /// #E / r, little-endian words.
    const COFACTOR: &'static [u64];

    const NAME: &'static str;

    /// Project a point into the prime order subgroup. Multiplies by the
    /// cofactor unless the curve has a cheaper equivalent.
    fn clear_cofactor(P: &JacobianPoint<Self>) -> JacobianPoint<Self> {
        P.mul_vartime(Self::COFACTOR)
    }

    /// x^3 + A*x + B
    fn rhs(x: &Self::Base) -> Self::Base {
        let mut t = x.square();
        if Self::HAS_A {
            t += Self::A;
        }
        t * *x + Self::B
    }
}
