use core::fmt;

use rand_core::{CryptoRng, RngCore};

use super::curve::CurveParams;
use super::point::AffinePoint;
use crate::error::{FieldError, Result};
use crate::fields::Field;

/// Jacobian representation of a point (X : Y : Z), standing for the affine
/// point (X/Z^2, Y/Z^3). Any point with Z == 0 is the point-at-infinity.
#[derive(Clone, Copy)]
pub struct JacobianPoint<C: CurveParams> {
    pub X: C::Base,
    pub Y: C::Base,
    pub Z: C::Base,
}

impl<C: CurveParams> JacobianPoint<C> {
    /// The point-at-infinity (neutral element of the group law).
    pub const INFINITY: Self = Self {
        X: C::Base::ONE,
        Y: C::Base::ONE,
        Z: C::Base::ZERO,
    };

    /// Create a new point.
    /// WARNING no check is made on the validity of the point.
    pub const fn new(X: C::Base, Y: C::Base, Z: C::Base) -> Self {
        Self { X, Y, Z }
    }

    pub fn generator() -> Self {
        Self::from_affine(&AffinePoint::generator())
    }

    pub fn from_affine(P: &AffinePoint<C>) -> Self {
        let mut R = Self::new(P.X, P.Y, C::Base::ONE);
        R.set_cond(&Self::INFINITY, P.is_zero());
        R
    }

    /// Normalise to affine coordinates with a single inversion.
    pub fn to_affine(&self) -> AffinePoint<C> {
        let zinv = self.Z.invert();
        let zinv2 = zinv.square();
        AffinePoint::new(self.X * zinv2, self.Y * zinv2 * zinv)
            .with_infinity(self.is_zero() != 0)
    }

    /// Normalise many points at the cost of one inversion.
    pub fn batch_to_affine(points: &[Self]) -> Vec<AffinePoint<C>> {
        let mut zs: Vec<C::Base> = points.iter().map(|P| P.Z).collect();
        C::Base::batch_invert(&mut zs);
        points
            .iter()
            .zip(zs.iter())
            .map(|(P, zinv)| {
                let zinv2 = zinv.square();
                AffinePoint::new(P.X * zinv2, P.Y * zinv2 * *zinv)
                    .with_infinity(P.is_zero() != 0)
            })
            .collect()
    }

    /// Negate the point in place.
    pub fn set_neg(&mut self) {
        self.Y.set_neg();
    }

    /// Copy rhs into self if ctl == `0xFFFFFFFF`.
    /// Do nothing is ctl == `0x00000000`.
    pub fn set_cond(&mut self, rhs: &Self, ctl: u32) {
        self.X.set_cond(&rhs.X, ctl);
        self.Y.set_cond(&rhs.Y, ctl);
        self.Z.set_cond(&rhs.Z, ctl);
    }

    /// Negate this point if ctl == `0xFFFFFFFF`.
    pub fn set_condneg(&mut self, ctl: u32) {
        self.Y.set_condneg(ctl);
    }

    /// Return `0xFFFFFFFF` if self is the point-at-infinity, `0x00000000` otherwise.
    pub fn is_zero(&self) -> u32 {
        self.Z.is_zero()
    }

    /// Return `0xFFFFFFFF` if self and rhs represent the same point.
    pub fn equals(&self, rhs: &Self) -> u32 {
        // P1 == P2 if and only if both are infinity, or neither is and
        //   X1*Z2^2 == X2*Z1^2 AND Y1*Z2^3 == Y2*Z1^3
        let lz = self.is_zero();
        let rz = rhs.is_zero();
        let z1z1 = self.Z.square();
        let z2z2 = rhs.Z.square();
        let vx = (self.X * z2z2).equals(&(rhs.X * z1z1));
        let vy = (self.Y * z2z2 * rhs.Z).equals(&(rhs.Y * z1z1 * self.Z));
        (lz & rz) | (!lz & !rz & vx & vy)
    }

    /// Return `0xFFFFFFFF` if Y^2 = X^3 + A*X*Z^4 + B*Z^6, which also holds
    /// for the point-at-infinity.
    pub fn is_on_curve(&self) -> u32 {
        let z2 = self.Z.square();
        let z4 = z2.square();
        let z6 = z4 * z2;
        let mut rhs = self.X.square() * self.X + C::B * z6;
        if C::HAS_A {
            rhs += C::A * self.X * z4;
        }
        self.Y.square().equals(&rhs) | self.is_zero()
    }

    /// Return `0xFFFFFFFF` if [r]P is the point-at-infinity.
    pub fn is_in_subgroup(&self) -> u32 {
        self.mul_vartime(C::ORDER).is_zero()
    }

    pub fn clear_cofactor(&self) -> Self {
        C::clear_cofactor(self)
    }

    /// A random point of the prime order subgroup, as a random multiple of
    /// the generator.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let mut buf = vec![0u8; 8 * C::ORDER.len()];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| FieldError::Randomness(Box::new(e)))?;
        let k: Vec<u64> = buf
            .chunks_exact(8)
            .map(|c| u64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
            .collect();
        Ok(Self::generator().mul(&k))
    }
}

impl<C: CurveParams> PartialEq for JacobianPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other) == u32::MAX
    }
}

impl<C: CurveParams> Eq for JacobianPoint<C> {}

impl<C: CurveParams> fmt::Display for JacobianPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_affine())
    }
}

impl<C: CurveParams> fmt::Debug for JacobianPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} : {} : {})", C::NAME, self.X, self.Y, self.Z)
    }
}

impl<C: CurveParams> core::ops::Neg for JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline(always)]
    fn neg(self) -> JacobianPoint<C> {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl<C: CurveParams> core::ops::Neg for &JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline(always)]
    fn neg(self) -> JacobianPoint<C> {
        let mut r = *self;
        r.set_neg();
        r
    }
}

impl<C: CurveParams> From<AffinePoint<C>> for JacobianPoint<C> {
    fn from(P: AffinePoint<C>) -> Self {
        Self::from_affine(&P)
    }
}
