use core::fmt;

use rand_core::{CryptoRng, RngCore};

use super::curve::CurveParams;
use super::projective_point::JacobianPoint;
use crate::error::{FieldError, Result};
use crate::fields::Field;
use crate::utilities::ct::ct_mask_from_bool;

/// Affine representation of a point (x, y), with a flag for the
/// point-at-infinity.
#[derive(Clone, Copy)]
pub struct AffinePoint<C: CurveParams> {
    pub X: C::Base,
    pub Y: C::Base,
    infinity: u32,
}

impl<C: CurveParams> AffinePoint<C> {
    /// The neutral point of the group.
    pub const INFINITY: Self = Self {
        X: C::Base::ZERO,
        Y: C::Base::ZERO,
        infinity: u32::MAX,
    };

    /// Length in bytes of the encoding X || Y.
    pub const ENCODED_LENGTH: usize = 2 * C::Base::ENCODED_LENGTH;

    /// Create a point from coordinates. WARNING: no check is made on the point.
    pub const fn new(X: C::Base, Y: C::Base) -> Self {
        Self { X, Y, infinity: 0 }
    }

    /// Create a point from coordinates, returning `None` if (X, Y) is not on
    /// the curve.
    pub fn new_checked(X: C::Base, Y: C::Base) -> Option<Self> {
        let P = Self::new(X, Y);
        (P.is_on_curve() == u32::MAX).then_some(P)
    }

    /// The generator of the prime order subgroup.
    pub fn generator() -> Self {
        Self::new(C::GENERATOR.0, C::GENERATOR.1)
    }

    /// Returns `0xFFFFFFFF` for the point-at-infinity and `0x00000000` otherwise.
    pub fn is_zero(&self) -> u32 {
        self.infinity
    }

    /// Returns `0xFFFFFFFF` if y^2 = x^3 + A*x + B holds or the point is the
    /// point-at-infinity.
    pub fn is_on_curve(&self) -> u32 {
        self.Y.square().equals(&C::rhs(&self.X)) | self.infinity
    }

    /// Return 0xFFFFFFFF if self and rhs represent the same point.
    pub fn equals(&self, rhs: &Self) -> u32 {
        let e = self.X.equals(&rhs.X) & self.Y.equals(&rhs.Y);
        (self.infinity & rhs.infinity) | (!self.infinity & !rhs.infinity & e)
    }

    pub fn set_neg(&mut self) {
        self.Y.set_neg();
    }

    /// Copy rhs into self if ctl == `0xFFFFFFFF`.
    pub fn set_cond(&mut self, rhs: &Self, ctl: u32) {
        self.X.set_cond(&rhs.X, ctl);
        self.Y.set_cond(&rhs.Y, ctl);
        self.infinity ^= ctl & (self.infinity ^ rhs.infinity);
    }

    pub fn to_jacobian(&self) -> JacobianPoint<C> {
        JacobianPoint::from_affine(self)
    }

    /// Returns `0xFFFFFFFF` if the point lies in the prime order subgroup.
    pub fn is_in_subgroup(&self) -> u32 {
        self.to_jacobian().is_in_subgroup()
    }

    /// A random point of the prime order subgroup.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        Ok(JacobianPoint::<C>::random(rng)?.to_affine())
    }

    /// Encode as X || Y; the point-at-infinity encodes as all zeros.
    pub fn encode(&self) -> Vec<u8> {
        let n = C::Base::ENCODED_LENGTH;
        let mut out = vec![0u8; 2 * n];
        if self.infinity == 0 {
            self.X.encode_into(&mut out[..n]);
            self.Y.encode_into(&mut out[n..]);
        }
        out
    }

    /// Decode X || Y. WARNING: the point is not checked to be on the curve.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() != Self::ENCODED_LENGTH {
            return Err(FieldError::InvalidLength {
                expected: Self::ENCODED_LENGTH,
                found: buf.len(),
            });
        }
        if buf.iter().all(|b| *b == 0) {
            return Ok(Self::INFINITY);
        }
        let n = C::Base::ENCODED_LENGTH;
        Ok(Self::new(C::Base::decode(&buf[..n])?, C::Base::decode(&buf[n..])?))
    }

    pub(crate) fn with_infinity(mut self, infinity: bool) -> Self {
        self.infinity = ct_mask_from_bool(infinity);
        self
    }
}

impl<C: CurveParams> core::ops::Neg for AffinePoint<C> {
    type Output = AffinePoint<C>;

    #[inline(always)]
    fn neg(self) -> AffinePoint<C> {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl<C: CurveParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other) == u32::MAX
    }
}

impl<C: CurveParams> Eq for AffinePoint<C> {}

impl<C: CurveParams> fmt::Display for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity != 0 {
            return f.write_str("infinity");
        }
        write!(f, "({}, {})", self.X, self.Y)
    }
}

impl<C: CurveParams> fmt::Debug for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", C::NAME, self)
    }
}
