//! Quadratic extension GF(q^2) = GF(q)[u] / (u^2 - β).

use core::fmt;
use core::fmt::Debug;
use core::ops::{AddAssign, MulAssign, SubAssign};

use rand_core::{CryptoRng, RngCore};

use super::{Field, impl_field_ops};
use crate::error::{FieldError, Result};

/// Parameters of a quadratic extension.
pub trait Fp2Config: 'static + Copy + Clone + Debug + PartialEq + Eq + Send + Sync {
    type Fp: Field;

    /// β, with u^2 = β.
    const NONRESIDUE: Self::Fp;

    /// Multiply a base field element by β. Override when β is small.
    #[inline(always)]
    fn mul_fp_by_nonresidue(x: &Self::Fp) -> Self::Fp {
        Self::NONRESIDUE * *x
    }
}

/// An element c0 + c1 * u.
#[derive(Clone, Copy)]
pub struct Fp2<C: Fp2Config> {
    pub c0: C::Fp,
    pub c1: C::Fp,
}

impl<C: Fp2Config> Fp2<C> {
    pub const fn new(c0: C::Fp, c1: C::Fp) -> Self {
        Self { c0, c1 }
    }

    /// Embed a base field element.
    pub const fn from_base(c0: C::Fp) -> Self {
        Self { c0, c1: C::Fp::ZERO }
    }

    /// Set self to c0 - c1 * u, the image under the non-trivial automorphism.
    pub fn set_conjugate(&mut self) -> &mut Self {
        self.c1.set_neg();
        self
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// c0^2 - β c1^2
    pub fn norm(&self) -> C::Fp {
        self.c0.square() - C::mul_fp_by_nonresidue(&self.c1.square())
    }

    pub fn mul_by_fp(&self, k: &C::Fp) -> Self {
        Self::new(self.c0 * *k, self.c1 * *k)
    }
}

impl<C: Fp2Config> Field for Fp2<C> {
    const ZERO: Self = Self::new(C::Fp::ZERO, C::Fp::ZERO);
    const ONE: Self = Self::new(C::Fp::ONE, C::Fp::ZERO);
    const ENCODED_LENGTH: usize = 2 * C::Fp::ENCODED_LENGTH;

    fn is_zero(&self) -> u32 {
        self.c0.is_zero() & self.c1.is_zero()
    }

    fn equals(&self, rhs: &Self) -> u32 {
        self.c0.equals(&rhs.c0) & self.c1.equals(&rhs.c1)
    }

    fn set_neg(&mut self) -> &mut Self {
        self.c0.set_neg();
        self.c1.set_neg();
        self
    }

    fn set_double(&mut self) -> &mut Self {
        self.c0.set_double();
        self.c1.set_double();
        self
    }

    /// Complex squaring, 2M:
    /// c0 = (a0 + a1)(a0 + β a1) - a0 a1 - β a0 a1, c1 = 2 a0 a1
    fn set_square(&mut self) -> &mut Self {
        let v0 = self.c0 * self.c1;
        let t = (self.c0 + self.c1) * (self.c0 + C::mul_fp_by_nonresidue(&self.c1));
        self.c0 = t - v0 - C::mul_fp_by_nonresidue(&v0);
        self.c1 = v0.double();
        self
    }

    fn set_invert(&mut self) -> &mut Self {
        let mut t = self.norm();
        t.set_invert();
        self.c0 *= t;
        self.c1 *= t;
        self.c1.set_neg();
        self
    }

    fn set_cond(&mut self, rhs: &Self, ctl: u32) {
        self.c0.set_cond(&rhs.c0, ctl);
        self.c1.set_cond(&rhs.c1, ctl);
    }

    fn set_random<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<&mut Self> {
        self.c0.set_random(rng)?;
        self.c1.set_random(rng)?;
        Ok(self)
    }

    fn encode_into(&self, out: &mut [u8]) {
        let n = C::Fp::ENCODED_LENGTH;
        self.c1.encode_into(&mut out[..n]);
        self.c0.encode_into(&mut out[n..2 * n]);
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() != Self::ENCODED_LENGTH {
            return Err(FieldError::InvalidLength {
                expected: Self::ENCODED_LENGTH,
                found: buf.len(),
            });
        }
        let n = C::Fp::ENCODED_LENGTH;
        let c1 = C::Fp::decode(&buf[..n])?;
        let c0 = C::Fp::decode(&buf[n..])?;
        Ok(Self::new(c0, c1))
    }

    fn from_u64(v: u64) -> Self {
        Self::from_base(C::Fp::from_u64(v))
    }
}

impl<C: Fp2Config> AddAssign for Fp2<C> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.c0 += rhs.c0;
        self.c1 += rhs.c1;
    }
}

impl<C: Fp2Config> SubAssign for Fp2<C> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.c0 -= rhs.c0;
        self.c1 -= rhs.c1;
    }
}

impl<C: Fp2Config> MulAssign for Fp2<C> {
    /// Karatsuba, 3M.
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        self.c0 = v0 + C::mul_fp_by_nonresidue(&v1);
        self.c1 = c1;
    }
}

impl_field_ops!([C: Fp2Config] Fp2<C>);

impl<C: Fp2Config> Default for Fp2<C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C: Fp2Config> fmt::Display for Fp2<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}*u", self.c0, self.c1)
    }
}

impl<C: Fp2Config> fmt::Debug for Fp2<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp2({self})")
    }
}
