//! Cubic extension GF(q^6) = GF(q^2)[v] / (v^3 - ξ).

use core::fmt;
use core::fmt::Debug;
use core::ops::{AddAssign, MulAssign, SubAssign};

use rand_core::{CryptoRng, RngCore};

use super::fp2::{Fp2, Fp2Config};
use super::{Field, impl_field_ops};
use crate::error::{FieldError, Result};

/// Parameters of the cubic extension over a quadratic one.
pub trait Fp6Config: 'static + Copy + Clone + Debug + PartialEq + Eq + Send + Sync {
    type Fp2Config: Fp2Config;

    /// ξ, with v^3 = ξ.
    const NONRESIDUE: Fp2<Self::Fp2Config>;

    /// ξ^(-1)
    const NONRESIDUE_INV: Fp2<Self::Fp2Config>;

    /// Multiply by ξ. Override with an addition chain when ξ is small.
    #[inline(always)]
    fn mul_fp2_by_nonresidue(x: &Fp2<Self::Fp2Config>) -> Fp2<Self::Fp2Config> {
        Self::NONRESIDUE * *x
    }

    #[inline(always)]
    fn mul_fp2_by_nonresidue_inv(x: &Fp2<Self::Fp2Config>) -> Fp2<Self::Fp2Config> {
        Self::NONRESIDUE_INV * *x
    }
}

/// An element c0 + c1 * v + c2 * v^2.
#[derive(Clone, Copy)]
pub struct Fp6<C: Fp6Config> {
    pub c0: Fp2<C::Fp2Config>,
    pub c1: Fp2<C::Fp2Config>,
    pub c2: Fp2<C::Fp2Config>,
}

impl<C: Fp6Config> Fp6<C> {
    pub const fn new(
        c0: Fp2<C::Fp2Config>,
        c1: Fp2<C::Fp2Config>,
        c2: Fp2<C::Fp2Config>,
    ) -> Self {
        Self { c0, c1, c2 }
    }

    /// Multiply by v: (c0, c1, c2) -> (ξ c2, c0, c1).
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(C::mul_fp2_by_nonresidue(&self.c2), self.c0, self.c1)
    }

    pub fn mul_by_fp2(&self, k: &Fp2<C::Fp2Config>) -> Self {
        Self::new(self.c0 * *k, self.c1 * *k, self.c2 * *k)
    }

    /// Multiply by the sparse element b0 + b1 * v.
    pub fn mul_by_01(&self, b0: &Fp2<C::Fp2Config>, b1: &Fp2<C::Fp2Config>) -> Self {
        let a = self.c0 * *b0;
        let b = self.c1 * *b1;

        let t0 = C::mul_fp2_by_nonresidue(&((self.c1 + self.c2) * *b1 - b)) + a;
        let t2 = (self.c0 + self.c2) * *b0 - a + b;
        let t1 = (*b0 + *b1) * (self.c0 + self.c1) - a - b;

        Self::new(t0, t1, t2)
    }

    /// Multiply by the sparse element b1 * v.
    pub fn mul_by_1(&self, b1: &Fp2<C::Fp2Config>) -> Self {
        Self::new(
            C::mul_fp2_by_nonresidue(&(self.c2 * *b1)),
            self.c0 * *b1,
            self.c1 * *b1,
        )
    }
}

impl<C: Fp6Config> Field for Fp6<C> {
    const ZERO: Self = Self::new(Fp2::ZERO, Fp2::ZERO, Fp2::ZERO);
    const ONE: Self = Self::new(Fp2::ONE, Fp2::ZERO, Fp2::ZERO);
    const ENCODED_LENGTH: usize = 3 * Fp2::<C::Fp2Config>::ENCODED_LENGTH;

    fn is_zero(&self) -> u32 {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    fn equals(&self, rhs: &Self) -> u32 {
        self.c0.equals(&rhs.c0) & self.c1.equals(&rhs.c1) & self.c2.equals(&rhs.c2)
    }

    fn set_neg(&mut self) -> &mut Self {
        self.c0.set_neg();
        self.c1.set_neg();
        self.c2.set_neg();
        self
    }

    fn set_double(&mut self) -> &mut Self {
        self.c0.set_double();
        self.c1.set_double();
        self.c2.set_double();
        self
    }

    /// Chung-Hasan SQR2.
    fn set_square(&mut self) -> &mut Self {
        let s0 = self.c0.square();
        let s1 = (self.c0 * self.c1).double();
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let s3 = (self.c1 * self.c2).double();
        let s4 = self.c2.square();

        self.c0 = C::mul_fp2_by_nonresidue(&s3) + s0;
        self.c1 = C::mul_fp2_by_nonresidue(&s4) + s1;
        self.c2 = s1 + s2 + s3 - s0 - s4;
        self
    }

    /// Cofactor inversion. The last cofactor is c1^2 - c0 c2; the published
    /// version of this algorithm has the terms of that step swapped.
    fn set_invert(&mut self) -> &mut Self {
        let t0 = self.c0.square();
        let t1 = self.c1.square();
        let t2 = self.c2.square();
        let t3 = self.c0 * self.c1;
        let t4 = self.c0 * self.c2;
        let t5 = self.c1 * self.c2;

        let d0 = t0 - C::mul_fp2_by_nonresidue(&t5);
        let d1 = C::mul_fp2_by_nonresidue(&t2) - t3;
        let d2 = t1 - t4;

        let mut t6 = self.c0 * d0 + C::mul_fp2_by_nonresidue(&(self.c2 * d1 + self.c1 * d2));
        t6.set_invert();

        self.c0 = d0 * t6;
        self.c1 = d1 * t6;
        self.c2 = d2 * t6;
        self
    }

    fn set_cond(&mut self, rhs: &Self, ctl: u32) {
        self.c0.set_cond(&rhs.c0, ctl);
        self.c1.set_cond(&rhs.c1, ctl);
        self.c2.set_cond(&rhs.c2, ctl);
    }

    fn set_random<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<&mut Self> {
        self.c0.set_random(rng)?;
        self.c1.set_random(rng)?;
        self.c2.set_random(rng)?;
        Ok(self)
    }

    fn encode_into(&self, out: &mut [u8]) {
        let n = Fp2::<C::Fp2Config>::ENCODED_LENGTH;
        self.c2.encode_into(&mut out[..n]);
        self.c1.encode_into(&mut out[n..2 * n]);
        self.c0.encode_into(&mut out[2 * n..3 * n]);
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() != Self::ENCODED_LENGTH {
            return Err(FieldError::InvalidLength {
                expected: Self::ENCODED_LENGTH,
                found: buf.len(),
            });
        }
        let n = Fp2::<C::Fp2Config>::ENCODED_LENGTH;
        let c2 = Fp2::decode(&buf[..n])?;
        let c1 = Fp2::decode(&buf[n..2 * n])?;
        let c0 = Fp2::decode(&buf[2 * n..])?;
        Ok(Self::new(c0, c1, c2))
    }

    fn from_u64(v: u64) -> Self {
        Self::new(Fp2::from_u64(v), Fp2::ZERO, Fp2::ZERO)
    }
}

impl<C: Fp6Config> AddAssign for Fp6<C> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.c0 += rhs.c0;
        self.c1 += rhs.c1;
        self.c2 += rhs.c2;
    }
}

impl<C: Fp6Config> SubAssign for Fp6<C> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.c0 -= rhs.c0;
        self.c1 -= rhs.c1;
        self.c2 -= rhs.c2;
    }
}

impl<C: Fp6Config> MulAssign for Fp6<C> {
    /// Karatsuba, 6M.
    fn mul_assign(&mut self, rhs: Self) {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = self.c2 * rhs.c2;

        let c0 = C::mul_fp2_by_nonresidue(&((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - t1 - t2)) + t0;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1 + C::mul_fp2_by_nonresidue(&t2);
        let c2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - t0 - t2 + t1;

        self.c0 = c0;
        self.c1 = c1;
        self.c2 = c2;
    }
}

impl_field_ops!([C: Fp6Config] Fp6<C>);

impl<C: Fp6Config> Default for Fp6<C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C: Fp6Config> fmt::Display for Fp6<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+({})*v+({})*v**2", self.c0, self.c1, self.c2)
    }
}

impl<C: Fp6Config> fmt::Debug for Fp6<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp6({self})")
    }
}
