//! Quadratic extension GF(q^12) = GF(q^6)[w] / (w^2 - v), the target group
//! of the pairing.

use core::fmt;
use core::fmt::Debug;
use core::ops::{AddAssign, MulAssign, SubAssign};

use rand_core::{CryptoRng, RngCore};

use super::fp2::{Fp2, Fp2Config};
use super::fp6::{Fp6, Fp6Config};
use super::{Field, impl_field_ops};
use crate::error::{FieldError, Result};
use crate::utilities::bn::{bn_bit, bn_bit_length};

pub trait Fp12Config: 'static + Copy + Clone + Debug + PartialEq + Eq + Send + Sync {
    type Fp6Config: Fp6Config;

    /// ξ^(i (q - 1) / 6) for i = 0..6, the twists applied by x -> x^q to
    /// the coefficient of w^i.
    const FROBENIUS_COEFF: [Fp2Of<Self>; 6];

    /// ξ^(i (q^2 - 1) / 6) for i = 0..6. These lie in the base field.
    const FROBENIUS_SQUARE_COEFF: [FpOf<Self>; 6];
}

type Fp2ConfigOf<C> = <<C as Fp12Config>::Fp6Config as Fp6Config>::Fp2Config;
type Fp2Of<C> = Fp2<Fp2ConfigOf<C>>;
type FpOf<C> = <Fp2ConfigOf<C> as Fp2Config>::Fp;

/// An element c0 + c1 * w.
#[derive(Clone, Copy)]
pub struct Fp12<C: Fp12Config> {
    pub c0: Fp6<C::Fp6Config>,
    pub c1: Fp6<C::Fp6Config>,
}

/// Returns (a^2 + ξ b^2, 2ab), a squaring in GF(q^4) = GF(q^2)[t] / (t^2 - ξ).
#[inline(always)]
fn fp4_square<C: Fp6Config>(a: &Fp2<C::Fp2Config>, b: &Fp2<C::Fp2Config>) -> (Fp2<C::Fp2Config>, Fp2<C::Fp2Config>) {
    let c = a.square() + C::mul_fp2_by_nonresidue(&b.square());
    let d = (*a * *b).double();
    (c, d)
}

impl<C: Fp12Config> Fp12<C> {
    pub const fn new(c0: Fp6<C::Fp6Config>, c1: Fp6<C::Fp6Config>) -> Self {
        Self { c0, c1 }
    }

    /// Set self to c0 - c1 * w. On the cyclotomic subgroup this is the inverse.
    pub fn set_conjugate(&mut self) -> &mut Self {
        self.c1.set_neg();
        self
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Inverse of an element of norm one, which is its conjugate.
    pub fn inverse_unitary(&self) -> Self {
        self.conjugate()
    }

    /// x^q. Writing x = sum a_i w^i with a_i in GF(q^2), each a_i is
    /// conjugated and scaled by w^(i (q - 1)).
    pub fn frobenius(&self) -> Self {
        let g = &C::FROBENIUS_COEFF;
        Self::new(
            Fp6::new(
                self.c0.c0.conjugate(),
                self.c0.c1.conjugate() * g[2],
                self.c0.c2.conjugate() * g[4],
            ),
            Fp6::new(
                self.c1.c0.conjugate() * g[1],
                self.c1.c1.conjugate() * g[3],
                self.c1.c2.conjugate() * g[5],
            ),
        )
    }

    /// x^(q^2)
    pub fn frobenius_square(&self) -> Self {
        let g = &C::FROBENIUS_SQUARE_COEFF;
        Self::new(
            Fp6::new(
                self.c0.c0,
                self.c0.c1.mul_by_fp(&g[2]),
                self.c0.c2.mul_by_fp(&g[4]),
            ),
            Fp6::new(
                self.c1.c0.mul_by_fp(&g[1]),
                self.c1.c1.mul_by_fp(&g[3]),
                self.c1.c2.mul_by_fp(&g[5]),
            ),
        )
    }

    /// Granger-Scott squaring, https://eprint.iacr.org/2009/565.pdf section 3.2.
    /// Only correct for elements of the cyclotomic subgroup.
    pub fn set_cyclotomic_square(&mut self) -> &mut Self {
        let x = *self;
        let mut b = Self::ZERO;
        let mut a = Self::ZERO;

        (b.c0.c0, b.c1.c1) = fp4_square::<C::Fp6Config>(&x.c0.c0, &x.c1.c1);
        a.c0.c0 = x.c0.c0;
        a.c1.c1 = -x.c1.c1;

        let t = <C::Fp6Config as Fp6Config>::mul_fp2_by_nonresidue_inv(&x.c1.c0);
        let (s, d) = fp4_square::<C::Fp6Config>(&x.c0.c2, &t);
        b.c0.c1 = <C::Fp6Config as Fp6Config>::mul_fp2_by_nonresidue(&s);
        b.c1.c2 = <C::Fp6Config as Fp6Config>::mul_fp2_by_nonresidue(&d);
        a.c0.c1 = x.c0.c1;
        a.c1.c2 = -x.c1.c2;

        let (s, d) = fp4_square::<C::Fp6Config>(&x.c0.c1, &x.c1.c2);
        b.c0.c2 = s;
        b.c1.c0 = <C::Fp6Config as Fp6Config>::mul_fp2_by_nonresidue(&d);
        a.c0.c2 = x.c0.c2;
        a.c1.c0 = -x.c1.c0;

        // 3b - 2a
        let res = b;
        b -= a;
        b.set_double();
        *self = res + b;
        self
    }

    pub fn cyclotomic_square(&self) -> Self {
        let mut r = *self;
        r.set_cyclotomic_square();
        r
    }

    /// Exponentiation inside the cyclotomic subgroup by a machine word.
    pub fn cyclotomic_exp(&self, e: u64) -> Self {
        let exp = [e];
        let mut r = Self::ONE;
        for i in (0..bn_bit_length(&exp)).rev() {
            r.set_cyclotomic_square();
            if bn_bit(&exp, i) {
                r *= *self;
            }
        }
        r
    }

    /// Multiply by the sparse element d0 + (d3 + d4 v) w, the shape of a line
    /// evaluation for a D-type twist.
    pub fn mul_by_034(&self, d0: &Fp2Of<C>, d3: &Fp2Of<C>, d4: &Fp2Of<C>) -> Self {
        let a = self.c0.mul_by_fp2(d0);
        let b = self.c1.mul_by_01(d3, d4);
        let d = (self.c0 + self.c1).mul_by_01(&(*d0 + *d3), d4);

        Self::new(b.mul_by_nonresidue() + a, d - a - b)
    }
}

impl<C: Fp12Config> Field for Fp12<C> {
    const ZERO: Self = Self::new(Fp6::ZERO, Fp6::ZERO);
    const ONE: Self = Self::new(Fp6::ONE, Fp6::ZERO);
    const ENCODED_LENGTH: usize = 2 * Fp6::<C::Fp6Config>::ENCODED_LENGTH;

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

    /// c0 = (a0 - a1)(a0 - v a1) + (1 + v) a0 a1, c1 = 2 a0 a1
    fn set_square(&mut self) -> &mut Self {
        let v0 = self.c0 * self.c1;
        let t = (self.c0 - self.c1) * (self.c0 - self.c1.mul_by_nonresidue());
        self.c0 = t + v0 + v0.mul_by_nonresidue();
        self.c1 = v0.double();
        self
    }

    /// Inversion through the norm c0^2 - v c1^2 in GF(q^6).
    fn set_invert(&mut self) -> &mut Self {
        let mut t = self.c0.square() - self.c1.square().mul_by_nonresidue();
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
        let n = Fp6::<C::Fp6Config>::ENCODED_LENGTH;
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
        let n = Fp6::<C::Fp6Config>::ENCODED_LENGTH;
        let c1 = Fp6::decode(&buf[..n])?;
        let c0 = Fp6::decode(&buf[n..])?;
        Ok(Self::new(c0, c1))
    }

    fn from_u64(v: u64) -> Self {
        Self::new(Fp6::from_u64(v), Fp6::ZERO)
    }
}

impl<C: Fp12Config> AddAssign for Fp12<C> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.c0 += rhs.c0;
        self.c1 += rhs.c1;
    }
}

impl<C: Fp12Config> SubAssign for Fp12<C> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.c0 -= rhs.c0;
        self.c1 -= rhs.c1;
    }
}

impl<C: Fp12Config> MulAssign for Fp12<C> {
    fn mul_assign(&mut self, rhs: Self) {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        self.c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1;
        self.c0 = t1.mul_by_nonresidue() + t0;
    }
}

impl_field_ops!([C: Fp12Config] Fp12<C>);

impl<C: Fp12Config> Default for Fp12<C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C: Fp12Config> fmt::Display for Fp12<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+({})*w", self.c0, self.c1)
    }
}

impl<C: Fp12Config> fmt::Debug for Fp12<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp12({self})")
    }
}
