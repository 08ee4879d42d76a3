//! Prime fields GF(q) with elements kept in Montgomery form.
//!
//! A field is described by a zero-sized parameter type implementing
//! [`FieldParams`]; everything besides the modulus and a root of unity is
//! derived from the modulus at compile time.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::marker::PhantomData;
use core::ops::{AddAssign, MulAssign, SubAssign};

use rand_core::{CryptoRng, RngCore};

use super::{Field, impl_field_ops};
use crate::error::{FieldError, Result};
use crate::utilities::bn::{
    add_mod, bn_bit, bn_bit_length, bn_from_be_bytes, bn_geq, bn_is_one, bn_is_zero, bn_shr, bn_shr1,
    bn_sub, bn_sub_u64, bn_to_be_bytes, bn_trailing_zeros, half_mod, mont_mul, montgomery_inv,
    neg_mod, pow2_mod, sub_mod,
};
use crate::utilities::ct::{ct_limbs_eq, ct_mask_u64, ct_u64_eq_zero};

/// Compile-time description of a prime field with an `N`-limb modulus.
pub trait FieldParams<const N: usize>:
    'static + Copy + Clone + Debug + PartialEq + Eq + Send + Sync
{
    /// The prime modulus q, little-endian.
    const MODULUS: [u64; N];

    /// A generator of the 2-Sylow subgroup of the multiplicative group, that
    /// is `nonresidue^((q - 1) / 2^s)`, in regular form.
    const ROOT_OF_UNITY: [u64; N];

    const NAME: &'static str;

    const BIT_LENGTH: usize = bn_bit_length(&Self::MODULUS);

    /// -q^(-1) mod 2^64
    const INV: u64 = montgomery_inv(Self::MODULUS[0]);

    /// R = 2^(64N) mod q, the Montgomery form of one.
    const R: [u64; N] = pow2_mod(&Self::MODULUS, 64 * N);

    /// R^2 mod q
    const R2: [u64; N] = pow2_mod(&Self::MODULUS, 128 * N);

    /// s such that q - 1 = 2^s * odd
    const TWO_ADICITY: u32 = bn_trailing_zeros(&bn_sub_u64(&Self::MODULUS, 1));

    /// (q - 1) / 2
    const LEGENDRE_EXP: [u64; N] = bn_shr(&Self::MODULUS, 1);

    /// (odd - 1) / 2
    const SQRT_EXP: [u64; N] = bn_shr(&Self::MODULUS, Self::TWO_ADICITY + 1);
}

/// An element of GF(q) in Montgomery form. The stored value is always
/// reduced modulo q.
pub struct Fp<P: FieldParams<N>, const N: usize> {
    pub(crate) limbs: [u64; N],
    _params: PhantomData<P>,
}

impl<P: FieldParams<N>, const N: usize> Clone for Fp<P, N> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams<N>, const N: usize> Copy for Fp<P, N> {}

impl<P: FieldParams<N>, const N: usize> Default for Fp<P, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: FieldParams<N>, const N: usize> Fp<P, N> {
    pub const LIMBS: usize = N;
    pub const BYTES: usize = 8 * N;

    /// Element with `2^(2^s) = 1`, in Montgomery form.
    pub const ROOT_OF_UNITY: Self = Self::from_regular(P::ROOT_OF_UNITY);

    /// Build an element from limbs that are already in Montgomery form.
    pub const fn from_montgomery_limbs(limbs: [u64; N]) -> Self {
        Self {
            limbs,
            _params: PhantomData,
        }
    }

    /// Build an element from an integer in regular form. Any `N`-limb value
    /// is accepted and reduced.
    pub const fn from_regular(limbs: [u64; N]) -> Self {
        Self::from_montgomery_limbs(mont_mul(&limbs, &P::R2, &P::MODULUS, P::INV))
    }

    /// The Montgomery-form limbs.
    pub const fn montgomery_limbs(&self) -> [u64; N] {
        self.limbs
    }

    /// The regular-form limbs, in `[0, q)`.
    pub const fn to_regular(&self) -> [u64; N] {
        let mut one = [0u64; N];
        one[0] = 1;
        mont_mul(&self.limbs, &one, &P::MODULUS, P::INV)
    }

    /// Reinterpret the stored limbs as a regular integer and convert them to
    /// Montgomery form in place.
    pub fn set_to_montgomery(&mut self) -> &mut Self {
        self.limbs = mont_mul(&self.limbs, &P::R2, &P::MODULUS, P::INV);
        self
    }

    /// Convert the stored limbs from Montgomery form to the regular integer
    /// in place. The result no longer reads as the same field element.
    pub fn set_from_montgomery(&mut self) -> &mut Self {
        self.limbs = self.to_regular();
        self
    }

    pub fn set_uint(&mut self, v: u64) -> &mut Self {
        *self = Self::from_u64(v);
        self
    }

    pub fn set_int(&mut self, v: i64) -> &mut Self {
        *self = Self::from_i64(v);
        self
    }

    pub fn from_i64(v: i64) -> Self {
        let mut r = Self::from_u64(v.unsigned_abs());
        if v < 0 {
            r.set_neg();
        }
        r
    }

    /// Set self to 2^(-1) * self.
    pub fn set_half(&mut self) -> &mut Self {
        self.limbs = half_mod(&self.limbs, &P::MODULUS);
        self
    }

    /// Square root by Tonelli-Shanks. Returns `None` when self is not a
    /// quadratic residue.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() == u32::MAX {
            return Some(Self::ZERO);
        }

        // w = x^((odd - 1) / 2), y = x^((odd + 1) / 2), b = x^odd
        let w = self.pow_vartime(&P::SQRT_EXP);
        let mut y = *self * w;
        let mut b = w * y;

        let mut r = P::TWO_ADICITY;
        let mut t = b;
        for _ in 1..r {
            t.set_square();
        }
        if t != Self::ONE {
            return None;
        }

        let mut g = Self::ROOT_OF_UNITY;
        loop {
            let mut m = 0;
            let mut t = b;
            while t != Self::ONE {
                t.set_square();
                m += 1;
            }
            if m == 0 {
                return Some(y);
            }

            let mut ge = g;
            for _ in 0..(r - m - 1) {
                ge.set_square();
            }
            g = ge.square();
            y *= ge;
            b *= g;
            r = m;
        }
    }

    /// Set self to a square root of itself, returning `0xFFFFFFFF` on success.
    /// On failure self is unchanged and `0x00000000` is returned.
    pub fn set_sqrt(&mut self) -> u32 {
        match self.sqrt() {
            Some(s) => {
                *self = s;
                u32::MAX
            }
            None => 0,
        }
    }

    /// The Legendre symbol: 1 for non-zero squares, -1 for non-squares and 0 for zero.
    pub fn legendre(&self) -> i32 {
        let l = self.pow_vartime(&P::LEGENDRE_EXP);
        if l.is_zero() == u32::MAX {
            0
        } else if l == Self::ONE {
            1
        } else {
            -1
        }
    }

    /// Parity of the regular representative.
    pub fn sgn0(&self) -> u32 {
        (self.to_regular()[0] & 1) as u32
    }

    /// Return `0xFFFFFFFF` if self is larger than its negation, comparing
    /// regular representatives, that is if self > (q - 1) / 2.
    pub fn lexicographically_largest(&self) -> u32 {
        let (_, borrow) = bn_sub(&P::LEGENDRE_EXP, &self.to_regular());
        0u32.wrapping_sub(borrow as u32)
    }

    /// Bit `i` of the regular representative, least significant bit first.
    pub fn bit(&self, i: usize) -> bool {
        bn_bit(&self.to_regular(), i)
    }

    /// Bit length of the regular representative.
    pub fn bit_len(&self) -> usize {
        bn_bit_length(&self.to_regular())
    }

    /// The regular representative, if it fits in a machine word.
    pub fn to_u64(&self) -> Option<u64> {
        let r = self.to_regular();
        r[1..].iter().all(|w| *w == 0).then_some(r[0])
    }

    /// Rejection sampling over `ceil(bits / 8)` bytes drawn from `fill`.
    pub(crate) fn set_random_with<E: std::error::Error + Send + Sync + 'static>(
        &mut self,
        mut fill: impl FnMut(&mut [u8]) -> core::result::Result<(), E>,
    ) -> Result<&mut Self> {
        let nbytes = P::BIT_LENGTH.div_ceil(8);
        let excess = nbytes * 8 - P::BIT_LENGTH;
        let mut buf = vec![0u8; Self::BYTES];
        loop {
            let tail = &mut buf[Self::BYTES - nbytes..];
            fill(tail).map_err(|e| FieldError::Randomness(Box::new(e)))?;
            tail[0] &= 0xFF >> excess;

            let candidate = bn_from_be_bytes::<N>(&buf);
            if !bn_geq(&candidate, &P::MODULUS) {
                *self = Self::from_regular(candidate);
                return Ok(self);
            }
            log::trace!("rejected random candidate for {}", P::NAME);
        }
    }

    /// Draw a uniformly random element from the operating system.
    pub fn set_random_os(&mut self) -> Result<&mut Self> {
        use rand::TryRngCore;
        let mut rng = rand::rngs::OsRng;
        self.set_random_with(|buf| rng.try_fill_bytes(buf))
    }
}

impl<P: FieldParams<N>, const N: usize> Field for Fp<P, N> {
    const ZERO: Self = Self::from_montgomery_limbs([0u64; N]);
    const ONE: Self = Self::from_montgomery_limbs(P::R);
    const ENCODED_LENGTH: usize = 8 * N;

    #[inline(always)]
    fn is_zero(&self) -> u32 {
        let mut d = 0u64;
        for w in self.limbs.iter() {
            d |= w;
        }
        ct_u64_eq_zero(d)
    }

    #[inline(always)]
    fn equals(&self, rhs: &Self) -> u32 {
        ct_limbs_eq(&self.limbs, &rhs.limbs)
    }

    #[inline(always)]
    fn set_neg(&mut self) -> &mut Self {
        self.limbs = neg_mod(&self.limbs, &P::MODULUS);
        self
    }

    #[inline(always)]
    fn set_double(&mut self) -> &mut Self {
        self.limbs = add_mod(&self.limbs, &self.limbs, &P::MODULUS);
        self
    }

    #[inline(always)]
    fn set_square(&mut self) -> &mut Self {
        self.limbs = mont_mul(&self.limbs, &self.limbs, &P::MODULUS, P::INV);
        self
    }

    /// Binary extended Euclid run directly on the Montgomery representative.
    ///
    /// With X = xR the loop keeps r*X = u*R^2 and s*X = v*R^2 (mod q), so
    /// whichever accumulator sits next to the operand that reaches 1 holds
    /// R^2 / X = x^(-1) R, the inverse already in Montgomery form.
    fn set_invert(&mut self) -> &mut Self {
        if bn_is_zero(&self.limbs) {
            return self;
        }

        let q = P::MODULUS;
        let mut u = q;
        let mut v = self.limbs;
        let mut r = [0u64; N];
        let mut s = P::R2;

        while !bn_is_one(&u) && !bn_is_one(&v) {
            while v[0] & 1 == 0 {
                v = bn_shr1(&v, 0);
                s = half_mod(&s, &q);
            }
            while u[0] & 1 == 0 {
                u = bn_shr1(&u, 0);
                r = half_mod(&r, &q);
            }
            if bn_geq(&v, &u) {
                v = bn_sub(&v, &u).0;
                s = sub_mod(&s, &r, &q);
            } else {
                u = bn_sub(&u, &v).0;
                r = sub_mod(&r, &s, &q);
            }
        }

        self.limbs = if bn_is_one(&u) { r } else { s };
        self
    }

    #[inline(always)]
    fn set_cond(&mut self, rhs: &Self, ctl: u32) {
        let m = ct_mask_u64(ctl);
        for (a, b) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *a ^= m & (*a ^ *b);
        }
    }

    fn set_random<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<&mut Self> {
        self.set_random_with(|buf| rng.try_fill_bytes(buf))
    }

    fn encode_into(&self, out: &mut [u8]) {
        bn_to_be_bytes(&self.to_regular(), &mut out[..Self::BYTES]);
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() != Self::BYTES {
            return Err(FieldError::InvalidLength {
                expected: Self::BYTES,
                found: buf.len(),
            });
        }
        Ok(Self::from_regular(bn_from_be_bytes::<N>(buf)))
    }

    fn from_u64(v: u64) -> Self {
        let mut limbs = [0u64; N];
        limbs[0] = v;
        Self::from_regular(limbs)
    }
}

impl<P: FieldParams<N>, const N: usize> AddAssign for Fp<P, N> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.limbs = add_mod(&self.limbs, &rhs.limbs, &P::MODULUS);
    }
}

impl<P: FieldParams<N>, const N: usize> SubAssign for Fp<P, N> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.limbs = sub_mod(&self.limbs, &rhs.limbs, &P::MODULUS);
    }
}

impl<P: FieldParams<N>, const N: usize> MulAssign for Fp<P, N> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        self.limbs = mont_mul(&self.limbs, &rhs.limbs, &P::MODULUS, P::INV);
    }
}

impl_field_ops!([P: FieldParams<N>, const N: usize] Fp<P, N>);

/// Elements are ordered by their regular representatives in `[0, q)`.
impl<P: FieldParams<N>, const N: usize> Ord for Fp<P, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.to_regular(), other.to_regular());
        a.iter().rev().cmp(b.iter().rev())
    }
}

impl<P: FieldParams<N>, const N: usize> PartialOrd for Fp<P, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
