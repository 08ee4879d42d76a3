//! Finite fields: a generic Montgomery prime field and the 2-3-2 extension
//! tower built over it.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::{BigInt, Sign};
use rand_core::{CryptoRng, RngCore};

use crate::error::Result;
use crate::utilities::bn::{bn_bit, bn_bit_length};

pub mod bls12_377;
pub mod bn254;
pub mod encoding;
pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;
pub mod goldilocks;
pub mod source;

/// Operations shared by the prime field and every extension in the tower.
///
/// Methods returning a `u32` use `0xFFFFFFFF` for true and `0x00000000` for
/// false. `set_*` methods mutate the receiver and return it for chaining.
pub trait Field:
    Copy
    + Debug
    + Display
    + PartialEq
    + Eq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Length in bytes of the canonical encoding.
    const ENCODED_LENGTH: usize;

    /// Return `0xFFFFFFFF` if self is zero, `0x00000000` otherwise.
    fn is_zero(&self) -> u32;

    /// Return `0xFFFFFFFF` if self and rhs are equal, `0x00000000` otherwise.
    fn equals(&self, rhs: &Self) -> u32;

    fn is_one(&self) -> u32 {
        self.equals(&Self::ONE)
    }

    fn set_neg(&mut self) -> &mut Self;
    fn set_double(&mut self) -> &mut Self;
    fn set_square(&mut self) -> &mut Self;

    /// Replace self with its inverse. Zero is left as zero.
    fn set_invert(&mut self) -> &mut Self;

    /// Copy rhs into self if ctl == `0xFFFFFFFF`, do nothing if ctl == `0x00000000`.
    fn set_cond(&mut self, rhs: &Self, ctl: u32);

    /// Draw a uniformly random element.
    fn set_random<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<&mut Self>;

    /// Write the canonical big-endian encoding into `out`, which must hold
    /// `ENCODED_LENGTH` bytes.
    fn encode_into(&self, out: &mut [u8]);

    /// Decode the canonical encoding. Values outside the field are reduced.
    fn decode(buf: &[u8]) -> Result<Self>;

    fn from_u64(v: u64) -> Self;

    fn set_zero(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }

    fn set_one(&mut self) -> &mut Self {
        *self = Self::ONE;
        self
    }

    fn set_add(&mut self, rhs: &Self) -> &mut Self {
        *self += *rhs;
        self
    }

    fn set_sub(&mut self, rhs: &Self) -> &mut Self {
        *self -= *rhs;
        self
    }

    fn set_mul(&mut self, rhs: &Self) -> &mut Self {
        *self *= *rhs;
        self
    }

    /// Set self to self * rhs^(-1). Dividing by zero gives zero.
    fn set_div(&mut self, rhs: &Self) -> &mut Self {
        *self *= rhs.invert();
        self
    }

    fn square(&self) -> Self {
        let mut r = *self;
        r.set_square();
        r
    }

    fn double(&self) -> Self {
        let mut r = *self;
        r.set_double();
        r
    }

    fn invert(&self) -> Self {
        let mut r = *self;
        r.set_invert();
        r
    }

    /// Negate self if ctl == `0xFFFFFFFF`.
    fn set_condneg(&mut self, ctl: u32) {
        let n = -*self;
        self.set_cond(&n, ctl);
    }

    /// Return `a` if ctl == `0x00000000` and `b` if ctl == `0xFFFFFFFF`.
    fn select(a: &Self, b: &Self, ctl: u32) -> Self {
        let mut r = *a;
        r.set_cond(b, ctl);
        r
    }

    /// Swap a and b if ctl == `0xFFFFFFFF`.
    fn condswap(a: &mut Self, b: &mut Self, ctl: u32) {
        let t = *a;
        a.set_cond(b, ctl);
        b.set_cond(&t, ctl);
    }

    fn encode(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::ENCODED_LENGTH];
        self.encode_into(&mut out);
        out
    }

    /// Invert every element in place with a single inversion. Zeros stay zero
    /// and do not disturb the other results.
    fn batch_invert(xs: &mut [Self]) {
        let mut prefix = Vec::with_capacity(xs.len());
        let mut acc = Self::ONE;
        for x in xs.iter() {
            prefix.push(acc);
            let mut next = acc * *x;
            next.set_cond(&acc, x.is_zero());
            acc = next;
        }

        acc.set_invert();

        for (x, p) in xs.iter_mut().zip(prefix.iter()).rev() {
            let z = x.is_zero();
            let inv = acc * *p;
            let mut next = acc * *x;
            next.set_cond(&acc, z);
            x.set_cond(&inv, !z);
            acc = next;
        }
    }

    /// Binary exponentiation, most significant bit first, by an exponent
    /// given as little-endian words.
    fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut r = Self::ONE;
        for i in (0..bn_bit_length(exp)).rev() {
            r.set_square();
            if bn_bit(exp, i) {
                r *= *self;
            }
        }
        r
    }

    /// Exponentiation by a signed integer; negative exponents invert first.
    fn exp(&self, k: &BigInt) -> Self {
        let base = match k.sign() {
            Sign::Minus => self.invert(),
            _ => *self,
        };
        base.pow_vartime(&k.magnitude().to_u64_digits())
    }

    fn set_exp(&mut self, k: &BigInt) -> &mut Self {
        *self = self.exp(k);
        self
    }
}

/// Derive the binary operators from the compound assignment ones.
macro_rules! impl_field_ops {
    ([$($g:tt)*] $ty:ty) => {
        impl<$($g)*> core::ops::Add for $ty {
            type Output = Self;

            #[inline(always)]
            fn add(mut self, rhs: Self) -> Self {
                self += rhs;
                self
            }
        }

        impl<$($g)*> core::ops::Sub for $ty {
            type Output = Self;

            #[inline(always)]
            fn sub(mut self, rhs: Self) -> Self {
                self -= rhs;
                self
            }
        }

        impl<$($g)*> core::ops::Mul for $ty {
            type Output = Self;

            #[inline(always)]
            fn mul(mut self, rhs: Self) -> Self {
                self *= rhs;
                self
            }
        }

        impl<$($g)*> core::ops::DivAssign for $ty {
            fn div_assign(&mut self, rhs: Self) {
                $crate::fields::Field::set_div(self, &rhs);
            }
        }

        impl<$($g)*> core::ops::Div for $ty {
            type Output = Self;

            fn div(mut self, rhs: Self) -> Self {
                self /= rhs;
                self
            }
        }

        impl<$($g)*> core::ops::Neg for $ty {
            type Output = Self;

            #[inline(always)]
            fn neg(mut self) -> Self {
                $crate::fields::Field::set_neg(&mut self);
                self
            }
        }

        impl<$($g)*> PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::fields::Field::equals(self, other) == u32::MAX
            }
        }

        impl<$($g)*> Eq for $ty {}
    };
}

pub(crate) use impl_field_ops;
