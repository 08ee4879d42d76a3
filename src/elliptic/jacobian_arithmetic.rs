use num_bigint::{BigInt, Sign};

use super::curve::CurveParams;
use super::point::AffinePoint;
use super::projective_point::JacobianPoint;
use crate::fields::Field;
use crate::utilities::bn::{bn_bit, bn_bit_length};

impl<C: CurveParams> JacobianPoint<C> {
    /// P3 <- P1 + P2
    pub fn add_into(P3: &mut Self, P1: &Self, P2: &Self) {
        // add-2007-bl, made complete:
        //   U1 <- X1*Z2^2,  U2 <- X2*Z1^2
        //   S1 <- Y1*Z2^3,  S2 <- Y2*Z1^3
        //   H <- U2 - U1,   R <- 2*(S2 - S1)
        //   I <- (2*H)^2,   J <- H*I,   V <- U1*I
        //   X3 <- R^2 - J - 2*V
        //   Y3 <- R*(V - X3) - 2*S1*J
        //   Z3 <- ((Z1 + Z2)^2 - Z1^2 - Z2^2)*H
        //
        // Constant-time processing:
        //   If P1 == -P2 then H == 0 and R != 0, which properly leads
        //   to Z3 == 0.
        //   If P1 == P2 then H == R == 0 and the doubling is selected.
        //   Cases P1 == inf and P2 == inf are handled at the end.
        let z1z1 = P1.Z.square();
        let z2z2 = P2.Z.square();
        let u1 = P1.X * z2z2;
        let u2 = P2.X * z1z1;
        let s1 = P1.Y * P2.Z * z2z2;
        let s2 = P2.Y * P1.Z * z1z1;
        let h = u2 - u1;
        let sd = s2 - s1;
        let dbl = h.is_zero() & sd.is_zero();

        let r = sd.double();
        let i = h.double().square();
        let j = h * i;
        let v = u1 * i;
        let X3 = r.square() - j - v.double();
        let Y3 = r * (v - X3) - (s1 * j).double();
        let Z3 = ((P1.Z + P2.Z).square() - z1z1 - z2z2) * h;

        let D = P1.double();
        let (P1c, P2c) = (*P1, *P2);
        P3.X = X3;
        P3.Y = Y3;
        P3.Z = Z3;
        P3.set_cond(&D, dbl);

        // Corrective action in case one of the inputs was the
        // point-at-infinity.
        P3.set_cond(&P2c, P1c.is_zero());
        P3.set_cond(&P1c, P2c.is_zero());
    }

    /// P3 <- P1 + Q, with Q in affine coordinates.
    pub fn add_affine_into(P3: &mut Self, P1: &Self, Q: &AffinePoint<C>) {
        // madd-2007-bl:
        //   U2 <- X2*Z1^2,  S2 <- Y2*Z1^3
        //   H <- U2 - X1,   R <- 2*(S2 - Y1)
        //   I <- 4*H^2,     J <- H*I,   V <- X1*I
        //   X3 <- R^2 - J - 2*V
        //   Y3 <- R*(V - X3) - 2*Y1*J
        //   Z3 <- (Z1 + H)^2 - Z1^2 - H^2
        let z1z1 = P1.Z.square();
        let u2 = Q.X * z1z1;
        let s2 = Q.Y * P1.Z * z1z1;
        let h = u2 - P1.X;
        let sd = s2 - P1.Y;
        let dbl = h.is_zero() & sd.is_zero();

        let hh = h.square();
        let i = hh.double().double();
        let j = h * i;
        let r = sd.double();
        let v = P1.X * i;
        let X3 = r.square() - j - v.double();
        let Y3 = r * (v - X3) - (P1.Y * j).double();
        let Z3 = (P1.Z + h).square() - z1z1 - hh;

        let D = P1.double();
        let P1c = *P1;
        P3.X = X3;
        P3.Y = Y3;
        P3.Z = Z3;
        P3.set_cond(&D, dbl);
        P3.set_cond(&Self::from_affine(Q), P1c.is_zero());
        P3.set_cond(&P1c, Q.is_zero());
    }

    /// P1 <- P1 + P2
    pub fn set_add(&mut self, P2: &Self) -> &mut Self {
        let P1 = *self;
        Self::add_into(self, &P1, P2);
        self
    }

    /// P1 <- P1 + Q
    pub fn set_add_affine(&mut self, Q: &AffinePoint<C>) -> &mut Self {
        let P1 = *self;
        Self::add_affine_into(self, &P1, Q);
        self
    }

    /// P1 <- P1 - P2
    pub fn set_sub(&mut self, P2: &Self) -> &mut Self {
        self.set_add(&-P2)
    }

    #[inline(always)]
    pub fn double_from_coords(X: &C::Base, Y: &C::Base, Z: &C::Base) -> (C::Base, C::Base, C::Base) {
        // dbl-2007-bl, cost 1M+8S when A == 0
        //   S <- 2*((X + Y^2)^2 - X^2 - Y^4)
        //   M <- 3*X^2 + A*Z^4
        //   X' <- M^2 - 2*S
        //   Y' <- M*(S - X') - 8*Y^4
        //   Z' <- 2*Y*Z
        // Z == 0 or Y == 0 both give Z' == 0, as they should.
        let xx = X.square();
        let yy = Y.square();
        let yyyy = yy.square();
        let s = ((*X + yy).square() - xx - yyyy).double();
        let mut m = xx.double() + xx;
        if C::HAS_A {
            m += C::A * Z.square().square();
        }
        let X2 = m.square() - s.double();
        let Y2 = m * (s - X2) - yyyy.double().double().double();
        let Z2 = (*Y * *Z).double();

        (X2, Y2, Z2)
    }

    /// P1 <- 2*P1
    pub fn set_double(&mut self) -> &mut Self {
        let (X2, Y2, Z2) = Self::double_from_coords(&self.X, &self.Y, &self.Z);
        self.X = X2;
        self.Y = Y2;
        self.Z = Z2;
        self
    }

    /// Return 2*P as a new point
    pub fn double(&self) -> Self {
        let mut P3 = *self;
        P3.set_double();
        P3
    }

    /// Return [2^n]*P as a new point
    pub fn double_iter(&self, n: usize) -> Self {
        let mut P3 = *self;
        for _ in 0..n {
            P3.set_double();
        }
        P3
    }

    /// Return [k]*P, k given as little-endian words. Every bit of every
    /// word is processed, with a conditional copy in place of the branch.
    pub fn mul(&self, k: &[u64]) -> Self {
        let mut R = Self::INFINITY;
        for i in (0..(k.len() << 6)).rev() {
            R.set_double();
            let T = R + *self;
            let ctl = (((k[i >> 6] >> (i & 63)) as u32) & 1).wrapping_neg();
            R.set_cond(&T, ctl);
        }
        R
    }

    /// Return [k]*P, k given as little-endian words. Leaks the scalar
    /// through timing; meant for public scalars such as group orders.
    pub fn mul_vartime(&self, k: &[u64]) -> Self {
        let mut R = Self::INFINITY;
        for i in (0..bn_bit_length(k)).rev() {
            R.set_double();
            if bn_bit(k, i) {
                R.set_add(self);
            }
        }
        R
    }

    pub fn mul_u64(&self, k: u64) -> Self {
        self.mul(&[k])
    }

    pub fn mul_i64(&self, k: i64) -> Self {
        let mut R = self.mul(&[k.unsigned_abs()]);
        R.set_condneg((k >> 63) as u32);
        R
    }

    /// Return [k]*P for a signed integer; negative scalars negate the result.
    pub fn mul_bigint(&self, k: &BigInt) -> Self {
        let R = self.mul(&k.magnitude().to_u64_digits());
        match k.sign() {
            Sign::Minus => -R,
            _ => R,
        }
    }
}

impl<C: CurveParams> core::ops::AddAssign for JacobianPoint<C> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        self.set_add(&other);
    }
}

impl<C: CurveParams> core::ops::AddAssign<AffinePoint<C>> for JacobianPoint<C> {
    #[inline(always)]
    fn add_assign(&mut self, other: AffinePoint<C>) {
        self.set_add_affine(&other);
    }
}

impl<C: CurveParams> core::ops::SubAssign for JacobianPoint<C> {
    #[inline(always)]
    fn sub_assign(&mut self, other: Self) {
        self.set_sub(&other);
    }
}

impl<C: CurveParams> core::ops::Add for JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        let mut P3 = Self::INFINITY;
        Self::add_into(&mut P3, &self, &other);
        P3
    }
}

impl<C: CurveParams> core::ops::Add<AffinePoint<C>> for JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline(always)]
    fn add(mut self, other: AffinePoint<C>) -> Self {
        self += other;
        self
    }
}

impl<C: CurveParams> core::ops::Sub for JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline(always)]
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}
