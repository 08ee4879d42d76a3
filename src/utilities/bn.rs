//! Arithmetic on fixed-size integers stored as little-endian `u64` limbs.
//!
//! Everything here is a `const fn` so that the same code computes the
//! Montgomery constants of a field at compile time and performs the
//! arithmetic at run time.

/// Compute a + b + carry, returning (sum, carry).
#[inline(always)]
pub const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Compute a - (b + borrow), returning (difference, borrow) with borrow in {0, 1}.
#[inline(always)]
pub const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, ((t >> 64) as u64) & 1)
}

/// Compute a + b * c + carry, returning (low, high).
#[inline(always)]
pub const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

#[inline(always)]
pub const fn bn_add<const N: usize>(a: &[u64; N], b: &[u64; N]) -> ([u64; N], u64) {
    let mut r = [0u64; N];
    let mut carry = 0;
    let mut i = 0;
    while i < N {
        (r[i], carry) = adc(a[i], b[i], carry);
        i += 1;
    }
    (r, carry)
}

#[inline(always)]
pub const fn bn_sub<const N: usize>(a: &[u64; N], b: &[u64; N]) -> ([u64; N], u64) {
    let mut r = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        (r[i], borrow) = sbb(a[i], b[i], borrow);
        i += 1;
    }
    (r, borrow)
}

/// Return true when a >= b.
#[inline(always)]
pub const fn bn_geq<const N: usize>(a: &[u64; N], b: &[u64; N]) -> bool {
    let mut i = N;
    while i > 0 {
        i -= 1;
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

pub const fn bn_is_zero<const N: usize>(a: &[u64; N]) -> bool {
    let mut i = 0;
    while i < N {
        if a[i] != 0 {
            return false;
        }
        i += 1;
    }
    true
}

pub const fn bn_is_one<const N: usize>(a: &[u64; N]) -> bool {
    if a[0] != 1 {
        return false;
    }
    let mut i = 1;
    while i < N {
        if a[i] != 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Shift right by one bit, inserting `top` as the new most significant bit.
#[inline(always)]
pub const fn bn_shr1<const N: usize>(a: &[u64; N], top: u64) -> [u64; N] {
    let mut r = [0u64; N];
    let mut i = 0;
    while i + 1 < N {
        r[i] = (a[i] >> 1) | (a[i + 1] << 63);
        i += 1;
    }
    r[N - 1] = (a[N - 1] >> 1) | (top << 63);
    r
}

/// Shift right by `k` bits.
pub const fn bn_shr<const N: usize>(a: &[u64; N], k: u32) -> [u64; N] {
    let words = (k / 64) as usize;
    let bits = k % 64;
    let mut r = [0u64; N];
    let mut i = 0;
    while i + words < N {
        r[i] = a[i + words] >> bits;
        if bits != 0 && i + words + 1 < N {
            r[i] |= a[i + words + 1] << (64 - bits);
        }
        i += 1;
    }
    r
}

/// Subtract a small value, assuming no underflow.
pub const fn bn_sub_u64<const N: usize>(a: &[u64; N], x: u64) -> [u64; N] {
    let mut b = [0u64; N];
    b[0] = x;
    bn_sub(a, &b).0
}

/// Number of trailing zero bits of a non-zero integer.
pub const fn bn_trailing_zeros<const N: usize>(a: &[u64; N]) -> u32 {
    let mut i = 0;
    let mut count = 0;
    while i < N {
        if a[i] != 0 {
            return count + a[i].trailing_zeros();
        }
        count += 64;
        i += 1;
    }
    count
}

/// Return the bit length of an integer `a` represented with little endian u64 words.
pub const fn bn_bit_length(a: &[u64]) -> usize {
    let mut i = a.len();
    while i > 0 {
        i -= 1;
        if a[i] != 0 {
            return (i << 6) + 64 - (a[i].leading_zeros() as usize);
        }
    }
    0
}

/// Return bit `i` of `a`; bits past the end are zero.
#[inline(always)]
pub fn bn_bit(a: &[u64], i: usize) -> bool {
    match a.get(i >> 6) {
        Some(w) => (w >> (i & 63)) & 1 == 1,
        None => false,
    }
}

/// Compute -q^(-1) mod 2^64 for odd q by Newton iteration.
pub const fn montgomery_inv(q0: u64) -> u64 {
    let mut inv = 1u64;
    let mut i = 0;
    while i < 63 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(q0);
        i += 1;
    }
    inv.wrapping_neg()
}

/// Compute 2^k mod q by repeated doubling, for q odd and greater than one.
pub const fn pow2_mod<const N: usize>(q: &[u64; N], k: usize) -> [u64; N] {
    let mut r = [0u64; N];
    r[0] = 1;
    let mut i = 0;
    while i < k {
        r = add_mod(&r, &r, q);
        i += 1;
    }
    r
}

#[inline(always)]
pub const fn add_mod<const N: usize>(a: &[u64; N], b: &[u64; N], q: &[u64; N]) -> [u64; N] {
    let (s, carry) = bn_add(a, b);
    if carry != 0 || bn_geq(&s, q) {
        bn_sub(&s, q).0
    } else {
        s
    }
}

#[inline(always)]
pub const fn sub_mod<const N: usize>(a: &[u64; N], b: &[u64; N], q: &[u64; N]) -> [u64; N] {
    let (d, borrow) = bn_sub(a, b);
    if borrow != 0 { bn_add(&d, q).0 } else { d }
}

#[inline(always)]
pub const fn neg_mod<const N: usize>(a: &[u64; N], q: &[u64; N]) -> [u64; N] {
    if bn_is_zero(a) { *a } else { bn_sub(q, a).0 }
}

/// Compute a / 2 mod q for odd q.
#[inline(always)]
pub const fn half_mod<const N: usize>(a: &[u64; N], q: &[u64; N]) -> [u64; N] {
    if a[0] & 1 == 1 {
        let (s, carry) = bn_add(a, q);
        bn_shr1(&s, carry)
    } else {
        bn_shr1(a, 0)
    }
}

/// Montgomery multiplication for a modulus that fits in one word.
///
/// The low half of t + m*q is always zero and produces a carry exactly when
/// the low half of t is non-zero, so only the high halves are added.
#[inline(always)]
const fn mont_mul_single(a: u64, b: u64, q: u64, inv: u64) -> u64 {
    let t = (a as u128) * (b as u128);
    let lo = t as u64;
    let hi = (t >> 64) as u64;
    let m = lo.wrapping_mul(inv);
    let mq_hi = (((m as u128) * (q as u128)) >> 64) as u64;
    let (r, carry) = adc(hi, mq_hi, (lo != 0) as u64);
    if carry != 0 || r >= q { r.wrapping_sub(q) } else { r }
}

/// Montgomery multiplication a * b / 2^(64N) mod q using the CIOS method,
/// where `inv` is -q^(-1) mod 2^64. Inputs must be reduced.
#[inline(always)]
pub const fn mont_mul<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    q: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = [0u64; N];
    if N == 1 {
        t[0] = mont_mul_single(a[0], b[0], q[0], inv);
        return t;
    }

    let mut t_n = 0u64;
    let mut i = 0;
    while i < N {
        let mut carry = 0;
        let mut j = 0;
        while j < N {
            (t[j], carry) = mac(t[j], a[j], b[i], carry);
            j += 1;
        }
        let (s, t_n1) = adc(t_n, carry, 0);

        let m = t[0].wrapping_mul(inv);
        (_, carry) = mac(t[0], m, q[0], 0);
        j = 1;
        while j < N {
            (t[j - 1], carry) = mac(t[j], m, q[j], carry);
            j += 1;
        }
        (t[N - 1], carry) = adc(s, carry, 0);
        t_n = t_n1 + carry;
        i += 1;
    }

    if t_n != 0 || bn_geq(&t, q) {
        t = bn_sub(&t, q).0;
    }
    t
}

/// Write `a` as big-endian bytes into `out`, which must hold 8N bytes.
pub fn bn_to_be_bytes<const N: usize>(a: &[u64; N], out: &mut [u8]) {
    for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&a[N - 1 - i].to_be_bytes());
    }
}

/// Read 8N big-endian bytes into limbs.
pub fn bn_from_be_bytes<const N: usize>(buf: &[u8]) -> [u64; N] {
    let mut r = [0u64; N];
    for (i, chunk) in buf.chunks_exact(8).enumerate() {
        let mut w = [0u8; 8];
        w.copy_from_slice(chunk);
        r[N - 1 - i] = u64::from_be_bytes(w);
    }
    r
}
