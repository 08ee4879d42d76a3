/// Returns `0x00..00` when `x = 0` and `0xFF..FF` otherwise in constant time.
#[inline(always)]
pub fn ct_u64_neq_zero(x: u64) -> u32 {
    // (x | -x) has its top bit set exactly when x is non-zero.
    (((x | x.wrapping_neg()) >> 63) as u32).wrapping_neg()
}

/// Returns `0xFF..FF` when `x = 0` and `0x00..00` otherwise in constant time.
#[inline(always)]
pub fn ct_u64_eq_zero(x: u64) -> u32 {
    !ct_u64_neq_zero(x)
}

/// Widen a `u32` mask to a `u64` mask.
#[inline(always)]
pub fn ct_mask_u64(ctl: u32) -> u64 {
    (ctl as i32) as i64 as u64
}

/// Turn a boolean into a mask.
#[inline(always)]
pub fn ct_mask_from_bool(b: bool) -> u32 {
    (b as u32).wrapping_neg()
}

/// Compare two limb slices of equal length in constant time.
#[inline(always)]
pub fn ct_limbs_eq(a: &[u64], b: &[u64]) -> u32 {
    let mut d = 0u64;
    for (x, y) in a.iter().zip(b.iter()) {
        d |= x ^ y;
    }
    ct_u64_eq_zero(d)
}
