//! Message expansion and hashing to field elements with SHA-256.

use sha2::{Digest, Sha256};

use crate::error::HashToCurveError;
use crate::fields::fp::{FieldParams, Fp};

const B_IN_BYTES: usize = 32;
const S_IN_BYTES: usize = 64;

/// expand_message_xmd from RFC 9380, section 5.3.1, instantiated with
/// SHA-256.
pub fn expand_message_xmd(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> Result<Vec<u8>, HashToCurveError> {
    let ell = len_in_bytes.div_ceil(B_IN_BYTES);
    if ell > 255 || len_in_bytes > 0xFFFF {
        return Err(HashToCurveError::OutputTooLong(len_in_bytes));
    }
    if dst.len() > 255 {
        return Err(HashToCurveError::DstTooLong(dst.len()));
    }
    let dst_len = [dst.len() as u8];

    // b_0 = H(Z_pad || msg || I2OSP(len_in_bytes, 2) || I2OSP(0, 1) || DST_prime)
    let b0 = Sha256::new()
        .chain_update([0u8; S_IN_BYTES])
        .chain_update(msg)
        .chain_update((len_in_bytes as u16).to_be_bytes())
        .chain_update([0u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    // b_1 = H(b_0 || I2OSP(1, 1) || DST_prime)
    let mut bi = Sha256::new()
        .chain_update(b0)
        .chain_update([1u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    let mut out = Vec::with_capacity(ell * B_IN_BYTES);
    out.extend_from_slice(&bi);
    for i in 2..=ell {
        // b_i = H(strxor(b_0, b_(i - 1)) || I2OSP(i, 1) || DST_prime)
        let mut x = [0u8; B_IN_BYTES];
        for (t, (a, b)) in x.iter_mut().zip(b0.iter().zip(bi.iter())) {
            *t = a ^ b;
        }
        bi = Sha256::new()
            .chain_update(x)
            .chain_update([i as u8])
            .chain_update(dst)
            .chain_update(dst_len)
            .finalize();
        out.extend_from_slice(&bi);
    }
    out.truncate(len_in_bytes);
    Ok(out)
}

/// hash_to_field from RFC 9380, section 5.2: `count` elements, each reduced
/// from `l` bytes of expanded output.
pub fn hash_to_field<P: FieldParams<N>, const N: usize>(
    msg: &[u8],
    dst: &[u8],
    count: usize,
    l: usize,
) -> Result<Vec<Fp<P, N>>, HashToCurveError> {
    let uniform = expand_message_xmd(msg, dst, count * l)?;
    Ok(uniform
        .chunks_exact(l)
        .map(|chunk| {
            let mut e = Fp::<P, N>::default();
            e.set_bytes(chunk);
            e
        })
        .collect())
}
