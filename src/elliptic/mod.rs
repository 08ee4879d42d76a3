//! Short Weierstrass curves in affine and Jacobian coordinates, with the
//! isogenies used to reach curves whose A coefficient is zero.

pub mod bls12_377;
pub mod bn254;
pub mod curve;
pub mod isogeny;
pub mod jacobian_arithmetic;
pub mod point;
pub mod projective_point;
