//! Exponentiation by the curve seed inside the cyclotomic subgroup of
//! GF(p^12), the building block of the final exponentiation.

pub mod bn254;
pub mod expt;

pub use expt::{ExptStep, run_chain};
