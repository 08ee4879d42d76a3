use super::expt::{ExptStep, parse_chain, run_chain};
use crate::fields::bn254::Bn254Fp12;

/// The BN254 seed x = 4965661367192848881.
pub const BN254_X: u64 = 0x44E992B44A6909F1;

/// Addition chain for x, 85 steps: 62 squarings and 23 multiplications.
pub const BN254_EXPT_CHAIN: [ExptStep; 85] = parse_chain(
    b"SSSSXSSXSSSISSXSSXSSISSSXSSXSSISSISSISSXSSSSXSSSXSSXSSXSSISSXSSSXSSSSSXSSXSSSSSISSSSX",
);

/// f^x for f in the cyclotomic subgroup.
pub fn expt(f: &Bn254Fp12) -> Bn254Fp12 {
    run_chain(f, &BN254_EXPT_CHAIN)
}
