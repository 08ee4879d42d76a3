use crate::fields::fp12::{Fp12, Fp12Config};

/// One step of a fixed addition chain over the cyclotomic subgroup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExptStep {
    /// r <- r^2, with the cyclotomic squaring.
    Square,
    /// r <- r * x
    MulByBase,
    /// r <- r * x^(-1), where x^(-1) is the conjugate of x.
    MulByBaseInverse,
}

impl ExptStep {
    pub const fn from_char(c: u8) -> Option<Self> {
        match c {
            b'S' => Some(Self::Square),
            b'X' => Some(Self::MulByBase),
            b'I' => Some(Self::MulByBaseInverse),
            _ => None,
        }
    }
}

/// Spell a chain with one letter per step: `S`, `X` and `I`. Evaluated at
/// compile time, where an unknown letter stops the build.
pub const fn parse_chain<const L: usize>(text: &[u8]) -> [ExptStep; L] {
    assert!(text.len() == L);
    let mut out = [ExptStep::Square; L];
    let mut i = 0;
    while i < L {
        out[i] = match ExptStep::from_char(text[i]) {
            Some(step) => step,
            None => panic!("unknown chain step"),
        };
        i += 1;
    }
    out
}

/// Run `chain` starting from r = x. The value of the exponent after each
/// step is 2*e, e + 1 and e - 1 respectively, so the result is x^e for
/// the exponent e the chain spells out.
///
/// x must lie in the cyclotomic subgroup; outside of it the squarings and
/// the conjugate-as-inverse are both wrong.
pub fn run_chain<C: Fp12Config>(x: &Fp12<C>, chain: &[ExptStep]) -> Fp12<C> {
    let x_inv = x.conjugate();
    let mut r = *x;
    for step in chain.iter() {
        match step {
            ExptStep::Square => {
                r.set_cyclotomic_square();
            }
            ExptStep::MulByBase => r *= *x,
            ExptStep::MulByBaseInverse => r *= x_inv,
        }
    }
    r
}

/// The exponent computed by `chain`, when it fits in a machine word.
pub fn chain_exponent(chain: &[ExptStep]) -> Option<u64> {
    let mut e: u64 = 1;
    for step in chain.iter() {
        e = match step {
            ExptStep::Square => e.checked_mul(2)?,
            ExptStep::MulByBase => e.checked_add(1)?,
            ExptStep::MulByBaseInverse => e.checked_sub(1)?,
        };
    }
    Some(e)
}
