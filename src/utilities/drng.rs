//! A deterministic random number generator for tests and benchmarks.
//!
//! DO NOT use it for anything else: the output is fully determined by the seed.

use rand_core::{CryptoRng, Error, RngCore};
use sha3::Shake256;
use sha3::digest::{ExtendableOutput, Update, XofReader};

/// SHAKE256 keyed with a seed, read as an endless stream.
pub struct DRNG {
    reader: <Shake256 as ExtendableOutput>::Reader,
}

impl DRNG {
    pub fn from_seed(seed: &[u8]) -> Self {
        let mut sh = Shake256::default();
        sh.update(b"pairing-drng");
        sh.update(seed);
        Self {
            reader: sh.finalize_xof(),
        }
    }
}

impl RngCore for DRNG {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.reader.read(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.reader.read(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.reader.read(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.reader.read(dest);
        Ok(())
    }
}

impl CryptoRng for DRNG {}
