//! A free list of scratch big integers for the string and byte conversions.
//!
//! Buffers are handed out through [`PooledBigUint`], which puts the buffer
//! back on drop. Two checkouts never share a buffer.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

use num_bigint::BigUint;
use num_traits::Zero;

/// Pool of reusable [`BigUint`] buffers shared between threads.
pub struct ScratchPool {
    free: Mutex<Vec<BigUint>>,
}

/// Scratch pool used by field element conversions.
pub static BIGINT_POOL: ScratchPool = ScratchPool::new();

impl ScratchPool {
    pub const fn new() -> Self {
        Self {
            free: Mutex::new(Vec::new()),
        }
    }

    /// Take a zeroed buffer from the pool, allocating one if the pool is empty.
    pub fn checkout(&self) -> PooledBigUint<'_> {
        let reused = self
            .free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();
        let value = reused.unwrap_or_else(|| {
            log::debug!("scratch pool empty, allocating a new buffer");
            BigUint::zero()
        });
        PooledBigUint {
            value: Some(value),
            pool: self,
        }
    }

    /// Number of buffers currently waiting in the pool.
    pub fn available(&self) -> usize {
        self.free.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn release(&self, mut value: BigUint) {
        value.set_zero();
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }
}

impl Default for ScratchPool {
    fn default() -> Self {
        Self::new()
    }
}

/// A buffer checked out of a [`ScratchPool`]. Returned to the pool on drop.
pub struct PooledBigUint<'pool> {
    value: Option<BigUint>,
    pool: &'pool ScratchPool,
}

impl Deref for PooledBigUint<'_> {
    type Target = BigUint;

    fn deref(&self) -> &BigUint {
        // Only `drop` takes the value out.
        match &self.value {
            Some(v) => v,
            None => unreachable!("pooled buffer used after release"),
        }
    }
}

impl DerefMut for PooledBigUint<'_> {
    fn deref_mut(&mut self) -> &mut BigUint {
        match &mut self.value {
            Some(v) => v,
            None => unreachable!("pooled buffer used after release"),
        }
    }
}

impl Drop for PooledBigUint<'_> {
    fn drop(&mut self) {
        if let Some(v) = self.value.take() {
            self.pool.release(v);
        }
    }
}
