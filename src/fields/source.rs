//! The closed set of values a prime field element can be set from.

use num_bigint::{BigInt, BigUint};

use super::Field;
use super::fp::{FieldParams, Fp};
use crate::error::Result;

/// A value to load into a field element.
#[derive(Clone, Copy, Debug)]
pub enum FieldSource<'a, F> {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    BigInt(&'a BigInt),
    BigUint(&'a BigUint),
    Text(&'a str),
    Bytes(&'a [u8]),
    Element(F),
}

macro_rules! source_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl<F> From<$t> for FieldSource<'_, F> {
                fn from(v: $t) -> Self {
                    FieldSource::$variant(v)
                }
            }
        )*
    };
}

source_from!(
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
);

impl<'a, F> From<&'a BigInt> for FieldSource<'a, F> {
    fn from(v: &'a BigInt) -> Self {
        FieldSource::BigInt(v)
    }
}

impl<'a, F> From<&'a BigUint> for FieldSource<'a, F> {
    fn from(v: &'a BigUint) -> Self {
        FieldSource::BigUint(v)
    }
}

impl<'a, F> From<&'a str> for FieldSource<'a, F> {
    fn from(v: &'a str) -> Self {
        FieldSource::Text(v)
    }
}

impl<'a, F> From<&'a [u8]> for FieldSource<'a, F> {
    fn from(v: &'a [u8]) -> Self {
        FieldSource::Bytes(v)
    }
}

impl<P: FieldParams<N>, const N: usize> From<Fp<P, N>> for FieldSource<'_, Fp<P, N>> {
    fn from(v: Fp<P, N>) -> Self {
        FieldSource::Element(v)
    }
}

impl<P: FieldParams<N>, const N: usize> Fp<P, N> {
    /// Set self from any supported source. Only text can fail to convert.
    pub fn set_source<'a>(&mut self, source: impl Into<FieldSource<'a, Self>>) -> Result<&mut Self> {
        match source.into() {
            FieldSource::U8(v) => self.set_uint(v.into()),
            FieldSource::U16(v) => self.set_uint(v.into()),
            FieldSource::U32(v) => self.set_uint(v.into()),
            FieldSource::U64(v) => self.set_uint(v),
            FieldSource::Usize(v) => self.set_uint(v as u64),
            FieldSource::I8(v) => self.set_int(v.into()),
            FieldSource::I16(v) => self.set_int(v.into()),
            FieldSource::I32(v) => self.set_int(v.into()),
            FieldSource::I64(v) => self.set_int(v),
            FieldSource::Isize(v) => self.set_int(v as i64),
            FieldSource::BigInt(v) => self.set_bigint(v),
            FieldSource::BigUint(v) => self.set_biguint(v),
            FieldSource::Text(v) => return self.set_string(v),
            FieldSource::Bytes(v) => self.set_bytes(v),
            FieldSource::Element(v) => {
                *self = v;
                return Ok(self);
            }
        };
        Ok(self)
    }

    /// Build an element from any supported source.
    pub fn from_source<'a>(source: impl Into<FieldSource<'a, Self>>) -> Result<Self> {
        let mut r = Self::ZERO;
        r.set_source(source)?;
        Ok(r)
    }
}
