//! Text, big integer and structured encodings of prime field elements.

use core::fmt;
use core::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, Zero};

use super::Field;
use super::fp::{FieldParams, Fp};
use crate::error::{FieldError, Result};
use crate::utilities::bn::{bn_from_be_bytes, bn_to_be_bytes};
use crate::utilities::pool::BIGINT_POOL;

/// Values whose negation is at most this print as `-<negation>` in base 10.
const MAX_SHORT_NEGATION: u64 = 65535;

/// Decimal strings up to this length are written as bare JSON numbers.
const MAX_JSON_NUMBER_LENGTH: usize = 15;

/// Split an optional sign and base prefix off a number and drop its `_`
/// separators. A separator must sit between two digits, or between the base
/// prefix and the first digit. Surrounding whitespace is rejected.
fn parse_prefixed(text: &str) -> Option<(bool, u32, String)> {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let lower = rest.get(..2).map(str::to_ascii_lowercase);
    let (radix, digits, prefixed) = match lower.as_deref() {
        Some("0x") => (16, &rest[2..], true),
        Some("0b") => (2, &rest[2..], true),
        Some("0o") => (8, &rest[2..], true),
        _ => (10, rest, false),
    };

    let mut out = String::with_capacity(digits.len());
    let mut separator_allowed = prefixed;
    let mut trailing_separator = false;
    for c in digits.chars() {
        if c == '_' {
            if !separator_allowed {
                return None;
            }
            separator_allowed = false;
            trailing_separator = true;
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
            separator_allowed = true;
            trailing_separator = false;
        } else {
            return None;
        }
    }
    if trailing_separator || out.is_empty() {
        return None;
    }
    Some((negative, radix, out))
}

impl<P: FieldParams<N>, const N: usize> Fp<P, N> {
    /// The modulus as a big integer.
    pub fn modulus() -> BigUint {
        let mut buf = vec![0u8; Self::BYTES];
        bn_to_be_bytes(&P::MODULUS, &mut buf);
        BigUint::from_bytes_be(&buf)
    }

    /// Load a reduced integer held in a scratch buffer.
    fn set_reduced_biguint(&mut self, v: &BigUint) -> &mut Self {
        let mut limbs = [0u64; N];
        for (l, d) in limbs.iter_mut().zip(v.iter_u64_digits()) {
            *l = d;
        }
        *self = Self::from_regular(limbs);
        self
    }

    /// Set self to `v mod q`.
    pub fn set_biguint(&mut self, v: &BigUint) -> &mut Self {
        let mut scratch = BIGINT_POOL.checkout();
        scratch.clone_from(v);
        *scratch %= Self::modulus();
        self.set_reduced_biguint(&scratch)
    }

    /// Set self to `v mod q`, negative values included.
    pub fn set_bigint(&mut self, v: &BigInt) -> &mut Self {
        self.set_biguint(v.magnitude());
        if v.sign() == Sign::Minus {
            self.set_neg();
        }
        self
    }

    /// Set self from a big-endian byte string of any length, reduced mod q.
    pub fn set_bytes(&mut self, buf: &[u8]) -> &mut Self {
        if buf.len() == Self::BYTES {
            *self = Self::from_regular(bn_from_be_bytes::<N>(buf));
            return self;
        }
        let mut scratch = BIGINT_POOL.checkout();
        *scratch = BigUint::from_bytes_be(buf);
        *scratch %= Self::modulus();
        self.set_reduced_biguint(&scratch)
    }

    /// Parse a number with an optional `0x`, `0b` or `0o` prefix and `_`
    /// digit separators; anything else is read as decimal.
    pub fn set_string(&mut self, text: &str) -> Result<&mut Self> {
        let parse_error = || {
            log::debug!("failed to parse {text:?} into {}", P::NAME);
            FieldError::Parse {
                text: text.to_string(),
            }
        };
        let (negative, radix, digits) = parse_prefixed(text).ok_or_else(parse_error)?;

        let mut scratch = BIGINT_POOL.checkout();
        *scratch = BigUint::from_str_radix(&digits, radix).map_err(|_| parse_error())?;
        *scratch %= Self::modulus();
        self.set_reduced_biguint(&scratch);
        if negative {
            self.set_neg();
        }
        Ok(self)
    }

    /// The regular representative as a big integer.
    pub fn to_biguint(&self) -> BigUint {
        let digits: Vec<u32> = self
            .to_regular()
            .iter()
            .flat_map(|w| [*w as u32, (*w >> 32) as u32])
            .collect();
        BigUint::new(digits)
    }

    /// Print the value in the given base. In base 10, values whose negation
    /// is small are printed as that negation with a minus sign.
    ///
    /// Panics if `base` is not in `2..=36`.
    pub fn text(&self, base: u32) -> String {
        assert!((2..=36).contains(&base), "invalid base {base}");

        if base == 10 {
            let neg = (-*self).to_regular();
            let fits_word = neg[1..].iter().all(|w| *w == 0);
            if fits_word && neg[0] != 0 && neg[0] <= MAX_SHORT_NEGATION {
                return format!("-{}", neg[0]);
            }
        }

        let v = self.to_biguint();
        if v.is_zero() {
            return "0".to_string();
        }
        v.to_str_radix(base)
    }
}

impl<P: FieldParams<N>, const N: usize> fmt::Display for Fp<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text(10))
    }
}

impl<P: FieldParams<N>, const N: usize> fmt::Debug for Fp<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", P::NAME, self.text(10))
    }
}

impl<P: FieldParams<N>, const N: usize> fmt::LowerHex for Fp<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_biguint().to_str_radix(16))
    }
}

impl<P: FieldParams<N>, const N: usize> FromStr for Fp<P, N> {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        let mut r = Self::ZERO;
        r.set_string(s)?;
        Ok(r)
    }
}

impl<P: FieldParams<N>, const N: usize> Fp<P, N> {
    /// Text form used by the structured encoding: a bare number when short,
    /// otherwise a string.
    pub fn structured_text(&self) -> (String, bool) {
        let s = self.text(10);
        let quoted = s.len() > MAX_JSON_NUMBER_LENGTH;
        (s, quoted)
    }

    /// Parse the structured form, rejecting inputs over three times the bit length.
    pub fn from_structured_text(s: &str) -> Result<Self> {
        let max = P::BIT_LENGTH * 3;
        if s.len() > max {
            return Err(FieldError::TooLong { len: s.len(), max });
        }
        s.parse()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;
    use core::marker::PhantomData;

    use num_bigint::{BigInt, BigUint};
    use serde::de::{self, MapAccess, Unexpected, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::fields::Field;
    use crate::fields::fp::{FieldParams, Fp};

    /// Key under which serde_json, built with `arbitrary_precision`, hands
    /// over the text of a number too wide for a machine word.
    const JSON_NUMBER_KEY: &str = "$serde_json::private::Number";

    impl<P: FieldParams<N>, const N: usize> Serialize for Fp<P, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let (s, quoted) = self.structured_text();
            if quoted {
                return serializer.serialize_str(&s);
            }
            match s.parse::<i64>() {
                Ok(v) => serializer.serialize_i64(v),
                Err(_) => serializer.serialize_str(&s),
            }
        }
    }

    struct FpVisitor<P, const N: usize>(PhantomData<P>);

    impl<'de, P: FieldParams<N>, const N: usize> Visitor<'de> for FpVisitor<P, N> {
        type Value = Fp<P, N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "an integer or a string holding an element of {}", P::NAME)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Fp::<P, N>::from_u64(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Fp::<P, N>::from_i64(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
            let mut r = Fp::<P, N>::ZERO;
            r.set_biguint(&BigUint::from(v));
            Ok(r)
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
            let mut r = Fp::<P, N>::ZERO;
            r.set_bigint(&BigInt::from(v));
            Ok(r)
        }

        // A float has already lost the digits of a wide integer.
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Err(E::custom(format!(
                "floating point {v} can't be read as an element of {}; \
                 write wide integers as strings",
                P::NAME
            )))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Fp::<P, N>::from_structured_text(v).map_err(E::custom)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            match map.next_key::<String>()? {
                Some(key) if key == JSON_NUMBER_KEY => {
                    let text: String = map.next_value()?;
                    Fp::<P, N>::from_structured_text(&text).map_err(de::Error::custom)
                }
                _ => Err(de::Error::invalid_type(Unexpected::Map, &self)),
            }
        }
    }

    impl<'de, P: FieldParams<N>, const N: usize> Deserialize<'de> for Fp<P, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(FpVisitor(PhantomData))
        }
    }
}
