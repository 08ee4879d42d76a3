#![allow(non_snake_case)]

pub mod elliptic;
pub mod error;
pub mod fields;
pub mod hash_to_curve;
pub mod pairing;
pub mod utilities;

pub use error::{FieldError, HashToCurveError};
