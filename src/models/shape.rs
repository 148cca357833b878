//! Adapters for the array shapes produced by `ndarray.tolist()` at export time.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Vector {
    Flat(Vec<f64>),
    Rows(Vec<Vec<f64>>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Value(f64),
    Vector(Vec<f64>),
}

/// Accepts `[f64]` or a single-row `[[f64]]`, such as a `(1, n)` dual coefficient matrix.
pub fn deserialize_vector<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    match Vector::deserialize(deserializer)? {
        Vector::Flat(vector) => Ok(vector),
        Vector::Rows(mut rows) => match (rows.pop(), rows.is_empty()) {
            (Some(row), true) => Ok(row),
            _ => Err(D::Error::custom("expected a single row")),
        },
    }
}

/// Accepts `f64` or a one-element `[f64]`, such as a fitted `intercept_` array.
pub fn deserialize_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Scalar::deserialize(deserializer)? {
        Scalar::Value(value) => Ok(value),
        Scalar::Vector(vector) => match vector.as_slice() {
            [value] => Ok(*value),
            _ => Err(D::Error::custom(format!(
                "expected a single value, got {}",
                vector.len(),
            ))),
        },
    }
}
