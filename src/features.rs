//! Request payload to feature vector conversion.

use serde_json::{Map, Value};

use crate::prelude::*;

pub const N_FEATURES: usize = 4;

/// Model input, in the order the models were fitted on.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub size: f64,
    pub bedrooms: i64,
    pub age: i64,
    pub location: i64,
}

impl FeatureVector {
    #[must_use]
    pub fn to_array(self) -> [f64; N_FEATURES] {
        [
            self.size,
            self.bedrooms as f64,
            self.age as f64,
            self.location as f64,
        ]
    }
}

impl TryFrom<&Map<String, Value>> for FeatureVector {
    type Error = anyhow::Error;

    /// Absent fields default to zero.
    fn try_from(payload: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            size: payload
                .get("size")
                .map_or(Ok(0.0), |value| parse_float("size", value))?,
            bedrooms: payload
                .get("bedrooms")
                .map_or(Ok(0), |value| parse_int("bedrooms", value))?,
            age: payload
                .get("age")
                .map_or(Ok(0), |value| parse_int("age", value))?,
            location: payload
                .get("location")
                .map_or(Ok(0), |value| parse_int("location", value))?,
        })
    }
}

fn parse_float(field: &str, value: &Value) -> Result<f64> {
    let value = match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| anyhow!("`{}` is out of range: {}", field, number)),
        Value::Bool(value) => Ok(f64::from(u8::from(*value))),
        Value::String(string) => string
            .trim()
            .parse()
            .with_context(|| format!("`{}` is not a number: {:?}", field, string)),
        _ => Err(anyhow!("`{}` must be a number, got `{}`", field, value)),
    }?;
    ensure!(value.is_finite(), "`{}` must be finite, got {}", field, value);
    Ok(value)
}

fn parse_int(field: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(value) => Ok(value),
            None => truncate(field, number.as_f64().unwrap_or(f64::NAN)),
        },
        Value::Bool(value) => Ok(i64::from(*value)),
        Value::String(string) => string
            .trim()
            .parse()
            .with_context(|| format!("`{}` is not an integer: {:?}", field, string)),
        _ => Err(anyhow!("`{}` must be an integer, got `{}`", field, value)),
    }
}

/// Truncates the value toward zero.
fn truncate(field: &str, value: f64) -> Result<i64> {
    ensure!(
        value.is_finite() && value.trunc().abs() < i64::MAX as f64,
        "`{}` is out of range: {}",
        field,
        value,
    );
    Ok(value.trunc() as i64)
}
