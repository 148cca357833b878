use serde::{Deserialize, Serialize};

use super::shape::{deserialize_scalar, deserialize_vector};
use crate::math::dot;
use crate::models::{ensure_n_features, Artifact, Predict};
use crate::prelude::*;

/// Ordinary least squares regression.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LinearRegression {
    /// `coef_`, either flat or a single row.
    #[serde(deserialize_with = "deserialize_vector")]
    pub coef: Vec<f64>,

    /// `intercept_`, either a number or a one-element list.
    #[serde(deserialize_with = "deserialize_scalar")]
    pub intercept: f64,
}

impl Artifact for LinearRegression {
    const NAME: &'static str = "linear regression model";

    fn validate(&self) -> Result {
        ensure!(!self.coef.is_empty(), "no coefficients");
        Ok(())
    }
}

impl Predict for LinearRegression {
    type Output = f64;

    fn predict(&self, x: &[f64]) -> Result<f64> {
        ensure_n_features(Self::NAME, self.coef.len(), x)?;
        Ok(dot(&self.coef, x) + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_ok() -> Result {
        let model = LinearRegression {
            coef: vec![0.5, 2.0, -1.0, 0.0],
            intercept: 10.0,
        };
        let prediction = model.predict(&[100.0, 3.0, 5.0, 7.0])?;
        assert!((prediction - 61.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn shape_mismatch_fails() {
        let model = LinearRegression {
            coef: vec![1.0, 2.0],
            intercept: 0.0,
        };
        assert!(model.predict(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }
}
