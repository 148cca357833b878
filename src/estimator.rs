use std::fmt::{Display, Formatter};

use crate::features::FeatureVector;
use crate::models::{Models, Predict, Transform};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCategory {
    High,
    Low,
}

impl PriceCategory {
    /// Only the exact `1` label is the «high» class.
    pub const fn from_label(label: i64) -> Self {
        match label {
            1 => Self::High,
            _ => Self::Low,
        }
    }
}

impl Display for PriceCategory {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Self::High => "High Price House",
            Self::Low => "Low Price House",
        })
    }
}

/// Outputs of all the models for a single input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Linear regression price, in lakhs.
    pub linear_price: f64,

    /// SVR price, in lakhs.
    pub svr_price: f64,

    pub category: PriceCategory,
}

#[instrument(level = "debug", skip(models))]
pub fn estimate(models: &Models, features: FeatureVector) -> Result<Estimate> {
    let x = features.to_array();

    let linear_price = models.linear()?.predict(&x)?;

    let svr_x = models.svr_scaler()?.transform(&x)?;
    let svr_price = models.svr()?.predict(&svr_x)?;

    let logistic_x = models.logistic_scaler()?.transform(&x)?;
    let label = models.logistic()?.predict(&logistic_x)?;

    let estimate = Estimate {
        linear_price,
        svr_price,
        category: PriceCategory::from_label(label),
    };
    debug!(?estimate);
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::sample_models;

    #[test]
    fn category_from_label_ok() {
        assert_eq!(PriceCategory::from_label(1), PriceCategory::High);
        assert_eq!(PriceCategory::from_label(0), PriceCategory::Low);
        assert_eq!(PriceCategory::from_label(2), PriceCategory::Low);
        assert_eq!(PriceCategory::from_label(-1), PriceCategory::Low);
        assert_eq!(PriceCategory::High.to_string(), "High Price House");
        assert_eq!(PriceCategory::Low.to_string(), "Low Price House");
    }

    #[test]
    fn estimate_ok() -> Result {
        let features = FeatureVector {
            size: 1200.0,
            bedrooms: 3,
            age: 10,
            location: 2,
        };
        let estimate = estimate(&sample_models(), features)?;
        // 0.05 * 1200 + 2 * 3 - 0.5 * 10 + 2 + 10
        assert!((estimate.linear_price - 73.0).abs() < 1e-9);
        // 2 * (1200 - 1000) / 100 + 50
        assert!((estimate.svr_price - 54.0).abs() < 1e-9);
        assert_eq!(estimate.category, PriceCategory::High);
        Ok(())
    }

    #[test]
    fn zero_features_ok() -> Result {
        let estimate = estimate(&sample_models(), FeatureVector::default())?;
        assert!((estimate.linear_price - 10.0).abs() < 1e-9);
        assert!((estimate.svr_price - 30.0).abs() < 1e-9);
        assert_eq!(estimate.category, PriceCategory::Low);
        Ok(())
    }

    #[test]
    fn missing_model_fails() {
        let models = Models {
            svr: None,
            ..sample_models()
        };
        let error = estimate(&models, FeatureVector::default()).unwrap_err();
        assert_eq!(error.to_string(), "SVR model is not loaded");
    }
}
