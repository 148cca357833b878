use serde::Serialize;

use crate::estimator::Estimate;

pub const BEST_MODEL: &str = "Logistic Regression";

#[derive(Serialize)]
pub struct PredictionResponse {
    pub best_model: &'static str,
    pub comparison: [Comparison; 3],
}

#[derive(Serialize)]
pub struct Comparison {
    pub model: &'static str,
    pub prediction: String,
    pub performance: &'static str,
}

impl From<Estimate> for PredictionResponse {
    fn from(estimate: Estimate) -> Self {
        Self {
            best_model: BEST_MODEL,
            comparison: [
                Comparison {
                    model: "Linear Regression",
                    prediction: format_price(estimate.linear_price),
                    performance: "R² = 0.99",
                },
                Comparison {
                    model: "SVR",
                    prediction: format_price(estimate.svr_price),
                    performance: "R² = 0.92",
                },
                Comparison {
                    model: "Logistic Regression",
                    prediction: estimate.category.to_string(),
                    performance: "Accuracy = 100%",
                },
            ],
        }
    }
}

/// Formats the price in lakhs of rupees.
pub fn format_price(price: f64) -> String {
    format!("₹ {:.2} Lakhs", price)
}
