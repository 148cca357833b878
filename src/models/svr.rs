use serde::{Deserialize, Serialize};

use super::shape::{deserialize_scalar, deserialize_vector};
use crate::math::{dot, squared_distance};
use crate::models::{ensure_n_features, Artifact, Predict};
use crate::prelude::*;

/// Kernel name as exported at fit time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum Kernel {
    Linear,
    Poly,
    Rbf,
    Sigmoid,
}

impl TryFrom<String> for Kernel {
    type Error = anyhow::Error;

    fn try_from(name: String) -> Result<Self> {
        match name.as_str() {
            "linear" => Ok(Self::Linear),
            "poly" => Ok(Self::Poly),
            "rbf" => Ok(Self::Rbf),
            "sigmoid" => Ok(Self::Sigmoid),
            _ => Err(anyhow!("unsupported kernel `{}`", name)),
        }
    }
}

impl From<Kernel> for String {
    fn from(kernel: Kernel) -> Self {
        match kernel {
            Kernel::Linear => "linear",
            Kernel::Poly => "poly",
            Kernel::Rbf => "rbf",
            Kernel::Sigmoid => "sigmoid",
        }
        .to_string()
    }
}

/// Epsilon support vector regression.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Svr {
    /// `kernel` parameter name.
    pub kernel: Kernel,

    /// `_gamma`, the kernel coefficient already resolved from `scale`/`auto` at fit time.
    pub gamma: f64,

    #[serde(default)]
    pub coef0: f64,

    #[serde(default = "default_degree")]
    pub degree: i32,

    /// `support_vectors_`, one row per support vector.
    pub support_vectors: Vec<Vec<f64>>,

    /// `dual_coef_`, either flat or the fitted `(1, n_SV)` matrix.
    #[serde(deserialize_with = "deserialize_vector")]
    pub dual_coef: Vec<f64>,

    /// `intercept_`, either a number or a one-element list.
    #[serde(deserialize_with = "deserialize_scalar")]
    pub intercept: f64,
}

const fn default_degree() -> i32 {
    3
}

impl Svr {
    fn kernel(&self, x: &[f64], y: &[f64]) -> f64 {
        match self.kernel {
            Kernel::Linear => dot(x, y),
            Kernel::Poly => (self.gamma * dot(x, y) + self.coef0).powi(self.degree),
            Kernel::Rbf => (-self.gamma * squared_distance(x, y)).exp(),
            Kernel::Sigmoid => (self.gamma * dot(x, y) + self.coef0).tanh(),
        }
    }
}

impl Artifact for Svr {
    const NAME: &'static str = "SVR model";

    fn validate(&self) -> Result {
        ensure!(!self.support_vectors.is_empty(), "no support vectors");
        ensure!(
            self.support_vectors.len() == self.dual_coef.len(),
            "{} support vectors but {} dual coefficients",
            self.support_vectors.len(),
            self.dual_coef.len(),
        );
        let n_features = self.support_vectors[0].len();
        ensure!(
            self.support_vectors.iter().all(|vector| vector.len() == n_features),
            "support vectors have inconsistent widths",
        );
        Ok(())
    }
}

impl Predict for Svr {
    type Output = f64;

    fn predict(&self, x: &[f64]) -> Result<f64> {
        let n_features = self.support_vectors.first().map_or(0, Vec::len);
        ensure_n_features(Self::NAME, n_features, x)?;
        let sum: f64 = self
            .support_vectors
            .iter()
            .zip(&self.dual_coef)
            .map(|(vector, coef)| coef * self.kernel(vector, x))
            .sum();
        Ok(sum + self.intercept)
    }
}
