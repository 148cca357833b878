use serde::{Deserialize, Serialize};

use crate::models::{ensure_n_features, Artifact, Transform};
use crate::prelude::*;

/// Standardizes features by removing the mean and scaling to unit variance.
///
/// Either step is skipped when the scaler was fitted without it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StandardScaler {
    #[serde(default)]
    pub mean: Option<Vec<f64>>,

    #[serde(default)]
    pub scale: Option<Vec<f64>>,
}

impl StandardScaler {
    fn n_features(&self) -> Option<usize> {
        self.mean.as_ref().or(self.scale.as_ref()).map(Vec::len)
    }
}

impl Artifact for StandardScaler {
    const NAME: &'static str = "standard scaler";

    fn validate(&self) -> Result {
        if let (Some(mean), Some(scale)) = (&self.mean, &self.scale) {
            ensure!(
                mean.len() == scale.len(),
                "mean has {} features but scale has {}",
                mean.len(),
                scale.len(),
            );
        }
        if let Some(scale) = &self.scale {
            ensure!(scale.iter().all(|s| *s != 0.0), "zero scale");
        }
        Ok(())
    }
}

impl Transform for StandardScaler {
    fn transform(&self, x: &[f64]) -> Result<Vec<f64>> {
        if let Some(n_features) = self.n_features() {
            ensure_n_features(Self::NAME, n_features, x)?;
        }
        let mut x = x.to_vec();
        if let Some(mean) = &self.mean {
            for (xi, mean) in x.iter_mut().zip(mean) {
                *xi -= mean;
            }
        }
        if let Some(scale) = &self.scale {
            for (xi, scale) in x.iter_mut().zip(scale) {
                *xi /= scale;
            }
        }
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_ok() -> Result {
        let scaler = StandardScaler {
            mean: Some(vec![1.0, 2.0]),
            scale: Some(vec![2.0, 0.5]),
        };
        assert_eq!(scaler.transform(&[3.0, 3.0])?, vec![1.0, 2.0]);
        Ok(())
    }

    #[test]
    fn without_mean_ok() -> Result {
        let scaler = StandardScaler {
            mean: None,
            scale: Some(vec![4.0]),
        };
        assert_eq!(scaler.transform(&[2.0])?, vec![0.5]);
        Ok(())
    }

    #[test]
    fn shape_mismatch_fails() {
        let scaler = StandardScaler {
            mean: Some(vec![0.0; 4]),
            scale: None,
        };
        assert!(scaler.transform(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn zero_scale_is_invalid() {
        let scaler = StandardScaler {
            mean: None,
            scale: Some(vec![1.0, 0.0]),
        };
        assert!(scaler.validate().is_err());
    }
}
