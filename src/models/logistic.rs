use serde::{Deserialize, Serialize};

use crate::math::dot;
use crate::models::{ensure_n_features, Artifact, Predict};
use crate::prelude::*;

/// Logistic regression classifier.
///
/// A binary classifier carries a single coefficient row, a multiclass one carries a row per class.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LogisticRegression {
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,

    #[serde(default = "default_classes")]
    pub classes: Vec<i64>,
}

fn default_classes() -> Vec<i64> {
    vec![0, 1]
}

impl LogisticRegression {
    /// Signed distances to the class hyperplanes.
    pub fn decision_function(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(coef, intercept)| -> Result<f64> {
                ensure_n_features(Self::NAME, coef.len(), x)?;
                Ok(dot(coef, x) + intercept)
            })
            .collect()
    }
}

impl Artifact for LogisticRegression {
    const NAME: &'static str = "logistic regression model";

    fn validate(&self) -> Result {
        ensure!(!self.coef.is_empty(), "no coefficients");
        ensure!(
            self.coef.len() == self.intercept.len(),
            "{} coefficient rows but {} intercepts",
            self.coef.len(),
            self.intercept.len(),
        );
        let expected_n_classes = match self.coef.len() {
            1 => 2,
            n_rows => n_rows,
        };
        ensure!(
            self.classes.len() == expected_n_classes,
            "expected {} classes, got {}",
            expected_n_classes,
            self.classes.len(),
        );
        Ok(())
    }
}

impl Predict for LogisticRegression {
    /// Predicted class label.
    type Output = i64;

    fn predict(&self, x: &[f64]) -> Result<i64> {
        let scores = self.decision_function(x)?;
        let index = match scores.as_slice() {
            [score] => usize::from(*score > 0.0),
            scores => scores
                .iter()
                .enumerate()
                .fold((0, f64::NEG_INFINITY), |(best_index, best_score), (index, score)| {
                    if *score > best_score {
                        (index, *score)
                    } else {
                        (best_index, best_score)
                    }
                })
                .0,
        };
        self.classes
            .get(index)
            .copied()
            .ok_or_else(|| anyhow!("{} has no class #{}", Self::NAME, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary() -> LogisticRegression {
        LogisticRegression {
            coef: vec![vec![1.0, -1.0]],
            intercept: vec![0.5],
            classes: default_classes(),
        }
    }

    #[test]
    fn binary_predict_ok() -> Result {
        let model = binary();
        model.validate()?;
        assert_eq!(model.predict(&[2.0, 1.0])?, 1);
        assert_eq!(model.predict(&[0.0, 1.0])?, 0);
        Ok(())
    }

    #[test]
    fn zero_decision_is_negative_class_ok() -> Result {
        assert_eq!(binary().predict(&[0.0, 0.5])?, 0);
        Ok(())
    }

    #[test]
    fn custom_classes_ok() -> Result {
        let model = LogisticRegression {
            classes: vec![-1, 7],
            ..binary()
        };
        assert_eq!(model.predict(&[2.0, 1.0])?, 7);
        Ok(())
    }

    #[test]
    fn multiclass_predict_ok() -> Result {
        let model = LogisticRegression {
            coef: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![-1.0, -1.0]],
            intercept: vec![0.0, 0.0, 0.0],
            classes: vec![10, 20, 30],
        };
        model.validate()?;
        assert_eq!(model.predict(&[1.0, 3.0])?, 20);
        assert_eq!(model.predict(&[-1.0, -1.0])?, 30);
        Ok(())
    }

    #[test]
    fn mismatched_classes_are_invalid() {
        let model = LogisticRegression {
            classes: vec![0, 1, 2],
            ..binary()
        };
        assert!(model.validate().is_err());
    }

    #[test]
    fn shape_mismatch_fails() {
        assert!(binary().predict(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }
}
