//! Pre-fitted model artifacts.
//!
//! Every artifact is a pickled dictionary of the fitted parameters, see the individual types for
//! the expected keys.

use serde::de::DeserializeOwned;

pub use self::linear::LinearRegression;
pub use self::logistic::LogisticRegression;
pub use self::scaler::StandardScaler;
pub use self::svr::Svr;
use crate::prelude::*;
use crate::tracing::format_elapsed;

mod linear;
mod logistic;
mod scaler;
mod shape;
mod svr;

pub const LINEAR_MODEL_FILE: &str = "linear_model.pkl";
pub const LOGISTIC_MODEL_FILE: &str = "logistic_model.pkl";
pub const LOGISTIC_SCALER_FILE: &str = "logistic_scaler.pkl";
pub const SVR_MODEL_FILE: &str = "svr_model.pkl";
pub const SVR_SCALER_FILE: &str = "svr_scaler.pkl";

pub trait Artifact: DeserializeOwned {
    /// Human-readable name used in error messages.
    const NAME: &'static str;

    /// Checks the deserialized parameters for consistency.
    fn validate(&self) -> Result;
}

pub trait Predict {
    type Output;

    fn predict(&self, x: &[f64]) -> Result<Self::Output>;
}

pub trait Transform {
    fn transform(&self, x: &[f64]) -> Result<Vec<f64>>;
}

fn ensure_n_features(name: &str, expected: usize, x: &[f64]) -> Result {
    ensure!(
        x.len() == expected,
        "{} expects {} features, got {}",
        name,
        expected,
        x.len(),
    );
    Ok(())
}

/// Loaded artifacts. Slots that failed to load stay empty.
#[derive(Default)]
pub struct Models {
    pub linear: Option<LinearRegression>,
    pub logistic: Option<LogisticRegression>,
    pub logistic_scaler: Option<StandardScaler>,
    pub svr: Option<Svr>,
    pub svr_scaler: Option<StandardScaler>,
}

impl Models {
    /// Loads all the artifacts from the directory.
    ///
    /// Failures are logged and never abort the loading, so that the frontend is still served.
    #[instrument(skip_all, fields(directory = ?directory))]
    pub fn load(directory: &Path) -> Self {
        let models = Self {
            linear: try_load(&directory.join(LINEAR_MODEL_FILE)),
            logistic: try_load(&directory.join(LOGISTIC_MODEL_FILE)),
            logistic_scaler: try_load(&directory.join(LOGISTIC_SCALER_FILE)),
            svr: try_load(&directory.join(SVR_MODEL_FILE)),
            svr_scaler: try_load(&directory.join(SVR_SCALER_FILE)),
        };
        if models.is_complete() {
            info!("all models are loaded");
        } else {
            warn!("some models are not loaded, predictions will fail");
        }
        models
    }

    pub const fn is_complete(&self) -> bool {
        self.linear.is_some()
            && self.logistic.is_some()
            && self.logistic_scaler.is_some()
            && self.svr.is_some()
            && self.svr_scaler.is_some()
    }

    pub fn linear(&self) -> Result<&LinearRegression> {
        require(self.linear.as_ref(), "linear regression model")
    }

    pub fn logistic(&self) -> Result<&LogisticRegression> {
        require(self.logistic.as_ref(), "logistic regression model")
    }

    pub fn logistic_scaler(&self) -> Result<&StandardScaler> {
        require(self.logistic_scaler.as_ref(), "logistic regression scaler")
    }

    pub fn svr(&self) -> Result<&Svr> {
        require(self.svr.as_ref(), "SVR model")
    }

    pub fn svr_scaler(&self) -> Result<&StandardScaler> {
        require(self.svr_scaler.as_ref(), "SVR scaler")
    }
}

fn require<'a, T>(slot: Option<&'a T>, name: &str) -> Result<&'a T> {
    slot.ok_or_else(|| anyhow!("{} is not loaded", name))
}

fn try_load<T: Artifact>(path: &Path) -> Option<T> {
    let start_instant = Instant::now();
    match load::<T>(path) {
        Ok(artifact) => {
            info!(?path, elapsed = format_elapsed(start_instant).as_str(), "loaded {}", T::NAME);
            Some(artifact)
        }
        Err(error) => {
            error!(?path, "failed to load the {}: {:#}", T::NAME, error);
            None
        }
    }
}

pub fn load<T: Artifact>(path: &Path) -> Result<T> {
    let buffer = std::fs::read(path).context("failed to read the artifact")?;
    let artifact: T = serde_pickle::from_slice(&buffer, Default::default())
        .context("failed to deserialize the artifact")?;
    artifact.validate().context("invalid artifact")?;
    Ok(artifact)
}
