use poem::handler;
use poem::web::{Data, Json};
use serde_json::{Map, Value};

use self::models::PredictionResponse;
use crate::estimator::estimate;
use crate::features::FeatureVector;
use crate::models::Models;
use crate::prelude::*;
use crate::web::error::Error;

pub mod models;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post_predict(
    body: Vec<u8>,
    Data(models): Data<&Arc<Models>>,
) -> Result<Json<PredictionResponse>, Error> {
    let payload = parse_payload(&body).ok_or(Error::NoData)?;
    let features = FeatureVector::try_from(&payload)?;
    let estimate = estimate(models, features)?;
    info!(?features, ?estimate.category);
    Ok(Json(PredictionResponse::from(estimate)))
}

/// Parses the body as a JSON object regardless of the content type.
fn parse_payload(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(payload)) => Some(payload),
        _ => None,
    }
}
