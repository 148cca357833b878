use std::fmt::{Display, Formatter};

use poem::error::ResponseError;
use poem::http::StatusCode;
use poem::web::Json;
use poem::{IntoResponse, Response};
use serde_json::json;

/// API error that renders itself as `{"error": "…"}`.
#[derive(Debug)]
pub enum Error {
    /// The request body is absent or is not a JSON object.
    NoData,

    Internal(anyhow::Error),
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Self::Internal(error)
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => formatter.write_str("No data provided"),
            Self::Internal(error) => write!(formatter, "{:#}", error),
        }
    }
}

impl std::error::Error for Error {}

impl ResponseError for Error {
    fn status(&self) -> StatusCode {
        match self {
            Self::NoData => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn as_response(&self) -> Response {
        error_response(self.status(), self.to_string())
    }
}

pub fn error_response(status: StatusCode, message: String) -> Response {
    Json(json!({ "error": message }))
        .with_status(status)
        .into_response()
}
