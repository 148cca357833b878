use poem::{Endpoint, Middleware, Request, Response, Result};

use crate::prelude::*;
use crate::web::error::{error_response, Error};

/// Converts the remaining endpoint errors into JSON error responses.
pub struct ErrorMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for ErrorMiddleware {
    type Output = ErrorMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorMiddlewareImpl { ep }
    }
}

pub struct ErrorMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for ErrorMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        match self.ep.call(request).await {
            Err(error) => {
                let status = error.status();
                if status.is_server_error() {
                    error!(?method, ?uri, %status, "{:#}", error);
                } else {
                    info!(?method, ?uri, %status, "{:#}", error);
                }
                if error.is::<Error>() {
                    Ok(error.into_response())
                } else {
                    Ok(error_response(status, error.to_string()))
                }
            }
            result => result,
        }
    }
}
