use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Cors, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Route, Server};

use self::middleware::{ErrorMiddleware, SentryMiddleware};
use self::views::assets::StaticFiles;
use crate::models::Models;
use crate::prelude::*;

mod error;
mod middleware;
mod views;

const SHUTDOWN_TIMEOUT: StdDuration = StdDuration::from_secs(5);

pub async fn run(host: &str, port: u16, models: Arc<Models>, static_dir: PathBuf) -> Result {
    info!(?static_dir, "serving the frontend");
    let app = create_app(models, StaticFiles::new(static_dir));
    info!(host, port, "listening…");
    Server::new(TcpListener::bind((IpAddr::from_str(host)?, port)))
        .run_with_graceful_shutdown(app, wait_for_shutdown(), Some(SHUTDOWN_TIMEOUT))
        .await?;
    info!("stopped");
    Ok(())
}

pub fn create_app(models: Arc<Models>, static_files: StaticFiles) -> impl Endpoint {
    Route::new()
        .at("/api/predict", post(views::predict::post_predict))
        .at("/api/debug", get(views::debug::get_debug))
        .at("/", get(views::assets::get_index))
        .at("/*path", get(views::assets::get_asset))
        .data(models)
        .data(static_files)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(Cors::new())
        .with(SentryMiddleware)
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("failed to listen for the shutdown signal: {:#}", error);
    }
    info!("shutting down…");
}
