use clap::Parser;

use crate::models::Models;
use crate::opts::Opts;
use crate::prelude::*;

mod estimator;
mod features;
mod math;
mod models;
mod opts;
mod prelude;
mod tracing;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = crate::tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let models = Arc::new(Models::load(&opts.models_dir));
    web::run(&opts.host, opts.port, models, opts.static_dir).await
}
