//! Frontend build with the single-page application fallback.

use std::path::Component;

use poem::error::NotFoundError;
use poem::web::{Data, Path as PathParam};
use poem::{handler, IntoResponse, Response};

use crate::prelude::*;

#[derive(Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub const INDEX_FILE: &'static str = "index.html";

    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the request path to a regular file inside the root.
    ///
    /// Returns [`None`] for anything that is not a plain relative path.
    pub async fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return None;
        }
        let path = self.root.join(relative);
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Some(path),
            _ => None,
        }
    }

    async fn index(&self) -> poem::Result<Response> {
        let path = self.root.join(Self::INDEX_FILE);
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => serve_file(&path).await,
            _ => {
                warn!(?path, "the index file is missing");
                Err(NotFoundError.into())
            }
        }
    }
}

#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get_index(Data(static_files): Data<&StaticFiles>) -> poem::Result<Response> {
    static_files.index().await
}

#[handler]
#[instrument(skip_all, level = "debug", fields(path = path.as_str()))]
pub async fn get_asset(
    PathParam(path): PathParam<String>,
    Data(static_files): Data<&StaticFiles>,
) -> poem::Result<Response> {
    match static_files.resolve(&path).await {
        Some(path) => serve_file(&path).await,
        None => {
            debug!("falling back to the index");
            static_files.index().await
        }
    }
}

async fn serve_file(path: &Path) -> poem::Result<Response> {
    let body = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    Ok(body.with_content_type(content_type(path)).into_response())
}

/// Guesses the content type from the extension, falling back to `application/octet-stream`.
fn content_type(path: &Path) -> String {
    mime_guess::from_path(path).first_or_octet_stream().to_string()
}
