use poem::web::{Data, Json};
use poem::{handler, IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

use crate::prelude::*;
use crate::web::views::assets::StaticFiles;

#[derive(Serialize)]
pub struct Introspection {
    pub cwd: String,
    pub static_folder: String,
    pub static_folder_exists: bool,
    pub files: Vec<String>,
}

/// Describes the frontend directory. Failures are reported in the body.
#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_debug(Data(static_files): Data<&StaticFiles>) -> Response {
    match introspect(static_files.root()).await {
        Ok(introspection) => Json(introspection).into_response(),
        Err(error) => {
            warn!("{:#}", error);
            Json(json!({ "error": format!("{:#}", error) })).into_response()
        }
    }
}

async fn introspect(root: &Path) -> Result<Introspection> {
    let cwd = std::env::current_dir().context("failed to get the current directory")?;
    let static_folder = cwd.join(root);
    let static_folder_exists = tokio::fs::metadata(&static_folder).await.is_ok();

    let mut files = Vec::new();
    if static_folder_exists {
        let mut entries = tokio::fs::read_dir(&static_folder)
            .await
            .with_context(|| format!("failed to list `{}`", static_folder.display()))?;
        while let Some(entry) = entries.next_entry().await? {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
        files.sort_unstable();
    }

    Ok(Introspection {
        cwd: cwd.to_string_lossy().into_owned(),
        static_folder: static_folder.to_string_lossy().into_owned(),
        static_folder_exists,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::sample_models;
    use crate::web::test::{create_test_client, create_test_client_with, fixtures_dir, read_json};

    #[tokio::test]
    async fn get_debug_ok() -> Result {
        let client = create_test_client(sample_models());
        let response = client.get("/api/debug").send().await;
        response.assert_status_is_ok();
        let response = read_json(response).await?;
        assert_eq!(response["static_folder"], fixtures_dir().to_string_lossy().into_owned());
        assert_eq!(response["static_folder_exists"], true);
        assert_eq!(response["files"], json!(["assets", "index.html"]));
        assert!(response["cwd"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn missing_static_folder_ok() -> Result {
        let client = create_test_client_with(sample_models(), fixtures_dir().join("missing"));
        let response = client.get("/api/debug").send().await;
        response.assert_status_is_ok();
        let response = read_json(response).await?;
        assert_eq!(response["static_folder_exists"], false);
        assert_eq!(response["files"], json!([]));
        Ok(())
    }
}
