//! Product images
//!
//! Files in the images directory are served as-is under `/images`;
//! `/debug/images` lists what is there.

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{AppError, errors::responses::StorageErrorResponse};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::services::ServeDir;
use utoipa::ToSchema;

/// Names of the files currently in the images directory
#[derive(Debug, Serialize, ToSchema)]
pub struct ImageListResponse {
    pub images: Vec<String>,
}

/// Create the images directory (and its parents) if it does not exist yet
pub async fn ensure_images_dir(dir: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    tracing::info!(images_dir = %dir.display(), "Images directory ready");
    Ok(())
}

/// Mounted at the root: `GET /debug/images` and `GET /images/*`
pub fn router(images_dir: PathBuf) -> Router {
    let serve_dir = ServeDir::new(&images_dir);

    Router::new()
        .route("/debug/images", get(list_images))
        .nest_service("/images", serve_dir)
        .with_state(Arc::new(images_dir))
}

/// List the files available under `/images`
#[utoipa::path(
    get,
    path = "/debug/images",
    tag = "Images",
    responses(
        (status = 200, description = "File names, sorted", body = ImageListResponse),
        (status = 500, response = StorageErrorResponse)
    )
)]
pub async fn list_images(
    State(images_dir): State<Arc<PathBuf>>,
) -> Result<Json<ImageListResponse>, AppError> {
    let images = read_file_names(&images_dir).await.map_err(|e| {
        tracing::error!(images_dir = %images_dir.display(), error = %e, "Failed to read images directory");
        AppError::Storage("Error reading image directory".to_string())
    })?;

    Ok(Json(ImageListResponse { images }))
}

async fn read_file_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}
