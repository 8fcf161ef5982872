use anyhow::anyhow;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::export::docx::export_docx;
use crate::export::snapshot::export_snapshot;
use crate::export::{write_artifact, Artifact};
use crate::state::AppState;

/// Writes the artifact into the export directory, then hands it back as a download.
async fn deliver(state: &AppState, artifact: Artifact) -> Result<Response, AppError> {
    let dir = state.config.export_dir.clone();
    let artifact = tokio::task::spawn_blocking(move || {
        write_artifact(&dir, &artifact).map(|_| artifact)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("Artifact writer panicked: {e}")))??;

    let disposition = format!("attachment; filename=\"{}\"", artifact.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(artifact.bytes),
    )
        .into_response())
}

/// POST /api/v1/export/html
/// Snapshot of the mounted preview. Fails with 409 when nothing is mounted.
pub async fn handle_export_html(State(state): State<AppState>) -> Result<Response, AppError> {
    let mounted = state.preview.current().await;
    let doc = state.store.snapshot().await;

    let artifact = export_snapshot(mounted.as_deref(), &doc.personal_info.full_name)?;
    info!("HTML snapshot exported: {}", artifact.file_name);
    deliver(&state, artifact).await
}

/// POST /api/v1/export/docx
/// Word-processor document derived from the current model.
pub async fn handle_export_docx(State(state): State<AppState>) -> Result<Response, AppError> {
    let doc = state.store.snapshot().await;
    let artifact = export_docx(doc).await?;
    info!(
        "DOCX exported: {} ({} bytes)",
        artifact.file_name,
        artifact.bytes.len()
    );
    deliver(&state, artifact).await
}
