use axum::{extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::layout::Layout;
use crate::models::cv::CvDocument;
use crate::models::edit::with_template;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub template_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResponse {
    /// Stored discriminator, exactly as sent.
    pub template_id: String,
    /// Strategy that will actually render it.
    pub layout: Layout,
}

/// GET /api/v1/document
pub async fn handle_get_document(State(state): State<AppState>) -> Json<CvDocument> {
    Json(state.store.snapshot().await.as_ref().clone())
}

/// PUT /api/v1/document
/// Replaces the whole model with the editor's latest value.
pub async fn handle_put_document(
    State(state): State<AppState>,
    Json(doc): Json<CvDocument>,
) -> Json<CvDocument> {
    let next = state.apply_edit(move |_| doc).await;
    Json(next.as_ref().clone())
}

/// PUT /api/v1/document/template
pub async fn handle_put_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateRequest>,
) -> Result<Json<TemplateResponse>, AppError> {
    let template_id = req.template_id.trim().to_string();
    if template_id.is_empty() {
        return Err(AppError::Validation("templateId must not be empty".to_string()));
    }

    let layout = Layout::select(&template_id);
    info!("Switching template to '{template_id}' ({})", layout.id());

    let next = state
        .apply_edit(|doc| with_template(doc, template_id))
        .await;

    Ok(Json(TemplateResponse {
        template_id: next.template_id.clone(),
        layout,
    }))
}

/// GET /api/v1/preview
/// Renders the current model with its selected layout and mounts the result.
pub async fn handle_preview(State(state): State<AppState>) -> Html<String> {
    let tree = state.preview.mount(&state.store).await;
    Html(tree.to_html())
}
