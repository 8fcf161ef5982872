//! Assistant endpoints.
//!
//! Each call reads a snapshot, awaits the text service, then merges into the
//! model that is current *at completion*. A manual edit to the same field made
//! while the call was in flight is overwritten (last response wins). A failed
//! call returns before the merge, so the model is left as it was.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::assistant::service::{self, MatchAnalysis};
use crate::errors::AppError;
use crate::models::cv::CvDocument;
use crate::models::edit::{
    apply_tailoring, merge_suggested_skills, with_custom_item_description,
    with_experience_description, with_summary,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionRequest {
    pub job_description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnhanceRequest {
    /// Optional extra instruction for the rewrite.
    #[serde(default)]
    pub context: Option<String>,
}

/// POST /api/v1/assistant/summary
pub async fn handle_generate_summary(
    State(state): State<AppState>,
) -> Result<Json<CvDocument>, AppError> {
    let doc = state.store.snapshot().await;
    let summary = service::generate_summary(state.text_service.as_ref(), &doc).await?;

    let next = state.apply_edit(|d| with_summary(d, summary)).await;
    info!("Summary generated");
    Ok(Json(next.as_ref().clone()))
}

/// POST /api/v1/assistant/experience/:id/enhance
pub async fn handle_enhance_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<EnhanceRequest>>,
) -> Result<Json<CvDocument>, AppError> {
    let doc = state.store.snapshot().await;
    let entry = doc
        .experience
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Experience entry '{id}' not found")))?;

    let context = body.and_then(|Json(b)| b.context);
    let enhanced =
        service::enhance_text(state.text_service.as_ref(), &entry.description, context.as_deref())
            .await?;

    let next = state
        .apply_edit(|d| with_experience_description(d, &id, enhanced))
        .await;
    info!("Experience entry {id} enhanced");
    Ok(Json(next.as_ref().clone()))
}

/// POST /api/v1/assistant/custom/:section_id/items/:item_id/enhance
pub async fn handle_enhance_custom_item(
    State(state): State<AppState>,
    Path((section_id, item_id)): Path<(String, String)>,
    body: Option<Json<EnhanceRequest>>,
) -> Result<Json<CvDocument>, AppError> {
    let doc = state.store.snapshot().await;
    let item = doc
        .custom_sections
        .iter()
        .find(|s| s.id == section_id)
        .and_then(|s| s.items.iter().find(|i| i.id == item_id))
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Custom item '{item_id}' in section '{section_id}' not found"
            ))
        })?;

    let context = body.and_then(|Json(b)| b.context);
    let enhanced =
        service::enhance_text(state.text_service.as_ref(), &item.description, context.as_deref())
            .await?;

    let next = state
        .apply_edit(|d| with_custom_item_description(d, &section_id, &item_id, enhanced))
        .await;
    info!("Custom item {section_id}/{item_id} enhanced");
    Ok(Json(next.as_ref().clone()))
}

/// POST /api/v1/assistant/skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
) -> Result<Json<CvDocument>, AppError> {
    let doc = state.store.snapshot().await;
    let suggestions =
        service::suggest_skills(state.text_service.as_ref(), &doc.personal_info.job_title).await?;

    // Deduplicate against the model as it is now, not the request snapshot.
    let next = state
        .apply_edit(|d| merge_suggested_skills(d, &suggestions))
        .await;
    info!(
        "Skill suggestions merged: {} suggested, {} skills total",
        suggestions.len(),
        next.skills.len()
    );
    Ok(Json(next.as_ref().clone()))
}

/// POST /api/v1/assistant/match
/// Analysis only; the model is not changed.
pub async fn handle_job_match(
    State(state): State<AppState>,
    Json(req): Json<JobDescriptionRequest>,
) -> Result<Json<MatchAnalysis>, AppError> {
    let doc = state.store.snapshot().await;
    let analysis =
        service::analyze_job_match(state.text_service.as_ref(), &doc, &req.job_description)
            .await?;
    info!("Job match analysed: score {}", analysis.score);
    Ok(Json(analysis))
}

/// POST /api/v1/assistant/tailor
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(req): Json<JobDescriptionRequest>,
) -> Result<Json<CvDocument>, AppError> {
    let doc = state.store.snapshot().await;
    let tailoring =
        service::tailor(state.text_service.as_ref(), &doc, &req.job_description).await?;

    let next = state
        .apply_edit(|d| apply_tailoring(d, &tailoring.summary, &tailoring.rewrites))
        .await;
    info!("CV tailored: {} rewrites proposed", tailoring.rewrites.len());
    Ok(Json(next.as_ref().clone()))
}
