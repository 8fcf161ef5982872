use std::sync::Arc;

use crate::config::Config;
use crate::document::{DocumentStore, PreviewSurface};
use crate::llm_client::TextService;
use crate::models::cv::CvDocument;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The session's Document Model.
    pub store: Arc<DocumentStore>,
    /// Host display surface; empty until the preview is first requested.
    pub preview: Arc<PreviewSurface>,
    /// External text service. Default: `LlmClient`.
    pub text_service: Arc<dyn TextService>,
    pub config: Config,
}

impl AppState {
    /// Swaps in a model derived from the current one and refreshes the
    /// mounted preview, if any, as one step.
    pub async fn apply_edit(
        &self,
        edit: impl FnOnce(&CvDocument) -> CvDocument,
    ) -> Arc<CvDocument> {
        self.preview.apply(&self.store, edit).await
    }
}
