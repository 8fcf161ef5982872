pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::document::handlers as document;
use crate::export::handlers as export;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document model + preview
        .route(
            "/api/v1/document",
            get(document::handle_get_document).put(document::handle_put_document),
        )
        .route(
            "/api/v1/document/template",
            put(document::handle_put_template),
        )
        .route("/api/v1/preview", get(document::handle_preview))
        // Export
        .route("/api/v1/export/html", post(export::handle_export_html))
        .route("/api/v1/export/docx", post(export::handle_export_docx))
        // AI assistant
        .route(
            "/api/v1/assistant/summary",
            post(assistant::handle_generate_summary),
        )
        .route(
            "/api/v1/assistant/experience/:id/enhance",
            post(assistant::handle_enhance_experience),
        )
        .route(
            "/api/v1/assistant/custom/:section_id/items/:item_id/enhance",
            post(assistant::handle_enhance_custom_item),
        )
        .route(
            "/api/v1/assistant/skills",
            post(assistant::handle_suggest_skills),
        )
        .route("/api/v1/assistant/match", post(assistant::handle_job_match))
        .route("/api/v1/assistant/tailor", post(assistant::handle_tailor))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::assistant::testing::CannedTextService;
    use crate::config::Config;
    use crate::document::{DocumentStore, PreviewSurface};
    use crate::models::cv::CvDocument;

    fn state_with(service: CannedTextService, export_dir: PathBuf) -> AppState {
        AppState {
            store: Arc::new(DocumentStore::new(CvDocument::seed())),
            preview: Arc::new(PreviewSurface::default()),
            text_service: Arc::new(service),
            config: Config {
                anthropic_api_key: None,
                export_dir,
                cv_snapshot_path: None,
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn json(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_html_export_before_preview_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(state_with(CannedTextService::replying(""), dir.path().into()));

        let (status, body) = send(&app, "POST", "/api/v1/export/html", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json(&body)["error"]["code"], "NOTHING_TO_EXPORT");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_html_export_after_preview_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(state_with(CannedTextService::replying(""), dir.path().into()));

        let (status, _) = send(&app, "GET", "/api/v1/preview", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "POST", "/api/v1/export/html", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().starts_with("<!DOCTYPE html>"));
        assert!(dir.path().join("Alex_Morgan_CV.html").exists());
    }

    #[tokio::test]
    async fn test_docx_export_needs_no_preview() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(state_with(CannedTextService::replying(""), dir.path().into()));

        let (status, body) = send(&app, "POST", "/api/v1/export/docx", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with(b"PK"));
        assert!(dir.path().join("Alex_Morgan_CV.docx").exists());
    }

    #[tokio::test]
    async fn test_template_switch_remounts_preview() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(state_with(CannedTextService::replying(""), dir.path().into()));
        send(&app, "GET", "/api/v1/preview", None).await;

        let (status, body) = send(
            &app,
            "PUT",
            "/api/v1/document/template",
            Some(r#"{"templateId":"holographic"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body = json(&body);
        assert_eq!(body["templateId"], "holographic");
        assert_eq!(body["layout"], "modern");

        let (_, html) = send(&app, "POST", "/api/v1/export/html", None).await;
        assert!(String::from_utf8(html)
            .unwrap()
            .contains("data-template=\"modern\""));
    }

    #[tokio::test]
    async fn test_failed_ai_call_leaves_model_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(state_with(CannedTextService::failing(), dir.path().into()));
        let (_, before) = send(&app, "GET", "/api/v1/document", None).await;

        for uri in [
            "/api/v1/assistant/summary",
            "/api/v1/assistant/skills",
            "/api/v1/assistant/experience/1/enhance",
        ] {
            let (status, body) = send(&app, "POST", uri, None).await;
            assert_eq!(status, StatusCode::BAD_GATEWAY, "{uri}");
            assert_eq!(json(&body)["error"]["code"], "AI_SERVICE_ERROR");
        }

        let (_, after) = send(&app, "GET", "/api/v1/document", None).await;
        assert_eq!(json(&before), json(&after));
    }

    #[tokio::test]
    async fn test_enhance_unknown_entry_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(state_with(CannedTextService::replying("x"), dir.path().into()));
        let (status, _) = send(&app, "POST", "/api/v1/assistant/experience/nope/enhance", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tailor_skips_unknown_ids() {
        let dir = tempfile::tempdir().unwrap();
        let reply = r#"{"summary":"","experience":[{"id":"2","description":"Rewritten"},{"id":"99","description":"Ghost"}]}"#;
        let app = build_router(state_with(CannedTextService::replying(reply), dir.path().into()));

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/assistant/tailor",
            Some(r#"{"jobDescription":"Rust backend role"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let doc: CvDocument = serde_json::from_slice(&body).unwrap();
        let seed = CvDocument::seed();
        assert_eq!(doc.personal_info.summary, seed.personal_info.summary);
        assert_eq!(doc.experience[0], seed.experience[0]);
        assert_eq!(doc.experience[1].description, "Rewritten");
        assert_eq!(doc.experience.len(), 2);
    }

    #[tokio::test]
    async fn test_enhance_custom_item_updates_that_item() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(CannedTextService::replying("Polished"), dir.path().into());
        let mut doc = CvDocument::seed();
        doc.custom_sections.push(crate::models::cv::CustomSection {
            id: "s1".to_string(),
            title: "Awards".to_string(),
            items: vec![crate::models::cv::CustomItem {
                id: "i1".to_string(),
                title: "Eagle Scout".to_string(),
                subtitle: String::new(),
                description: "Earned it".to_string(),
            }],
        });
        state.store.replace(doc).await;
        let app = build_router(state);

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/assistant/custom/s1/items/i1/enhance",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let doc: CvDocument = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc.custom_sections[0].items[0].description, "Polished");
        assert_eq!(doc.experience, CvDocument::seed().experience);
    }

    #[tokio::test]
    async fn test_match_requires_job_description() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(state_with(CannedTextService::replying("{}"), dir.path().into()));
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/assistant/match",
            Some(r#"{"jobDescription":"   "}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json(&body)["error"]["code"], "VALIDATION_ERROR");
    }
}
