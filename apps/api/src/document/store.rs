//! Session state: the current Document Model and the mounted preview.
//!
//! The model is held as `Arc<CvDocument>` behind a lock. Readers clone the `Arc`
//! and work on that snapshot; writers build a new value and swap the `Arc`, so
//! no reader ever observes a half-applied edit.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::layout::{self, VisualTree};
use crate::models::cv::CvDocument;

pub struct DocumentStore {
    current: RwLock<Arc<CvDocument>>,
}

impl DocumentStore {
    pub fn new(doc: CvDocument) -> Self {
        Self {
            current: RwLock::new(Arc::new(doc)),
        }
    }

    /// The current root. Later edits do not affect the returned value.
    pub async fn snapshot(&self) -> Arc<CvDocument> {
        self.current.read().await.clone()
    }

    pub async fn replace(&self, doc: CvDocument) -> Arc<CvDocument> {
        let next = Arc::new(doc);
        *self.current.write().await = next.clone();
        next
    }

    /// Derives a new root from whatever is current at the time of the call.
    ///
    /// Used by assistant merges: the edit is applied to the latest model, not
    /// to the snapshot the request started from, so the last writer wins.
    pub async fn update(&self, edit: impl FnOnce(&CvDocument) -> CvDocument) -> Arc<CvDocument> {
        let mut guard = self.current.write().await;
        let next = Arc::new(edit(guard.as_ref()));
        *guard = next.clone();
        next
    }
}

/// The host display surface: holds whichever VisualTree is currently mounted.
///
/// Both mutating paths hold the mount lock while they read the store, so the
/// mounted tree is always the rendering of the model that is current.
/// Lock order is mount lock, then store lock.
#[derive(Default)]
pub struct PreviewSurface {
    mounted: RwLock<Option<Arc<VisualTree>>>,
}

impl PreviewSurface {
    /// Renders the store's current model with its selected layout and mounts
    /// the result, discarding the previous tree entirely.
    pub async fn mount(&self, store: &DocumentStore) -> Arc<VisualTree> {
        let mut mounted = self.mounted.write().await;
        let doc = store.snapshot().await;
        let tree = Arc::new(layout::render(&doc));
        *mounted = Some(tree.clone());
        tree
    }

    /// Applies `edit` to the store and re-renders, but only when something is
    /// on screen.
    pub async fn apply(
        &self,
        store: &DocumentStore,
        edit: impl FnOnce(&CvDocument) -> CvDocument,
    ) -> Arc<CvDocument> {
        let mut mounted = self.mounted.write().await;
        let next = store.update(edit).await;
        if mounted.is_some() {
            *mounted = Some(Arc::new(layout::render(&next)));
        }
        next
    }

    pub async fn current(&self) -> Option<Arc<VisualTree>> {
        self.mounted.read().await.clone()
    }
}

/// Builds the session's first Document Model.
///
/// A persisted snapshot is used when one is configured and readable; any
/// failure falls back to the seed document.
pub async fn load_initial_document(snapshot_path: Option<&Path>) -> CvDocument {
    let Some(path) = snapshot_path else {
        info!("No snapshot configured, starting from seed document");
        return CvDocument::seed();
    };

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Could not read snapshot {}: {e}; using seed document", path.display());
            return CvDocument::seed();
        }
    };

    match serde_json::from_str::<CvDocument>(&raw) {
        Ok(doc) => {
            info!("Loaded document snapshot from {}", path.display());
            doc
        }
        Err(e) => {
            warn!("Snapshot {} is not a valid document: {e}; using seed document", path.display());
            CvDocument::seed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::edit::{with_summary, with_template};
    use std::io::Write;

    #[tokio::test]
    async fn test_snapshot_is_isolated_from_later_edits() {
        let store = DocumentStore::new(CvDocument::seed());
        let before = store.snapshot().await;
        store
            .update(|doc| with_summary(doc, "Changed".to_string()))
            .await;
        let after = store.snapshot().await;

        assert_ne!(before.personal_info.summary, "Changed");
        assert_eq!(after.personal_info.summary, "Changed");
    }

    #[tokio::test]
    async fn test_update_applies_to_latest_value() {
        let store = DocumentStore::new(CvDocument::seed());
        store
            .replace(with_template(&CvDocument::seed(), "classic".to_string()))
            .await;
        let next = store
            .update(|doc| with_summary(doc, "Merged".to_string()))
            .await;
        assert_eq!(next.template_id, "classic");
        assert_eq!(next.personal_info.summary, "Merged");
    }

    #[tokio::test]
    async fn test_preview_starts_unmounted() {
        let store = DocumentStore::new(CvDocument::seed());
        let preview = PreviewSurface::default();
        assert!(preview.current().await.is_none());

        let next = preview
            .apply(&store, |doc| with_summary(doc, "Edited".to_string()))
            .await;
        assert_eq!(next.personal_info.summary, "Edited");
        assert!(preview.current().await.is_none());
    }

    #[tokio::test]
    async fn test_apply_replaces_mounted_tree() {
        let store = DocumentStore::new(CvDocument::seed());
        let preview = PreviewSurface::default();
        preview.mount(&store).await;

        preview
            .apply(&store, |doc| with_template(doc, "classic".to_string()))
            .await;

        let mounted = preview.current().await.unwrap();
        assert_eq!(mounted.root.get_attr("data-template"), Some("classic"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_edits_leave_preview_matching_store() {
        let store = Arc::new(DocumentStore::new(CvDocument::seed()));
        let preview = Arc::new(PreviewSurface::default());
        preview.mount(&store).await;

        let templates = ["modern", "classic", "minimal", "creative"];
        let mut tasks = Vec::new();
        for i in 0..64 {
            let (store, preview) = (store.clone(), preview.clone());
            let template = templates[i % templates.len()].to_string();
            tasks.push(tokio::spawn(async move {
                if i % 8 == 0 {
                    preview.mount(&store).await;
                } else {
                    preview
                        .apply(&store, |doc| {
                            with_summary(&with_template(doc, template), format!("edit {i}"))
                        })
                        .await;
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let mounted = preview.current().await.unwrap();
        assert_eq!(*mounted, layout::render(&*store.snapshot().await));
    }

    #[tokio::test]
    async fn test_load_initial_without_path_uses_seed() {
        assert_eq!(load_initial_document(None).await, CvDocument::seed());
    }

    #[tokio::test]
    async fn test_load_initial_overlays_snapshot_on_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{"templateId":"minimal","themeColor":"#0f766e"}}"##).unwrap();

        let doc = load_initial_document(Some(file.path())).await;
        assert_eq!(doc.template_id, "minimal");
        assert_eq!(doc.theme_color, "#0f766e");
        assert_eq!(doc.experience, CvDocument::seed().experience);
    }

    #[tokio::test]
    async fn test_load_initial_bad_json_falls_back_to_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert_eq!(
            load_initial_document(Some(file.path())).await,
            CvDocument::seed()
        );
    }

    #[tokio::test]
    async fn test_load_initial_missing_file_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert_eq!(load_initial_document(Some(&path)).await, CvDocument::seed());
    }
}
