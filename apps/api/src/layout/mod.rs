// Layout strategies: Modern, Classic, Minimal, Creative.
// Each is a pure `render(&CvDocument) -> VisualTree`; `Layout::select` maps the
// model's `templateId` discriminator onto one of them.

pub mod classic;
pub mod common;
pub mod creative;
pub mod minimal;
pub mod modern;
pub mod tree;

use serde::Serialize;

use crate::models::cv::CvDocument;

pub use tree::VisualTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Modern,
    Classic,
    Minimal,
    Creative,
}

impl Layout {
    #[cfg(test)]
    pub const ALL: [Layout; 4] = [
        Layout::Modern,
        Layout::Classic,
        Layout::Minimal,
        Layout::Creative,
    ];

    /// Picks the strategy for a `templateId`. Unrecognised values (for example
    /// one written by a newer schema) fall back to Modern.
    pub fn select(template_id: &str) -> Layout {
        match template_id {
            "classic" => Layout::Classic,
            "minimal" => Layout::Minimal,
            "creative" => Layout::Creative,
            _ => Layout::Modern,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Layout::Modern => "modern",
            Layout::Classic => "classic",
            Layout::Minimal => "minimal",
            Layout::Creative => "creative",
        }
    }

    pub fn render(self, doc: &CvDocument) -> VisualTree {
        match self {
            Layout::Modern => modern::render(doc),
            Layout::Classic => classic::render(doc),
            Layout::Minimal => minimal::render(doc),
            Layout::Creative => creative::render(doc),
        }
    }
}

/// Renders the document with whichever strategy its discriminator selects.
pub fn render(doc: &CvDocument) -> VisualTree {
    Layout::select(&doc.template_id).render(doc)
}
