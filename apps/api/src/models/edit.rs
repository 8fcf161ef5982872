//! Copy-on-write edits over the Document Model.
//!
//! Each function takes the current root by reference and returns a new root.
//! The input is never touched, so a reader holding the old snapshot keeps a
//! fully consistent view. Id-keyed edits that name an unknown id return a value
//! equal to the input.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::cv::{CvDocument, SkillEntry, SkillLevel};

/// Replacement description for one experience entry, keyed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionRewrite {
    pub id: String,
    pub description: String,
}

pub fn with_summary(doc: &CvDocument, summary: String) -> CvDocument {
    let mut next = doc.clone();
    next.personal_info.summary = summary;
    next
}

pub fn with_template(doc: &CvDocument, template_id: String) -> CvDocument {
    let mut next = doc.clone();
    next.template_id = template_id;
    next
}

pub fn with_experience_description(doc: &CvDocument, id: &str, description: String) -> CvDocument {
    let mut next = doc.clone();
    if let Some(entry) = next.experience.iter_mut().find(|e| e.id == id) {
        entry.description = description;
    }
    next
}

pub fn with_custom_item_description(
    doc: &CvDocument,
    section_id: &str,
    item_id: &str,
    description: String,
) -> CvDocument {
    let mut next = doc.clone();
    if let Some(item) = next
        .custom_sections
        .iter_mut()
        .find(|s| s.id == section_id)
        .and_then(|s| s.items.iter_mut().find(|i| i.id == item_id))
    {
        item.description = description;
    }
    next
}

/// Appends suggested skill names that are not already present.
///
/// Comparison is case-insensitive against existing skills and against earlier
/// suggestions in the same batch. Existing entries keep their ids; new ones get
/// a fresh v4 id and `Expert` level.
pub fn merge_suggested_skills(doc: &CvDocument, suggestions: &[String]) -> CvDocument {
    let mut seen: HashSet<String> = doc.skills.iter().map(|s| s.name.to_lowercase()).collect();
    let mut next = doc.clone();

    for name in suggestions {
        let name = name.trim();
        if name.is_empty() || !seen.insert(name.to_lowercase()) {
            continue;
        }
        next.skills.push(SkillEntry {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            level: SkillLevel::Expert,
        });
    }

    next
}

/// Merges a tailoring response. An empty summary keeps the current one;
/// rewrites for ids absent from the model are skipped.
pub fn apply_tailoring(
    doc: &CvDocument,
    summary: &str,
    rewrites: &[DescriptionRewrite],
) -> CvDocument {
    let mut next = doc.clone();
    if !summary.is_empty() {
        next.personal_info.summary = summary.to_string();
    }
    for entry in next.experience.iter_mut() {
        if let Some(rewrite) = rewrites.iter().find(|r| r.id == entry.id) {
            entry.description = rewrite.description.clone();
        }
    }
    next
}
