//! The Document Model: one résumé as a fully-owned value tree.
//!
//! Every edit produces a new `CvDocument` (see `models::edit`); nothing in here
//! is mutated in place once it has been handed to a reader.

use serde::{Deserialize, Serialize};

use crate::models::seed;

/// Accent colour the seed document ships with. Layouts treat it as "no colour
/// chosen" where they need a darker fallback.
pub const DEFAULT_THEME_COLOR: &str = "#2563eb";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    /// Professional network handle (e.g. `linkedin.com/in/...`).
    pub linkedin: String,
    pub summary: String,
    /// Data URL of an uploaded photo. Already base64-encoded by the editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: String,
    /// Ignored for display while `is_current` is set.
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

/// A user-titled section ("Awards", "References", ...). The title is user data
/// and may be empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    pub items: Vec<CustomItem>,
}

/// Root of the Document Model.
///
/// Top-level keys missing from a persisted snapshot fall back to the seed
/// value, the same way the editor merges an older save over its defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default = "CvDocument::seed")]
pub struct CvDocument {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub custom_sections: Vec<CustomSection>,
    pub theme_color: String,
    /// Layout discriminator. Kept as the raw string so values written by a
    /// newer schema survive a round trip; see `layout::Layout::select`.
    pub template_id: String,
}

impl CvDocument {
    /// The sample résumé a fresh session starts from.
    pub fn seed() -> Self {
        seed::seed_document()
    }

    /// A structurally complete document with every collection empty.
    #[cfg(test)]
    pub fn blank() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            custom_sections: Vec::new(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            template_id: "modern".to_string(),
        }
    }

    /// Custom sections that produce output. Empty sections stay in the model
    /// for the editor but never render.
    pub fn rendered_custom_sections(&self) -> impl Iterator<Item = &CustomSection> {
        self.custom_sections.iter().filter(|s| !s.items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_camel_case() {
        let doc = CvDocument::seed();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json["personalInfo"].get("fullName").is_some());
        assert!(json["experience"][0].get("isCurrent").is_some());
        assert!(json.get("customSections").is_some());
        assert_eq!(json["templateId"], "modern");
    }

    #[test]
    fn test_missing_top_level_keys_fall_back_to_seed() {
        let json = r#"{"templateId": "classic", "skills": []}"#;
        let doc: CvDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.template_id, "classic");
        assert!(doc.skills.is_empty());
        assert_eq!(doc.personal_info, CvDocument::seed().personal_info);
        assert_eq!(doc.experience, CvDocument::seed().experience);
    }

    #[test]
    fn test_unknown_template_id_is_preserved() {
        let json = r#"{"templateId": "holographic"}"#;
        let doc: CvDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.template_id, "holographic");
        let back = serde_json::to_value(&doc).unwrap();
        assert_eq!(back["templateId"], "holographic");
    }

    #[test]
    fn test_photo_omitted_from_json_when_absent() {
        let doc = CvDocument::blank();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["personalInfo"].get("photo").is_none());
    }

    #[test]
    fn test_empty_custom_sections_are_not_rendered() {
        let mut doc = CvDocument::blank();
        doc.custom_sections = vec![
            CustomSection {
                id: "a".to_string(),
                title: "Empty".to_string(),
                items: vec![],
            },
            CustomSection {
                id: "b".to_string(),
                title: String::new(),
                items: vec![CustomItem {
                    id: "i".to_string(),
                    title: "Eagle Scout".to_string(),
                    ..Default::default()
                }],
            },
        ];
        let ids: Vec<&str> = doc.rendered_custom_sections().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_skill_level_serde_names() {
        let skill: SkillEntry =
            serde_json::from_str(r#"{"id":"1","name":"Rust","level":"Expert"}"#).unwrap();
        assert_eq!(skill.level, SkillLevel::Expert);
    }
}
