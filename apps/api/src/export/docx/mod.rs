// Structured-document (DOCX) exporter.
//
// Pipeline: CvDocument -> Vec<Paragraph> (cv.rs) -> word/document.xml
// (builder.rs) -> zip container (package.rs). Everything is pure until the
// caller writes the bytes; `export_docx` runs the whole pipeline on the
// blocking pool as one unit of work.

pub mod builder;
pub mod cv;
pub mod package;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::export::{artifact_file_name, Artifact, DOCX_CONTENT_TYPE};
use crate::models::cv::CvDocument;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("XML serialisation failed: {0}")]
    Xml(String),

    #[error("Zip packaging failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error while packaging: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export worker failed: {0}")]
    Worker(String),
}

/// Builds the complete `.docx` bytes. `created` only feeds `docProps/core.xml`.
pub fn build_docx(doc: &CvDocument, created: DateTime<Utc>) -> Result<Vec<u8>, DocxError> {
    let paragraphs = cv::cv_paragraphs(doc);
    let body = builder::document_xml(&paragraphs)?;
    debug!(
        "DOCX body: {} paragraphs, {} bytes",
        paragraphs.len(),
        body.len()
    );
    package::package(&body, &doc.personal_info.full_name, created)
}

/// Exports a model snapshot. Stateless, so concurrent exports are independent.
pub async fn export_docx(doc: Arc<CvDocument>) -> Result<Artifact, DocxError> {
    tokio::task::spawn_blocking(move || {
        let bytes = build_docx(&doc, Utc::now())?;
        Ok::<_, DocxError>(Artifact {
            file_name: artifact_file_name(&doc.personal_info.full_name, "docx"),
            content_type: DOCX_CONTENT_TYPE,
            bytes,
        })
    })
    .await
    .map_err(|e| DocxError::Worker(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{CustomItem, CustomSection, ExperienceEntry, PersonalInfo};
    use chrono::TimeZone;
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use std::io::{Cursor, Read};

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut out = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        out
    }

    /// Plain text of each `<w:p>`, with `<w:br/>` read back as `\n` and
    /// `<w:tab/>` as `\t`.
    fn read_paragraphs(document_xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(document_xml);
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_text = false;

        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
                Event::End(e) if e.name().as_ref() == b"w:t" => in_text = false,
                Event::Empty(e) if e.name().as_ref() == b"w:br" => current.push('\n'),
                Event::Empty(e) if e.name().as_ref() == b"w:tab" => current.push('\t'),
                Event::Text(t) if in_text => current.push_str(&t.unescape().unwrap()),
                Event::End(e) if e.name().as_ref() == b"w:p" => {
                    paragraphs.push(std::mem::take(&mut current));
                }
                Event::Eof => break,
                _ => {}
            }
        }
        paragraphs
    }

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn jane_doe() -> CvDocument {
        let mut doc = CvDocument::blank();
        doc.personal_info = PersonalInfo {
            full_name: "Jane Doe".to_string(),
            ..Default::default()
        };
        doc.experience.push(ExperienceEntry {
            id: "e1".to_string(),
            company: "Acme".to_string(),
            role: "Lead".to_string(),
            start_date: "2020-01".to_string(),
            end_date: String::new(),
            is_current: true,
            description: "• Shipped\n• Led\tteam".to_string(),
            ..Default::default()
        });
        doc
    }

    #[test]
    fn test_descriptions_round_trip_verbatim() {
        let doc = CvDocument::seed();
        let bytes = build_docx(&doc, created()).unwrap();
        let paragraphs = read_paragraphs(&part(&bytes, "word/document.xml"));

        for exp in &doc.experience {
            assert!(
                paragraphs.contains(&exp.description),
                "description not recovered: {:?}",
                exp.description
            );
        }
        assert!(paragraphs.contains(&doc.personal_info.summary));
    }

    #[test]
    fn test_tabs_and_breaks_round_trip() {
        let bytes = build_docx(&jane_doe(), created()).unwrap();
        let paragraphs = read_paragraphs(&part(&bytes, "word/document.xml"));
        assert!(paragraphs.contains(&"• Shipped\n• Led\tteam".to_string()));
    }

    #[test]
    fn test_crlf_breaks_round_trip() {
        let mut doc = jane_doe();
        doc.experience[0].description = "a\r\nb\rc\nd".to_string();
        let bytes = build_docx(&doc, created()).unwrap();
        let xml = part(&bytes, "word/document.xml");
        assert!(!xml.contains('\r'));
        assert!(read_paragraphs(&xml).contains(&"a\r\nb\rc\nd".to_string()));
    }

    #[test]
    fn test_control_characters_do_not_corrupt_document() {
        let mut doc = jane_doe();
        doc.personal_info.full_name = "Jane\u{1b}Doe".to_string();
        doc.experience[0].description = "x\u{c}yz".to_string();
        let bytes = build_docx(&doc, created()).unwrap();

        for name in ["word/document.xml", "docProps/core.xml"] {
            let xml = part(&bytes, name);
            assert!(
                !xml.chars().any(|c| c.is_control() && !matches!(c, '\n' | '\t')),
                "{name} carries a raw control character"
            );
        }
        let paragraphs = read_paragraphs(&part(&bytes, "word/document.xml"));
        assert!(paragraphs.contains(&"x yz".to_string()));
        assert!(paragraphs.contains(&"JANE DOE".to_string()));
    }

    #[test]
    fn test_export_is_idempotent() {
        let doc = CvDocument::seed();
        let a = build_docx(&doc, created()).unwrap();
        let b = build_docx(&doc, created()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_document_body_ignores_timestamp() {
        let doc = CvDocument::seed();
        let later = Utc.with_ymd_and_hms(2030, 6, 7, 8, 9, 10).unwrap();
        let a = build_docx(&doc, created()).unwrap();
        let b = build_docx(&doc, later).unwrap();
        assert_eq!(
            part(&a, "word/document.xml"),
            part(&b, "word/document.xml")
        );
    }

    #[test]
    fn test_present_in_metadata_line() {
        let bytes = build_docx(&jane_doe(), created()).unwrap();
        let paragraphs = read_paragraphs(&part(&bytes, "word/document.xml"));
        let meta = paragraphs
            .iter()
            .find(|p| p.starts_with("Acme"))
            .unwrap();
        assert!(meta.ends_with("2020-01 - Present"), "got {meta:?}");
    }

    #[test]
    fn test_awards_item_has_no_separator() {
        let mut doc = jane_doe();
        doc.custom_sections.push(CustomSection {
            id: "s1".to_string(),
            title: "Awards".to_string(),
            items: vec![CustomItem {
                id: "i1".to_string(),
                title: "Eagle Scout".to_string(),
                subtitle: String::new(),
                description: "Earned in 2005.".to_string(),
            }],
        });
        let bytes = build_docx(&doc, created()).unwrap();
        let paragraphs = read_paragraphs(&part(&bytes, "word/document.xml"));
        assert!(paragraphs.contains(&"Awards".to_string()));
        assert!(paragraphs.contains(&"Eagle Scout".to_string()));
        assert!(!paragraphs.iter().any(|p| p.contains("Eagle Scout |")));
    }

    #[test]
    fn test_no_custom_heading_without_custom_sections() {
        let doc = CvDocument::seed();
        let bytes = build_docx(&doc, created()).unwrap();
        let xml = part(&bytes, "word/document.xml");
        // Only the four fixed sections carry a bottom border.
        assert_eq!(xml.matches("<w:pBdr>").count(), 4);
    }

    #[tokio::test]
    async fn test_export_docx_names_artifact() {
        let artifact = export_docx(Arc::new(CvDocument::seed())).await.unwrap();
        assert_eq!(artifact.file_name, "Alex_Morgan_CV.docx");
        assert_eq!(artifact.content_type, DOCX_CONTENT_TYPE);
        assert!(artifact.bytes.starts_with(b"PK"));
        assert!(part(&artifact.bytes, "docProps/core.xml").contains("<dc:title>Alex Morgan</dc:title>"));
    }

    #[tokio::test]
    async fn test_concurrent_exports_are_independent() {
        let doc = Arc::new(CvDocument::seed());
        let (a, b) = tokio::join!(export_docx(doc.clone()), export_docx(doc));
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_eq!(
            part(&a.bytes, "word/document.xml"),
            part(&b.bytes, "word/document.xml")
        );
    }
}
