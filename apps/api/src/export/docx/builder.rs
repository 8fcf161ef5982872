//! Paragraph/run builder and its WordprocessingML serialisation.

use std::io::Cursor;

use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::DocxError;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Heading1,
    Heading2,
    Heading3,
}

impl HeadingLevel {
    fn style_id(self) -> &'static str {
        match self {
            HeadingLevel::Heading1 => "Heading1",
            HeadingLevel::Heading2 => "Heading2",
            HeadingLevel::Heading3 => "Heading3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    /// Font size in half-points.
    pub size: Option<u32>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub heading: Option<HeadingLevel>,
    pub alignment: Alignment,
    pub before: Option<u32>,
    pub after: Option<u32>,
    /// Single bottom rule under the paragraph.
    pub bottom_border: bool,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.run(Run::new(text))
    }

    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn heading(mut self, level: HeadingLevel) -> Self {
        self.heading = Some(level);
        self
    }

    pub fn center(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn spacing(mut self, before: Option<u32>, after: Option<u32>) -> Self {
        self.before = before;
        self.after = after;
        self
    }

    pub fn bordered(mut self) -> Self {
        self.bottom_border = true;
        self
    }

    /// Concatenated run text, as a reader would see it.
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Characters XML 1.0 cannot carry at all, not even as references.
fn is_forbidden_in_xml(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
    )
}

/// Escapes character data for a part. Forbidden control characters become
/// spaces; carriage returns are written as `&#13;` so parsers do not fold
/// them into line feeds.
pub fn escape_xml_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| if is_forbidden_in_xml(c) { ' ' } else { c })
        .collect();
    escape(&cleaned).replace('\r', "&#13;")
}

fn xml_err(e: impl std::fmt::Display) -> DocxError {
    DocxError::Xml(e.to_string())
}

/// Thin wrapper so element writes read as a flat sequence.
struct XmlOut {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlOut {
    fn new() -> Result<Self, DocxError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_err)?;
        Ok(Self { writer })
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), DocxError> {
        let tag = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Start(tag)).map_err(xml_err)
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), DocxError> {
        let tag = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(tag)).map_err(xml_err)
    }

    fn end(&mut self, name: &str) -> Result<(), DocxError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    fn text(&mut self, text: &str) -> Result<(), DocxError> {
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(escape_xml_text(text))))
            .map_err(xml_err)
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner().into_inner()
    }
}

/// Serialises paragraphs into `word/document.xml`.
pub fn document_xml(paragraphs: &[Paragraph]) -> Result<Vec<u8>, DocxError> {
    let mut out = XmlOut::new()?;
    out.start("w:document", &[("xmlns:w", W_NS), ("xmlns:r", R_NS)])?;
    out.start("w:body", &[])?;

    for paragraph in paragraphs {
        write_paragraph(&mut out, paragraph)?;
    }

    // A4, one-inch margins.
    out.start("w:sectPr", &[])?;
    out.empty("w:pgSz", &[("w:w", "11906"), ("w:h", "16838")])?;
    out.empty(
        "w:pgMar",
        &[
            ("w:top", "1440"),
            ("w:right", "1440"),
            ("w:bottom", "1440"),
            ("w:left", "1440"),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ],
    )?;
    out.end("w:sectPr")?;

    out.end("w:body")?;
    out.end("w:document")?;
    Ok(out.finish())
}

fn write_paragraph(out: &mut XmlOut, p: &Paragraph) -> Result<(), DocxError> {
    out.start("w:p", &[])?;

    // Child order inside pPr is fixed by the schema.
    out.start("w:pPr", &[])?;
    if let Some(level) = p.heading {
        out.empty("w:pStyle", &[("w:val", level.style_id())])?;
    }
    if p.bottom_border {
        out.start("w:pBdr", &[])?;
        out.empty(
            "w:bottom",
            &[
                ("w:val", "single"),
                ("w:sz", "6"),
                ("w:space", "1"),
                ("w:color", "auto"),
            ],
        )?;
        out.end("w:pBdr")?;
    }
    if p.before.is_some() || p.after.is_some() {
        let before = p.before.map(|v| v.to_string());
        let after = p.after.map(|v| v.to_string());
        let mut attrs = Vec::new();
        if let Some(v) = before.as_deref() {
            attrs.push(("w:before", v));
        }
        if let Some(v) = after.as_deref() {
            attrs.push(("w:after", v));
        }
        out.empty("w:spacing", &attrs)?;
    }
    if p.alignment == Alignment::Center {
        out.empty("w:jc", &[("w:val", "center")])?;
    }
    out.end("w:pPr")?;

    for run in &p.runs {
        write_run(out, run)?;
    }

    out.end("w:p")
}

fn write_run(out: &mut XmlOut, run: &Run) -> Result<(), DocxError> {
    out.start("w:r", &[])?;

    if run.bold || run.size.is_some() {
        out.start("w:rPr", &[])?;
        if run.bold {
            out.empty("w:b", &[])?;
            out.empty("w:bCs", &[])?;
        }
        if let Some(size) = run.size {
            let size = size.to_string();
            out.empty("w:sz", &[("w:val", &size)])?;
            out.empty("w:szCs", &[("w:val", &size)])?;
        }
        out.end("w:rPr")?;
    }

    // Line breaks and tabs are run content, not characters inside <w:t>.
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out.empty("w:br", &[])?;
        }
        for (j, segment) in line.split('\t').enumerate() {
            if j > 0 {
                out.empty("w:tab", &[])?;
            }
            if !segment.is_empty() {
                out.start("w:t", &[("xml:space", "preserve")])?;
                out.text(segment)?;
                out.end("w:t")?;
            }
        }
    }

    out.end("w:r")
}
