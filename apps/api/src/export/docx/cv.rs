//! Document Model → linear paragraph flow.
//!
//! Derived from the model directly: sidebars, grids and colour fills have no
//! place in a word-processor flow, so the layouts' trees are not reused.

use crate::layout::common::{date_range, join_non_empty};
use crate::models::cv::{CustomSection, CvDocument, EducationEntry, ExperienceEntry};

use super::builder::{HeadingLevel, Paragraph, Run};

const META_SEP: &str = " | ";

pub fn cv_paragraphs(doc: &CvDocument) -> Vec<Paragraph> {
    let mut out = header(doc);

    let info = &doc.personal_info;
    if !info.summary.is_empty() {
        out.push(section_heading("Professional Summary"));
        out.push(Paragraph::new().text(&info.summary).spacing(None, Some(200)));
    }

    if !doc.experience.is_empty() {
        out.push(section_heading("Experience"));
        out.extend(doc.experience.iter().flat_map(experience_entry));
    }

    if !doc.education.is_empty() {
        out.push(section_heading("Education"));
        out.extend(doc.education.iter().flat_map(education_entry));
    }

    if !doc.skills.is_empty() {
        let names: Vec<&str> = doc.skills.iter().map(|s| s.name.as_str()).collect();
        out.push(section_heading("Skills"));
        out.push(
            Paragraph::new()
                .text(join_non_empty(&names, ", "))
                .spacing(None, Some(200)),
        );
    }

    for section in doc.rendered_custom_sections() {
        out.extend(custom_section(section));
    }

    out
}

fn header(doc: &CvDocument) -> Vec<Paragraph> {
    let info = &doc.personal_info;
    let mut out = Vec::new();

    if !info.full_name.is_empty() {
        out.push(
            Paragraph::new()
                .text(info.full_name.to_uppercase())
                .heading(HeadingLevel::Heading1)
                .center()
                .spacing(None, Some(100)),
        );
    }
    if !info.job_title.is_empty() {
        out.push(
            Paragraph::new()
                .text(&info.job_title)
                .heading(HeadingLevel::Heading2)
                .center()
                .spacing(None, Some(200)),
        );
    }

    let contact = join_non_empty(&[&info.email, &info.phone, &info.location], META_SEP);
    if !contact.is_empty() {
        out.push(Paragraph::new().text(contact).center().spacing(None, Some(300)));
    }

    let links = join_non_empty(&[&info.linkedin, &info.website], META_SEP);
    if !links.is_empty() {
        out.push(Paragraph::new().text(links).center().spacing(None, Some(300)));
    }

    out
}

fn section_heading(title: &str) -> Paragraph {
    Paragraph::new()
        .text(title)
        .heading(HeadingLevel::Heading3)
        .bordered()
        .spacing(Some(200), Some(100))
}

/// `lead` in bold, then the remaining non-empty parts each behind ` | `.
fn metadata_line(lead: &str, rest: &[&str]) -> Option<Paragraph> {
    let mut runs = Vec::new();
    if !lead.is_empty() {
        runs.push(Run::new(lead).bold());
    }
    for part in rest.iter().filter(|p| !p.is_empty()) {
        let text = if runs.is_empty() {
            part.to_string()
        } else {
            format!("{META_SEP}{part}")
        };
        runs.push(Run::new(text));
    }
    if runs.is_empty() {
        return None;
    }
    let mut p = Paragraph::new().spacing(None, Some(100));
    p.runs = runs;
    Some(p)
}

fn title_line(title: &str) -> Option<Paragraph> {
    (!title.is_empty()).then(|| {
        Paragraph::new()
            .run(Run::new(title).bold().size(24))
            .spacing(Some(100), None)
    })
}

fn experience_entry(exp: &ExperienceEntry) -> Vec<Paragraph> {
    let dates = date_range(&exp.start_date, &exp.end_date, exp.is_current, " - ");
    let mut out = Vec::new();
    out.extend(title_line(&exp.role));
    out.extend(metadata_line(&exp.company, &[&dates, &exp.location]));
    if !exp.description.is_empty() {
        // Verbatim: bullet characters and line breaks are user text.
        out.push(Paragraph::new().text(&exp.description).spacing(None, Some(200)));
    }
    out
}

fn education_entry(edu: &EducationEntry) -> Vec<Paragraph> {
    let dates = date_range(&edu.start_date, &edu.end_date, edu.is_current, " - ");
    let mut out = Vec::new();
    out.extend(title_line(&join_non_empty(&[&edu.degree, &edu.field], ", ")));
    out.extend(
        metadata_line(&edu.school, &[&dates, &edu.location])
            .map(|p| p.spacing(None, Some(200))),
    );
    out
}

fn custom_section(section: &CustomSection) -> Vec<Paragraph> {
    // The title is user data: an empty one still gets its heading slot.
    let mut out = vec![section_heading(&section.title)];

    for item in &section.items {
        let mut runs = Vec::new();
        if !item.title.is_empty() {
            runs.push(Run::new(&item.title).bold());
        }
        if !item.subtitle.is_empty() {
            let text = if runs.is_empty() {
                item.subtitle.clone()
            } else {
                format!("{META_SEP}{}", item.subtitle)
            };
            runs.push(Run::new(text));
        }
        if !runs.is_empty() {
            let mut p = Paragraph::new().spacing(Some(100), None);
            p.runs = runs;
            out.push(p);
        }
        if !item.description.is_empty() {
            out.push(Paragraph::new().text(&item.description).spacing(None, Some(200)));
        }
    }

    out
}
