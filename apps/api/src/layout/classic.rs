//! Classic: centred serif column, underlined headings, dates right-aligned.

use crate::layout::common::{contacts, date_range, join_non_empty};
use crate::layout::tree::{el, Element, VisualTree};
use crate::models::cv::{CustomSection, CvDocument, EducationEntry, ExperienceEntry, PersonalInfo};

const HEADING: &str = "font-weight:700;font-size:0.875rem;text-transform:uppercase;\
                       letter-spacing:0.1em;border-bottom:1px solid #1e293b;margin:0 0 0.75rem";
const TITLE_ROW: &str = "display:flex;justify-content:space-between;font-weight:700;font-size:0.875rem";
const BODY: &str = "font-size:0.875rem;line-height:1.625;white-space:pre-wrap";

pub fn render(doc: &CvDocument) -> VisualTree {
    let info = &doc.personal_info;

    let root = el("div")
        .attr("id", "cv-preview")
        .attr("data-template", "classic")
        .style(
            "padding:3.5rem;font-family:'Merriweather',Georgia,serif;color:#0f172a;\
             max-width:48rem;margin:0 auto",
        )
        .child(header(info))
        .maybe(summary(info))
        .maybe(experience(&doc.experience))
        .maybe(education(&doc.education))
        .maybe(skills(doc))
        .children(doc.rendered_custom_sections().map(custom_section));

    VisualTree::new(root)
}

fn heading(text: &str) -> Element {
    el("h3").style(HEADING).text(text)
}

fn header(info: &PersonalInfo) -> Element {
    let name = (!info.full_name.is_empty()).then(|| {
        el("h1")
            .style("font-size:1.875rem;font-weight:700;letter-spacing:0.025em;margin:0 0 0.5rem")
            .text(&info.full_name)
    });
    let title = (!info.job_title.is_empty()).then(|| {
        el("p")
            .style("font-size:1.125rem;font-style:italic;color:#334155;margin:0 0 0.75rem")
            .text(&info.job_title)
    });

    // Bullet separators sit only between values that are present.
    let line: Vec<String> = contacts(info)
        .iter()
        .map(|c| {
            if c.is_link() {
                c.link_label().to_string()
            } else {
                c.value.to_string()
            }
        })
        .collect();
    let contact = (!line.is_empty()).then(|| {
        el("div")
            .style("font-size:0.75rem;color:#475569")
            .text(line.join(" • "))
    });

    el("header")
        .style("text-align:center;border-bottom:1px solid #cbd5e1;padding-bottom:1.5rem;margin-bottom:1.5rem")
        .maybe(name)
        .maybe(title)
        .maybe(contact)
}

fn summary(info: &PersonalInfo) -> Option<Element> {
    if info.summary.is_empty() {
        return None;
    }
    Some(
        el("section")
            .section("summary")
            .style("margin-bottom:1.5rem")
            .child(heading("Summary"))
            .child(
                el("p")
                    .style("font-size:0.875rem;line-height:1.625;text-align:justify;margin:0")
                    .text(&info.summary),
            ),
    )
}

fn experience(entries: &[ExperienceEntry]) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|exp| {
        let place = join_non_empty(&[&exp.company, &exp.location], ", ");
        let dates = date_range(&exp.start_date, &exp.end_date, exp.is_current, " – ");
        el("div")
            .style("break-inside:avoid;margin-bottom:1.25rem")
            .maybe(title_row(place, dates))
            .maybe((!exp.role.is_empty()).then(|| {
                el("div")
                    .style("font-style:italic;font-size:0.875rem;margin-bottom:0.25rem")
                    .text(&exp.role)
            }))
            .maybe(
                (!exp.description.is_empty())
                    .then(|| el("div").style(BODY).text(&exp.description)),
            )
    });
    Some(
        el("section")
            .section("experience")
            .style("margin-bottom:1.5rem")
            .child(heading("Experience"))
            .children(items),
    )
}

/// Bold place on the left, dates on the right; absent when both are empty.
fn title_row(place: String, dates: String) -> Option<Element> {
    if place.is_empty() && dates.is_empty() {
        return None;
    }
    Some(
        el("div")
            .style(TITLE_ROW)
            .maybe((!place.is_empty()).then(|| el("span").text(place)))
            .maybe((!dates.is_empty()).then(|| el("span").text(dates))),
    )
}

fn education(entries: &[EducationEntry]) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|edu| {
        let place = join_non_empty(&[&edu.school, &edu.location], ", ");
        let dates = date_range(&edu.start_date, &edu.end_date, edu.is_current, " – ");
        let degree = join_non_empty(&[&edu.degree, &edu.field], " in ");
        el("div")
            .style("margin-bottom:0.75rem")
            .maybe(title_row(place, dates))
            .maybe((!degree.is_empty()).then(|| el("div").style("font-size:0.875rem").text(degree)))
    });
    Some(
        el("section")
            .section("education")
            .style("margin-bottom:1.5rem;break-inside:avoid")
            .child(heading("Education"))
            .children(items),
    )
}

fn skills(doc: &CvDocument) -> Option<Element> {
    if doc.skills.is_empty() {
        return None;
    }
    let names: Vec<&str> = doc.skills.iter().map(|s| s.name.as_str()).collect();
    Some(
        el("section")
            .section("skills")
            .style("margin-bottom:1.5rem;break-inside:avoid")
            .child(heading("Skills"))
            .child(
                el("p")
                    .style("font-size:0.875rem;line-height:1.625;margin:0")
                    .text(join_non_empty(&names, " • ")),
            ),
    )
}

fn custom_section(section: &CustomSection) -> Element {
    let items = section.items.iter().map(|item| {
        let title = (!item.title.is_empty()).then(|| el("span").text(&item.title));
        let subtitle = (!item.subtitle.is_empty()).then(|| el("span").text(&item.subtitle));
        let row = (title.is_some() || subtitle.is_some())
            .then(|| el("div").style(TITLE_ROW).maybe(title).maybe(subtitle));
        let description = (!item.description.is_empty()).then(|| {
            el("div")
                .style("font-size:0.875rem;line-height:1.625;white-space:pre-wrap;margin-top:0.25rem")
                .text(&item.description)
        });
        el("div")
            .style("margin-bottom:1rem")
            .maybe(row)
            .maybe(description)
    });
    el("section")
        .section(format!("custom:{}", section.id))
        .style("margin-bottom:1.5rem;break-inside:avoid")
        .maybe((!section.title.is_empty()).then(|| heading(&section.title)))
        .children(items)
}
