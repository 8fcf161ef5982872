//! Modern: single column, accent-coloured header, Education and Skills side by side.

use crate::layout::common::{contacts, date_range, href, join_non_empty};
use crate::layout::tree::{el, Element, VisualTree};
use crate::models::cv::{CustomSection, CvDocument, EducationEntry, ExperienceEntry, PersonalInfo};

const HEADING: &str = "font-size:0.875rem;font-weight:700;text-transform:uppercase;\
                       letter-spacing:0.05em;color:#64748b;margin:0 0 1rem";
const BODY: &str = "font-size:0.875rem;line-height:1.625;color:#475569;white-space:pre-wrap;margin:0";
const SPLIT_ROW: &str = "display:flex;justify-content:space-between;align-items:baseline";
const META: &str = "font-size:0.75rem;font-weight:500;color:#64748b";

pub fn render(doc: &CvDocument) -> VisualTree {
    let info = &doc.personal_info;

    let two_column = (!doc.education.is_empty() || !doc.skills.is_empty()).then(|| {
        el("div")
            .style("display:grid;grid-template-columns:1fr 1fr;gap:2rem")
            .maybe(education(&doc.education))
            .maybe(skills(doc))
    });

    let root = el("div")
        .attr("id", "cv-preview")
        .attr("data-template", "modern")
        .style("padding:3rem;display:flex;flex-direction:column;gap:1.5rem;color:#1e293b")
        .child(header(info, &doc.theme_color))
        .maybe(summary(info))
        .maybe(experience(&doc.experience))
        .maybe(two_column)
        .children(doc.rendered_custom_sections().map(custom_section));

    VisualTree::new(root)
}

fn header(info: &PersonalInfo, theme_color: &str) -> Element {
    let name = (!info.full_name.is_empty()).then(|| {
        el("h1")
            .style(format!(
                "font-size:2.25rem;font-weight:700;text-transform:uppercase;margin:0 0 0.5rem;color:{theme_color}"
            ))
            .text(&info.full_name)
    });
    let title = (!info.job_title.is_empty()).then(|| {
        el("p")
            .style("font-size:1.25rem;font-weight:500;color:#475569;margin:0 0 1rem")
            .text(&info.job_title)
    });

    el("header")
        .style(format!(
            "border-bottom:2px solid {theme_color};padding-bottom:1.5rem"
        ))
        .maybe(name)
        .maybe(title)
        .maybe(contact_line(info))
}

fn contact_line(info: &PersonalInfo) -> Option<Element> {
    let items = contacts(info);
    if items.is_empty() {
        return None;
    }
    let children = items.into_iter().map(|c| {
        let body = if c.is_link() {
            el("a")
                .attr("href", href(c.value))
                .attr("target", "_blank")
                .attr("rel", "noreferrer")
                .text(c.link_label())
        } else {
            el("span").text(c.value)
        };
        el("div")
            .style("display:flex;align-items:center;gap:0.375rem")
            .child(el("span").attr("aria-hidden", "true").text(c.icon()))
            .child(body)
    });
    Some(
        el("div")
            .style("display:flex;flex-wrap:wrap;gap:1rem;font-size:0.875rem;color:#475569")
            .children(children),
    )
}

fn summary(info: &PersonalInfo) -> Option<Element> {
    if info.summary.is_empty() {
        return None;
    }
    Some(
        el("section")
            .section("summary")
            .child(el("h3").style(HEADING).text("Professional Summary"))
            .child(el("p").style(BODY).text(&info.summary)),
    )
}

fn experience(entries: &[ExperienceEntry]) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|exp| {
        let role = (!exp.role.is_empty())
            .then(|| el("h4").style("font-weight:700;margin:0").text(&exp.role));
        let dates = date_range(&exp.start_date, &exp.end_date, exp.is_current, " – ");
        let dates = (!dates.is_empty()).then(|| el("span").style(META).text(dates));
        let company = (!exp.company.is_empty()).then(|| {
            el("span")
                .style("font-size:0.875rem;font-weight:600;color:#334155")
                .text(&exp.company)
        });
        let location =
            (!exp.location.is_empty()).then(|| el("span").style(META).text(&exp.location));
        let description =
            (!exp.description.is_empty()).then(|| el("div").style(BODY).text(&exp.description));

        el("div")
            .style("break-inside:avoid;margin-bottom:1.5rem")
            .maybe(
                (role.is_some() || dates.is_some())
                    .then(|| el("div").style(SPLIT_ROW).maybe(role).maybe(dates)),
            )
            .maybe((company.is_some() || location.is_some()).then(|| {
                el("div")
                    .style("display:flex;justify-content:space-between;margin-bottom:0.5rem")
                    .maybe(company)
                    .maybe(location)
            }))
            .maybe(description)
    });
    Some(
        el("section")
            .section("experience")
            .child(el("h3").style(HEADING).text("Experience"))
            .children(items),
    )
}

fn education(entries: &[EducationEntry]) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|edu| {
        let school = (!edu.school.is_empty())
            .then(|| el("h4").style("font-weight:700;margin:0").text(&edu.school));
        let degree = join_non_empty(&[&edu.degree, &edu.field], ", ");
        let degree = (!degree.is_empty()).then(|| {
            el("p")
                .style("font-size:0.875rem;color:#334155;margin:0")
                .text(degree)
        });
        let dates = date_range(&edu.start_date, &edu.end_date, edu.is_current, " – ");
        let dates = (!dates.is_empty()).then(|| {
            el("p")
                .style("font-size:0.75rem;color:#64748b;margin:0.125rem 0 0")
                .text(dates)
        });
        el("div")
            .style("margin-bottom:1rem")
            .maybe(school)
            .maybe(degree)
            .maybe(dates)
    });
    Some(
        el("section")
            .section("education")
            .style("break-inside:avoid")
            .child(el("h3").style(HEADING).text("Education"))
            .children(items),
    )
}

fn skills(doc: &CvDocument) -> Option<Element> {
    if doc.skills.is_empty() {
        return None;
    }
    let chips = doc.skills.iter().map(|skill| {
        el("span")
            .style(
                "padding:0.25rem 0.5rem;background:#f1f5f9;color:#334155;font-size:0.75rem;\
                 font-weight:500;border-radius:0.25rem",
            )
            .text(&skill.name)
    });
    Some(
        el("section")
            .section("skills")
            .style("break-inside:avoid")
            .child(el("h3").style(HEADING).text("Skills"))
            .child(
                el("div")
                    .style("display:flex;flex-wrap:wrap;gap:0.5rem")
                    .children(chips),
            ),
    )
}

fn custom_section(section: &CustomSection) -> Element {
    let items = section.items.iter().map(|item| {
        let title = (!item.title.is_empty())
            .then(|| el("h4").style("font-weight:700;margin:0").text(&item.title));
        let subtitle = (!item.subtitle.is_empty())
            .then(|| el("span").style(META).text(&item.subtitle));
        let description = (!item.description.is_empty())
            .then(|| el("p").style(BODY).text(&item.description));
        let title_row = (title.is_some() || subtitle.is_some())
            .then(|| el("div").style(SPLIT_ROW).maybe(title).maybe(subtitle));
        el("div")
            .style("margin-bottom:1rem")
            .maybe(title_row)
            .maybe(description)
    });
    el("section")
        .section(format!("custom:{}", section.id))
        .style("break-inside:avoid")
        .maybe((!section.title.is_empty()).then(|| el("h3").style(HEADING).text(&section.title)))
        .children(items)
}
