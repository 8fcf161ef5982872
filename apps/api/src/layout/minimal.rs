//! Minimal: light header over a 1:2 grid; the wide column is a ruled timeline.

use crate::layout::common::{contacts, date_range, href, year};
use crate::layout::tree::{el, Element, VisualTree};
use crate::models::cv::{CustomSection, CvDocument, EducationEntry, ExperienceEntry, PersonalInfo};

const HEADING: &str = "font-size:0.75rem;font-weight:700;text-transform:uppercase;color:#94a3b8;margin:0 0 0.75rem";
const TIMELINE: &str = "border-left:1px solid #e2e8f0;padding-left:1.5rem;position:relative";
const DOT: &str = "position:absolute;left:-30px;top:0.375rem;width:0.5rem;height:0.5rem;\
                   border-radius:9999px;background:#cbd5e1";
const BODY: &str = "font-size:0.875rem;line-height:1.625;color:#475569;white-space:pre-wrap";

pub fn render(doc: &CvDocument) -> VisualTree {
    let info = &doc.personal_info;

    let left = el("div")
        .style("display:flex;flex-direction:column;gap:2rem")
        .maybe(about(info))
        .maybe(expertise(doc))
        .maybe(education(&doc.education));

    let right = el("div")
        .maybe(experience(&doc.experience))
        .children(doc.rendered_custom_sections().map(custom_section));

    let root = el("div")
        .attr("id", "cv-preview")
        .attr("data-template", "minimal")
        .style("padding:3rem;font-family:'Inter',sans-serif;color:#1e293b;max-width:56rem;margin:0 auto")
        .child(header(info))
        .child(
            el("div")
                .style("display:grid;grid-template-columns:1fr 2fr;gap:2.5rem")
                .child(left)
                .child(right),
        );

    VisualTree::new(root)
}

fn header(info: &PersonalInfo) -> Element {
    let name = (!info.full_name.is_empty()).then(|| {
        el("h1")
            .style("font-size:3rem;font-weight:300;margin:0 0 0.5rem")
            .text(&info.full_name)
    });
    let title = (!info.job_title.is_empty()).then(|| {
        el("p")
            .style("font-size:1.25rem;font-weight:300;color:#64748b;margin:0 0 1rem")
            .text(&info.job_title)
    });

    let all = contacts(info);
    let plain = all
        .iter()
        .filter(|c| !c.is_link())
        .map(|c| el("span").text(c.value));
    let links: Vec<Element> = all
        .iter()
        .filter(|c| c.is_link())
        .map(|c| {
            el("a")
                .attr("href", href(c.value))
                .style("text-decoration:underline;text-decoration-color:#cbd5e1;color:inherit")
                .text(c.link_label())
        })
        .collect();
    let link_row = (!links.is_empty()).then(|| {
        el("div")
            .style("display:flex;gap:1rem;margin-top:0.25rem")
            .children(links)
    });

    let contact_block = el("div")
        .style("font-size:0.75rem;color:#94a3b8;font-family:monospace;display:flex;flex-direction:column;gap:0.25rem")
        .children(plain)
        .maybe(link_row);
    let contact_block = (!contact_block.children.is_empty()).then_some(contact_block);

    el("header")
        .style("margin-bottom:2rem")
        .maybe(name)
        .maybe(title)
        .maybe(contact_block)
}

fn about(info: &PersonalInfo) -> Option<Element> {
    if info.summary.is_empty() {
        return None;
    }
    Some(
        el("section")
            .section("summary")
            .child(el("h3").style(HEADING).text("About"))
            .child(
                el("p")
                    .style("font-size:0.875rem;line-height:1.625;color:#475569;margin:0")
                    .text(&info.summary),
            ),
    )
}

fn expertise(doc: &CvDocument) -> Option<Element> {
    if doc.skills.is_empty() {
        return None;
    }
    let items = doc.skills.iter().map(|s| {
        el("li")
            .style("font-size:0.875rem;font-weight:500;color:#334155")
            .text(&s.name)
    });
    Some(
        el("section")
            .section("skills")
            .child(el("h3").style(HEADING).text("Expertise"))
            .child(
                el("ul")
                    .style("list-style:none;padding:0;margin:0")
                    .children(items),
            ),
    )
}

fn education(entries: &[EducationEntry]) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|edu| {
        let years = date_range(
            year(&edu.start_date),
            year(&edu.end_date),
            edu.is_current,
            " - ",
        );
        el("div")
            .style("margin-bottom:1rem")
            .maybe((!edu.school.is_empty()).then(|| {
                el("div")
                    .style("font-size:0.875rem;font-weight:700")
                    .text(&edu.school)
            }))
            .maybe((!edu.degree.is_empty()).then(|| {
                el("div")
                    .style("font-size:0.75rem;color:#475569")
                    .text(&edu.degree)
            }))
            .maybe((!years.is_empty()).then(|| {
                el("div")
                    .style("font-size:0.75rem;color:#94a3b8;margin-top:0.25rem")
                    .text(years)
            }))
    });
    Some(
        el("section")
            .section("education")
            .child(el("h3").style(HEADING).text("Education"))
            .children(items),
    )
}

fn experience(entries: &[ExperienceEntry]) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|exp| {
        let role = (!exp.role.is_empty()).then(|| {
            el("span")
                .style("font-size:1.125rem;font-weight:500")
                .text(&exp.role)
        });
        let company = (!exp.company.is_empty()).then(|| {
            el("span")
                .style("font-size:0.875rem;color:#64748b")
                .text(&exp.company)
        });
        let heading = (role.is_some() || company.is_some()).then(|| {
            el("div")
                .style("display:flex;flex-direction:column;margin-bottom:0.25rem")
                .maybe(role)
                .maybe(company)
        });
        let dates = date_range(&exp.start_date, &exp.end_date, exp.is_current, " — ");
        let dates = (!dates.is_empty()).then(|| {
            el("div")
                .style("font-size:0.75rem;color:#94a3b8;margin-bottom:0.5rem;font-family:monospace")
                .text(dates)
        });
        let description =
            (!exp.description.is_empty()).then(|| el("div").style(BODY).text(&exp.description));
        el("div")
            .style("position:relative;break-inside:avoid;margin-bottom:2rem")
            .child(el("div").style(DOT))
            .maybe(heading)
            .maybe(dates)
            .maybe(description)
    });
    Some(
        el("section")
            .section("experience")
            .child(el("h3").style(HEADING).text("Experience"))
            .child(el("div").style(TIMELINE).children(items)),
    )
}

fn custom_section(section: &CustomSection) -> Element {
    let items = section.items.iter().map(|item| {
        let title = (!item.title.is_empty()).then(|| {
            el("span")
                .style("font-size:1.125rem;font-weight:500")
                .text(&item.title)
        });
        let subtitle = (!item.subtitle.is_empty()).then(|| {
            el("span")
                .style("font-size:0.875rem;color:#64748b")
                .text(&item.subtitle)
        });
        let heading = (title.is_some() || subtitle.is_some()).then(|| {
            el("div")
                .style("display:flex;flex-direction:column;margin-bottom:0.25rem")
                .maybe(title)
                .maybe(subtitle)
        });
        let description =
            (!item.description.is_empty()).then(|| el("div").style(BODY).text(&item.description));
        el("div")
            .style("position:relative;break-inside:avoid;margin-bottom:1.5rem")
            .child(el("div").style(DOT))
            .maybe(heading)
            .maybe(description)
    });
    el("section")
        .section(format!("custom:{}", section.id))
        .style("margin-top:2rem")
        .maybe((!section.title.is_empty()).then(|| el("h3").style(HEADING).text(&section.title)))
        .child(el("div").style(TIMELINE).children(items))
}
