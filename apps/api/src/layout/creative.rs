//! Creative: coloured sidebar (avatar, contact, skills, education) beside a
//! main panel (header, profile, experience, custom sections).

use crate::layout::common::{contacts, creative_sidebar_color, date_range, join_non_empty, monogram};
use crate::layout::tree::{el, Element, VisualTree};
use crate::models::cv::{CustomSection, CvDocument, EducationEntry, ExperienceEntry, PersonalInfo};

const SIDEBAR_HEADING: &str = "font-size:1.125rem;font-weight:700;text-transform:uppercase;\
                               letter-spacing:0.1em;color:rgba(255,255,255,0.9);margin:0 0 1rem;\
                               border-bottom:1px solid rgba(255,255,255,0.2);padding-bottom:0.5rem";
const MAIN_HEADING: &str = "font-size:0.875rem;font-weight:700;text-transform:uppercase;\
                            color:#94a3b8;letter-spacing:0.05em;margin:0 0 1.5rem;\
                            display:flex;align-items:center;gap:0.5rem";
const BODY: &str = "font-size:0.875rem;line-height:1.625;color:#475569;white-space:pre-wrap;margin:0";

pub fn render(doc: &CvDocument) -> VisualTree {
    let info = &doc.personal_info;
    let accent = creative_sidebar_color(&doc.theme_color);

    let sidebar = el("aside")
        .style(format!(
            "width:32%;flex-shrink:0;padding:2rem;color:#fff;background-color:{accent};\
             display:flex;flex-direction:column;gap:2rem"
        ))
        .maybe(identity(info))
        .maybe(skills(doc))
        .maybe(education(&doc.education));

    let main = el("main")
        .style("flex:1;padding:2.5rem;background:#fff")
        .child(header(info, accent))
        .maybe(profile(info))
        .maybe(experience(&doc.experience))
        .children(doc.rendered_custom_sections().map(custom_section));

    let root = el("div")
        .attr("id", "cv-preview")
        .attr("data-template", "creative")
        .style("display:flex;min-height:297mm")
        .child(sidebar)
        .child(main);

    VisualTree::new(root)
}

/// Photo (or monogram fallback) plus the contact block.
fn identity(info: &PersonalInfo) -> Option<Element> {
    let avatar_frame = "width:8rem;height:8rem;margin:0 auto 1rem;border-radius:9999px;overflow:hidden";
    let avatar = match info.photo.as_deref().filter(|p| !p.is_empty()) {
        Some(photo) => Some(
            el("div")
                .style(format!("{avatar_frame};border:4px solid rgba(255,255,255,0.2)"))
                .child(
                    el("img")
                        .attr("src", photo)
                        .attr("alt", "Profile")
                        .style("width:100%;height:100%;object-fit:cover"),
                ),
        ),
        None => monogram(&info.full_name).map(|initial| {
            el("div")
                .style(format!(
                    "{avatar_frame};background:rgba(255,255,255,0.1);display:flex;\
                     align-items:center;justify-content:center;font-size:2.25rem;\
                     font-weight:700;color:rgba(255,255,255,0.5)"
                ))
                .text(initial)
        }),
    };

    let items = contacts(info);
    let contact = (!items.is_empty()).then(|| {
        let rows = items.iter().map(|c| {
            el("div")
                .style("display:flex;align-items:center;gap:0.5rem")
                .child(el("span").attr("aria-hidden", "true").text(c.icon()))
                .child(el("span").style("word-break:break-all").text(c.value))
        });
        el("div")
            .child(
                el("h2")
                    .style(
                        "font-size:1.125rem;font-weight:700;text-transform:uppercase;\
                         letter-spacing:0.1em;color:rgba(255,255,255,0.9);margin:0 0 1rem",
                    )
                    .text("Contact"),
            )
            .child(
                el("div")
                    .style(
                        "display:flex;flex-direction:column;gap:0.75rem;font-size:0.75rem;\
                         color:rgba(255,255,255,0.8);text-align:left",
                    )
                    .children(rows),
            )
    });

    if avatar.is_none() && contact.is_none() {
        return None;
    }
    Some(
        el("div")
            .style("text-align:center;break-inside:avoid")
            .maybe(avatar)
            .maybe(contact),
    )
}

fn skills(doc: &CvDocument) -> Option<Element> {
    if doc.skills.is_empty() {
        return None;
    }
    let chips = doc.skills.iter().map(|s| {
        el("span")
            .style(
                "padding:0.25rem 0.5rem;background:rgba(255,255,255,0.1);border-radius:0.25rem;\
                 font-size:0.75rem;color:rgba(255,255,255,0.9)",
            )
            .text(&s.name)
    });
    Some(
        el("div")
            .section("skills")
            .style("break-inside:avoid")
            .child(el("h2").style(SIDEBAR_HEADING).text("Skills"))
            .child(
                el("div")
                    .style("display:flex;flex-wrap:wrap;gap:0.5rem")
                    .children(chips),
            ),
    )
}

fn education(entries: &[EducationEntry]) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|edu| {
        let dates = date_range(&edu.start_date, &edu.end_date, edu.is_current, " - ");
        el("div")
            .style("margin-bottom:1rem;color:rgba(255,255,255,0.8)")
            .maybe((!edu.school.is_empty()).then(|| {
                el("div")
                    .style("font-size:0.875rem;font-weight:700;color:#fff")
                    .text(&edu.school)
            }))
            .maybe((!edu.degree.is_empty()).then(|| {
                el("div")
                    .style("font-size:0.75rem;margin-bottom:0.25rem")
                    .text(&edu.degree)
            }))
            .maybe(
                (!dates.is_empty())
                    .then(|| el("div").style("font-size:10px;opacity:0.7").text(dates)),
            )
    });
    Some(
        el("div")
            .section("education")
            .style("break-inside:avoid")
            .child(el("h2").style(SIDEBAR_HEADING).text("Education"))
            .children(items),
    )
}

fn header(info: &PersonalInfo, accent: &str) -> Element {
    let name = (!info.full_name.is_empty()).then(|| {
        el("h1")
            .style(format!(
                "font-size:3rem;font-weight:700;text-transform:uppercase;line-height:1.25;\
                 margin:0 0 0.5rem;color:{accent}"
            ))
            .text(&info.full_name)
    });
    let title = (!info.job_title.is_empty()).then(|| {
        el("p")
            .style("font-size:1.5rem;font-weight:300;color:#64748b;margin:0")
            .text(&info.job_title)
    });
    el("header")
        .style("margin-bottom:2.5rem;padding-top:1rem")
        .maybe(name)
        .maybe(title)
}

fn main_heading(text: &str) -> Element {
    el("h3")
        .style(MAIN_HEADING)
        .child(el("span").style("width:0.25rem;height:1rem;background:#cbd5e1;display:inline-block"))
        .text(text)
}

fn profile(info: &PersonalInfo) -> Option<Element> {
    if info.summary.is_empty() {
        return None;
    }
    Some(
        el("section")
            .section("summary")
            .style("margin-bottom:2.5rem")
            .child(main_heading("Profile"))
            .child(el("p").style(BODY).text(&info.summary)),
    )
}

fn experience(entries: &[ExperienceEntry]) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|exp| {
        let role = (!exp.role.is_empty()).then(|| {
            el("h4")
                .style("font-size:1.125rem;font-weight:700;color:#1e293b;margin:0")
                .text(&exp.role)
        });
        let dates = date_range(&exp.start_date, &exp.end_date, exp.is_current, " - ");
        let dates = (!dates.is_empty()).then(|| {
            el("span")
                .style("font-size:0.75rem;font-family:monospace;color:#94a3b8")
                .text(dates)
        });
        let row = (role.is_some() || dates.is_some()).then(|| {
            el("div")
                .style("display:flex;justify-content:space-between;align-items:baseline;margin-bottom:0.25rem")
                .maybe(role)
                .maybe(dates)
        });
        let place = join_non_empty(&[&exp.company, &exp.location], " • ");
        let place = (!place.is_empty()).then(|| {
            el("div")
                .style("font-size:0.875rem;font-weight:500;color:#475569;margin-bottom:0.5rem")
                .text(place)
        });
        let description =
            (!exp.description.is_empty()).then(|| el("p").style(BODY).text(&exp.description));
        el("div")
            .style("break-inside:avoid;margin-bottom:2rem")
            .maybe(row)
            .maybe(place)
            .maybe(description)
    });
    Some(
        el("section")
            .section("experience")
            .child(main_heading("Experience"))
            .children(items),
    )
}

fn custom_section(section: &CustomSection) -> Element {
    let items = section.items.iter().map(|item| {
        let title = (!item.title.is_empty()).then(|| {
            el("h4")
                .style("font-weight:700;color:#1e293b;margin:0")
                .text(&item.title)
        });
        let subtitle = (!item.subtitle.is_empty()).then(|| {
            el("span")
                .style("font-size:0.75rem;font-family:monospace;color:#94a3b8")
                .text(&item.subtitle)
        });
        let row = (title.is_some() || subtitle.is_some()).then(|| {
            el("div")
                .style("display:flex;justify-content:space-between;align-items:baseline;margin-bottom:0.25rem")
                .maybe(title)
                .maybe(subtitle)
        });
        let description =
            (!item.description.is_empty()).then(|| el("p").style(BODY).text(&item.description));
        el("div")
            .style("break-inside:avoid;margin-bottom:1.5rem")
            .maybe(row)
            .maybe(description)
    });
    el("section")
        .section(format!("custom:{}", section.id))
        .style("margin-top:2rem")
        .maybe((!section.title.is_empty()).then(|| main_heading(&section.title)))
        .children(items)
}
