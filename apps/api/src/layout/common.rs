//! Presence and formatting rules shared by every layout strategy.

use crate::models::cv::{PersonalInfo, DEFAULT_THEME_COLOR};

/// Token shown instead of an end date for a current role or enrolment.
pub const PRESENT: &str = "Present";

/// Sidebar colour used by Creative while the theme is still the default accent.
pub const CREATIVE_FALLBACK_SIDEBAR: &str = "#1e293b";

/// Formats `start <sep> end`, substituting [`PRESENT`] when `is_current`.
///
/// Empty ends are dropped along with the separator; two empty ends give an
/// empty string.
pub fn date_range(start: &str, end: &str, is_current: bool, sep: &str) -> String {
    let end = if is_current { PRESENT } else { end };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (false, false) => format!("{start}{sep}{end}"),
    }
}

/// Joins the non-empty parts with `sep`.
pub fn join_non_empty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

/// Year prefix of a `YYYY-MM` style date.
pub fn year(date: &str) -> &str {
    match date.char_indices().nth(4) {
        Some((idx, _)) => &date[..idx],
        None => date,
    }
}

/// Link target for a user-typed address: `https://` is added unless the value
/// already carries a scheme.
pub fn href(value: &str) -> String {
    if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://{value}")
    }
}

/// First character of the full name, for the avatar fallback.
pub fn monogram(full_name: &str) -> Option<String> {
    full_name.trim().chars().next().map(|c| c.to_string())
}

pub fn creative_sidebar_color(theme_color: &str) -> &str {
    if theme_color.eq_ignore_ascii_case(DEFAULT_THEME_COLOR) {
        CREATIVE_FALLBACK_SIDEBAR
    } else {
        theme_color
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact<'a> {
    pub kind: ContactKind,
    pub value: &'a str,
}

impl Contact<'_> {
    pub fn is_link(&self) -> bool {
        matches!(self.kind, ContactKind::Linkedin | ContactKind::Website)
    }

    /// Short label layouts use in place of the raw link value.
    pub fn link_label(&self) -> &'static str {
        match self.kind {
            ContactKind::Linkedin => "LinkedIn",
            ContactKind::Website => "Portfolio",
            _ => "",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            ContactKind::Email => "✉",
            ContactKind::Phone => "☎",
            ContactKind::Location => "⌖",
            ContactKind::Linkedin => "in",
            ContactKind::Website => "⌂",
        }
    }
}

/// Contact fields that are present, in display order. Empty fields are left
/// out so no layout ever shows a blank label or a dangling separator.
pub fn contacts(info: &PersonalInfo) -> Vec<Contact<'_>> {
    [
        (ContactKind::Email, info.email.as_str()),
        (ContactKind::Phone, info.phone.as_str()),
        (ContactKind::Location, info.location.as_str()),
        (ContactKind::Linkedin, info.linkedin.as_str()),
        (ContactKind::Website, info.website.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(kind, value)| Contact { kind, value })
    .collect()
}
