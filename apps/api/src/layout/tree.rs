//! VisualTree: the in-memory rendering a layout strategy produces.
//!
//! A small owned element tree. Layouts build it with the `el(..)` builder, the
//! preview surface mounts it, and the snapshot exporter serialises it to
//! markup. Trees compare structurally, which is what the "switch template and
//! back" guarantee is checked against.

use std::fmt::Write as _;

/// Attribute that tags every section container.
pub const SECTION_ATTR: &str = "data-section";

const VOID_TAGS: &[&str] = &["img", "br", "hr", "meta", "link"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Starts a new element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn style(self, css: impl Into<String>) -> Self {
        self.attr("style", css)
    }

    /// Marks this element as the container of a résumé section.
    pub fn section(self, key: impl Into<String>) -> Self {
        self.attr(SECTION_ATTR, key)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn maybe(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn children<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    #[cfg(test)]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        for child in &self.children {
            visit(child);
            if let Node::Element(e) = child {
                e.walk(visit);
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_html(out),
                Node::Text(t) => out.push_str(&escape_text(t)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// A rendered résumé: one root element produced by a layout strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualTree {
    pub root: Element,
}

impl VisualTree {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Realised markup of the whole tree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.root.write_html(&mut out);
        out
    }

    /// All text nodes, in document order.
    #[cfg(test)]
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.root.walk(&mut |node| {
            if let Node::Text(t) = node {
                texts.push(t.as_str());
            }
        });
        texts
    }

    /// Section keys (`summary`, `experience`, `custom:<id>`, ...) in document order.
    #[cfg(test)]
    pub fn sections(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        self.root.walk(&mut |node| {
            if let Node::Element(e) = node {
                if let Some(key) = e.get_attr(SECTION_ATTR) {
                    keys.push(key);
                }
            }
        });
        keys
    }

    /// Finds the first element (root included) matching a predicate.
    #[cfg(test)]
    pub fn find(&self, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        if pred(&self.root) {
            return Some(&self.root);
        }
        let mut found = None;
        self.root.walk(&mut |node| {
            if found.is_none() {
                if let Node::Element(e) = node {
                    if pred(e) {
                        found = Some(e);
                    }
                }
            }
        });
        found
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_escapes_text_and_attributes() {
        let tree = VisualTree::new(
            el("div")
                .attr("title", "a \"quoted\" <value>")
                .text("Tom & Jerry <3"),
        );
        assert_eq!(
            tree.to_html(),
            "<div title=\"a &quot;quoted&quot; &lt;value&gt;\">Tom &amp; Jerry &lt;3</div>"
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let tree = VisualTree::new(el("div").child(el("img").attr("src", "data:image/png;base64,AAA")));
        assert_eq!(
            tree.to_html(),
            "<div><img src=\"data:image/png;base64,AAA\"></div>"
        );
    }

    #[test]
    fn test_sections_in_document_order() {
        let tree = VisualTree::new(
            el("div")
                .child(el("section").section("summary").text("s"))
                .child(el("div").child(el("section").section("skills"))),
        );
        assert_eq!(tree.sections(), vec!["summary", "skills"]);
    }

    #[test]
    fn test_maybe_skips_none() {
        let none: Option<Element> = None;
        let tree = VisualTree::new(el("div").maybe(none).maybe(Some(el("p").text("x"))));
        assert_eq!(tree.to_html(), "<div><p>x</p></div>");
    }

    #[test]
    fn test_texts_keep_line_breaks() {
        let tree = VisualTree::new(el("p").text("a\nb"));
        assert_eq!(tree.texts(), vec!["a\nb"]);
    }
}
