//! A small element tree and its HTML serialization.
//!
//! Components return a [`View`]; the page assembles the latest view of every
//! mounted component and serializes it. Click handlers stay attached to the
//! tree so tests (and the export binary) can drive the page without a browser.

use std::fmt::Write as _;
use std::rc::Rc;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone)]
pub enum ViewKind {
    Element { tag: &'static str },
    Text(String),
}

#[derive(Clone)]
pub struct View {
    pub kind: ViewKind,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<View>,
    pub on_click: Option<Callback>,
}

const VOID_TAGS: &[&str] = &["img", "input", "meta", "link", "br"];

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            attrs: Vec::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Set an attribute, replacing an earlier value under the same name.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Boolean attribute (`disabled`, `hidden`, ...), rendered without a value.
    pub fn flag(self, name: &'static str, on: bool) -> Self {
        if on { self.attr(name, "") } else { self }
    }

    pub fn child(mut self, child: View) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    pub fn tag(&self) -> Option<&'static str> {
        match self.kind {
            ViewKind::Element { tag } => Some(tag),
            ViewKind::Text(_) => None,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            ViewKind::Text(t) => out.push_str(t),
            ViewKind::Element { .. } => {
                for c in &self.children {
                    c.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search, this node included.
    pub fn find(&self, pred: &dyn Fn(&View) -> bool) -> Option<&View> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&View) -> bool, out: &mut Vec<&'a View>) {
        if pred(self) {
            out.push(self);
        }
        for c in &self.children {
            c.find_all(pred, out);
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&View> {
        self.find(&|v: &View| v.get_attr("id") == Some(id))
    }

    /// First element whose `data-testid` matches.
    pub fn find_by_test_id(&self, test_id: &str) -> Option<&View> {
        self.find(&|v: &View| v.get_attr("data-testid") == Some(test_id))
    }

    /// Invoke the click handler. Disabled elements and elements without a
    /// handler ignore the click; returns whether a handler ran.
    pub fn click(&self) -> bool {
        if self.has_attr("disabled") {
            return false;
        }
        match &self.on_click {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match &self.kind {
            ViewKind::Text(t) => escape_into(out, t),
            ViewKind::Element { tag } => {
                self.write_open_tag(out);
                if VOID_TAGS.contains(tag) {
                    return;
                }
                for c in &self.children {
                    c.write_html(out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }
}

impl View {
    /// `<tag attrs...>` only. Text nodes write nothing.
    pub fn write_open_tag(&self, out: &mut String) {
        let ViewKind::Element { tag } = self.kind else {
            return;
        };
        out.push('<');
        out.push_str(tag);
        for (name, value) in &self.attrs {
            if value.is_empty() && is_boolean_attr(name) {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(out, " {name}=\"");
                escape_into(out, value);
                out.push('"');
            }
        }
        out.push('>');
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ViewKind::Text(t) => f.debug_tuple("Text").field(t).finish(),
            ViewKind::Element { tag } => f
                .debug_struct("Element")
                .field("tag", tag)
                .field("attrs", &self.attrs)
                .field("on_click", &self.on_click.as_ref().map(|_| "<callback>"))
                .field("children", &self.children)
                .finish(),
        }
    }
}

fn is_boolean_attr(name: &str) -> bool {
    matches!(name, "disabled" | "hidden" | "required")
}

fn escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

pub fn El(tag: &'static str) -> View {
    View::new(ViewKind::Element { tag })
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text(text.into()))
}

pub fn Button(label: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    El("button")
        .attr("type", "button")
        .child(Text(label))
        .on_click(on_click)
}

pub fn Link(href: &str, label: impl Into<String>) -> View {
    El("a").attr("href", href).child(Text(label))
}

pub fn Logo(size_class: &str) -> View {
    El("img")
        .attr("src", "/milaknight-logo.jpg")
        .attr("alt", "Milaknight")
        .class(format!("{size_class} object-cover"))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn renders_escaped_html() {
        let v = El("p")
            .class("note")
            .attr("title", "a \"quoted\" <title>")
            .child(Text("Tom & Jerry"));
        assert_eq!(
            v.to_html(),
            "<p class=\"note\" title=\"a &quot;quoted&quot; &lt;title&gt;\">Tom &amp; Jerry</p>"
        );
    }

    #[test]
    fn void_and_boolean_attributes() {
        let v = El("input").attr("type", "email").flag("disabled", true);
        assert_eq!(v.to_html(), "<input type=\"email\" disabled>");
        assert_eq!(El("input").flag("disabled", false).to_html(), "<input>");
    }

    #[test]
    fn attr_replaces_existing_value() {
        let v = El("div").class("a").class("b");
        assert_eq!(v.attrs.len(), 1);
        assert_eq!(v.get_attr("class"), Some("b"));
    }

    #[test]
    fn click_respects_disabled() {
        let hits = Rc::new(Cell::new(0));
        let live = Button("go", {
            let hits = hits.clone();
            move || hits.set(hits.get() + 1)
        });
        let dead = live.clone().flag("disabled", true);

        assert!(live.click());
        assert!(!dead.click());
        assert!(!Text("plain").click());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn finds_nested_nodes() {
        let tree = El("main").child(
            El("section")
                .id("features")
                .child(El("h2").attr("data-testid", "title").child(Text("Features"))),
        );
        assert_eq!(tree.find_by_id("features").and_then(|v| v.tag()), Some("section"));
        assert_eq!(
            tree.find_by_test_id("title").map(|v| v.text_content()),
            Some("Features".to_string())
        );
        assert!(tree.find_by_id("missing").is_none());
    }
}
