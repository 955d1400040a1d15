use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// The page document as seen by the contexts: root attributes and classes,
/// the sections that can be scrolled to, and where it was last scrolled.
#[derive(Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<DocumentState>>,
}

#[derive(Default)]
struct DocumentState {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    sections: Vec<String>,
    scrolled_to: Option<String>,
    scroll_count: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.inner
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().attributes.get(name).cloned()
    }

    /// Root attributes in name order.
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.inner
            .borrow()
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn toggle_class(&self, class: &str, on: bool) {
        let mut inner = self.inner.borrow_mut();
        if on {
            inner.classes.insert(class.to_string());
        } else {
            inner.classes.remove(class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.contains(class)
    }

    /// Space-separated root classes, sorted.
    pub fn class_list(&self) -> String {
        let inner = self.inner.borrow();
        inner.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }

    pub fn add_section(&self, id: &str) {
        let mut inner = self.inner.borrow_mut();
        if !inner.sections.iter().any(|s| s == id) {
            inner.sections.push(id.to_string());
        }
    }

    /// Scroll to the section an `#id` selector names. Returns false (and
    /// leaves the position alone) when no such section exists.
    pub fn scroll_into_view(&self, selector: &str) -> bool {
        let Some(id) = selector.strip_prefix('#') else {
            log::debug!("scroll_into_view: unsupported selector {selector:?}");
            return false;
        };
        let mut inner = self.inner.borrow_mut();
        if !inner.sections.iter().any(|s| s == id) {
            log::debug!("scroll_into_view: no section #{id}");
            return false;
        }
        inner.scrolled_to = Some(id.to_string());
        inner.scroll_count += 1;
        true
    }

    pub fn scrolled_to(&self) -> Option<String> {
        self.inner.borrow().scrolled_to.clone()
    }

    pub fn scroll_count(&self) -> usize {
        self.inner.borrow().scroll_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolls_only_to_known_sections() {
        let doc = Document::new();
        doc.add_section("features");
        doc.add_section("features");

        assert!(!doc.scroll_into_view("#pricing"));
        assert!(!doc.scroll_into_view("features"));
        assert_eq!(doc.scrolled_to(), None);

        assert!(doc.scroll_into_view("#features"));
        assert_eq!(doc.scrolled_to().as_deref(), Some("features"));
        assert_eq!(doc.scroll_count(), 1);
    }

    #[test]
    fn classes_and_attributes() {
        let doc = Document::new();
        doc.set_attribute("dir", "rtl");
        doc.set_attribute("lang", "ar");
        doc.toggle_class("dark", true);
        doc.toggle_class("light", true);
        doc.toggle_class("light", false);

        assert_eq!(doc.attribute("dir").as_deref(), Some("rtl"));
        assert_eq!(doc.attributes().len(), 2);
        assert_eq!(doc.class_list(), "dark");
        assert!(!doc.has_class("light"));
    }
}
