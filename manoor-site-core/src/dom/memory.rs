//! In-memory document used to exercise the interaction layer without a browser

use std::collections::{BTreeMap, BTreeSet};

use super::{Display, Dom, DomOp, Overflow};
use crate::error::SiteResult;
use crate::locator::Locator;

/// One element of a [`MemoryDom`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub classes: BTreeSet<String>,
    /// Inline `display`, `None` while never written
    pub display: Option<Display>,
    pub text: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl MemoryElement {
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Browser-free document keyed by element id
///
/// Side effects (scrolls, alerts, focus) are recorded so tests can assert on them.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    elements: BTreeMap<String, MemoryElement>,
    pub body_overflow: Option<Overflow>,
    pub focused: Option<String>,
    pub alerts: Vec<String>,
    /// Every scroll request in order: `Some(id)` for scroll-into-view, `None` for window top
    pub scrolls: Vec<Option<String>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) an element
    pub fn insert(&mut self, id: impl Into<String>, element: MemoryElement) -> &mut Self {
        self.elements.insert(id.into(), element);
        self
    }

    pub fn remove(&mut self, id: &str) -> Option<MemoryElement> {
        self.elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    pub fn display_of(&self, id: &str) -> Option<Display> {
        self.elements.get(id).and_then(|el| el.display)
    }

    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|el| el.text.as_deref())
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|el| el.classes.contains(class))
    }

    /// Ids of elements matched by `locator`, in id order
    pub fn matching_ids(&self, locator: &Locator) -> Vec<String> {
        match locator {
            Locator::Id(id) => self
                .elements
                .contains_key(id)
                .then(|| vec![id.clone()])
                .unwrap_or_default(),
            Locator::Class(class) => self
                .elements
                .iter()
                .filter(|(_, el)| el.classes.contains(class))
                .map(|(id, _)| id.clone())
                .collect(),
        }
    }

    /// Ids of visible (`block` or `flex`) elements matched by `locator`
    pub fn visible_ids(&self, locator: &Locator) -> Vec<String> {
        self.matching_ids(locator)
            .into_iter()
            .filter(|id| matches!(self.display_of(id), Some(Display::Block | Display::Flex)))
            .collect()
    }

    fn first_match(&self, locator: &Locator) -> Option<&MemoryElement> {
        self.matching_ids(locator)
            .first()
            .and_then(|id| self.elements.get(id))
    }

    fn for_each_match(&mut self, locator: &Locator, mut f: impl FnMut(&mut MemoryElement)) {
        for id in self.matching_ids(locator) {
            if let Some(el) = self.elements.get_mut(&id) {
                f(el);
            }
        }
    }
}

impl Dom for MemoryDom {
    fn exists(&self, locator: &Locator) -> bool {
        !self.matching_ids(locator).is_empty()
    }

    fn class_present(&self, locator: &Locator, class: &str) -> bool {
        self.first_match(locator)
            .is_some_and(|el| el.classes.contains(class))
    }

    fn inline_display(&self, locator: &Locator) -> Option<Display> {
        self.first_match(locator).and_then(|el| el.display)
    }

    fn attribute_of(&self, locator: &Locator, name: &str) -> Option<String> {
        self.first_match(locator)
            .and_then(|el| el.attribute(name))
            .map(str::to_string)
    }

    fn text_content(&self, locator: &Locator) -> Option<String> {
        self.first_match(locator).and_then(|el| el.text.clone())
    }

    fn apply(&mut self, op: &DomOp) -> SiteResult<()> {
        match op {
            DomOp::SetDisplay { target, display } => {
                self.for_each_match(target, |el| el.display = Some(*display));
            }
            DomOp::SetText { target, text } => {
                self.for_each_match(target, |el| el.text = Some(text.clone()));
            }
            DomOp::SetAttribute {
                target,
                name,
                value,
            } => {
                self.for_each_match(target, |el| {
                    el.attributes.insert(name.clone(), value.clone());
                });
            }
            DomOp::SetClass {
                target,
                class,
                present,
            } => {
                self.for_each_match(target, |el| {
                    if *present {
                        el.classes.insert(class.clone());
                    } else {
                        el.classes.remove(class);
                    }
                });
            }
            DomOp::SetBodyOverflow(overflow) => self.body_overflow = Some(*overflow),
            DomOp::ScrollIntoView { target } => {
                if let Some(id) = self.matching_ids(target).into_iter().next() {
                    self.scrolls.push(Some(id));
                }
            }
            DomOp::ScrollWindowTop => self.scrolls.push(None),
            DomOp::Alert(message) => self.alerts.push(message.clone()),
            DomOp::Focus { target } => {
                if let Some(id) = self.matching_ids(target).into_iter().next() {
                    self.focused = Some(id);
                }
            }
        }
        Ok(())
    }
}
