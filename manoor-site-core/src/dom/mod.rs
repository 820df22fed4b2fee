//! DOM abstraction
//!
//! The view layer never touches a document directly. It produces [`DomOp`]s,
//! and a [`Dom`] implementation applies them: `MemoryDom` in tests, the
//! `web-sys` backed document in the browser.

mod memory;

pub use memory::{MemoryDom, MemoryElement};

use crate::error::SiteResult;
use crate::locator::Locator;

/// Inline `display` values written by this layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Flex,
}

impl Display {
    pub fn css_value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Flex => "flex",
        }
    }

    /// Parse an inline `display` value; values this layer never writes give `None`
    pub fn from_css_value(value: &str) -> Option<Self> {
        match value.trim() {
            "none" => Some(Self::None),
            "block" => Some(Self::Block),
            "flex" => Some(Self::Flex),
            _ => None,
        }
    }
}

/// `overflow` of the document body (scroll lock)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Hidden,
    Auto,
}

impl Overflow {
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Auto => "auto",
        }
    }
}

/// A single DOM mutation or browser side effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomOp {
    /// Set inline `display` on every element matched by `target`
    SetDisplay { target: Locator, display: Display },
    SetText { target: Locator, text: String },
    SetAttribute {
        target: Locator,
        name: String,
        value: String,
    },
    /// Add (`present = true`) or remove a class
    SetClass {
        target: Locator,
        class: String,
        present: bool,
    },
    SetBodyOverflow(Overflow),
    /// Smooth-scroll so `target` sits at the top of the viewport
    ScrollIntoView { target: Locator },
    /// Smooth-scroll the window to offset 0
    ScrollWindowTop,
    /// Blocking native alert
    Alert(String),
    Focus { target: Locator },
}

/// A document this layer can query and mutate
pub trait Dom {
    /// Whether at least one element matches
    fn exists(&self, locator: &Locator) -> bool;

    /// Whether the first match carries `class`
    fn class_present(&self, locator: &Locator, class: &str) -> bool;

    /// Inline `display` of the first match
    fn inline_display(&self, locator: &Locator) -> Option<Display>;

    fn attribute_of(&self, locator: &Locator, name: &str) -> Option<String>;

    fn text_content(&self, locator: &Locator) -> Option<String>;

    /// Apply one operation. Targets that match nothing are skipped silently.
    fn apply(&mut self, op: &DomOp) -> SiteResult<()>;
}
