//! `Dom` implementation over the live document

use manoor_site_core::{Display, Dom, DomOp, Locator, SiteError, SiteResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

/// Convert a thrown JS value into a site error
pub fn js_error(err: &JsValue) -> SiteError {
    SiteError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

pub struct BrowserDom {
    window: Window,
    document: Document,
}

impl BrowserDom {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Every element matched by `locator`, in document order
    pub fn elements(&self, locator: &Locator) -> Vec<Element> {
        match locator {
            Locator::Id(id) => self.document.get_element_by_id(id).into_iter().collect(),
            Locator::Class(_) => {
                let Ok(list) = self.document.query_selector_all(&locator.selector()) else {
                    return Vec::new();
                };
                (0..list.length())
                    .filter_map(|i| list.get(i))
                    .filter_map(|node| node.dyn_into::<Element>().ok())
                    .collect()
            }
        }
    }

    /// First element matched by `locator`, like `querySelector`
    pub fn first(&self, locator: &Locator) -> Option<Element> {
        match locator {
            Locator::Id(id) => self.document.get_element_by_id(id),
            Locator::Class(_) => self
                .document
                .query_selector(&locator.selector())
                .ok()
                .flatten(),
        }
    }

    fn html_elements(&self, locator: &Locator) -> Vec<HtmlElement> {
        self.elements(locator)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn set_style(&self, locator: &Locator, property: &str, value: &str) -> SiteResult<()> {
        for el in self.html_elements(locator) {
            el.style()
                .set_property(property, value)
                .map_err(|e| js_error(&e))?;
        }
        Ok(())
    }
}

impl Dom for BrowserDom {
    fn exists(&self, locator: &Locator) -> bool {
        self.first(locator).is_some()
    }

    fn class_present(&self, locator: &Locator, class: &str) -> bool {
        self.first(locator)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn inline_display(&self, locator: &Locator) -> Option<Display> {
        let el = self.first(locator)?.dyn_into::<HtmlElement>().ok()?;
        let value = el.style().get_property_value("display").ok()?;
        Display::from_css_value(&value)
    }

    fn attribute_of(&self, locator: &Locator, name: &str) -> Option<String> {
        self.first(locator)?.get_attribute(name)
    }

    fn text_content(&self, locator: &Locator) -> Option<String> {
        self.first(locator)?.text_content()
    }

    fn apply(&mut self, op: &DomOp) -> SiteResult<()> {
        match op {
            DomOp::SetDisplay { target, display } => {
                self.set_style(target, "display", display.css_value())?;
            }

            DomOp::SetText { target, text } => {
                for el in self.elements(target) {
                    el.set_text_content(Some(text.as_str()));
                }
            }

            DomOp::SetAttribute {
                target,
                name,
                value,
            } => {
                for el in self.elements(target) {
                    el.set_attribute(name, value).map_err(|e| js_error(&e))?;
                }
            }

            DomOp::SetClass {
                target,
                class,
                present,
            } => {
                for el in self.elements(target) {
                    el.class_list()
                        .toggle_with_force(class, *present)
                        .map_err(|e| js_error(&e))?;
                }
            }

            DomOp::SetBodyOverflow(overflow) => {
                let body = self
                    .document
                    .body()
                    .ok_or_else(|| SiteError::ElementNotFound("body".to_string()))?;
                body.style()
                    .set_property("overflow", overflow.css_value())
                    .map_err(|e| js_error(&e))?;
            }

            DomOp::ScrollIntoView { target } => {
                if let Some(el) = self.first(target) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    el.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }

            DomOp::ScrollWindowTop => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }

            DomOp::Alert(message) => {
                self.window
                    .alert_with_message(message)
                    .map_err(|e| js_error(&e))?;
            }

            DomOp::Focus { target } => {
                if let Some(el) = self
                    .first(target)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                {
                    el.focus().map_err(|e| js_error(&e))?;
                }
            }
        }
        Ok(())
    }
}
