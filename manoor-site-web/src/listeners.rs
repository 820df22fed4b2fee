//! Listener installation
//!
//! Follows the [`Wiring`](manoor_site_core::Wiring) plan computed at mount:
//! every listener translates its browser event into a
//! [`UiEvent`], dispatches it, and cancels the default action when asked to.
//! Closures live as long as the page, so they are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use manoor_site_core::{Dispatch, Dom, Locator, Runtime, UiEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, HtmlInputElement, KeyboardEvent};

use crate::browser_dom::{js_error, BrowserDom};

pub type SharedRuntime = Rc<RefCell<Runtime<BrowserDom>>>;

/// Dispatch into the shared runtime, `None` while it is already borrowed
fn dispatch_shared<D: Dom>(runtime: &RefCell<Runtime<D>>, event: UiEvent) -> Option<Dispatch> {
    let mut runtime = runtime.try_borrow_mut().ok()?;
    Some(runtime.dispatch(event))
}

/// `innerWidth` when readable, unbounded otherwise
fn viewport_width(inner_width: Option<f64>) -> f64 {
    inner_width.unwrap_or(f64::INFINITY)
}

/// A window click hits the backdrop when its target is the modal container itself
fn is_backdrop<T: PartialEq + ?Sized>(target: Option<&T>, modal: Option<&T>) -> bool {
    matches!((target, modal), (Some(target), Some(modal)) if target == modal)
}

/// Attach `handler` to `target`; the returned event (if any) is dispatched
fn listen(
    target: &EventTarget,
    kind: &str,
    runtime: &SharedRuntime,
    handler: impl Fn(&Event) -> Option<UiEvent> + 'static,
) -> Result<()> {
    let runtime = Rc::clone(runtime);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(ui_event) = handler(&event) else {
            return;
        };
        match dispatch_shared(&*runtime, ui_event) {
            Some(dispatch) if dispatch.prevent_default => event.prevent_default(),
            Some(_) => {}
            None => log::warn!("Re-entrant {} event ignored", event.type_()),
        }
    });

    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("addEventListener({kind}) failed: {}", js_error(&e)))?;
    closure.forget();
    Ok(())
}

/// Install every listener the wiring plan allows
pub fn install(runtime: &SharedRuntime) -> Result<()> {
    let (window, wiring, elements, form) = {
        let rt = runtime.borrow();
        (
            rt.dom().window().clone(),
            rt.wiring().clone(),
            rt.config().elements.clone(),
            rt.config().form.clone(),
        )
    };

    let first = |locator: &Locator| runtime.borrow().dom().first(locator);
    let all = |locator: &Locator| runtime.borrow().dom().elements(locator);

    // Navigation
    for control_id in &wiring.nav_controls {
        let Some(control) = first(&Locator::id(control_id.as_str())) else {
            continue;
        };
        let control_id = control_id.clone();
        listen(&control, "click", runtime, move |_| {
            Some(UiEvent::NavControlClicked {
                control_id: control_id.clone(),
            })
        })?;
    }

    if wiring.home_control {
        if let Some(home) = first(&elements.home_control) {
            listen(&home, "click", runtime, |_| Some(UiEvent::HomeClicked))?;
        }
    }

    // Mobile menu
    if wiring.menu {
        if let (Some(toggle), Some(menu)) = (first(&elements.menu_toggle), first(&elements.nav_menu)) {
            listen(&toggle, "click", runtime, |_| Some(UiEvent::MenuToggleClicked))?;

            for link in links_in(&menu) {
                let window = window.clone();
                listen(&link, "click", runtime, move |_| {
                    let inner_width = window.inner_width().ok().and_then(|w| w.as_f64());
                    Some(UiEvent::MenuLinkClicked {
                        viewport_width: viewport_width(inner_width),
                    })
                })?;
            }
        }
    }

    // Lightbox
    if wiring.photo_cards {
        for card in all(&elements.photo_cards) {
            let source = card.clone();
            listen(&card, "click", runtime, move |_| {
                Some(UiEvent::PhotoCardClicked {
                    src: source.get_attribute("data-src"),
                    caption: source.get_attribute("data-caption"),
                })
            })?;
        }
    }

    if wiring.close_control {
        if let Some(close) = first(&elements.modal_close) {
            listen(&close, "click", runtime, |_| Some(UiEvent::CloseControlClicked))?;
        }
    }

    let modal = first(&elements.modal).map(JsValue::from);
    listen(&window, "click", runtime, move |event| {
        let target = event.target().map(JsValue::from);
        Some(UiEvent::WindowClicked {
            on_backdrop: is_backdrop(target.as_ref(), modal.as_ref()),
        })
    })?;

    if let Some(document) = window.document() {
        listen(&document, "keydown", runtime, |event| {
            event
                .dyn_ref::<KeyboardEvent>()
                .map(|key_event| UiEvent::KeyDown {
                    key: key_event.key(),
                })
        })?;
    }

    // Registration form
    if wiring.form {
        let phone = first(&form.phone_input).and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if let (Some(form_el), Some(phone)) = (first(&form.form), phone) {
            listen(&form_el, "submit", runtime, move |_| {
                Some(UiEvent::FormSubmitted {
                    phone_raw: phone.value(),
                })
            })?;
        } else {
            log::warn!("Phone field {} is not an input, validation disabled", form.phone_input);
        }
    }

    Ok(())
}

/// Anchor elements inside the menu container
fn links_in(menu: &Element) -> Vec<Element> {
    let Ok(list) = menu.query_selector_all("a") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use manoor_site_core::{MemoryDom, MemoryElement, SiteConfig};

    fn shared_runtime() -> RefCell<Runtime<MemoryDom>> {
        let mut dom = MemoryDom::new();
        dom.insert("nav-menu", MemoryElement::default())
            .insert("hamburger", MemoryElement::default().with_class("menu-toggle"));
        RefCell::new(Runtime::mount(dom, SiteConfig::default()).unwrap())
    }

    #[test]
    fn test_prevent_default_follows_dispatch() {
        let runtime = shared_runtime();
        let home = dispatch_shared(&runtime, UiEvent::HomeClicked).unwrap();
        assert!(home.prevent_default);
        let toggle = dispatch_shared(&runtime, UiEvent::MenuToggleClicked).unwrap();
        assert!(!toggle.prevent_default);
        assert!(runtime.borrow().dom().has_class("nav-menu", "active"));
    }

    #[test]
    fn test_reentrant_dispatch_is_dropped() {
        let runtime = shared_runtime();
        let held = runtime.borrow();
        assert!(dispatch_shared(&runtime, UiEvent::MenuToggleClicked).is_none());
        assert!(!held.site().menu.open);
    }

    #[test]
    fn test_unreadable_width_is_unbounded() {
        assert!((viewport_width(Some(375.0)) - 375.0).abs() < f64::EPSILON);
        assert!(viewport_width(None).is_infinite());
    }

    #[test]
    fn test_backdrop_requires_the_modal_itself() {
        assert!(is_backdrop(Some(&"imageModal"), Some(&"imageModal")));
        assert!(!is_backdrop(Some(&"modalImage"), Some(&"imageModal")));
        assert!(!is_backdrop(Some(&"imageModal"), None));
        assert!(!is_backdrop(None, Some(&"imageModal")));
    }
}
