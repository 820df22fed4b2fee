//! Lightbox against the emulated page

mod common;

use common::{full_page, mount};
use manoor_site_core::{Display, MemoryDom, MemoryElement, Overflow, Runtime, UiEvent};

fn open_card(runtime: &mut Runtime<MemoryDom>, card: &str) {
    let (src, caption) = {
        let element = runtime.dom().element(card);
        (
            element.and_then(|el| el.attribute("data-src")).map(str::to_string),
            element
                .and_then(|el| el.attribute("data-caption"))
                .map(str::to_string),
        )
    };
    runtime.dispatch(UiEvent::PhotoCardClicked { src, caption });
}

fn assert_closed(dom: &MemoryDom) {
    assert_eq!(dom.display_of("imageModal"), Some(Display::None));
    assert_eq!(dom.body_overflow, Some(Overflow::Auto));
}

#[test]
fn test_open_populates_modal_and_locks_scroll() {
    let mut runtime = mount(full_page());
    assert!(runtime.wiring().photo_cards);
    open_card(&mut runtime, "card-1");

    let dom = runtime.dom();
    assert_eq!(dom.display_of("imageModal"), Some(Display::Flex));
    assert_eq!(
        dom.element("modalImage").and_then(|el| el.attribute("src")),
        Some("a.jpg")
    );
    assert_eq!(dom.text_of("modalCaption"), Some("Room A"));
    assert_eq!(dom.body_overflow, Some(Overflow::Hidden));
}

#[test]
fn test_reopen_replaces_photo() {
    let mut runtime = mount(full_page());
    open_card(&mut runtime, "card-1");
    open_card(&mut runtime, "card-2");

    let dom = runtime.dom();
    assert_eq!(
        dom.element("modalImage").and_then(|el| el.attribute("src")),
        Some("b.jpg")
    );
    assert_eq!(dom.text_of("modalCaption"), Some("Room B"));
}

#[test]
fn test_close_control() {
    let mut runtime = mount(full_page());
    open_card(&mut runtime, "card-1");
    runtime.dispatch(UiEvent::CloseControlClicked);
    assert_closed(runtime.dom());
    assert!(!runtime.site().lightbox.is_open());
}

#[test]
fn test_backdrop_click() {
    let mut runtime = mount(full_page());
    open_card(&mut runtime, "card-1");

    // Click on the image itself bubbles to the window but does not close
    runtime.dispatch(UiEvent::WindowClicked { on_backdrop: false });
    assert_eq!(runtime.dom().display_of("imageModal"), Some(Display::Flex));

    runtime.dispatch(UiEvent::WindowClicked { on_backdrop: true });
    assert_closed(runtime.dom());
}

#[test]
fn test_escape_while_open() {
    let mut runtime = mount(full_page());
    open_card(&mut runtime, "card-1");
    runtime.dispatch(UiEvent::KeyDown {
        key: "Escape".into(),
    });
    assert_closed(runtime.dom());
}

#[test]
fn test_escape_while_closed_writes_nothing() {
    let mut runtime = mount(full_page());
    runtime.dispatch(UiEvent::KeyDown {
        key: "Escape".into(),
    });
    assert_eq!(runtime.dom().display_of("imageModal"), None);
    assert_eq!(runtime.dom().body_overflow, None);
}

#[test]
fn test_no_cards_no_open_listeners() {
    let mut page = full_page();
    page.remove("card-1");
    page.remove("card-2");
    let runtime = mount(page);
    assert!(!runtime.wiring().photo_cards);
    assert!(runtime.wiring().close_control);
}

#[test]
fn test_no_modal_ignores_global_listeners() {
    let mut page = full_page();
    page.remove("imageModal");
    let mut runtime = mount(page);
    assert!(!runtime.wiring().photo_cards);
    assert!(!runtime.wiring().close_control);

    open_card(&mut runtime, "card-1");
    runtime.dispatch(UiEvent::WindowClicked { on_backdrop: true });
    runtime.dispatch(UiEvent::KeyDown {
        key: "Escape".into(),
    });
    assert_eq!(runtime.dom().body_overflow, None);
}

#[test]
fn test_missing_caption_element_still_opens() {
    let mut page = full_page();
    page.remove("modalCaption");
    let mut runtime = mount(page);
    open_card(&mut runtime, "card-2");

    let dom = runtime.dom();
    assert_eq!(dom.display_of("imageModal"), Some(Display::Flex));
    assert_eq!(dom.body_overflow, Some(Overflow::Hidden));
}

#[test]
fn test_escape_closes_modal_rendered_open() {
    let mut page = full_page();
    page.insert(
        "imageModal",
        MemoryElement {
            display: Some(Display::Flex),
            ..MemoryElement::default()
        },
    );
    page.insert(
        "modalImage",
        MemoryElement::default().with_attribute("src", "hall.jpg"),
    );
    let mut runtime = mount(page);
    assert!(runtime.site().lightbox.is_open());

    runtime.dispatch(UiEvent::KeyDown {
        key: "Escape".into(),
    });
    assert_closed(runtime.dom());
}

#[test]
fn test_hidden_modal_markup_starts_closed() {
    let mut page = full_page();
    page.insert(
        "imageModal",
        MemoryElement {
            display: Some(Display::None),
            ..MemoryElement::default()
        },
    );
    let runtime = mount(page);
    assert!(!runtime.site().lightbox.is_open());
}
