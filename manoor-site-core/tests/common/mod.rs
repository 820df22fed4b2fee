//! Shared test tools: the production page rebuilt in a `MemoryDom`

#![allow(dead_code, clippy::panic)]

use manoor_site_core::{MemoryDom, MemoryElement, Runtime, SiteConfig};

pub const SECTION_IDS: [&str; 3] = ["formulaire-content", "sommaire-content", "contact"];

/// Page with every element the site script expects
pub fn full_page() -> MemoryDom {
    let mut dom = MemoryDom::new();
    dom.insert("main-title", MemoryElement::default())
        .insert("home-anchor", MemoryElement::default())
        .insert("gallery-section", MemoryElement::default())
        .insert("navAccueil", MemoryElement::default())
        .insert("navPreInscription", MemoryElement::default())
        .insert("toggleSommaire", MemoryElement::default())
        .insert("navToggleContact", MemoryElement::default())
        .insert("nav-menu", MemoryElement::default())
        .insert("hamburger", MemoryElement::default().with_class("menu-toggle"))
        .insert("imageModal", MemoryElement::default())
        .insert("modalImage", MemoryElement::default())
        .insert("modalCaption", MemoryElement::default())
        .insert("closeModal", MemoryElement::default())
        .insert(
            "card-1",
            MemoryElement::default()
                .with_class("photo-card")
                .with_attribute("data-src", "a.jpg")
                .with_attribute("data-caption", "Room A"),
        )
        .insert(
            "card-2",
            MemoryElement::default()
                .with_class("photo-card")
                .with_attribute("data-src", "b.jpg")
                .with_attribute("data-caption", "Room B"),
        )
        .insert("registration", MemoryElement::default().with_class("form-grid"))
        .insert("telephone", MemoryElement::default());

    for id in SECTION_IDS {
        dom.insert(id, MemoryElement::default().with_class("content-section"));
    }
    dom
}

/// Page with only the navigation markup (no menu, lightbox or form)
pub fn bare_page() -> MemoryDom {
    let mut dom = MemoryDom::new();
    dom.insert("main-title", MemoryElement::default())
        .insert("home-anchor", MemoryElement::default())
        .insert("gallery-section", MemoryElement::default())
        .insert("contact", MemoryElement::default().with_class("content-section"));
    dom
}

pub fn mount(dom: MemoryDom) -> Runtime<MemoryDom> {
    mount_with(dom, SiteConfig::default())
}

pub fn mount_with(dom: MemoryDom, config: SiteConfig) -> Runtime<MemoryDom> {
    match Runtime::mount(dom, config) {
        Ok(runtime) => runtime,
        Err(err) => panic!("mount failed: {err}"),
    }
}
