//! Page runtime
//!
//! Mounting resolves, once, which page elements exist and derives the
//! [`Wiring`] plan: a listener is only installed for a feature whose elements
//! are all present. After that every browser event goes through
//! [`Runtime::dispatch`]: event → message → update → render → apply.

use crate::config::SiteConfig;
use crate::dom::{Display, Dom};
use crate::error::SiteResult;
use crate::event::{handle_event, UiEvent};
use crate::locator::Locator;
use crate::model::Site;
use crate::update::update;
use crate::view;

/// Listeners to install, decided at mount
///
/// The window click and document keydown listeners are not listed: they are
/// always installed and guarded in the event layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wiring {
    /// Section control ids present in the page
    pub nav_controls: Vec<String>,
    pub home_control: bool,
    /// Toggle and menu container both present
    pub menu: bool,
    /// Photo cards, modal and modal image present
    pub photo_cards: bool,
    pub close_control: bool,
    /// Form and phone input present
    pub form: bool,
}

impl Wiring {
    fn resolve<D: Dom>(dom: &D, config: &SiteConfig) -> Self {
        let elements = &config.elements;
        let modal = dom.exists(&elements.modal) && dom.exists(&elements.modal_image);

        Self {
            nav_controls: config
                .sections
                .iter()
                .filter(|link| dom.exists(&Locator::id(link.control_id.as_str())))
                .map(|link| link.control_id.clone())
                .collect(),
            home_control: dom.exists(&elements.home_control),
            menu: dom.exists(&elements.menu_toggle) && dom.exists(&elements.nav_menu),
            photo_cards: modal && dom.exists(&elements.photo_cards),
            close_control: modal && dom.exists(&elements.modal_close),
            form: dom.exists(&config.form.form) && dom.exists(&config.form.phone_input),
        }
    }
}

/// What the listener must do with the browser event after dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub prevent_default: bool,
}

/// Interaction layer bound to one document
pub struct Runtime<D: Dom> {
    dom: D,
    site: Site,
    config: SiteConfig,
    wiring: Wiring,
}

impl<D: Dom> Runtime<D> {
    /// Validate the configuration and resolve the page
    pub fn mount(dom: D, config: SiteConfig) -> SiteResult<Self> {
        config.validate()?;

        let elements = &config.elements;
        let known_sections = config
            .sections
            .iter()
            .filter(|link| dom.exists(&Locator::id(link.section_id.as_str())))
            .map(|link| link.section_id.clone());
        let mut site = Site::new(
            known_sections,
            dom.exists(&elements.modal) && dom.exists(&elements.modal_image),
            dom.exists(&elements.modal_caption),
        );

        // The page may already be rendered with the menu or the modal open
        site.menu.open = dom.class_present(&elements.nav_menu, &config.menu.active_class);
        if site.modal_present && dom.inline_display(&elements.modal) == Some(Display::Flex) {
            site.lightbox.open(
                dom.attribute_of(&elements.modal_image, "src").unwrap_or_default(),
                dom.text_content(&elements.modal_caption).unwrap_or_default(),
            );
        }
        let wiring = Wiring::resolve(&dom, &config);

        log::info!(
            "Site mounted: {} nav control(s), home={}, menu={}, lightbox={}, form={}",
            wiring.nav_controls.len(),
            wiring.home_control,
            wiring.menu,
            wiring.photo_cards,
            wiring.form
        );
        log::debug!(
            "Initial state: menu open = {}, lightbox open = {}",
            site.menu.open,
            site.lightbox.is_open()
        );

        Ok(Self {
            dom,
            site,
            config,
            wiring,
        })
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Process one browser event
    ///
    /// A failing operation is logged and skipped; the remaining operations still run.
    pub fn dispatch(&mut self, event: UiEvent) -> Dispatch {
        let msg = handle_event(event, &self.site, &self.config);
        let outcome = update(&mut self.site, msg, &self.config);

        for op in view::frame(&self.site, &outcome, &self.config) {
            if let Err(err) = self.dom.apply(&op) {
                if err.is_expected() {
                    log::warn!("Skipped {op:?}: {err}");
                } else {
                    log::error!("Failed to apply {op:?}: {err}");
                }
            }
        }

        Dispatch {
            prevent_default: outcome.prevent_default,
        }
    }
}
