//! Update layer: the only place that mutates the [`Site`] model
//!
//! [`update`] consumes one message and reports back through an [`Outcome`]:
//! which components now need rendering, which one-shot effects to run
//! (scrolls, the validation alert, focus), and whether the browser's default
//! action for the triggering event must be cancelled.

mod form;
mod lightbox;
mod menu;
mod navigation;

use crate::config::SiteConfig;
use crate::locator::Locator;
use crate::message::SiteMessage;
use crate::model::Site;

/// Components whose state changed and must be re-rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dirty {
    pub sections: bool,
    pub menu: bool,
    pub lightbox: bool,
}

impl Dirty {
    pub fn any(self) -> bool {
        self.sections || self.menu || self.lightbox
    }
}

/// One-shot browser effect, run after rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Bring the home anchor to the top of the viewport
    ScrollToAnchor,
    ScrollWindowTop,
    Alert(String),
    Focus(Locator),
}

/// Result of processing one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub dirty: Dirty,
    pub effects: Vec<Effect>,
    pub prevent_default: bool,
}

/// Process a message, updating state
pub fn update(site: &mut Site, msg: SiteMessage, config: &SiteConfig) -> Outcome {
    let mut outcome = Outcome::default();

    match msg {
        SiteMessage::Navigation(nav_msg) => navigation::update(site, nav_msg, &mut outcome),
        SiteMessage::Menu(menu_msg) => menu::update(site, menu_msg, config, &mut outcome),
        SiteMessage::Lightbox(lightbox_msg) => lightbox::update(site, lightbox_msg, &mut outcome),
        SiteMessage::Form(form_msg) => form::update(form_msg, config, &mut outcome),
        SiteMessage::Noop => {}
    }

    outcome
}
