//! View layer: translate model state into DOM operations
//!
//! Only components flagged in [`Dirty`] are rendered, so markup defaults of
//! untouched components survive. Effects from the update layer are turned into
//! operations after the render pass, which keeps scrolling behind the display
//! changes it depends on.

mod lightbox;
mod menu;
mod sections;

use crate::config::SiteConfig;
use crate::dom::DomOp;
use crate::model::Site;
use crate::update::{Dirty, Effect, Outcome};

/// Render the changed components
pub fn render(site: &Site, dirty: Dirty, config: &SiteConfig) -> Vec<DomOp> {
    let mut ops = Vec::new();
    if dirty.sections {
        sections::render(site, config, &mut ops);
    }
    if dirty.menu {
        menu::render(site, config, &mut ops);
    }
    if dirty.lightbox {
        lightbox::render(site, config, &mut ops);
    }
    ops
}

/// Operations running one-shot effects
pub fn effects(effects: &[Effect], config: &SiteConfig) -> Vec<DomOp> {
    effects
        .iter()
        .map(|effect| match effect {
            Effect::ScrollToAnchor => DomOp::ScrollIntoView {
                target: config.elements.home_anchor.clone(),
            },
            Effect::ScrollWindowTop => DomOp::ScrollWindowTop,
            Effect::Alert(message) => DomOp::Alert(message.clone()),
            Effect::Focus(target) => DomOp::Focus {
                target: target.clone(),
            },
        })
        .collect()
}

/// Full operation list for an update outcome
pub fn frame(site: &Site, outcome: &Outcome, config: &SiteConfig) -> Vec<DomOp> {
    let mut ops = render(site, outcome.dirty, config);
    ops.extend(effects(&outcome.effects, config));
    ops
}
