//! Mobile menu class

use crate::config::SiteConfig;
use crate::dom::DomOp;
use crate::model::Site;

pub fn render(site: &Site, config: &SiteConfig, ops: &mut Vec<DomOp>) {
    ops.push(DomOp::SetClass {
        target: config.elements.nav_menu.clone(),
        class: config.menu.active_class.clone(),
        present: site.menu.open,
    });
}
