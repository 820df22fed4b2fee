//! Mobile menu update logic

use super::Outcome;
use crate::config::SiteConfig;
use crate::message::MenuMessage;
use crate::model::Site;

pub fn update(site: &mut Site, msg: MenuMessage, config: &SiteConfig, outcome: &mut Outcome) {
    match msg {
        MenuMessage::Toggle => {
            site.menu.toggle();
            log::debug!("Menu toggled, open = {}", site.menu.open);
            outcome.dirty.menu = true;
        }

        MenuMessage::LinkActivated { viewport_width } => {
            if config
                .menu
                .close_policy
                .should_close(site.menu.open, viewport_width)
            {
                site.menu.close();
                outcome.dirty.menu = true;
            }
        }
    }
}
