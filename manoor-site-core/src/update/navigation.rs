//! Navigation update logic

use super::{Effect, Outcome};
use crate::message::NavigationMessage;
use crate::model::{SectionView, Site, TitleState};

/// Process navigation messages
pub fn update(site: &mut Site, msg: NavigationMessage, outcome: &mut Outcome) {
    // Both transitions replace a link's default navigation
    outcome.prevent_default = true;
    outcome.dirty.sections = true;
    site.anchor_shown = true;

    match msg {
        NavigationMessage::ShowSection { section_id, title } => {
            if site.section_exists(&section_id) {
                log::debug!("Showing section {section_id}");
                site.view = SectionView::Section(section_id);
                site.title = TitleState::Shown(title);
                outcome.effects.push(Effect::ScrollToAnchor);
            } else {
                // Title and scroll position are left alone
                log::warn!("Navigation target #{section_id} not found, hiding all sections");
                site.view = SectionView::Unresolved(section_id);
            }
        }

        NavigationMessage::Home => {
            log::debug!("Back to gallery");
            site.view = SectionView::Gallery;
            site.title = site.title.hidden();
            outcome.effects.push(Effect::ScrollWindowTop);
        }
    }
}
