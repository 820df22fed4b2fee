//! Site aggregate state

use std::collections::BTreeSet;

use super::{LightboxState, MenuState, SectionView, TitleState};

/// Everything the interaction layer knows about the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Site {
    /// Visible content block
    pub view: SectionView,
    /// Shared title above the content
    pub title: TitleState,
    /// Home anchor shown (`flex`) after the first navigation
    pub anchor_shown: bool,
    pub menu: MenuState,
    pub lightbox: LightboxState,

    // === resolved at mount ===
    /// Section ids that exist in the page
    pub known_sections: BTreeSet<String>,
    /// Modal container and image both exist
    pub modal_present: bool,
    /// Modal caption element exists
    pub caption_present: bool,
}

impl Site {
    pub fn new(
        known_sections: impl IntoIterator<Item = String>,
        modal_present: bool,
        caption_present: bool,
    ) -> Self {
        Self {
            known_sections: known_sections.into_iter().collect(),
            modal_present,
            caption_present,
            ..Self::default()
        }
    }

    pub fn section_exists(&self, section_id: &str) -> bool {
        self.known_sections.contains(section_id)
    }
}
