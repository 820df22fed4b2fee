//! Content section and title state

/// Which content block is on screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectionView {
    /// Nothing written yet, the server-rendered markup decides
    #[default]
    Markup,
    /// Default gallery view (home)
    Gallery,
    /// Exactly one content section is visible
    Section(String),
    /// Navigation targeted an id absent from the page: every section and the
    /// gallery are hidden, nothing is shown in their place
    Unresolved(String),
}

impl SectionView {
    pub fn is_gallery(&self) -> bool {
        matches!(self, Self::Gallery)
    }
}

/// Shared page title
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TitleState {
    #[default]
    Markup,
    /// Hidden, keeping whatever text it last had
    Hidden(Option<String>),
    Shown(String),
}

impl TitleState {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Markup | Self::Hidden(None) => None,
            Self::Hidden(Some(text)) | Self::Shown(text) => Some(text),
        }
    }

    /// Hide without forgetting the text
    #[must_use]
    pub fn hidden(&self) -> Self {
        Self::Hidden(self.text().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiding_keeps_text() {
        let title = TitleState::Shown("Contact".into());
        let hidden = title.hidden();
        assert_eq!(hidden, TitleState::Hidden(Some("Contact".into())));
        assert_eq!(hidden.text(), Some("Contact"));
        assert_eq!(TitleState::Markup.hidden(), TitleState::Hidden(None));
    }
}
