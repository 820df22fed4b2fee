//! Navigation messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationMessage {
    /// Reveal one content section under the given title
    ShowSection { section_id: String, title: String },
    /// Back to the gallery
    Home,
}
