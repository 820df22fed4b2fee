//! Mobile menu messages

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuMessage {
    /// Hamburger control clicked
    Toggle,
    /// A link inside the menu was clicked
    LinkActivated { viewport_width: f64 },
}
