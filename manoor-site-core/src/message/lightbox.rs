//! Lightbox messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxMessage {
    /// Photo card clicked, carrying its `data-src` / `data-caption`
    Open { src: String, caption: String },
    /// Close control clicked
    CloseControl,
    /// Click landed on the modal backdrop itself
    Backdrop,
    /// Escape pressed
    Escape,
}
