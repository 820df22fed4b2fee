//! Lightbox (image modal) state

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { src: String, caption: String },
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Open on a photo, replacing whatever was shown before
    pub fn open(&mut self, src: impl Into<String>, caption: impl Into<String>) {
        *self = Self::Open {
            src: src.into(),
            caption: caption.into(),
        };
    }

    /// Close, returning whether it was open
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }

    /// Body scroll is locked while a photo is shown
    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }
}
