//! Top-level message enum

use super::{FormMessage, LightboxMessage, MenuMessage, NavigationMessage};

#[derive(Debug, Clone, PartialEq)]
pub enum SiteMessage {
    Navigation(NavigationMessage),
    Menu(MenuMessage),
    Lightbox(LightboxMessage),
    Form(FormMessage),

    /// Nothing to do (ignored events)
    Noop,
}
