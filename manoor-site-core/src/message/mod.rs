//! Message layer: what happened, in terms the update layer understands
//!
//! The event layer translates browser observations into a [`SiteMessage`];
//! the update layer consumes it. Each component has its own sub-message.

mod form;
mod lightbox;
mod menu;
mod navigation;
mod site;

pub use form::FormMessage;
pub use lightbox::LightboxMessage;
pub use menu::MenuMessage;
pub use navigation::NavigationMessage;
pub use site::SiteMessage;
