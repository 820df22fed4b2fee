//! Manoor Site Core Library
//!
//! Interaction layer of the Manoor registration site, independent of any browser:
//! - section navigation with a shared title and a home (gallery) view
//! - the mobile hamburger menu
//! - the photo lightbox
//! - the phone number gate in front of the registration form
//!
//! The DOM is reached only through the [`Dom`] trait. `manoor-site-web` implements
//! it over `web-sys`; [`MemoryDom`] implements it in memory for tests.
//!
//! Layers follow the Elm architecture: [`event`] turns browser observations into
//! [`message`]s, [`update`] changes the [`model`], [`view`] renders the changed
//! parts as [`DomOp`]s, and [`Runtime`] ties them to a document.

pub mod config;
pub mod dom;
pub mod error;
pub mod event;
pub mod locator;
pub mod message;
pub mod model;
pub mod phone;
pub mod runtime;
pub mod update;
pub mod view;

// Re-export common types
pub use config::{MenuClosePolicy, SectionLink, SiteConfig};
pub use dom::{Display, Dom, DomOp, MemoryDom, MemoryElement, Overflow};
pub use error::{SiteError, SiteResult};
pub use event::UiEvent;
pub use locator::Locator;
pub use phone::{PhoneError, PhoneNumber};
pub use runtime::{Dispatch, Runtime, Wiring};
