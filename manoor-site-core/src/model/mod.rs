//! Model layer: state definitions
//!
//! The model is the single source of truth for what this layer has written to
//! the page. It holds plain data only; every change goes through the update
//! layer, and the view layer reads it back to produce DOM operations.
//!
//! - [`Site`]: the aggregate, one per page
//! - [`SectionView`] / [`TitleState`]: which content block and title are on screen
//! - [`MenuState`]: mobile menu open flag
//! - [`LightboxState`]: image modal, `Closed` or `Open { src, caption }`
//!
//! Sections and title start in a `Markup` state meaning "not written yet", so
//! the server-rendered defaults stay untouched until the first interaction.
//! Menu and lightbox are read from the page at mount.

mod lightbox;
mod menu;
mod section;
mod site;

pub use lightbox::LightboxState;
pub use menu::MenuState;
pub use section::{SectionView, TitleState};
pub use site::Site;
