//! Event layer: browser observations in, messages out
//!
//! [`UiEvent`] is what a listener saw, stripped of any browser type: which
//! control was clicked, the viewport width at the time, the photo card's data
//! attributes, the pressed key. [`handle_event`] turns it into a
//! [`SiteMessage`](crate::message::SiteMessage), applying the guards the page
//! relies on (modal present, modal open, control known).

mod handler;

pub use handler::{handle_event, UiEvent, ESCAPE_KEY};
