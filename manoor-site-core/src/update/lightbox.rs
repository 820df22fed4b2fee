//! Lightbox update logic

use super::Outcome;
use crate::message::LightboxMessage;
use crate::model::Site;

pub fn update(site: &mut Site, msg: LightboxMessage, outcome: &mut Outcome) {
    match msg {
        LightboxMessage::Open { src, caption } => {
            log::debug!("Opening lightbox on {src}");
            site.lightbox.open(src, caption);
            outcome.dirty.lightbox = true;
        }

        // Close control and backdrop always write, even if already closed
        LightboxMessage::CloseControl | LightboxMessage::Backdrop => {
            site.lightbox.close();
            outcome.dirty.lightbox = true;
        }

        LightboxMessage::Escape => {
            outcome.dirty.lightbox = site.lightbox.close();
        }
    }
}
