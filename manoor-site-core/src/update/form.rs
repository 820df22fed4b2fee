//! Registration form update logic

use super::{Effect, Outcome};
use crate::config::SiteConfig;
use crate::message::FormMessage;
use crate::phone::PhoneNumber;

pub fn update(msg: FormMessage, config: &SiteConfig, outcome: &mut Outcome) {
    match msg {
        FormMessage::Submit { phone_raw } => {
            match PhoneNumber::parse(&phone_raw, config.form.phone_digits) {
                // Native submission proceeds
                Ok(phone) => log::debug!("Phone {phone} accepted, submitting"),
                Err(err) => {
                    log::debug!("Submission blocked: {err}");
                    outcome.prevent_default = true;
                    outcome
                        .effects
                        .push(Effect::Alert(config.form.alert_message.clone()));
                    outcome
                        .effects
                        .push(Effect::Focus(config.form.phone_input.clone()));
                }
            }
        }
    }
}
