//! Event handler

use crate::config::SiteConfig;
use crate::message::{FormMessage, LightboxMessage, MenuMessage, NavigationMessage, SiteMessage};
use crate::model::Site;

/// `KeyboardEvent.key` value that closes the lightbox
pub const ESCAPE_KEY: &str = "Escape";

/// A browser event, as observed by one of the installed listeners
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// One of the configured section controls was clicked
    NavControlClicked { control_id: String },
    HomeClicked,
    MenuToggleClicked,
    MenuLinkClicked { viewport_width: f64 },
    /// A photo card was clicked; attributes are `None` when absent
    PhotoCardClicked {
        src: Option<String>,
        caption: Option<String>,
    },
    CloseControlClicked,
    /// Any click on the window; `on_backdrop` when its target is the modal container
    WindowClicked { on_backdrop: bool },
    KeyDown { key: String },
    FormSubmitted { phone_raw: String },
}

/// Translate an event into a message
pub fn handle_event(event: UiEvent, site: &Site, config: &SiteConfig) -> SiteMessage {
    match event {
        UiEvent::NavControlClicked { control_id } => {
            let Some(link) = config.section_for_control(&control_id) else {
                log::debug!("Click on unknown navigation control {control_id}");
                return SiteMessage::Noop;
            };
            SiteMessage::Navigation(NavigationMessage::ShowSection {
                section_id: link.section_id.clone(),
                title: link.title.clone(),
            })
        }

        UiEvent::HomeClicked => SiteMessage::Navigation(NavigationMessage::Home),

        UiEvent::MenuToggleClicked => SiteMessage::Menu(MenuMessage::Toggle),

        UiEvent::MenuLinkClicked { viewport_width } => {
            SiteMessage::Menu(MenuMessage::LinkActivated { viewport_width })
        }

        UiEvent::PhotoCardClicked { src, caption } => {
            if !site.modal_present {
                return SiteMessage::Noop;
            }
            SiteMessage::Lightbox(LightboxMessage::Open {
                src: src.unwrap_or_default(),
                caption: caption.unwrap_or_default(),
            })
        }

        UiEvent::CloseControlClicked if site.modal_present => {
            SiteMessage::Lightbox(LightboxMessage::CloseControl)
        }

        UiEvent::WindowClicked { on_backdrop: true } if site.modal_present => {
            SiteMessage::Lightbox(LightboxMessage::Backdrop)
        }

        UiEvent::KeyDown { key } if key == ESCAPE_KEY && site.lightbox.is_open() => {
            SiteMessage::Lightbox(LightboxMessage::Escape)
        }

        UiEvent::FormSubmitted { phone_raw } => SiteMessage::Form(FormMessage::Submit { phone_raw }),

        UiEvent::CloseControlClicked | UiEvent::WindowClicked { .. } | UiEvent::KeyDown { .. } => {
            SiteMessage::Noop
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::model::LightboxState;

    fn site_with_modal() -> Site {
        Site::new(["contact".to_string()], true, true)
    }

    #[test]
    fn test_known_control_maps_to_section() {
        let msg = handle_event(
            UiEvent::NavControlClicked {
                control_id: "toggleSommaire".into(),
            },
            &site_with_modal(),
            &SiteConfig::default(),
        );
        assert_eq!(
            msg,
            SiteMessage::Navigation(NavigationMessage::ShowSection {
                section_id: "sommaire-content".into(),
                title: "Sommaire de Présentation".into(),
            })
        );
    }

    #[test]
    fn test_unknown_control_is_noop() {
        let msg = handle_event(
            UiEvent::NavControlClicked {
                control_id: "navBlog".into(),
            },
            &site_with_modal(),
            &SiteConfig::default(),
        );
        assert_eq!(msg, SiteMessage::Noop);
    }

    #[test]
    fn test_photo_card_without_modal_is_ignored() {
        let site = Site::new(Vec::new(), false, false);
        let msg = handle_event(
            UiEvent::PhotoCardClicked {
                src: Some("a.jpg".into()),
                caption: None,
            },
            &site,
            &SiteConfig::default(),
        );
        assert_eq!(msg, SiteMessage::Noop);
    }

    #[test]
    fn test_missing_attributes_become_empty() {
        let msg = handle_event(
            UiEvent::PhotoCardClicked {
                src: None,
                caption: None,
            },
            &site_with_modal(),
            &SiteConfig::default(),
        );
        assert_eq!(
            msg,
            SiteMessage::Lightbox(LightboxMessage::Open {
                src: String::new(),
                caption: String::new(),
            })
        );
    }

    #[test]
    fn test_escape_only_while_open() {
        let config = SiteConfig::default();
        let mut site = site_with_modal();
        let escape = || UiEvent::KeyDown {
            key: ESCAPE_KEY.into(),
        };

        assert_eq!(handle_event(escape(), &site, &config), SiteMessage::Noop);

        site.lightbox = LightboxState::Open {
            src: "a.jpg".into(),
            caption: "Room A".into(),
        };
        assert_eq!(
            handle_event(escape(), &site, &config),
            SiteMessage::Lightbox(LightboxMessage::Escape)
        );
        assert_eq!(
            handle_event(UiEvent::KeyDown { key: "Enter".into() }, &site, &config),
            SiteMessage::Noop
        );
    }

    #[test]
    fn test_window_click_off_backdrop_is_noop() {
        let config = SiteConfig::default();
        let site = site_with_modal();
        assert_eq!(
            handle_event(UiEvent::WindowClicked { on_backdrop: false }, &site, &config),
            SiteMessage::Noop
        );
        assert_eq!(
            handle_event(UiEvent::WindowClicked { on_backdrop: true }, &site, &config),
            SiteMessage::Lightbox(LightboxMessage::Backdrop)
        );
    }
}
