//! Site configuration
//!
//! Every field has a default matching the production markup, so an empty JSON
//! object (or no configuration at all) yields a working site. The two historic
//! script variants differ only in [`MenuClosePolicy`] and the form [`Locator`];
//! both are available as presets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::locator::Locator;
use crate::phone::MALI_PHONE_DIGITS;

/// Viewport width (px) at or below which the menu counts as mobile
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

pub const DEFAULT_PHONE_ALERT: &str = "Erreur de validation : Le numéro de téléphone doit être composé de 8 chiffres (Mali). Veuillez corriger.";

/// Complete site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub elements: ElementConfig,
    pub sections: Vec<SectionLink>,
    pub menu: MenuConfig,
    pub form: FormConfig,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

/// Locators of the statically-known page elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementConfig {
    pub title: Locator,
    pub home_anchor: Locator,
    pub gallery: Locator,
    pub content_sections: Locator,
    pub home_control: Locator,
    pub nav_menu: Locator,
    pub menu_toggle: Locator,
    pub modal: Locator,
    pub modal_image: Locator,
    pub modal_caption: Locator,
    pub modal_close: Locator,
    pub photo_cards: Locator,
}

/// A navigation control and the section it reveals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLink {
    pub control_id: String,
    pub section_id: String,
    pub title: String,
}

impl SectionLink {
    pub fn new(
        control_id: impl Into<String>,
        section_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            control_id: control_id.into(),
            section_id: section_id.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuConfig {
    /// Class toggled on the menu container
    pub active_class: String,
    pub close_policy: MenuClosePolicy,
}

/// When a click on a menu link closes the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum MenuClosePolicy {
    /// Close when the viewport is at most `max_width` pixels wide
    #[serde(rename_all = "camelCase")]
    ViewportWidth { max_width: u32 },
    /// Close whenever the menu is open, regardless of viewport
    WhenActive,
}

impl Default for MenuClosePolicy {
    fn default() -> Self {
        Self::ViewportWidth {
            max_width: MOBILE_BREAKPOINT_PX,
        }
    }
}

impl MenuClosePolicy {
    /// Decide whether a link click closes the menu
    pub fn should_close(self, menu_open: bool, viewport_width: f64) -> bool {
        match self {
            Self::ViewportWidth { max_width } => viewport_width <= f64::from(max_width),
            Self::WhenActive => menu_open,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormConfig {
    pub form: Locator,
    pub phone_input: Locator,
    pub phone_digits: usize,
    pub alert_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::viewport_variant()
    }
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            title: Locator::id("main-title"),
            home_anchor: Locator::id("home-anchor"),
            gallery: Locator::id("gallery-section"),
            content_sections: Locator::class("content-section"),
            home_control: Locator::id("navAccueil"),
            nav_menu: Locator::id("nav-menu"),
            menu_toggle: Locator::class("menu-toggle"),
            modal: Locator::id("imageModal"),
            modal_image: Locator::id("modalImage"),
            modal_caption: Locator::id("modalCaption"),
            modal_close: Locator::id("closeModal"),
            photo_cards: Locator::class("photo-card"),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            active_class: "active".to_string(),
            close_policy: MenuClosePolicy::default(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form: Locator::class("form-grid"),
            phone_input: Locator::id("telephone"),
            phone_digits: MALI_PHONE_DIGITS,
            alert_message: DEFAULT_PHONE_ALERT.to_string(),
        }
    }
}

/// Navigation table of the production site
fn default_sections() -> Vec<SectionLink> {
    vec![
        SectionLink::new(
            "navPreInscription",
            "formulaire-content",
            "Formulaire de Pré-Inscription",
        ),
        SectionLink::new(
            "toggleSommaire",
            "sommaire-content",
            "Sommaire de Présentation",
        ),
        SectionLink::new("navToggleContact", "contact", "Coordonnées du Centre"),
    ]
}

impl SiteConfig {
    /// Menu closes on narrow viewports; form located by class.
    pub fn viewport_variant() -> Self {
        Self {
            elements: ElementConfig::default(),
            sections: default_sections(),
            menu: MenuConfig::default(),
            form: FormConfig::default(),
            log_level: "warn".to_string(),
        }
    }

    /// Menu closes whenever it is open; form located by id.
    pub fn active_state_variant() -> Self {
        let mut config = Self::viewport_variant();
        config.menu.close_policy = MenuClosePolicy::WhenActive;
        config.form.form = Locator::id("inscriptionForm");
        config
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.form.phone_digits == 0 {
            return Err(SiteError::Config("phoneDigits must be positive".into()));
        }
        if self.menu.active_class.trim().is_empty() {
            return Err(SiteError::Config("menu.activeClass must not be empty".into()));
        }
        if !self.form.phone_input.is_id() {
            return Err(SiteError::Config(format!(
                "form.phoneInput must be an id locator, got {}",
                self.form.phone_input
            )));
        }

        let mut seen = HashSet::new();
        for link in &self.sections {
            if link.control_id.is_empty() || link.section_id.is_empty() {
                return Err(SiteError::Config(
                    "section links need a controlId and a sectionId".into(),
                ));
            }
            if !seen.insert(link.control_id.as_str()) {
                return Err(SiteError::Config(format!(
                    "duplicate section control: {}",
                    link.control_id
                )));
            }
        }
        if let Locator::Id(home) = &self.elements.home_control {
            if seen.contains(home.as_str()) {
                return Err(SiteError::Config(format!(
                    "home control {home} is also a section control"
                )));
            }
        }
        Ok(())
    }

    /// Parsed `log_level`, falling back to `warn` on unknown values
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level {:?}, using warn", self.log_level);
            log::LevelFilter::Warn
        })
    }

    /// Section link wired to the given control id
    pub fn section_for_control(&self, control_id: &str) -> Option<&SectionLink> {
        self.sections.iter().find(|link| link.control_id == control_id)
    }
}
