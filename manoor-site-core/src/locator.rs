//! Element addressing
//!
//! A [`Locator`] names either a single element by id or every element sharing a
//! class. In configuration it is written the CSS way: `#nav-menu`, `.photo-card`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locator {
    Id(String),
    Class(String),
}

impl Locator {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    pub fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }

    /// Selector string accepted by `querySelector`
    pub fn selector(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}

impl FromStr for Locator {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (ctor, rest): (fn(String) -> Self, &str) = if let Some(rest) = s.strip_prefix('#') {
            (Self::Id, rest)
        } else if let Some(rest) = s.strip_prefix('.') {
            (Self::Class, rest)
        } else {
            return Err(SiteError::Config(format!(
                "locator must start with '#' or '.': {s:?}"
            )));
        };

        if rest.is_empty() || rest.chars().any(|c| c.is_whitespace() || c == '#' || c == '.') {
            return Err(SiteError::Config(format!("invalid locator: {s:?}")));
        }
        Ok(ctor(rest.to_string()))
    }
}

impl TryFrom<String> for Locator {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locator> for String {
    fn from(locator: Locator) -> Self {
        locator.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_and_class() {
        assert_eq!("#nav-menu".parse::<Locator>().unwrap(), Locator::id("nav-menu"));
        assert_eq!(
            ".form-grid".parse::<Locator>().unwrap(),
            Locator::class("form-grid")
        );
    }

    #[test]
    fn test_parse_rejects_bare_and_compound() {
        assert!("nav-menu".parse::<Locator>().is_err());
        assert!("#".parse::<Locator>().is_err());
        assert!("#a .b".parse::<Locator>().is_err());
        assert!(".a.b".parse::<Locator>().is_err());
    }

    #[test]
    fn test_display_matches_selector() {
        let locator = Locator::class("photo-card");
        assert_eq!(locator.selector(), ".photo-card");
        assert!(!locator.is_id());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Locator::id("telephone")).unwrap();
        assert_eq!(json, "\"#telephone\"");
        let back: Locator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locator::id("telephone"));
        assert!(serde_json::from_str::<Locator>("\"telephone\"").is_err());
    }
}
