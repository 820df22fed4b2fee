//! Configuration embedded in the page
//!
//! The page may carry `<script type="application/json" id="site-config">`.
//! Without it the defaults apply; an invalid document is reported and ignored.

use manoor_site_core::SiteConfig;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load(document: &Document) -> SiteConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };

    parse_or_default(&json)
}

fn parse_or_default(json: &str) -> SiteConfig {
    if json.trim().is_empty() {
        return SiteConfig::default();
    }
    SiteConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("Ignoring #{CONFIG_ELEMENT_ID}: {err}");
        SiteConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use manoor_site_core::MenuClosePolicy;

    #[test]
    fn test_blank_and_invalid_fall_back() {
        assert_eq!(parse_or_default("  \n"), SiteConfig::default());
        assert_eq!(parse_or_default("{ not json"), SiteConfig::default());
        assert_eq!(
            parse_or_default(r#"{ "form": { "phoneDigits": 0 } }"#),
            SiteConfig::default()
        );
    }

    #[test]
    fn test_valid_document_is_used() {
        let config = parse_or_default(r#"{ "menu": { "closePolicy": { "mode": "whenActive" } } }"#);
        assert_eq!(config.menu.close_policy, MenuClosePolicy::WhenActive);
    }
}
