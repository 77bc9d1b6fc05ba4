use leptos::logging::warn;
use serde::Deserialize;

use crate::errors::ConfigError;

const SITE_CONFIG: &str = include_str!("../config/site.json");

/// Site-wide settings shared by every component through Leptos context.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    /// Storage key holding the JSON array of reviews.
    pub reviews_key: String,
    pub font_key: String,
    pub contrast_key: String,
    /// Scroll offset (px) past which the navbar gets the `scrolled` class.
    pub navbar_scrolled_offset: f64,
    /// Scroll offset (px) past which the scroll-to-top buttons appear.
    pub scroll_top_offset: f64,
    /// Height of the fixed navbar, subtracted from anchor targets.
    pub anchor_offset: i32,
    pub notice_duration_ms: u32,
    pub date_format: String,
    pub vlibras_script_url: String,
    pub vlibras_app_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Tech Cursos".into(),
            reviews_key: "courseReviews".into(),
            font_key: "fonte".into(),
            contrast_key: "contraste".into(),
            navbar_scrolled_offset: 100.0,
            scroll_top_offset: 300.0,
            anchor_offset: 80,
            notice_duration_ms: 3000,
            date_format: "%d/%m/%Y".into(),
            vlibras_script_url: "https://vlibras.gov.br/app/vlibras-plugin.js".into(),
            vlibras_app_url: "https://vlibras.gov.br/app".into(),
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads the embedded configuration, falling back to the defaults.
    pub fn load() -> Self {
        Self::parse(SITE_CONFIG).unwrap_or_else(|e| {
            warn!("[CONFIG] {}; using defaults", e);
            Self::default()
        })
    }
}

/// Reads the configuration provided by `App`, or the defaults outside of it.
pub fn use_site_config() -> SiteConfig {
    leptos::use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = SiteConfig::parse(SITE_CONFIG).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = SiteConfig::parse(r#"{"reviews_key": "otherReviews"}"#).unwrap();
        assert_eq!(config.reviews_key, "otherReviews");
        assert_eq!(config.notice_duration_ms, 3000);
        assert_eq!(config.anchor_offset, 80);
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(SiteConfig::parse("{ not json").is_err());
    }
}
