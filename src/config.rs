//! Runtime Configuration
//!
//! Resolved once at start-up and shared through context.
//! Build-time `NOTES_API_BASE` / `NOTES_LOG` override the defaults.

use leptos::prelude::*;
use log::LevelFilter;

/// Used when neither an override nor a page origin is available
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Origin the `/api/...` paths are joined onto, without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Config {
    /// Read overrides baked in at build time, falling back to the page origin
    pub fn from_env() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self {
            api_base: resolve_api_base(option_env!("NOTES_API_BASE"), origin.as_deref()),
            log_level: parse_log_level(option_env!("NOTES_LOG")),
        }
    }

    /// Absolute URL for an API path such as `/api/notes`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

pub fn resolve_api_base(override_base: Option<&str>, origin: Option<&str>) -> String {
    [override_base, origin]
        .into_iter()
        .flatten()
        .map(|s| s.trim().trim_end_matches('/'))
        // file:// pages report the opaque origin "null"
        .find(|s| !s.is_empty() && *s != "null")
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}

pub fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}

/// Get the config from context
pub fn use_config() -> Config {
    expect_context::<Config>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        assert_eq!(
            resolve_api_base(Some("https://notes.example/"), Some("http://127.0.0.1:8080")),
            "https://notes.example"
        );
    }

    #[test]
    fn test_origin_fallback() {
        assert_eq!(resolve_api_base(None, Some("http://127.0.0.1:8080")), "http://127.0.0.1:8080");
        assert_eq!(resolve_api_base(Some("  "), Some("http://a")), "http://a");
        assert_eq!(resolve_api_base(None, Some("null")), DEFAULT_API_BASE);
        assert_eq!(resolve_api_base(None, None), DEFAULT_API_BASE);
    }

    #[test]
    fn test_url_join() {
        let config = Config { api_base: "http://a".into(), log_level: LevelFilter::Info };
        assert_eq!(config.url("/api/notes"), "http://a/api/notes");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_log_level(None), LevelFilter::Info);
    }
}
