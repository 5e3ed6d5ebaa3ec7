use log::LevelFilter;
use shared::Language;

#[cfg(debug_assertions)]
const DEFAULT_API_URL: &str = "http://localhost:5001";
#[cfg(not(debug_assertions))]
const DEFAULT_API_URL: &str = "https://api.careconnect.ca";

/// Build-time settings, read from `CARECONNECT_API_URL` and `CARECONNECT_LOG`
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub log_level: LevelFilter,
    pub default_language: Language,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_values(option_env!("CARECONNECT_API_URL"), option_env!("CARECONNECT_LOG"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_url,
            log_level,
            default_language: Language::En,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.default_language, Language::En);
    }

    #[wasm_bindgen_test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://staging.careconnect.ca/"), Some("debug"));
        assert_eq!(config.api_url, "https://staging.careconnect.ca");
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
