//! Client configuration for the users API endpoint. The base URL is resolved
//! once at start-up (CLI flag or `USERDECK_API_URL`) and shared read-only by
//! the feature clients. Configuration values are public; do not store secrets
//! here.

use url::Url;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Client configuration resolved at start-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Builds a config from an optional override, falling back to the default base URL
    /// when the override is missing or blank.
    #[must_use]
    pub fn load(api_base_url: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(value) = api_base_url.and_then(normalize_value) {
            config.api_base_url = value;
        }

        config
    }

    /// Resolves `path` against the configured base URL.
    ///
    /// # Errors
    /// Returns an error if the joined value is not an absolute URL.
    pub fn url_for(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&build_url_with_base(&self.api_base_url, path))
    }

    /// Address of the users collection endpoint.
    ///
    /// # Errors
    /// Returns an error if the configured base URL is not an absolute URL.
    pub fn users_url(&self) -> Result<Url, url::ParseError> {
        self.url_for("/users")
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, normalize_value, AppConfig, DEFAULT_API_BASE_URL};

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  http://users.internal:9000 "),
            Some("http://users.internal:9000".to_string())
        );
    }

    #[test]
    fn load_falls_back_to_default() {
        assert_eq!(AppConfig::load(None).api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(AppConfig::load(Some("  ")).api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn load_applies_override() {
        let config = AppConfig::load(Some("http://users.internal:9000"));
        assert_eq!(config.api_base_url, "http://users.internal:9000");
    }

    #[test]
    fn build_url_with_base_joins_with_single_slash() {
        assert_eq!(
            build_url_with_base("http://127.0.0.1:8000/", "/users"),
            "http://127.0.0.1:8000/users"
        );
        assert_eq!(
            build_url_with_base("http://127.0.0.1:8000", "users"),
            "http://127.0.0.1:8000/users"
        );
        assert_eq!(build_url_with_base("", "/users"), "/users");
    }

    #[test]
    fn users_url_uses_default_endpoint() {
        let url = AppConfig::default().users_url().unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/users");
    }

    #[test]
    fn users_url_keeps_base_path_prefix() {
        let config = AppConfig::load(Some("https://api.example.com/v1/"));
        let url = config.users_url().unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/users");
    }

    #[test]
    fn users_url_rejects_relative_base() {
        let config = AppConfig::load(Some("not a url"));
        assert!(config.users_url().is_err());
    }
}
