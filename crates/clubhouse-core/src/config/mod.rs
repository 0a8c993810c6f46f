//! Runtime configuration for the admin console.
//!
//! Values come from the environment (optionally seeded from a `.env` file by
//! the binary). Every backend request uses the same base URL and static bearer
//! credential; the per-operator identity flow lives with the identity provider.

use std::collections::HashMap;
use std::env;
use std::fmt;

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_BEARER_TOKEN: &str = "admin-bearer-token";
pub const DEFAULT_EVIDENCE_VIEWER_URL: &str =
    "https://hole-in-one-appdesign.s3.eu-west-1.amazonaws.com/index.html";

const API_URL_VAR: &str = "CLUBHOUSE_API_URL";
const BEARER_TOKEN_VAR: &str = "CLUBHOUSE_API_BEARER_TOKEN";
const EVIDENCE_VIEWER_URL_VAR: &str = "CLUBHOUSE_EVIDENCE_VIEWER_URL";
const AUTH_AUDIENCE_VAR: &str = "CLUBHOUSE_AUTH_AUDIENCE";

#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub bearer_token: String,
    pub evidence_viewer_url: String,
    pub auth_audience: Option<String>,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"[REDACTED]")
            .field("evidence_viewer_url", &self.evidence_viewer_url)
            .field("auth_audience", &self.auth_audience)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            bearer_token: DEFAULT_BEARER_TOKEN.to_string(),
            evidence_viewer_url: DEFAULT_EVIDENCE_VIEWER_URL.to_string(),
            auth_audience: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = normalize_base_url(
            &normalize_text_option(lookup(API_URL_VAR))
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        )?;
        let bearer_token = normalize_text_option(lookup(BEARER_TOKEN_VAR))
            .unwrap_or_else(|| DEFAULT_BEARER_TOKEN.to_string());
        let evidence_viewer_url = normalize_text_option(lookup(EVIDENCE_VIEWER_URL_VAR))
            .unwrap_or_else(|| DEFAULT_EVIDENCE_VIEWER_URL.to_string());
        if !is_http_url(&evidence_viewer_url) {
            return Err(Error::Config(format!(
                "{EVIDENCE_VIEWER_URL_VAR} must start with http:// or https://"
            )));
        }

        Ok(Self {
            base_url,
            bearer_token,
            evidence_viewer_url,
            auth_audience: normalize_text_option(lookup(AUTH_AUDIENCE_VAR)),
        })
    }

    /// Replaces the base URL and/or token with explicit overrides.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        bearer_token: Option<String>,
    ) -> Result<Self> {
        if let Some(url) = normalize_text_option(base_url) {
            self.base_url = normalize_base_url(&url)?;
        }
        if let Some(token) = normalize_text_option(bearer_token) {
            self.bearer_token = token;
        }
        Ok(self)
    }
}

pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(Error::Config("API base URL must not be empty".to_string()));
    }
    if !is_http_url(base) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn base_url_is_trimmed_and_validated() {
        let config =
            ApiConfig::from_lookup(lookup_from(&[(API_URL_VAR, " https://api.example.com/ ")]))
                .unwrap();
        assert_eq!(config.base_url, "https://api.example.com");

        let error = ApiConfig::from_lookup(lookup_from(&[(API_URL_VAR, "api.example.com")]))
            .unwrap_err();
        assert!(error.to_string().contains("http:// or https://"));
    }

    #[test]
    fn blank_token_falls_back_to_default() {
        let config =
            ApiConfig::from_lookup(lookup_from(&[(BEARER_TOKEN_VAR, "   ")])).unwrap();
        assert_eq!(config.bearer_token, DEFAULT_BEARER_TOKEN);
    }

    #[test]
    fn overrides_replace_environment_values() {
        let config = ApiConfig::default()
            .with_overrides(
                Some("http://127.0.0.1:9000/".to_string()),
                Some("secret".to_string()),
            )
            .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.bearer_token, "secret");
    }

    #[test]
    fn debug_redacts_token() {
        let config = ApiConfig {
            bearer_token: "very-secret".to_string(),
            ..ApiConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
