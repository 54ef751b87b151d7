use std::time::Duration;

/// Backend used when `TASKIFY_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://sp-taskify-api.vercel.app/4-1";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration. Built once at startup and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every resource path is joined onto, e.g.
    /// `https://sp-taskify-api.vercel.app/4-1`.
    pub base_url: String,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Sent as `Authorization: Bearer <token>` when set.
    pub access_token: Option<String>,
}

/// A configuration value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                                  |
    /// |--------------------------------|------------------------------------------|
    /// | `TASKIFY_API_URL`              | `https://sp-taskify-api.vercel.app/4-1`  |
    /// | `TASKIFY_REQUEST_TIMEOUT_SECS` | `30`                                     |
    /// | `TASKIFY_ACCESS_TOKEN`         | unset                                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. `from_env` delegates here.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("TASKIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let base_url = parse_base_url(base_url)?;

        let request_timeout_secs = match lookup("TASKIFY_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    var: "TASKIFY_REQUEST_TIMEOUT_SECS",
                    expected: "a positive integer",
                    value: raw,
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let access_token = lookup("TASKIFY_ACCESS_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Self {
            base_url,
            request_timeout_secs,
            access_token,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Require an absolute http(s) URL and drop any trailing slash.
fn parse_base_url(raw: String) -> Result<String, ConfigError> {
    let invalid = || ConfigError::Invalid {
        var: "TASKIFY_API_URL",
        expected: "an absolute http(s) URL",
        value: raw.clone(),
    };
    let url = reqwest::Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config =
            ClientConfig::from_lookup(lookup(&[("TASKIFY_API_URL", "http://localhost:8080/4-1/")]))
                .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/4-1");
    }

    #[test]
    fn relative_or_non_http_url_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[("TASKIFY_API_URL", "/4-1")])).unwrap_err();
        assert!(err.to_string().starts_with("TASKIFY_API_URL must be"));

        assert!(
            ClientConfig::from_lookup(lookup(&[("TASKIFY_API_URL", "ftp://host/4-1")])).is_err()
        );
    }

    #[test]
    fn timeout_must_be_positive_integer() {
        for bad in ["0", "soon", "-5"] {
            let err = ClientConfig::from_lookup(lookup(&[("TASKIFY_REQUEST_TIMEOUT_SECS", bad)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::Invalid {
                    var: "TASKIFY_REQUEST_TIMEOUT_SECS",
                    expected: "a positive integer",
                    value: bad.to_string(),
                }
            );
        }
    }

    #[test]
    fn blank_access_token_is_ignored() {
        let config =
            ClientConfig::from_lookup(lookup(&[("TASKIFY_ACCESS_TOKEN", "  ")])).unwrap();
        assert!(config.access_token.is_none());

        let config =
            ClientConfig::from_lookup(lookup(&[("TASKIFY_ACCESS_TOKEN", "abc")])).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("abc"));
    }
}
