//! # Configuration
//!
//! Runtime settings for the binary, read from command-line flags with environment
//! fallbacks. Log verbosity is not configured here; it follows `RUST_LOG`
//! (see [`setup_tracing`](crate::lifecycle::setup_tracing)).

use clap::Parser;
use std::time::Duration;
use url::Url;

/// Base URL used when neither `--base-url` nor `USER_ROSTER_BASE_URL` is set.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Parser, Debug, Clone)]
#[command(name = "user-roster")]
#[command(about = "List, create, edit and delete users backed by a REST /users resource")]
pub struct Config {
    /// Root of the REST service; the `/users` resource is resolved below it.
    #[arg(long, env = "USER_ROSTER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Per-request timeout in seconds.
    #[arg(long, env = "USER_ROSTER_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// After loading, run a create -> edit -> delete pass through the session.
    #[arg(long, default_value_t = false)]
    pub walkthrough: bool,
}

impl Config {
    /// Configuration pointing at `base_url` with default timeout.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: 30,
            walkthrough: false,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_placeholder_service() {
        let config = Config::parse_from(["user-roster"]);
        assert_eq!(config.base_url.as_str(), "https://jsonplaceholder.typicode.com/");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.walkthrough);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::parse_from([
            "user-roster",
            "--base-url",
            "http://127.0.0.1:8080/api",
            "--timeout-secs",
            "5",
            "--walkthrough",
        ]);
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/api");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.walkthrough);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(Config::try_parse_from(["user-roster", "--base-url", "not a url"]).is_err());
    }
}
