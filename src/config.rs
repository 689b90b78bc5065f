//! Process-wide settings for an [`crate::OpenDataHub`] client.
//!
//! The configuration is fixed when the client is built and never changes
//! afterwards, so one client can be cloned and shared by any number of
//! concurrent callers.

use bon::Builder;

/// Base URL of the public Open Data Hub mobility API (version 2).
pub const DEFAULT_BASE_URL: &str = "https://mobility.api.opendatahub.com/v2";

/// Browser-like `User-Agent` sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Settings used to construct an [`crate::OpenDataHub`] client.
///
/// # Examples
///
/// ```
/// use opendatahub::{ClientConfig, DEFAULT_BASE_URL};
///
/// // Defaults: public endpoint, certificate validation disabled.
/// let config = ClientConfig::default();
/// assert_eq!(config.base_url, DEFAULT_BASE_URL);
/// assert!(config.accept_invalid_certs);
///
/// // Point at another deployment and validate certificates.
/// let config = ClientConfig::builder()
///     .base_url("https://mobility.api.testingmachine.eu/v2")
///     .accept_invalid_certs(false)
///     .build();
/// assert!(!config.accept_invalid_certs);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ClientConfig {
    /// Root URL every endpoint path is appended to. A trailing `/` is ignored.
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,

    /// Skip TLS certificate validation. Defaults to `true` for compatibility
    /// with the behaviour of earlier bindings of this API; new deployments
    /// should set it to `false`.
    #[builder(default = true)]
    pub accept_invalid_certs: bool,

    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_public_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://mobility.api.opendatahub.com/v2");
        assert!(config.accept_invalid_certs);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn builder_overrides_single_field() {
        let config = ClientConfig::builder()
            .user_agent("odh-test/1.0")
            .build();
        assert_eq!(config.user_agent, "odh-test/1.0");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
