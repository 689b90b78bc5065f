use crate::config::ClientConfig;
use crate::error::OpenDataHubError;
use log::{debug, warn};
use reqwest::header::{CONTENT_TYPE, HOST, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use url::Url;

/// Sends requests to the configured base URL and turns every outcome into a
/// `Result` value.
#[derive(Debug, Clone)]
pub(crate) struct RequestExecutor {
    http: Client,
    base_url: String,
    host: String,
    user_agent: String,
}

impl RequestExecutor {
    pub fn new(config: &ClientConfig) -> Result<Self, OpenDataHubError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| OpenDataHubError::InvalidBaseUrl(base_url.clone(), e))?;
        let host = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(OpenDataHubError::InvalidBaseUrl(
                    base_url,
                    url::ParseError::EmptyHost,
                ))
            }
        };

        if config.accept_invalid_certs {
            warn!(
                "TLS certificate validation is disabled for requests to {}",
                base_url
            );
        }

        let http = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(OpenDataHubError::ClientBuild)?;

        Ok(Self {
            http,
            base_url,
            host,
            user_agent: config.user_agent.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one request for `path` (query string included) and decodes the
    /// JSON body of a `200 OK` answer.
    pub async fn execute(&self, method: Method, path: &str) -> Result<Value, OpenDataHubError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let response = self
            .http
            .request(method, &url)
            .header(HOST, &self.host)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                OpenDataHubError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("HTTP error {} for {}", status.as_u16(), url);
            return Err(OpenDataHubError::HttpStatus { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(OpenDataHubError::Transport)?;

        serde_json::from_str(&body).map_err(|source| {
            warn!("Response from {} is not valid JSON: {}", url, source);
            OpenDataHubError::Decode { url, source }
        })
    }
}
