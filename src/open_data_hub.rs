//! The main entry point for talking to the Open Data Hub mobility API.
//!
//! [`OpenDataHub`] owns the transport and the base URL. Every endpoint of the
//! API is exposed as a builder method on it: optional parameters are set on
//! the builder and `.call().await` issues exactly one GET request. The
//! endpoint methods are grouped by resource in the `clients` module.

use crate::config::ClientConfig;
use crate::error::OpenDataHubError;
use crate::request::endpoint::Endpoint;
use crate::request::executor::RequestExecutor;
use crate::request::query::QueryOptions;
use crate::types::representation::Representation;
use bon::bon;
use reqwest::Method;
use serde_json::Value;

/// Asynchronous client for the Open Data Hub mobility API.
///
/// The client is cheap to clone and safe to share between tasks. It keeps no
/// state between calls: two identical calls issue two identical requests.
///
/// Every call resolves to `Ok` with the server's JSON body, untouched, or to
/// an [`OpenDataHubError`] describing what went wrong. Nothing panics.
///
/// # Examples
///
/// ```no_run
/// use opendatahub::{OpenDataHub, OpenDataHubError};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), OpenDataHubError> {
/// let client = OpenDataHub::new()?;
///
/// let parking = client
///     .latest_measurements()
///     .station_types("ParkingStation")
///     .data_types("free")
///     .limit(10)
///     .origin("my-dashboard")
///     .call()
///     .await?;
/// println!("{parking:#}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenDataHub {
    executor: RequestExecutor,
}

impl OpenDataHub {
    /// Creates a client for the public API with the default [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`OpenDataHubError::ClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new() -> Result<Self, OpenDataHubError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OpenDataHubError::InvalidBaseUrl`] if `config.base_url` is not
    /// an absolute URL with a host, and [`OpenDataHubError::ClientBuild`] if
    /// the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self, OpenDataHubError> {
        Ok(Self {
            executor: RequestExecutor::new(&config)?,
        })
    }

    /// The base URL requests are sent to, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        self.executor.base_url()
    }

    pub(crate) async fn fetch(
        &self,
        endpoint: Endpoint,
        options: QueryOptions,
    ) -> Result<Value, OpenDataHubError> {
        let path = endpoint.request_path(&options);
        self.executor.execute(Method::GET, &path).await
    }
}

#[bon]
impl OpenDataHub {
    /// Lists the entry points of the API (`GET /`).
    #[builder]
    pub async fn entry_points(
        &self,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let options = QueryOptions::builder().maybe_origin(origin).build();
        self.fetch(Endpoint::EntryPoints, options).await
    }

    /// Lists the entity types available in a representation
    /// (`GET /{representation}`).
    ///
    /// `representation` defaults to `flat,node`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use opendatahub::{OpenDataHub, OpenDataHubError, Representation};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenDataHubError> {
    /// let client = OpenDataHub::new()?;
    /// let event_types = client
    ///     .categories()
    ///     .representation(Representation::FlatEvent)
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn categories(
        &self,
        #[builder(into)] representation: Option<String>,
        #[builder(into)] origin: Option<String>,
    ) -> Result<Value, OpenDataHubError> {
        let endpoint = Endpoint::Categories {
            representation: representation.unwrap_or_else(|| Representation::FlatNode.into()),
        };
        let options = QueryOptions::builder().maybe_origin(origin).build();
        self.fetch(endpoint, options).await
    }
}
