//! Ranger Admin REST Client
//!
//! Native REST implementation for the Ranger admin public v2 API.
//! Uses reqwest for HTTP requests and HTTP Basic authentication.
//!
//! This implementation:
//! - Works directly with Pact HTTP mock servers
//! - Uses reqwest with rustls (no OpenSSL dependencies)
//! - Keeps one connection pool for the whole provisioning run
//!
//! References:
//! - [Ranger public REST API v2](https://ranger.apache.org/apidocs/resource_PublicAPIsv2.html)

mod operations;
mod requests;
mod responses;

pub use requests::*;
pub use responses::*;

use reqwest::{Client, Method, RequestBuilder, Url};
use tracing::info;

use crate::config::ProvisionerConfig;
use crate::provider::AdminError;

/// Ranger admin REST client
pub struct RangerAdminREST {
    http_client: Client,
    base_url: Url,
    username: String,
    password: String,
}

impl std::fmt::Debug for RangerAdminREST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangerAdminREST")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl RangerAdminREST {
    /// Create a client for the admin endpoint described by `config`
    ///
    /// # Errors
    /// Returns [`AdminError::Config`] if the base URL is not an absolute
    /// http(s) URL or the HTTP client cannot be built.
    pub fn new(config: &ProvisionerConfig) -> Result<Self, AdminError> {
        let base_url = Url::parse(&config.admin_url)
            .map_err(|e| AdminError::Config(format!("invalid admin URL '{}': {e}", config.admin_url)))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(AdminError::Config(format!(
                "admin URL must be an http(s) URL, got '{}'",
                config.admin_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| AdminError::Config(format!("failed to create HTTP client: {e}")))?;

        info!(
            "Initializing Ranger admin REST client for {} as user {}",
            base_url, config.username
        );

        Ok(Self {
            http_client,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Base URL of the admin endpoint
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an API path (plus an optional trailing segment) against the base URL
    ///
    /// The trailing segment is percent-encoded, so service names cannot
    /// escape the lookup path.
    fn endpoint(&self, path: &str, trailing: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path.split('/'));
            if let Some(segment) = trailing {
                segments.push(segment);
            }
        }
        url
    }

    /// Build HTTP request with authentication headers
    fn make_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .header(reqwest::header::ACCEPT, "application/json")
    }
}
