//! Document fetcher for the EVE Online XML API.
//!
//! Thin wrapper over [`reqwest`] that requests a named resource path with
//! optional query parameters and returns the raw response body. The base URL
//! is configurable so tests can point the client at a mock server. No retry
//! or caching behavior lives here.

use crate::error::Error;

/// Production base URL of the EVE Online XML API.
pub static DEFAULT_API_URL: &str = "https://api.eveonline.com";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the API at `base_url`. A descriptive user agent
    /// is required by CCP's API guidelines.
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetches a named API resource, returning the raw response body text.
    ///
    /// Non-success HTTP statuses are surfaced as [`Error::FetchStatus`];
    /// transport failures as [`Error::Fetch`].
    pub async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<String, Error> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
