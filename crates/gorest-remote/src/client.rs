//! reqwest-based GoREST client.

use crate::{RemotePage, RemoteSource};
use async_trait::async_trait;
use gorest_config::RemoteConfig;
use gorest_core::{GorestError, GorestResult, Resource, ResourceId};
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Header carrying the total page count of a collection.
pub const PAGES_HEADER: &str = "X-Pagination-Pages";

const SERVICE_NAME: &str = "GoREST";

/// HTTP client for the GoREST API.
#[derive(Clone)]
pub struct GoRestClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl GoRestClient {
    /// Creates a client from configuration.
    pub fn new(config: &RemoteConfig) -> GorestResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GorestError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(
            client,
            &config.base_url,
            config.access_token.clone(),
        ))
    }

    /// Creates a client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str, access_token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.filter(|token| !token.trim().is_empty()),
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get(&self, url: String) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl std::fmt::Debug for GoRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoRestClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.access_token.is_some())
            .finish()
    }
}

#[async_trait]
impl RemoteSource for GoRestClient {
    async fn fetch_one<T: Resource>(&self, id: ResourceId) -> GorestResult<T> {
        let url = self.url(&format!("{}/{}", T::COLLECTION, id));
        debug!("GET {}", url);

        let response = self.get(url).send().await.map_err(map_reqwest_error)?;
        let response = check_status::<T>(response, &id.to_string()).await?;

        decode(response).await
    }

    async fn fetch_page<T: Resource>(&self, page: u32) -> GorestResult<RemotePage<T>> {
        let url = self.url(T::COLLECTION);
        debug!("GET {}?page={}", url, page);

        let response = self
            .get(url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = check_status::<T>(response, &format!("page {}", page)).await?;

        let total_pages = total_pages(response.headers())?;
        let items = decode(response).await?;

        Ok(RemotePage::new(items, total_pages))
    }
}

/// Reads the page count header.
pub fn total_pages(headers: &HeaderMap) -> GorestResult<u32> {
    let raw = headers
        .get(PAGES_HEADER)
        .ok_or_else(|| external(format!("Response is missing the {} header", PAGES_HEADER)))?;

    raw.to_str()
        .ok()
        .and_then(|value| value.trim().parse::<u32>().ok())
        .ok_or_else(|| external(format!("Invalid {} header: {:?}", PAGES_HEADER, raw)))
}

async fn check_status<T: Resource>(response: Response, what: &str) -> GorestResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(map_http_error::<T>(status, what, &body))
}

async fn decode<D: DeserializeOwned>(response: Response) -> GorestResult<D> {
    response
        .json()
        .await
        .map_err(|e| external(format!("Invalid response body: {}", e)))
}

fn map_http_error<T: Resource>(status: StatusCode, what: &str, body: &str) -> GorestError {
    match status {
        StatusCode::NOT_FOUND => GorestError::NotFound {
            resource_type: T::NAME,
            id: what.to_string(),
        },
        _ => {
            warn!("{} returned {} for {} {}", SERVICE_NAME, status, T::LABEL, what);
            external(format!("HTTP {}: {}", status, body))
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GorestError {
    if err.is_timeout() {
        GorestError::Timeout(format!("{} request timed out", SERVICE_NAME))
    } else {
        external(err.to_string())
    }
}

fn external(message: String) -> GorestError {
    GorestError::external(SERVICE_NAME, message)
}
