//! Cloud Foundry HTTP client for API interactions

use log::debug;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::cf::token::{Credentials, TokenManager};
use crate::cf::ResourceEnvelope;
use crate::config::api;
use crate::error::{CfError, Result};

/// Constructor-time client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_endpoint: String,
    credentials: Option<Credentials>,
    token_endpoint: Option<String>,
    max_pages: usize,
}

impl ClientConfig {
    /// Start a configuration for the given API endpoint (e.g. `https://api.example.com`)
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into().trim_end_matches('/').to_string(),
            credentials: None,
            token_endpoint: None,
            max_pages: api::MAX_PAGES,
        }
    }

    /// Authenticate with a pre-issued bearer token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::AccessToken(token.into()));
        self
    }

    /// Authenticate by exchanging a client id/secret for a token
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::ClientCredentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        });
        self
    }

    /// Use this token endpoint instead of the one advertised by `/v2/info`
    pub fn with_token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.token_endpoint = Some(endpoint.into());
        self
    }

    /// Maximum number of pages followed for one collection fetch
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

/// Raw successful response, held for envelope parsing
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Deserialize the body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Cloud Foundry API client
pub struct CfClient {
    client: Client,
    api_endpoint: String,
    tokens: TokenManager,
    max_pages: usize,
}

impl CfClient {
    /// Create a new client with pooled connection settings
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_endpoint: config.api_endpoint,
            tokens: TokenManager::new(config.credentials, config.token_endpoint),
            max_pages: config.max_pages,
        }
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Build the full URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_endpoint, path)
    }

    /// Get the bearer token, minting and caching one on first use if needed
    pub async fn access_token(&self) -> Result<String> {
        self.tokens
            .access_token(&self.client, &self.api_endpoint)
            .await
    }

    /// Issue a single authenticated request without a body
    pub async fn request(&self, method: Method, path: &str) -> Result<ApiResponse> {
        self.send::<()>(method, path, None).await
    }

    /// Issue a single authenticated request with a JSON body
    pub async fn request_with_body<B>(&self, method: Method, path: &str, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, Some(body)).await
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let token = self.access_token().await?;
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/json");
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("Request to {} failed with status {}", url, status);
            return Err(error_from_response(status.as_u16(), body));
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }

    /// Collect every resource across all pages, starting from an already fetched page
    ///
    /// Follows `next_url` until it is null, appending each page's resources
    /// in the order returned. Fails with `CfError::PaginationLimit` when the
    /// chain is longer than the configured page ceiling.
    pub async fn all_resources<T>(&self, response: ApiResponse) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let first: ResourceEnvelope<T> = response.json()?;
        if let (Some(pages), Some(total)) = (first.total_pages, first.total_results) {
            debug!("Page 1/{}, total items: {}", pages, total);
        }

        let mut resources = first.resources;
        let mut next_url = first.next_url;
        let mut pages_fetched = 1;

        while let Some(url) = next_url {
            if pages_fetched >= self.max_pages {
                return Err(CfError::PaginationLimit {
                    max_pages: self.max_pages,
                });
            }

            debug!("Fetching page {} from: {}", pages_fetched + 1, url);
            let page: ResourceEnvelope<T> = self.request(Method::GET, &url).await?.json()?;

            resources.extend(page.resources);
            next_url = page.next_url;
            pages_fetched += 1;
        }

        debug!(
            "Fetched {} total items across {} page(s)",
            resources.len(),
            pages_fetched
        );
        Ok(resources)
    }

    /// GET a single object
    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, path).await?.json()
    }

    /// GET a collection, following every page
    pub(crate) async fn get_all<T>(&self, path: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.request(Method::GET, path).await?;
        self.all_resources(response).await
    }
}

/// Normalize a non-success response into an error
///
/// A JSON body with a string `error` field becomes `CfError::Api`; anything
/// else keeps the raw body alongside the status code.
pub(crate) fn error_from_response(status: u16, body: String) -> CfError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string));

    match message {
        Some(message) => CfError::Api { status, message },
        None => CfError::UnexpectedResponse { status, body },
    }
}

#[cfg(test)]
impl CfClient {
    /// Create a test client with a static token against a mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::new(ClientConfig::new(base_url).with_access_token("test-token"))
    }
}


#[cfg(test)]
mod request_tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_request_attaches_bearer_token() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/info"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = client.request(Method::GET, "/v2/info").await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "{}");
    }

    #[tokio::test]
    async fn test_request_with_body_sends_json() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/v2/users"))
            .and(body_json(serde_json::json!({"guid": "uaa-id-1"})))
            .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = client
            .request_with_body(
                Method::POST,
                "/v2/users",
                &serde_json::json!({"guid": "uaa-id-1"}),
            )
            .await
            .unwrap();
        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_request_404_surfaces_error_message() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/failure/404"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error": "FAKE_404"}"#))
            .mount(&mock_server)
            .await;

        let err = client
            .request(Method::GET, "/v2/failure/404")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("FAKE_404"));
    }

    #[tokio::test]
    async fn test_request_500_surfaces_status() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/failure/500"))
            .respond_with(ResponseTemplate::new(500).set_body_string("FAKE_500"))
            .mount(&mock_server)
            .await;

        let err = client
            .request(Method::GET, "/v2/failure/500")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("status 500"));
    }

    #[tokio::test]
    async fn test_request_without_credentials_fails_before_network() {
        let mock_server = MockServer::start().await;
        let client = CfClient::new(ClientConfig::new(mock_server.uri()));

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client.request(Method::GET, "/v2/info").await.unwrap_err();
        assert!(matches!(err, CfError::Config(_)));
    }

    #[tokio::test]
    async fn test_client_credentials_token_reused_across_requests() {
        let mock_server = MockServer::start().await;
        let client = CfClient::new(
            ClientConfig::new(format!("{}/api", mock_server.uri()))
                .with_client_credentials("my-id", "my-secret")
                .with_token_endpoint(format!("{}/uaa", mock_server.uri())),
        );

        Mock::given(method("POST"))
            .and(path("/uaa/oauth/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"access_token": "TOKEN_FROM_ENDPOINT"}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/info"))
            .and(header("authorization", "Bearer TOKEN_FROM_ENDPOINT"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(3)
            .mount(&mock_server)
            .await;

        for _ in 0..3 {
            client.request(Method::GET, "/v2/info").await.unwrap();
        }
        assert_eq!(client.access_token().await.unwrap(), "TOKEN_FROM_ENDPOINT");
    }
}
