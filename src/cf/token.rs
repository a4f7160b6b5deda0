//! Bearer token acquisition and caching

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tokio::sync::OnceCell;

use crate::cf::client::error_from_response;
use crate::cf::Info;
use crate::config::{api, auth};
use crate::error::{CfError, Result};

const MISSING_CREDENTIALS: &str =
    "an access token or client credentials are required to authenticate";

/// How the client authenticates against the Cloud Controller
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Pre-issued bearer token, used as-is
    AccessToken(String),
    /// OAuth2 client-credentials pair exchanged for a token on first use
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Credentials::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &"<redacted>")
                .finish(),
        }
    }
}

/// Token endpoint response
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Supplies the bearer token for every outgoing request.
///
/// A token minted from client credentials is fetched at most once per
/// manager; a failed fetch leaves the cache empty.
pub(crate) struct TokenManager {
    credentials: Option<Credentials>,
    token_endpoint: Option<String>,
    cache: OnceCell<String>,
}

impl TokenManager {
    pub(crate) fn new(credentials: Option<Credentials>, token_endpoint: Option<String>) -> Self {
        Self {
            credentials,
            token_endpoint,
            cache: OnceCell::new(),
        }
    }

    pub(crate) async fn access_token(&self, http: &Client, api_endpoint: &str) -> Result<String> {
        match &self.credentials {
            Some(Credentials::AccessToken(token)) => Ok(token.clone()),
            Some(Credentials::ClientCredentials {
                client_id,
                client_secret,
            }) => self
                .cache
                .get_or_try_init(|| self.fetch_token(http, api_endpoint, client_id, client_secret))
                .await
                .cloned(),
            None => Err(CfError::Config(MISSING_CREDENTIALS.to_string())),
        }
    }

    async fn fetch_token(
        &self,
        http: &Client,
        api_endpoint: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<String> {
        let token_endpoint = match &self.token_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => discover_token_endpoint(http, api_endpoint).await?,
        };

        let url = format!(
            "{}{}?grant_type={}",
            token_endpoint.trim_end_matches('/'),
            auth::TOKEN_PATH,
            auth::GRANT_TYPE
        );
        info!("Requesting access token for client '{}' from {}", client_id, url);

        let response = http
            .post(&url)
            .header("Authorization", basic_auth_header(client_id, client_secret))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), body));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        debug!("Access token acquired for client '{}'", client_id);
        Ok(token.access_token)
    }
}

/// Look up the token endpoint advertised by the unauthenticated info endpoint
async fn discover_token_endpoint(http: &Client, api_endpoint: &str) -> Result<String> {
    let url = format!("{}{}/info", api_endpoint, api::V2);
    debug!("Discovering token endpoint from: {}", url);

    let response = http
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(error_from_response(status.as_u16(), body));
    }

    let info: Info = serde_json::from_str(&body)?;
    info.token_endpoint.ok_or_else(|| {
        CfError::Config(format!(
            "no token endpoint configured and none advertised by {}",
            url
        ))
    })
}

fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let cred = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(cred.as_bytes()))
}
