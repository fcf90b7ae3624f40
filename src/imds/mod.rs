//! Azure Instance Metadata Service client.
//!
//! The metadata endpoint is link-local and not routed off-host, so the
//! token request goes over plain HTTP. The `Metadata: true` header is
//! required by the service to distinguish in-instance callers.

use crate::errors::FetchError;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Default IMDS endpoint, fixed for every Azure compute instance.
pub const IMDS_ENDPOINT: &str = "http://169.254.169.254";

const TOKEN_API_VERSION: &str = "2018-02-01";

/// Resource URI for Key Vault tokens. Hard-coded, not derived from the
/// vault name: one resource covers every vault in the tenant.
const VAULT_RESOURCE: &str = "https://vault.azure.net";

pub struct ImdsClient {
    endpoint: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ImdsClient {
    pub fn new() -> Self {
        Self::with_endpoint(IMDS_ENDPOINT)
    }

    /// Point the client at a non-default endpoint (tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    /// Fetch a managed-identity bearer token for Key Vault.
    ///
    /// One GET, no retry, no timeout: a hung metadata service blocks the
    /// caller indefinitely.
    pub async fn fetch_identity_token(&self) -> Result<String, FetchError> {
        let url = format!("{}/metadata/identity/oauth2/token", self.endpoint);
        debug!("Requesting managed identity token from {}", url);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("api-version", TOKEN_API_VERSION),
                ("resource", VAULT_RESOURCE),
            ])
            .header("Metadata", "true")
            .send()
            .await?;

        let body = resp.text().await?;
        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(token.access_token)
    }
}

impl Default for ImdsClient {
    fn default() -> Self {
        Self::new()
    }
}
