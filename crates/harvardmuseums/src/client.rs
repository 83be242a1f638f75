use reqwest::Client;

use crate::error::HarvardError;

const BASE_URL: &str = "https://api.harvardartmuseums.org";

/// Client for the Harvard Art Museums API.
///
/// Every request carries the API key as a query parameter. The key is
/// supplied out-of-band; an empty key is a valid configuration, callers
/// should check [`has_api_key`](Self::has_api_key) and degrade instead of
/// issuing requests that will be rejected.
pub struct HarvardClient {
    client: Client,
    api_key: String,
}

impl HarvardClient {
    /// Create a HarvardClient backed by the given reqwest Client.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// Whether an access credential is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub(crate) fn api_key(&self) -> crate::Result<&str> {
        if self.api_key.is_empty() {
            Err(HarvardError::MissingApiKey)
        } else {
            Ok(&self.api_key)
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HarvardError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
