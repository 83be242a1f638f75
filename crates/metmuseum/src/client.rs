use reqwest::Client;

use crate::error::MetError;

const BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// Client for the Metropolitan Museum of Art collection API.
///
/// The API is unauthenticated; searches return the full ordered identifier
/// list and records are fetched one by one.
pub struct MetClient {
    client: Client,
}

impl MetClient {
    /// Create a MetClient backed by the given reqwest Client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
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
        let body = response.text().await?;
        if !status.is_success() {
            return Err(MetError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| MetError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
