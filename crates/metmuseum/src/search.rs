use crate::client::MetClient;
use crate::models::SearchResponse;

impl MetClient {
    /// Full-text search over the collection.
    /// GET /search?q={query}&hasImages={has_images}
    ///
    /// The API returns the complete ordered identifier list for the query;
    /// callers page through it locally. `object_ids` is `None` when nothing
    /// matches.
    pub async fn search(&self, query: &str, has_images: bool) -> crate::Result<SearchResponse> {
        let url = self.url("/search");
        let response = self
            .client()
            .get(&url)
            .query(&[
                ("q", query),
                ("hasImages", if has_images { "true" } else { "false" }),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
