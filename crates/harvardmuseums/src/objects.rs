use crate::client::HarvardClient;
use crate::models::{HarvardObject, ObjectsResponse};

impl HarvardClient {
    /// Search object records with server-side pagination.
    /// GET /object?apikey=..&q=..&size=..&page=..&sort=rank&sortorder=desc[&hasimage=1]
    pub async fn search_objects(
        &self,
        query: &str,
        page: u32,
        size: u32,
        has_image: bool,
    ) -> crate::Result<ObjectsResponse> {
        let api_key = self.api_key()?.to_string();
        let url = self.url("/object");
        let size = size.to_string();
        let page = page.to_string();

        let mut request = self.client().get(&url).query(&[
            ("apikey", api_key.as_str()),
            ("q", query),
            ("size", size.as_str()),
            ("page", page.as_str()),
            ("sort", "rank"),
            ("sortorder", "desc"),
        ]);
        if has_image {
            request = request.query(&[("hasimage", "1")]);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Fetch a single object record.
    /// GET /object/{object_id}?apikey=..
    pub async fn get_object(&self, object_id: i64) -> crate::Result<HarvardObject> {
        let api_key = self.api_key()?.to_string();
        let url = self.url(&format!("/object/{}", object_id));
        let response = self
            .client()
            .get(&url)
            .query(&[("apikey", api_key.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
