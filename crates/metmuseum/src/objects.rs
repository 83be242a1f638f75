use crate::client::MetClient;
use crate::models::MetObject;

impl MetClient {
    /// Fetch a single object record.
    /// GET /objects/{object_id}
    pub async fn get_object(&self, object_id: i64) -> crate::Result<MetObject> {
        let url = self.url(&format!("/objects/{}", object_id));
        let response = self.client().get(&url).send().await?;
        self.handle_response(response).await
    }
}
