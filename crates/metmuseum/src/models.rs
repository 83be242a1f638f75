use serde::{Deserialize, Serialize};

/// Response from GET /search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Number of matching object ids
    pub total: i64,
    /// Complete ordered identifier list; the API sends `null` instead of an
    /// empty array when the query has no hits
    #[serde(rename = "objectIDs")]
    pub object_ids: Option<Vec<i64>>,
}

/// Flat object record from GET /objects/{id}
///
/// Only the fields consumed downstream are modeled; the API returns many
/// more. The Met sends empty strings rather than nulls for absent text, and
/// missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetObject {
    #[serde(rename = "objectID")]
    pub object_id: i64,
    pub title: String,
    #[serde(rename = "artistDisplayName")]
    pub artist_display_name: String,
    #[serde(rename = "objectDate")]
    pub object_date: String,
    pub medium: String,
    pub dimensions: String,
    pub culture: String,
    pub department: String,
    pub period: String,
    pub dynasty: String,
    pub classification: String,
    #[serde(rename = "creditLine")]
    pub credit_line: String,
    #[serde(rename = "primaryImage")]
    pub primary_image: String,
    #[serde(rename = "primaryImageSmall")]
    pub primary_image_small: String,
    #[serde(rename = "objectURL")]
    pub object_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_accepts_null_object_ids() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total":0,"objectIDs":null}"#).unwrap();
        assert_eq!(response.total, 0);
        assert!(response.object_ids.is_none());
    }

    #[test]
    fn object_record_tolerates_missing_fields() {
        let object: MetObject = serde_json::from_str(
            r#"{"objectID":45734,"title":"Quail and Millet","primaryImage":"https://images.metmuseum.org/45734.jpg"}"#,
        )
        .unwrap();
        assert_eq!(object.object_id, 45734);
        assert_eq!(object.title, "Quail and Millet");
        assert!(object.artist_display_name.is_empty());
        assert!(object.primary_image_small.is_empty());
    }
}
