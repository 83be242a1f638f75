use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::artwork::Artwork;

/// Maximum exhibition name length accepted at the API boundary.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum exhibition description length accepted at the API boundary.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// A user-curated, named, ordered collection of artwork copies.
///
/// Artworks are stored by value: editing a copy in one exhibition can never
/// affect another exhibition. Within one exhibition artwork ids are unique;
/// the store enforces that on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Insertion-ordered artwork copies, unique by artwork id
    pub artworks: Vec<Artwork>,
    /// Set once at creation, never mutated
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation of name, description or artworks
    pub updated_at: DateTime<Utc>,
}

impl Exhibition {
    pub fn contains_artwork(&self, artwork_id: &str) -> bool {
        self.artworks.iter().any(|artwork| artwork.id == artwork_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_serialize_under_camel_case_keys() {
        let now = Utc::now();
        let exhibition = Exhibition {
            id: "exhibition-1-abc".to_string(),
            name: "Impressionists".to_string(),
            description: String::new(),
            artworks: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&exhibition).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value["artworks"].as_array().unwrap().is_empty());
    }
}
