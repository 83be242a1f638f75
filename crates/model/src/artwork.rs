use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Museum source identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Museum {
    Met,
    Harvard,
}

impl Museum {
    pub fn as_str(&self) -> &'static str {
        match self {
            Museum::Met => "met",
            Museum::Harvard => "harvard",
        }
    }

    /// Canonical artwork id for a source-native record id.
    ///
    /// The source tag prefix keeps ids from the two museums from colliding
    /// even when the native numeric ids overlap.
    pub fn artwork_id(&self, native_id: i64) -> String {
        format!("{}-{}", self.as_str(), native_id)
    }

    /// Split a canonical artwork id back into source and native id.
    /// Returns `None` for unknown tags or a non-numeric remainder.
    pub fn parse_artwork_id(id: &str) -> Option<(Museum, i64)> {
        let (tag, native) = id.split_once('-')?;
        let museum = match tag {
            "met" => Museum::Met,
            "harvard" => Museum::Harvard,
            _ => return None,
        };
        native.parse().ok().map(|native_id| (museum, native_id))
    }
}

/// Canonical artwork record, the unified shape used everywhere past the
/// source adapter boundary.
///
/// Every descriptive field is a plain `String`: normalization substitutes a
/// placeholder for absent source data, image and link fields default to the
/// empty string. Once constructed an artwork is never mutated; exhibitions
/// hold independent copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// `"<source-tag>-<source-native-id>"`, globally unique
    pub id: String,
    pub title: String,
    pub artist: String,
    pub date: String,
    pub medium: String,
    pub dimensions: String,
    pub culture: String,
    /// Full-size image URL, empty when the source has none
    pub image_url: String,
    /// Thumbnail URL, falls back to the full-size image, else empty
    pub thumbnail_url: String,
    /// Free-text description, synthesized from structured metadata when the
    /// source provides none
    pub description: String,
    pub department: String,
    pub museum: Museum,
    /// Deep link to the record on the source institution's site
    pub object_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artwork_ids_carry_the_source_tag() {
        assert_eq!(Museum::Met.artwork_id(436535), "met-436535");
        assert_eq!(Museum::Harvard.artwork_id(436535), "harvard-436535");
    }

    #[test]
    fn parse_artwork_id_round_trips() {
        assert_eq!(
            Museum::parse_artwork_id("met-42"),
            Some((Museum::Met, 42))
        );
        assert_eq!(
            Museum::parse_artwork_id("harvard-299843"),
            Some((Museum::Harvard, 299843))
        );
        assert_eq!(Museum::parse_artwork_id("louvre-1"), None);
        assert_eq!(Museum::parse_artwork_id("met-abc"), None);
        assert_eq!(Museum::parse_artwork_id("met"), None);
    }

    #[test]
    fn artwork_serializes_with_camel_case_keys() {
        let artwork = Artwork {
            id: "met-1".to_string(),
            title: "Untitled".to_string(),
            artist: "Unknown Artist".to_string(),
            date: "1885".to_string(),
            medium: "Oil on canvas".to_string(),
            dimensions: "30 x 40 cm".to_string(),
            culture: "French".to_string(),
            image_url: String::new(),
            thumbnail_url: String::new(),
            description: String::new(),
            department: "European Paintings".to_string(),
            museum: Museum::Met,
            object_url: String::new(),
        };
        let value = serde_json::to_value(&artwork).unwrap();
        assert_eq!(value["imageUrl"], "");
        assert_eq!(value["thumbnailUrl"], "");
        assert_eq!(value["objectUrl"], "");
        assert_eq!(value["museum"], "met");
    }
}
