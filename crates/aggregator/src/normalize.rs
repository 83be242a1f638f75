//! Source-record to canonical [`Artwork`] mapping.
//!
//! These functions never fail: absent or empty source text is replaced by a
//! fixed placeholder so downstream code never sees a missing field.

use harvardmuseums::models::HarvardObject;
use metmuseum::models::MetObject;
use model::{Artwork, Museum};

const UNTITLED: &str = "Untitled";
const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_DATE: &str = "Unknown Date";
const UNKNOWN_MEDIUM: &str = "Unknown Medium";
const UNKNOWN_DIMENSIONS: &str = "Unknown Dimensions";
const UNKNOWN_CULTURE: &str = "Unknown Culture";
const UNKNOWN_DEPARTMENT: &str = "Unknown Department";

/// Substitute the placeholder for empty source text.
fn text(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Substitute the placeholder for absent or empty source text.
fn opt_text(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Join present-only `Label: value` parts with `" | "`; absent values are
/// omitted entirely, so there are no dangling separators.
fn labeled_parts(parts: &[(&str, &str)]) -> String {
    parts
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Normalize a Met object record.
pub fn met_artwork(object: &MetObject) -> Artwork {
    Artwork {
        id: Museum::Met.artwork_id(object.object_id),
        title: text(&object.title, UNTITLED),
        artist: text(&object.artist_display_name, UNKNOWN_ARTIST),
        date: text(&object.object_date, UNKNOWN_DATE),
        medium: text(&object.medium, UNKNOWN_MEDIUM),
        dimensions: text(&object.dimensions, UNKNOWN_DIMENSIONS),
        culture: text(&object.culture, UNKNOWN_CULTURE),
        image_url: object.primary_image.clone(),
        thumbnail_url: if object.primary_image_small.is_empty() {
            object.primary_image.clone()
        } else {
            object.primary_image_small.clone()
        },
        description: met_description(object),
        department: text(&object.department, UNKNOWN_DEPARTMENT),
        museum: Museum::Met,
        object_url: object.object_url.clone(),
    }
}

/// Met records carry no free-text description; synthesize one from the
/// structured fields that are present.
fn met_description(object: &MetObject) -> String {
    labeled_parts(&[
        ("Culture", &object.culture),
        ("Period", &object.period),
        ("Dynasty", &object.dynasty),
        ("Classification", &object.classification),
        ("Credit", &object.credit_line),
    ])
}

/// Normalize a Harvard object record.
pub fn harvard_artwork(record: &HarvardObject) -> Artwork {
    let people = record.people.as_deref().unwrap_or_default();
    // Prefer the first contributor whose role reads like the creator; fall
    // back to the first listed contributor.
    let primary = people
        .iter()
        .find(|person| {
            person.role.as_deref().is_some_and(|role| {
                let role = role.to_lowercase();
                role.contains("artist") || role.contains("maker")
            })
        })
        .and_then(|person| person.displayname.as_deref())
        .filter(|name| !name.is_empty());
    let first = people
        .first()
        .and_then(|person| person.displayname.as_deref())
        .filter(|name| !name.is_empty());
    let artist = primary.or(first).unwrap_or(UNKNOWN_ARTIST).to_string();

    let primary_image = record.primaryimageurl.clone().unwrap_or_default();
    let thumbnail = record
        .images
        .as_deref()
        .unwrap_or_default()
        .first()
        .and_then(|image| image.thumbnailurl.clone())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| primary_image.clone());

    let description = match record.description.as_deref() {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => harvard_description(record),
    };

    Artwork {
        id: Museum::Harvard.artwork_id(record.id),
        title: opt_text(record.title.as_deref(), UNTITLED),
        artist,
        date: opt_text(record.dated.as_deref(), UNKNOWN_DATE),
        medium: opt_text(record.medium.as_deref(), UNKNOWN_MEDIUM),
        dimensions: opt_text(record.dimensions.as_deref(), UNKNOWN_DIMENSIONS),
        culture: opt_text(record.culture.as_deref(), UNKNOWN_CULTURE),
        image_url: primary_image,
        thumbnail_url: thumbnail,
        description,
        department: opt_text(record.department.as_deref(), UNKNOWN_DEPARTMENT),
        museum: Museum::Harvard,
        object_url: record.url.clone().unwrap_or_default(),
    }
}

/// Synthesized description for Harvard records without free text.
fn harvard_description(record: &HarvardObject) -> String {
    labeled_parts(&[
        (
            "Classification",
            record.classification.as_deref().unwrap_or_default(),
        ),
        ("Technique", record.technique.as_deref().unwrap_or_default()),
        ("Period", record.period.as_deref().unwrap_or_default()),
        ("Century", record.century.as_deref().unwrap_or_default()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvardmuseums::models::{ObjectImage, Person};

    fn met_object() -> MetObject {
        MetObject {
            object_id: 436535,
            ..Default::default()
        }
    }

    fn harvard_record() -> HarvardObject {
        HarvardObject {
            id: 299843,
            ..Default::default()
        }
    }

    #[test]
    fn met_placeholders_fill_every_empty_field() {
        let artwork = met_artwork(&met_object());
        assert_eq!(artwork.title, "Untitled");
        assert_eq!(artwork.artist, "Unknown Artist");
        assert_eq!(artwork.date, "Unknown Date");
        assert_eq!(artwork.medium, "Unknown Medium");
        assert_eq!(artwork.dimensions, "Unknown Dimensions");
        assert_eq!(artwork.culture, "Unknown Culture");
        assert_eq!(artwork.department, "Unknown Department");
        assert_eq!(artwork.image_url, "");
        assert_eq!(artwork.thumbnail_url, "");
        assert_eq!(artwork.object_url, "");
        assert_eq!(artwork.description, "");
    }

    #[test]
    fn harvard_placeholders_fill_every_null_field() {
        let artwork = harvard_artwork(&harvard_record());
        assert_eq!(artwork.title, "Untitled");
        assert_eq!(artwork.artist, "Unknown Artist");
        assert_eq!(artwork.date, "Unknown Date");
        assert_eq!(artwork.medium, "Unknown Medium");
        assert_eq!(artwork.dimensions, "Unknown Dimensions");
        assert_eq!(artwork.culture, "Unknown Culture");
        assert_eq!(artwork.department, "Unknown Department");
        assert_eq!(artwork.image_url, "");
        assert_eq!(artwork.thumbnail_url, "");
    }

    #[test]
    fn same_native_id_normalizes_to_distinct_canonical_ids() {
        let mut met = met_object();
        met.object_id = 7;
        let mut harvard = harvard_record();
        harvard.id = 7;
        assert_eq!(met_artwork(&met).id, "met-7");
        assert_eq!(harvard_artwork(&harvard).id, "harvard-7");
    }

    #[test]
    fn met_description_joins_present_fields_only() {
        let mut object = met_object();
        object.culture = "Japan".to_string();
        object.classification = "Paintings".to_string();
        assert_eq!(
            met_artwork(&object).description,
            "Culture: Japan | Classification: Paintings"
        );
    }

    #[test]
    fn met_thumbnail_falls_back_to_primary_image() {
        let mut object = met_object();
        object.primary_image = "https://example.org/full.jpg".to_string();
        let artwork = met_artwork(&object);
        assert_eq!(artwork.thumbnail_url, "https://example.org/full.jpg");

        object.primary_image_small = "https://example.org/small.jpg".to_string();
        let artwork = met_artwork(&object);
        assert_eq!(artwork.thumbnail_url, "https://example.org/small.jpg");
    }

    #[test]
    fn harvard_primary_artist_prefers_artist_or_maker_roles() {
        let mut record = harvard_record();
        record.people = Some(vec![
            Person {
                role: Some("Publisher".to_string()),
                displayname: Some("Ambroise Vollard".to_string()),
            },
            Person {
                role: Some("Printmaker".to_string()),
                displayname: Some("Mary Cassatt".to_string()),
            },
            Person {
                role: Some("Artist after".to_string()),
                displayname: Some("Edgar Degas".to_string()),
            },
        ]);
        // "Printmaker" contains "maker" and comes before the "Artist after"
        // entry, so it wins.
        assert_eq!(harvard_artwork(&record).artist, "Mary Cassatt");
    }

    #[test]
    fn harvard_artist_falls_back_to_first_contributor() {
        let mut record = harvard_record();
        record.people = Some(vec![Person {
            role: Some("Publisher".to_string()),
            displayname: Some("Ambroise Vollard".to_string()),
        }]);
        assert_eq!(harvard_artwork(&record).artist, "Ambroise Vollard");
    }

    #[test]
    fn harvard_description_prefers_free_text() {
        let mut record = harvard_record();
        record.description = Some("A drypoint portrait.".to_string());
        record.classification = Some("Prints".to_string());
        assert_eq!(harvard_artwork(&record).description, "A drypoint portrait.");

        record.description = None;
        assert_eq!(
            harvard_artwork(&record).description,
            "Classification: Prints"
        );
    }

    #[test]
    fn harvard_thumbnail_prefers_image_entry() {
        let mut record = harvard_record();
        record.primaryimageurl = Some("https://example.org/full.jpg".to_string());
        record.images = Some(vec![ObjectImage {
            thumbnailurl: Some("https://example.org/thumb.jpg".to_string()),
        }]);
        let artwork = harvard_artwork(&record);
        assert_eq!(artwork.thumbnail_url, "https://example.org/thumb.jpg");
        assert_eq!(artwork.image_url, "https://example.org/full.jpg");

        record.images = None;
        let artwork = harvard_artwork(&record);
        assert_eq!(artwork.thumbnail_url, "https://example.org/full.jpg");
    }
}
