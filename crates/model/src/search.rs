use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::artwork::Artwork;

/// Year range filter.
///
/// Part of the search request contract but not applied when narrowing
/// results; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    pub start: i32,
    pub end: i32,
}

/// Filters for a combined search across both museums.
///
/// `query` and `has_image` are forwarded to the sources; `medium`, `culture`
/// and `department` narrow the combined page by case-insensitive substring
/// match, with the empty string passing everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub query: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub culture: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub artworks: Vec<Artwork>,
    /// Total matching records reported by the source(s), not the length of
    /// `artworks`: attribute filtering narrows the page but not the total.
    pub total: u64,
    pub has_more: bool,
}

impl SearchPage {
    /// The empty/zero-total/no-more page, also the degraded-source result.
    pub fn empty() -> Self {
        Self {
            artworks: Vec::new(),
            total: 0,
            has_more: false,
        }
    }
}
