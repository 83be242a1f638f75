use axum::{
    extract::{Path, Query, State},
    Json,
};
use model::{Artwork, DateRange, SearchFilters, SearchPage};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the combined search
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Free-text query forwarded to both museums
    pub query: String,
    /// 1-based result page
    #[serde(default = "default_page")]
    pub page: u32,
    /// Medium filter, case-insensitive substring match
    #[serde(default)]
    pub medium: String,
    /// Culture filter, case-insensitive substring match
    #[serde(default)]
    pub culture: String,
    /// Department filter, case-insensitive substring match
    #[serde(default)]
    pub department: String,
    /// Only return artworks with images
    #[serde(default)]
    pub has_image: bool,
    /// Start year of the date range (accepted, not applied)
    #[serde(default)]
    pub date_start: Option<i32>,
    /// End year of the date range (accepted, not applied)
    #[serde(default)]
    pub date_end: Option<i32>,
}

fn default_page() -> u32 {
    1
}

impl SearchParams {
    fn into_filters(self) -> SearchFilters {
        SearchFilters {
            query: self.query,
            medium: self.medium,
            culture: self.culture,
            department: self.department,
            has_image: self.has_image,
            date_range: match (self.date_start, self.date_end) {
                (Some(start), Some(end)) => Some(DateRange { start, end }),
                _ => None,
            },
        }
    }
}

/// Combined search across both museum collections
#[utoipa::path(
    get,
    path = "/api/search",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Interleaved, filtered search page", body = SearchPage)
    )
)]
pub async fn search_artworks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchPage> {
    let page = params.page.max(1);
    let filters = params.into_filters();
    Json(state.aggregator.search(&filters, page).await)
}

/// Look up one artwork by canonical id
#[utoipa::path(
    get,
    path = "/api/artworks/{id}",
    tag = "search",
    params(
        ("id" = String, Path, description = "Canonical artwork id, e.g. met-436535")
    ),
    responses(
        (status = 200, description = "The artwork", body = Artwork),
        (status = 404, description = "Unknown id or source record unavailable")
    )
)]
pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Artwork>> {
    match state.aggregator.find(&id).await {
        Some(artwork) => Ok(Json(artwork)),
        None => Err(AppError::not_found(format!("artwork {} not found", id))),
    }
}
