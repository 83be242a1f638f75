use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use model::{Artwork, Exhibition, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateExhibitionRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateExhibitionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// The store trusts its callers on name and description bounds; this is
/// where that contract is enforced.
fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::bad_request("exhibition name must not be blank"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::bad_request(format!(
            "exhibition name longer than {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

fn validate_description(description: &str) -> AppResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(AppError::bad_request(format!(
            "exhibition description longer than {} characters",
            MAX_DESCRIPTION_LEN
        )));
    }
    Ok(())
}

/// List all exhibitions
#[utoipa::path(
    get,
    path = "/api/exhibitions",
    tag = "exhibitions",
    responses(
        (status = 200, description = "All exhibitions in stored order", body = Vec<Exhibition>)
    )
)]
pub async fn list_exhibitions(State(state): State<AppState>) -> Json<Vec<Exhibition>> {
    Json(state.exhibitions.list())
}

/// Create a new exhibition
#[utoipa::path(
    post,
    path = "/api/exhibitions",
    tag = "exhibitions",
    request_body = CreateExhibitionRequest,
    responses(
        (status = 201, description = "The created exhibition", body = Exhibition),
        (status = 400, description = "Blank or over-long name/description")
    )
)]
pub async fn create_exhibition(
    State(state): State<AppState>,
    Json(request): Json<CreateExhibitionRequest>,
) -> AppResult<(StatusCode, Json<Exhibition>)> {
    validate_name(&request.name)?;
    validate_description(&request.description)?;
    let exhibition = state
        .exhibitions
        .create(request.name.trim(), &request.description)?;
    Ok((StatusCode::CREATED, Json(exhibition)))
}

/// Fetch one exhibition
#[utoipa::path(
    get,
    path = "/api/exhibitions/{id}",
    tag = "exhibitions",
    params(("id" = String, Path, description = "Exhibition id")),
    responses(
        (status = 200, description = "The exhibition", body = Exhibition),
        (status = 404, description = "Unknown exhibition")
    )
)]
pub async fn get_exhibition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Exhibition>> {
    match state.exhibitions.get(&id) {
        Some(exhibition) => Ok(Json(exhibition)),
        None => Err(AppError::not_found(format!("exhibition {} not found", id))),
    }
}

/// Update an exhibition's name and/or description
#[utoipa::path(
    patch,
    path = "/api/exhibitions/{id}",
    tag = "exhibitions",
    params(("id" = String, Path, description = "Exhibition id")),
    request_body = UpdateExhibitionRequest,
    responses(
        (status = 200, description = "The updated exhibition", body = Exhibition),
        (status = 400, description = "Blank or over-long name/description"),
        (status = 404, description = "Unknown exhibition")
    )
)]
pub async fn update_exhibition(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateExhibitionRequest>,
) -> AppResult<Json<Exhibition>> {
    if let Some(name) = &request.name {
        validate_name(name)?;
    }
    if let Some(description) = &request.description {
        validate_description(description)?;
    }
    match state.exhibitions.update(
        &id,
        request.name.as_deref().map(str::trim),
        request.description.as_deref(),
    )? {
        Some(exhibition) => Ok(Json(exhibition)),
        None => Err(AppError::not_found(format!("exhibition {} not found", id))),
    }
}

/// Delete an exhibition
#[utoipa::path(
    delete,
    path = "/api/exhibitions/{id}",
    tag = "exhibitions",
    params(("id" = String, Path, description = "Exhibition id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown exhibition")
    )
)]
pub async fn delete_exhibition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if state.exhibitions.delete(&id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("exhibition {} not found", id)))
    }
}

/// Add an artwork to an exhibition
///
/// Adding an artwork that is already present is a no-op, not an error.
#[utoipa::path(
    post,
    path = "/api/exhibitions/{id}/artworks",
    tag = "exhibitions",
    params(("id" = String, Path, description = "Exhibition id")),
    request_body = Artwork,
    responses(
        (status = 200, description = "The exhibition after the add", body = Exhibition),
        (status = 404, description = "Unknown exhibition")
    )
)]
pub async fn add_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(artwork): Json<Artwork>,
) -> AppResult<Json<Exhibition>> {
    match state.exhibitions.add_artwork(&id, artwork)? {
        Some(exhibition) => Ok(Json(exhibition)),
        None => Err(AppError::not_found(format!("exhibition {} not found", id))),
    }
}

/// Remove an artwork from an exhibition
#[utoipa::path(
    delete,
    path = "/api/exhibitions/{id}/artworks/{artwork_id}",
    tag = "exhibitions",
    params(
        ("id" = String, Path, description = "Exhibition id"),
        ("artwork_id" = String, Path, description = "Canonical artwork id")
    ),
    responses(
        (status = 200, description = "The exhibition after the removal", body = Exhibition),
        (status = 404, description = "Unknown exhibition")
    )
)]
pub async fn remove_artwork(
    State(state): State<AppState>,
    Path((id, artwork_id)): Path<(String, String)>,
) -> AppResult<Json<Exhibition>> {
    match state.exhibitions.remove_artwork(&id, &artwork_id)? {
        Some(exhibition) => Ok(Json(exhibition)),
        None => Err(AppError::not_found(format!("exhibition {} not found", id))),
    }
}

/// All exhibitions containing an artwork
#[utoipa::path(
    get,
    path = "/api/artworks/{id}/exhibitions",
    tag = "exhibitions",
    params(("id" = String, Path, description = "Canonical artwork id")),
    responses(
        (status = 200, description = "Exhibitions containing the artwork", body = Vec<Exhibition>)
    )
)]
pub async fn artwork_exhibitions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Exhibition>> {
    Json(state.exhibitions.exhibitions_containing(&id))
}

/// Export the whole exhibition collection
#[utoipa::path(
    get,
    path = "/api/exhibitions/export",
    tag = "exhibitions",
    responses(
        (status = 200, description = "The serialized collection", body = String, content_type = "application/json")
    )
)]
pub async fn export_exhibitions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let payload = state.exhibitions.export()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], payload))
}

/// Replace the whole exhibition collection with an exported payload
#[utoipa::path(
    post,
    path = "/api/exhibitions/import",
    tag = "exhibitions",
    request_body(content = String, content_type = "application/json"),
    responses(
        (status = 204, description = "Collection replaced"),
        (status = 400, description = "Payload rejected; existing collection untouched")
    )
)]
pub async fn import_exhibitions(
    State(state): State<AppState>,
    payload: String,
) -> AppResult<StatusCode> {
    if state.exhibitions.import(&payload) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::bad_request("import payload rejected"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validation_rejects_blank_and_over_long_names() {
        assert!(validate_name("Impressionists").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn description_validation_allows_empty_but_bounds_length() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LEN)).is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LEN + 1)).is_err());
    }
}
