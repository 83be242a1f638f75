use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{openapi::ApiDoc, state::AppState};

use super::handlers;

pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::search_artworks))
        .routes(routes!(handlers::get_artwork))
        .routes(routes!(handlers::artwork_exhibitions))
        .routes(routes!(
            handlers::list_exhibitions,
            handlers::create_exhibition
        ))
        .routes(routes!(handlers::export_exhibitions))
        .routes(routes!(handlers::import_exhibitions))
        .routes(routes!(
            handlers::get_exhibition,
            handlers::update_exhibition,
            handlers::delete_exhibition
        ))
        .routes(routes!(handlers::add_artwork))
        .routes(routes!(handlers::remove_artwork))
        .with_state(state)
        .split_for_parts();

    (router, api)
}
