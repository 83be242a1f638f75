use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Museum Search & Exhibitions API",
        description = "Combined artwork search across the Met and Harvard Art Museums collections, plus user-curated exhibitions"
    ),
    tags(
        (name = "search", description = "Cross-museum artwork search"),
        (name = "exhibitions", description = "User-curated exhibitions")
    )
)]
pub struct ApiDoc;
