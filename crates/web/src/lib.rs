use std::path::Path;

use axum::{Router, response::Redirect, routing::get};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "gym-management-system",
        description = "CRUD API for gym athletes and their fees"
    ),
    paths(
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::partial_update_athlete,
        features::athletes::handlers::delete_athlete,
        features::fees::handlers::list_fees,
        features::fees::handlers::get_fee,
        features::fees::handlers::create_fee,
        features::fees::handlers::update_fee,
        features::fees::handlers::partial_update_fee,
        features::fees::handlers::delete_fee,
        features::admin::handlers::admin_list_athletes,
        features::admin::handlers::admin_list_fees,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::fee::CreateFeeRequest,
            storage::dto::fee::UpdateFeeRequest,
            storage::dto::fee::FeeResponse,
            storage::dto::fee::FeeAdminRow,
            storage::dto::common::PaginationMeta,
            storage::dto::common::PaginatedResponse<storage::dto::athlete::AthleteResponse>,
            storage::dto::common::PaginatedResponse<storage::dto::fee::FeeAdminRow>,
            storage::models::Athlete,
            storage::models::Fee,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete CRUD endpoints"),
        (name = "fees", description = "Fee CRUD endpoints"),
        (name = "admin", description = "Read-only administrative listings"),
    )
)]
pub struct ApiDoc;

/// Assemble the application router: CRUD resources under `/core`,
/// administrative listings under `/admin`, Swagger UI under `/swagger` and
/// uploaded media under `/media`.
pub fn app(db: Database, media_root: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest("/core/athletes", features::athletes::routes::routes())
        .nest("/core/fees", features::fees::routes::routes())
        .nest("/admin", features::admin::routes::routes())
        .with_state(db);

    Router::new()
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(|| async { Redirect::temporary("/swagger") }))
        .nest_service("/media", ServeDir::new(media_root))
        .merge(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
