use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::athlete::{AthleteAdminFilter, AthleteResponse},
    dto::common::{PaginatedResponse, PaginationParams},
    dto::fee::{FeeAdminFilter, FeeAdminRow},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/admin/athletes",
    params(PaginationParams, AthleteAdminFilter),
    responses(
        (status = 200, description = "Athletes ordered by creation time", body = PaginatedResponse<AthleteResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "admin"
)]
pub async fn admin_list_athletes(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<AthleteAdminFilter>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let (athletes, total) = services::list_athletes(db.pool(), &filter, &pagination).await?;

    let data: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();
    let response = PaginatedResponse::new(data, pagination.page, pagination.page_size, total);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/admin/fees",
    params(PaginationParams, FeeAdminFilter),
    responses(
        (status = 200, description = "Fees ordered by period start, with the owning athlete's name", body = PaginatedResponse<FeeAdminRow>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "admin"
)]
pub async fn admin_list_fees(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<FeeAdminFilter>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let (rows, total) = services::list_fees(db.pool(), &filter, &pagination).await?;

    let response = PaginatedResponse::new(rows, pagination.page, pagination.page_size, total);

    Ok(Json(response).into_response())
}
