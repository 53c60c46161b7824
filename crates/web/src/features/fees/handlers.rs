use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::fee::{CreateFeeRequest, FeeResponse, UpdateFeeRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/core/fees",
    responses(
        (status = 200, description = "List all fees successfully", body = Vec<FeeResponse>)
    ),
    tag = "fees"
)]
pub async fn list_fees(State(db): State<Database>) -> Result<Response, WebError> {
    let fees = services::list_fees(db.pool()).await?;

    let response: Vec<FeeResponse> = fees.into_iter().map(FeeResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/core/fees/{id}",
    params(
        ("id" = i64, Path, description = "Fee ID")
    ),
    responses(
        (status = 200, description = "Fee found", body = FeeResponse),
        (status = 404, description = "Fee not found")
    ),
    tag = "fees"
)]
pub async fn get_fee(State(db): State<Database>, Path(id): Path<i64>) -> Result<Response, WebError> {
    let fee = services::get_fee(db.pool(), id).await?;

    Ok(Json(FeeResponse::from(fee)).into_response())
}

#[utoipa::path(
    post,
    path = "/core/fees",
    request_body = CreateFeeRequest,
    responses(
        (status = 201, description = "Fee created successfully", body = FeeResponse),
        (status = 400, description = "Validation error or unknown athlete")
    ),
    tag = "fees"
)]
pub async fn create_fee(
    State(db): State<Database>,
    Json(req): Json<CreateFeeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let fee = services::create_fee(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(FeeResponse::from(fee))).into_response())
}

#[utoipa::path(
    put,
    path = "/core/fees/{id}",
    params(
        ("id" = i64, Path, description = "Fee ID")
    ),
    request_body = UpdateFeeRequest,
    responses(
        (status = 200, description = "Fee updated successfully", body = FeeResponse),
        (status = 400, description = "Validation error or unknown athlete"),
        (status = 404, description = "Fee not found")
    ),
    tag = "fees"
)]
pub async fn update_fee(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(update_req): Json<UpdateFeeRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_fee(db.pool(), id, &update_req).await?;

    Ok(Json(FeeResponse::from(updated)).into_response())
}

/// PATCH shares the merge semantics of PUT; both accept partial payloads.
#[utoipa::path(
    patch,
    path = "/core/fees/{id}",
    params(
        ("id" = i64, Path, description = "Fee ID")
    ),
    request_body = UpdateFeeRequest,
    responses(
        (status = 200, description = "Fee updated successfully", body = FeeResponse),
        (status = 400, description = "Validation error or unknown athlete"),
        (status = 404, description = "Fee not found")
    ),
    tag = "fees"
)]
pub async fn partial_update_fee(
    state: State<Database>,
    id: Path<i64>,
    req: Json<UpdateFeeRequest>,
) -> Result<Response, WebError> {
    update_fee(state, id, req).await
}

#[utoipa::path(
    delete,
    path = "/core/fees/{id}",
    params(
        ("id" = i64, Path, description = "Fee ID")
    ),
    responses(
        (status = 204, description = "Fee deleted successfully"),
        (status = 404, description = "Fee not found")
    ),
    tag = "fees"
)]
pub async fn delete_fee(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_fee(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
