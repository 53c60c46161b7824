use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::athlete::{AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/core/athletes",
    responses(
        (status = 200, description = "List all athletes successfully", body = Vec<AthleteResponse>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(State(db): State<Database>) -> Result<Response, WebError> {
    let athletes = services::list_athletes(db.pool()).await?;

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/core/athletes/{id}",
    params(
        ("id" = i64, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(db.pool(), id).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/core/athletes",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Json(req): Json<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let athlete = services::create_athlete(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(AthleteResponse::from(athlete))).into_response())
}

#[utoipa::path(
    put,
    path = "/core/athletes/{id}",
    params(
        ("id" = i64, Path, description = "Athlete ID")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(update_req): Json<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_athlete(db.pool(), id, &update_req).await?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

/// PATCH shares the merge semantics of PUT; both accept partial payloads.
#[utoipa::path(
    patch,
    path = "/core/athletes/{id}",
    params(
        ("id" = i64, Path, description = "Athlete ID")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn partial_update_athlete(
    state: State<Database>,
    id: Path<i64>,
    req: Json<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    update_athlete(state, id, req).await
}

#[utoipa::path(
    delete,
    path = "/core/athletes/{id}",
    params(
        ("id" = i64, Path, description = "Athlete ID")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully, owned fees cascade"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
