use sqlx::SqlitePool;
use storage::{
    dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest},
    error::Result,
    models::Athlete,
    repository::athlete::AthleteRepository,
};

/// List all athletes
pub async fn list_athletes(pool: &SqlitePool) -> Result<Vec<Athlete>> {
    let repo = AthleteRepository::new(pool);
    repo.list().await
}

/// Get athlete by ID
pub async fn get_athlete(pool: &SqlitePool, id: i64) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new athlete
pub async fn create_athlete(pool: &SqlitePool, request: &CreateAthleteRequest) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.create(request).await
}

/// Update an athlete
pub async fn update_athlete(
    pool: &SqlitePool,
    id: i64,
    request: &UpdateAthleteRequest,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Delete an athlete
pub async fn delete_athlete(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await
}
