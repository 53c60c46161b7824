use sqlx::SqlitePool;
use storage::{
    dto::athlete::AthleteAdminFilter,
    dto::common::PaginationParams,
    dto::fee::{FeeAdminFilter, FeeAdminRow},
    error::Result,
    models::Athlete,
    repository::{athlete::AthleteRepository, fee::FeeRepository},
};

/// Filtered athlete page plus the total row count for the filters.
pub async fn list_athletes(
    pool: &SqlitePool,
    filter: &AthleteAdminFilter,
    pagination: &PaginationParams,
) -> Result<(Vec<Athlete>, i64)> {
    let repo = AthleteRepository::new(pool);

    let athletes = repo.admin_list(filter, pagination).await?;
    let total = repo.admin_count(filter).await?;

    Ok((athletes, total))
}

/// Filtered fee page plus the total row count for the filters.
pub async fn list_fees(
    pool: &SqlitePool,
    filter: &FeeAdminFilter,
    pagination: &PaginationParams,
) -> Result<(Vec<FeeAdminRow>, i64)> {
    let repo = FeeRepository::new(pool);

    let rows = repo.admin_list(filter, pagination).await?;
    let total = repo.admin_count(filter).await?;

    Ok((rows, total))
}
