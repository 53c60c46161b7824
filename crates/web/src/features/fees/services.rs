use sqlx::SqlitePool;
use storage::{
    dto::fee::{CreateFeeRequest, UpdateFeeRequest},
    error::Result,
    models::Fee,
    repository::fee::FeeRepository,
};

/// List all fees
pub async fn list_fees(pool: &SqlitePool) -> Result<Vec<Fee>> {
    let repo = FeeRepository::new(pool);
    repo.list().await
}

/// Get fee by ID
pub async fn get_fee(pool: &SqlitePool, id: i64) -> Result<Fee> {
    let repo = FeeRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new fee
pub async fn create_fee(pool: &SqlitePool, request: &CreateFeeRequest) -> Result<Fee> {
    let repo = FeeRepository::new(pool);
    repo.create(request).await
}

/// Update a fee
pub async fn update_fee(pool: &SqlitePool, id: i64, request: &UpdateFeeRequest) -> Result<Fee> {
    let repo = FeeRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Delete a fee
pub async fn delete_fee(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = FeeRepository::new(pool);
    repo.delete(id).await
}
