use sqlx::SqlitePool;

use crate::dto::common::PaginationParams;
use crate::dto::fee::{CreateFeeRequest, FeeAdminFilter, FeeAdminRow, UpdateFeeRequest};
use crate::error::{Result, StorageError};
use crate::models::Fee;

const FEE_COLUMNS: &str =
    "fee_id, athlete_id, fee, taken, remainder, starting_date, created_at, updated_at";

pub struct FeeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FeeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all fees in insertion order
    pub async fn list(&self) -> Result<Vec<Fee>> {
        let fees =
            sqlx::query_as::<_, Fee>(&format!("SELECT {FEE_COLUMNS} FROM fees ORDER BY fee_id"))
                .fetch_all(self.pool)
                .await?;

        Ok(fees)
    }

    /// Find fee by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Fee> {
        let fee = sqlx::query_as::<_, Fee>(&format!(
            "SELECT {FEE_COLUMNS} FROM fees WHERE fee_id = ?1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(fee)
    }

    /// Create a new fee; a dangling athlete reference surfaces as
    /// [`StorageError::ForeignKeyViolation`].
    pub async fn create(&self, req: &CreateFeeRequest) -> Result<Fee> {
        let fee = sqlx::query_as::<_, Fee>(&format!(
            "INSERT INTO fees (athlete_id, fee, taken, remainder, starting_date) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING {FEE_COLUMNS}"
        ))
        .bind(req.athlete_id)
        .bind(req.fee.to_string())
        .bind(req.taken.to_string())
        .bind(req.remainder.to_string())
        .bind(req.starting_date)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from_sqlx)?;

        Ok(fee)
    }

    /// Update an existing fee; fields absent from the request keep the
    /// stored values.
    pub async fn update(&self, id: i64, existing: &Fee, req: &UpdateFeeRequest) -> Result<Fee> {
        let athlete_id = req.athlete_id.unwrap_or(existing.athlete_id);
        let amount = req.fee.unwrap_or(existing.fee);
        let taken = req.taken.unwrap_or(existing.taken);
        let remainder = req.remainder.unwrap_or(existing.remainder);
        let starting_date = req.starting_date.unwrap_or(existing.starting_date);

        let fee = sqlx::query_as::<_, Fee>(&format!(
            "UPDATE fees \
             SET athlete_id = ?2, \
                 fee = ?3, \
                 taken = ?4, \
                 remainder = ?5, \
                 starting_date = ?6, \
                 updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now') \
             WHERE fee_id = ?1 \
             RETURNING {FEE_COLUMNS}"
        ))
        .bind(id)
        .bind(athlete_id)
        .bind(amount.to_string())
        .bind(taken.to_string())
        .bind(remainder.to_string())
        .bind(starting_date)
        .fetch_optional(self.pool)
        .await
        .map_err(StorageError::from_sqlx)?
        .ok_or(StorageError::NotFound)?;

        Ok(fee)
    }

    /// Delete a fee by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM fees WHERE fee_id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Administrative listing ordered by the fee period start, joined with
    /// the owning athlete's name for display and search.
    pub async fn admin_list(
        &self,
        filter: &FeeAdminFilter,
        pagination: &PaginationParams,
    ) -> Result<Vec<FeeAdminRow>> {
        let rows = sqlx::query_as::<_, FeeAdminRow>(
            "SELECT f.fee_id, f.athlete_id, a.name AS athlete_name, f.fee, f.taken, \
                    f.remainder, f.starting_date, f.created_at, f.updated_at \
             FROM fees f \
             JOIN athletes a ON a.athlete_id = f.athlete_id \
             WHERE (?1 IS NULL \
                    OR a.name LIKE '%' || ?1 || '%' \
                    OR a.last_name LIKE '%' || ?1 || '%') \
               AND (?2 IS NULL OR f.starting_date >= ?2) \
               AND (?3 IS NULL OR f.starting_date <= ?3) \
             ORDER BY f.starting_date, f.fee_id \
             LIMIT ?4 OFFSET ?5",
        )
        .bind(filter.search.as_deref())
        .bind(filter.starting_after)
        .bind(filter.starting_before)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Total row count for the filters of [`Self::admin_list`].
    pub async fn admin_count(&self, filter: &FeeAdminFilter) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) \
             FROM fees f \
             JOIN athletes a ON a.athlete_id = f.athlete_id \
             WHERE (?1 IS NULL \
                    OR a.name LIKE '%' || ?1 || '%' \
                    OR a.last_name LIKE '%' || ?1 || '%') \
               AND (?2 IS NULL OR f.starting_date >= ?2) \
               AND (?3 IS NULL OR f.starting_date <= ?3)",
        )
        .bind(filter.search.as_deref())
        .bind(filter.starting_after)
        .bind(filter.starting_before)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
