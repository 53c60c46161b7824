use sqlx::SqlitePool;

use crate::dto::athlete::{AthleteAdminFilter, CreateAthleteRequest, UpdateAthleteRequest};
use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

const ATHLETE_COLUMNS: &str = "athlete_id, name, last_name, father_name, current_location, \
     permanent_location, nic, picture, document, date_of_birth, created_at, updated_at";

pub struct AthleteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all athletes in insertion order
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes ORDER BY athlete_id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE athlete_id = ?1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "INSERT INTO athletes (name, last_name, father_name, current_location, \
                 permanent_location, nic, picture, document, date_of_birth) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) \
             RETURNING {ATHLETE_COLUMNS}"
        ))
        .bind(&req.name)
        .bind(&req.last_name)
        .bind(&req.father_name)
        .bind(&req.current_location)
        .bind(&req.permanent_location)
        .bind(req.nic.as_deref())
        .bind(req.picture.as_deref())
        .bind(req.document.as_deref())
        .bind(req.date_of_birth)
        .fetch_one(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Update an existing athlete; fields absent from the request keep the
    /// stored values. `created_at` is never touched, `updated_at` always is.
    pub async fn update(
        &self,
        id: i64,
        existing: &Athlete,
        req: &UpdateAthleteRequest,
    ) -> Result<Athlete> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let last_name = req.last_name.as_ref().unwrap_or(&existing.last_name);
        let father_name = req.father_name.as_ref().unwrap_or(&existing.father_name);
        let current_location = req
            .current_location
            .as_ref()
            .unwrap_or(&existing.current_location);
        let permanent_location = req
            .permanent_location
            .as_ref()
            .unwrap_or(&existing.permanent_location);
        let nic = req.nic.as_ref().or(existing.nic.as_ref());
        let picture = req.picture.as_ref().or(existing.picture.as_ref());
        let document = req.document.as_ref().or(existing.document.as_ref());
        let date_of_birth = req.date_of_birth.unwrap_or(existing.date_of_birth);

        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "UPDATE athletes \
             SET name = ?2, \
                 last_name = ?3, \
                 father_name = ?4, \
                 current_location = ?5, \
                 permanent_location = ?6, \
                 nic = ?7, \
                 picture = ?8, \
                 document = ?9, \
                 date_of_birth = ?10, \
                 updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now') \
             WHERE athlete_id = ?1 \
             RETURNING {ATHLETE_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(last_name)
        .bind(father_name)
        .bind(current_location)
        .bind(permanent_location)
        .bind(nic)
        .bind(picture)
        .bind(document)
        .bind(date_of_birth)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Delete an athlete by ID; fees cascade at the database level.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Administrative listing ordered by creation time, with substring
    /// search over the name fields and a creation-date window.
    pub async fn admin_list(
        &self,
        filter: &AthleteAdminFilter,
        pagination: &PaginationParams,
    ) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes \
             WHERE (?1 IS NULL \
                    OR name LIKE '%' || ?1 || '%' \
                    OR last_name LIKE '%' || ?1 || '%' \
                    OR father_name LIKE '%' || ?1 || '%') \
               AND (?2 IS NULL OR date(created_at) >= ?2) \
               AND (?3 IS NULL OR date(created_at) <= ?3) \
             ORDER BY created_at, athlete_id \
             LIMIT ?4 OFFSET ?5"
        ))
        .bind(filter.search.as_deref())
        .bind(filter.created_after)
        .bind(filter.created_before)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Total row count for the filters of [`Self::admin_list`].
    pub async fn admin_count(&self, filter: &AthleteAdminFilter) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM athletes \
             WHERE (?1 IS NULL \
                    OR name LIKE '%' || ?1 || '%' \
                    OR last_name LIKE '%' || ?1 || '%' \
                    OR father_name LIKE '%' || ?1 || '%') \
               AND (?2 IS NULL OR date(created_at) >= ?2) \
               AND (?3 IS NULL OR date(created_at) <= ?3)",
        )
        .bind(filter.search.as_deref())
        .bind(filter.created_after)
        .bind(filter.created_before)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
