use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Fee {
    pub fee_id: i64,
    pub athlete_id: i64,
    pub fee: Decimal,
    pub taken: Decimal,
    /// Stored independently; never derived from `fee` and `taken`.
    pub remainder: Decimal,
    pub starting_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Money columns live in TEXT columns, so the row mapping is written out by
// hand instead of derived.
impl<'r> FromRow<'r, SqliteRow> for Fee {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            fee_id: row.try_get("fee_id")?,
            athlete_id: row.try_get("athlete_id")?,
            fee: decimal_column(row, "fee")?,
            taken: decimal_column(row, "taken")?,
            remainder: decimal_column(row, "remainder")?,
            starting_date: row.try_get("starting_date")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

pub(crate) fn decimal_column(row: &SqliteRow, column: &str) -> Result<Decimal, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    raw.parse()
        .map_err(|source: rust_decimal::Error| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(source),
        })
}
