use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::fee::decimal_column;

/// Response containing a stored fee record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeeResponse {
    pub fee_id: i64,
    pub athlete_id: i64,
    pub fee: Decimal,
    pub taken: Decimal,
    pub remainder: Decimal,
    pub starting_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request payload for creating a new fee
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFeeRequest {
    /// Must reference an existing athlete.
    pub athlete_id: i64,

    #[validate(custom(function = "validate_money"))]
    pub fee: Decimal,

    #[validate(custom(function = "validate_money"))]
    pub taken: Decimal,

    /// Accepted verbatim; the service never derives it from `fee` and
    /// `taken`.
    #[validate(custom(function = "validate_money"))]
    pub remainder: Decimal,

    pub starting_date: NaiveDate,
}

/// Request payload for updating an existing fee; absent fields keep their
/// stored values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFeeRequest {
    pub athlete_id: Option<i64>,

    #[validate(custom(function = "validate_money"))]
    pub fee: Option<Decimal>,

    #[validate(custom(function = "validate_money"))]
    pub taken: Option<Decimal>,

    #[validate(custom(function = "validate_money"))]
    pub remainder: Option<Decimal>,

    pub starting_date: Option<NaiveDate>,
}

/// Search and filter parameters for the administrative fee listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FeeAdminFilter {
    /// Substring match against the owning athlete's name and last name.
    pub search: Option<String>,
    pub starting_after: Option<NaiveDate>,
    pub starting_before: Option<NaiveDate>,
}

/// Fee row joined with the owning athlete's name, as shown in the
/// administrative listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeeAdminRow {
    pub fee_id: i64,
    pub athlete_id: i64,
    pub athlete_name: String,
    pub fee: Decimal,
    pub taken: Decimal,
    pub remainder: Decimal,
    pub starting_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl<'r> FromRow<'r, SqliteRow> for FeeAdminRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            fee_id: row.try_get("fee_id")?,
            athlete_id: row.try_get("athlete_id")?,
            athlete_name: row.try_get("athlete_name")?,
            fee: decimal_column(row, "fee")?,
            taken: decimal_column(row, "taken")?,
            remainder: decimal_column(row, "remainder")?,
            starting_date: row.try_get("starting_date")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

// Money fields carry at most 10 digits with 2 of them after the decimal
// point, so the integral part is capped at 10^8.
fn validate_money(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.scale() > 2 {
        return Err(validator::ValidationError::new("too_many_decimal_places"));
    }
    if value.abs() >= Decimal::from(100_000_000) {
        return Err(validator::ValidationError::new("too_many_digits"));
    }
    Ok(())
}

impl From<crate::models::Fee> for FeeResponse {
    fn from(fee: crate::models::Fee) -> Self {
        Self {
            fee_id: fee.fee_id,
            athlete_id: fee.athlete_id,
            fee: fee.fee,
            taken: fee.taken,
            remainder: fee.remainder,
            starting_date: fee.starting_date,
            created_at: fee.created_at,
            updated_at: fee.updated_at,
        }
    }
}
