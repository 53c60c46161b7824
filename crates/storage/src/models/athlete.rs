use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: i64,
    pub name: String,
    pub last_name: String,
    pub father_name: String,
    pub current_location: String,
    pub permanent_location: String,
    pub nic: Option<String>,
    pub picture: Option<String>,
    pub document: Option<String>,
    pub date_of_birth: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
