use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Response containing a stored athlete record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
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

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub last_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Father name must be between 1 and 255 characters"
    ))]
    pub father_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Current location must be between 1 and 255 characters"
    ))]
    pub current_location: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Permanent location must be between 1 and 255 characters"
    ))]
    pub permanent_location: String,

    /// Media path of the uploaded identity document, if any.
    #[validate(length(max = 500))]
    pub nic: Option<String>,

    #[validate(length(max = 500))]
    pub picture: Option<String>,

    #[validate(length(max = 500))]
    pub document: Option<String>,

    pub date_of_birth: NaiveDate,
}

/// Request payload for updating an existing athlete; absent fields keep
/// their stored values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub father_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub current_location: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub permanent_location: Option<String>,

    #[validate(length(max = 500))]
    pub nic: Option<String>,

    #[validate(length(max = 500))]
    pub picture: Option<String>,

    #[validate(length(max = 500))]
    pub document: Option<String>,

    pub date_of_birth: Option<NaiveDate>,
}

/// Search and filter parameters for the administrative athlete listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AthleteAdminFilter {
    /// Substring match against name, last name and father name.
    pub search: Option<String>,
    pub created_after: Option<NaiveDate>,
    pub created_before: Option<NaiveDate>,
}

impl From<crate::models::Athlete> for AthleteResponse {
    fn from(athlete: crate::models::Athlete) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            name: athlete.name,
            last_name: athlete.last_name,
            father_name: athlete.father_name,
            current_location: athlete.current_location,
            permanent_location: athlete.permanent_location,
            nic: athlete.nic,
            picture: athlete.picture,
            document: athlete.document,
            date_of_birth: athlete.date_of_birth,
            created_at: athlete.created_at,
            updated_at: athlete.updated_at,
        }
    }
}
