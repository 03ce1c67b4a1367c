use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use super::RequiredFields;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// `YYYY-MM-DD`
    pub suscription_date: NaiveDate,
}

impl RequiredFields for CreateUserRequest {
    const FIELDS: &'static [&'static str] = &["username", "email", "password", "suscription_date"];
}
