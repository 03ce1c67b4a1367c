use serde::Deserialize;
use utoipa::ToSchema;

use super::RequiredFields;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVehicleRequest {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub length: i32,
    pub max_atmosphering_speed: i32,
    pub passengers: i32,
    pub cargo_capacity: i64,
    pub consumables: String,
}

impl RequiredFields for CreateVehicleRequest {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "model",
        "manufacturer",
        "length",
        "max_atmosphering_speed",
        "passengers",
        "cargo_capacity",
        "consumables",
    ];
}
