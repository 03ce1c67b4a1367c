use serde::Deserialize;
use utoipa::ToSchema;

use super::RequiredFields;

/// A client-supplied `created` key is accepted and ignored; the server stamps the row.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlanetRequest {
    pub name: String,
    pub population: i64,
    pub climate: String,
    pub terrain: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub gravity: String,
    pub surface_water: i32,
}

impl RequiredFields for CreatePlanetRequest {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "population",
        "climate",
        "terrain",
        "diameter",
        "rotation_period",
        "orbital_period",
        "gravity",
        "surface_water",
    ];
}
