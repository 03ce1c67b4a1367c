use serde::Deserialize;
use utoipa::ToSchema;

use super::RequiredFields;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub age: i32,
    pub homeworld: String,
    pub species: String,
}

impl RequiredFields for CreateCharacterRequest {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "height",
        "mass",
        "hair_color",
        "age",
        "homeworld",
        "species",
    ];
}
