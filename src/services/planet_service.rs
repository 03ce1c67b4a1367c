use chrono::Utc;
use sea_orm::{ActiveValue::NotSet, Set};

use crate::{
    dto::planets::CreatePlanetRequest,
    entity::{Planets, planets::ActiveModel},
    error::AppResult,
    models::Planet,
    services::resource_service,
    state::AppState,
};

pub async fn list_planets(state: &AppState) -> AppResult<Vec<Planet>> {
    resource_service::list::<Planets, Planet>(state).await
}

pub async fn get_planet(state: &AppState, id: i64) -> AppResult<Planet> {
    resource_service::get::<Planets, Planet>(state, id).await
}

pub async fn create_planet(state: &AppState, payload: CreatePlanetRequest) -> AppResult<Planet> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        population: Set(payload.population),
        climate: Set(payload.climate),
        terrain: Set(payload.terrain),
        diameter: Set(payload.diameter),
        rotation_period: Set(payload.rotation_period),
        orbital_period: Set(payload.orbital_period),
        gravity: Set(payload.gravity),
        surface_water: Set(payload.surface_water),
        created: Set(Utc::now()),
    };

    let planet: Planet = resource_service::insert::<Planets, Planet>(state, active).await?;
    tracing::info!(planet_id = planet.id, "planet created");
    Ok(planet)
}

pub async fn delete_planet(state: &AppState, id: i64) -> AppResult<Planet> {
    resource_service::delete::<Planets, Planet>(state, id).await
}
