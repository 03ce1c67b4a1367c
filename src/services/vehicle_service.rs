use sea_orm::{ActiveValue::NotSet, Set};

use crate::{
    dto::vehicles::CreateVehicleRequest,
    entity::{Vehicles, vehicles::ActiveModel},
    error::AppResult,
    models::Vehicle,
    services::resource_service,
    state::AppState,
};

pub async fn list_vehicles(state: &AppState) -> AppResult<Vec<Vehicle>> {
    resource_service::list::<Vehicles, Vehicle>(state).await
}

pub async fn get_vehicle(state: &AppState, id: i64) -> AppResult<Vehicle> {
    resource_service::get::<Vehicles, Vehicle>(state, id).await
}

pub async fn create_vehicle(state: &AppState, payload: CreateVehicleRequest) -> AppResult<Vehicle> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        model: Set(payload.model),
        manufacturer: Set(payload.manufacturer),
        length: Set(payload.length),
        max_atmosphering_speed: Set(payload.max_atmosphering_speed),
        passengers: Set(payload.passengers),
        cargo_capacity: Set(payload.cargo_capacity),
        consumables: Set(payload.consumables),
    };

    let vehicle: Vehicle = resource_service::insert::<Vehicles, Vehicle>(state, active).await?;
    tracing::info!(vehicle_id = vehicle.id, "vehicle created");
    Ok(vehicle)
}

pub async fn delete_vehicle(state: &AppState, id: i64) -> AppResult<Vehicle> {
    resource_service::delete::<Vehicles, Vehicle>(state, id).await
}
