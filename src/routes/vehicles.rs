use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::vehicles::CreateVehicleRequest,
    error::AppResult,
    middleware::extract::{IdPath, ValidJson},
    models::Vehicle,
    response::MessageResponse,
    services::vehicle_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vehicle", get(list_vehicles).post(create_vehicle))
        .route("/vehicle/{id}", get(get_vehicle).delete(delete_vehicle))
}

#[utoipa::path(
    get,
    path = "/vehicle",
    responses(
        (status = 200, description = "List vehicles", body = Vec<Vehicle>)
    ),
    tag = "Vehicles"
)]
pub async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    Ok(Json(vehicle_service::list_vehicles(&state).await?))
}

#[utoipa::path(
    get,
    path = "/vehicle/{id}",
    params(
        ("id" = i64, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Get vehicle", body = Vehicle),
        (status = 404, description = "Vehicle not found", body = MessageResponse)
    ),
    tag = "Vehicles"
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<Json<Vehicle>> {
    Ok(Json(vehicle_service::get_vehicle(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/vehicle",
    request_body = CreateVehicleRequest,
    responses(
        (status = 200, description = "Created vehicle", body = Vehicle),
        (status = 400, description = "Missing or invalid fields", body = MessageResponse)
    ),
    tag = "Vehicles"
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateVehicleRequest>,
) -> AppResult<Json<Vehicle>> {
    Ok(Json(vehicle_service::create_vehicle(&state, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/vehicle/{id}",
    params(
        ("id" = i64, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Deleted vehicle", body = Vehicle),
        (status = 404, description = "Vehicle not found", body = MessageResponse)
    ),
    tag = "Vehicles"
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<Json<Vehicle>> {
    Ok(Json(vehicle_service::delete_vehicle(&state, id).await?))
}
