use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::planets::CreatePlanetRequest,
    error::AppResult,
    middleware::extract::{IdPath, ValidJson},
    models::Planet,
    response::MessageResponse,
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planet", get(list_planets).post(create_planet))
        .route("/planet/{id}", get(get_planet).delete(delete_planet))
}

#[utoipa::path(
    get,
    path = "/planet",
    responses(
        (status = 200, description = "List planets", body = Vec<Planet>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    Ok(Json(planet_service::list_planets(&state).await?))
}

#[utoipa::path(
    get,
    path = "/planet/{id}",
    params(
        ("id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 404, description = "Planet not found", body = MessageResponse)
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<Json<Planet>> {
    Ok(Json(planet_service::get_planet(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/planet",
    request_body = CreatePlanetRequest,
    responses(
        (status = 200, description = "Created planet", body = Planet),
        (status = 400, description = "Missing or invalid fields", body = MessageResponse)
    ),
    tag = "Planets"
)]
/// `created` is stamped with the server's current UTC time; a client value is ignored.
pub async fn create_planet(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreatePlanetRequest>,
) -> AppResult<Json<Planet>> {
    Ok(Json(planet_service::create_planet(&state, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/planet/{id}",
    params(
        ("id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Deleted planet", body = Planet),
        (status = 404, description = "Planet not found", body = MessageResponse)
    ),
    tag = "Planets"
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<Json<Planet>> {
    Ok(Json(planet_service::delete_planet(&state, id).await?))
}
