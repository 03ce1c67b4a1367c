use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::characters::CreateCharacterRequest,
    error::AppResult,
    middleware::extract::{IdPath, ValidJson},
    models::Character,
    response::MessageResponse,
    services::character_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/character", get(list_characters).post(create_character))
        .route("/character/{id}", get(get_character).delete(delete_character))
}

#[utoipa::path(
    get,
    path = "/character",
    responses(
        (status = 200, description = "List characters", body = Vec<Character>)
    ),
    tag = "Characters"
)]
pub async fn list_characters(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    Ok(Json(character_service::list_characters(&state).await?))
}

#[utoipa::path(
    get,
    path = "/character/{id}",
    params(
        ("id" = i64, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Get character", body = Character),
        (status = 404, description = "Character not found", body = MessageResponse)
    ),
    tag = "Characters"
)]
pub async fn get_character(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<Json<Character>> {
    Ok(Json(character_service::get_character(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/character",
    request_body = CreateCharacterRequest,
    responses(
        (status = 200, description = "Created character", body = Character),
        (status = 400, description = "Missing or invalid fields", body = MessageResponse)
    ),
    tag = "Characters"
)]
pub async fn create_character(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateCharacterRequest>,
) -> AppResult<Json<Character>> {
    Ok(Json(character_service::create_character(&state, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/character/{id}",
    params(
        ("id" = i64, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Deleted character", body = Character),
        (status = 404, description = "Character not found", body = MessageResponse)
    ),
    tag = "Characters"
)]
pub async fn delete_character(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<Json<Character>> {
    Ok(Json(character_service::delete_character(&state, id).await?))
}
