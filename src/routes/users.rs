use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::users::CreateUserRequest,
    error::AppResult,
    middleware::extract::{IdPath, ValidJson},
    models::User,
    response::MessageResponse,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(list_users).post(create_user))
        .route("/user/{id}", get(get_user).delete(delete_user))
}

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "List users", body = Vec<User>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(user_service::list_users(&state).await?))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = User),
        (status = 404, description = "User not found", body = MessageResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<Json<User>> {
    Ok(Json(user_service::get_user(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Missing or invalid fields", body = MessageResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> AppResult<Json<User>> {
    Ok(Json(user_service::create_user(&state, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 404, description = "User not found", body = MessageResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> AppResult<Json<User>> {
    Ok(Json(user_service::delete_user(&state, id).await?))
}
