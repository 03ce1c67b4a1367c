use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::favorites::UserFavorites,
    entity::{FavoriteCharacters, FavoritePlanets, FavoriteVehicles},
    error::AppResult,
    middleware::extract::IdPath,
    models::{FavoriteCharacter, FavoritePlanet, FavoriteVehicle},
    response::MessageResponse,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites/user/{user_id}", get(list_favorites))
        .route(
            "/favorite/user/{user_id}/planet/{planet_id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/favorite/user/{user_id}/character/{character_id}",
            post(add_favorite_character).delete(remove_favorite_character),
        )
        .route(
            "/favorite/user/{user_id}/vehicle/{vehicle_id}",
            post(add_favorite_vehicle).delete(remove_favorite_vehicle),
        )
}

#[utoipa::path(
    get,
    path = "/favorites/user/{user_id}",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites of the user", body = UserFavorites),
        (status = 404, description = "User not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<i64>,
) -> AppResult<Json<UserFavorites>> {
    Ok(Json(favorite_service::list_favorites(&state, user_id).await?))
}

#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/planet/{planet_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("planet_id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Added to favorites", body = FavoritePlanet),
        (status = 400, description = "Missing ids or duplicate favorite", body = MessageResponse),
        (status = 404, description = "User or planet not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    IdPath((user_id, planet_id)): IdPath<(i64, i64)>,
) -> AppResult<Json<FavoritePlanet>> {
    let favorite = favorite_service::add_favorite::<FavoritePlanets, FavoritePlanet>(
        &state, user_id, planet_id,
    )
    .await?;
    Ok(Json(favorite))
}

#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/planet/{planet_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("planet_id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 404, description = "Favorite not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    IdPath((user_id, planet_id)): IdPath<(i64, i64)>,
) -> AppResult<Json<MessageResponse>> {
    let message =
        favorite_service::remove_favorite::<FavoritePlanets>(&state, user_id, planet_id).await?;
    Ok(Json(message))
}

#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/character/{character_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("character_id" = i64, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Added to favorites", body = FavoriteCharacter),
        (status = 400, description = "Missing ids or duplicate favorite", body = MessageResponse),
        (status = 404, description = "User or character not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    IdPath((user_id, character_id)): IdPath<(i64, i64)>,
) -> AppResult<Json<FavoriteCharacter>> {
    let favorite = favorite_service::add_favorite::<FavoriteCharacters, FavoriteCharacter>(
        &state,
        user_id,
        character_id,
    )
    .await?;
    Ok(Json(favorite))
}

#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/character/{character_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("character_id" = i64, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 404, description = "Favorite not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    IdPath((user_id, character_id)): IdPath<(i64, i64)>,
) -> AppResult<Json<MessageResponse>> {
    let message =
        favorite_service::remove_favorite::<FavoriteCharacters>(&state, user_id, character_id)
            .await?;
    Ok(Json(message))
}

#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/vehicle/{vehicle_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("vehicle_id" = i64, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Added to favorites", body = FavoriteVehicle),
        (status = 400, description = "Missing ids or duplicate favorite", body = MessageResponse),
        (status = 404, description = "User or vehicle not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    IdPath((user_id, vehicle_id)): IdPath<(i64, i64)>,
) -> AppResult<Json<FavoriteVehicle>> {
    let favorite = favorite_service::add_favorite::<FavoriteVehicles, FavoriteVehicle>(
        &state, user_id, vehicle_id,
    )
    .await?;
    Ok(Json(favorite))
}

#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/vehicle/{vehicle_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("vehicle_id" = i64, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = MessageResponse),
        (status = 404, description = "Favorite not found", body = MessageResponse)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite_vehicle(
    State(state): State<AppState>,
    IdPath((user_id, vehicle_id)): IdPath<(i64, i64)>,
) -> AppResult<Json<MessageResponse>> {
    let message =
        favorite_service::remove_favorite::<FavoriteVehicles>(&state, user_id, vehicle_id).await?;
    Ok(Json(message))
}
