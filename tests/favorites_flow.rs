mod common;

use axum::http::StatusCode;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};
use serde_json::json;
use starwars_blog_api::{
    entity::{FavoritePlanets, favorite_planets},
    error::AppError,
    models::FavoriteCharacter,
    services::favorite_service,
    state::AppState,
};

use common::{
    character_body, create, delete, get, id_of, planet_body, post_empty, test_app, test_state,
    user_body, vehicle_body,
};

async fn favorite_planet_rows(state: &AppState, user_id: i64, planet_id: i64) -> u64 {
    FavoritePlanets::find()
        .filter(favorite_planets::Column::UserId.eq(user_id as i32))
        .filter(favorite_planets::Column::PlanetId.eq(planet_id as i32))
        .count(&state.orm)
        .await
        .expect("count favorites")
}

#[tokio::test]
async fn second_create_of_the_same_favorite_is_rejected() {
    let (app, state) = test_app().await;
    let user = create(&app, "/user", user_body("luke")).await;
    let planet = create(&app, "/planet", planet_body("Tatooine")).await;
    let uri = format!("/favorite/user/{user}/planet/{planet}");

    let (status, favorite) = post_empty(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(favorite["user_id"], json!(user));
    assert_eq!(favorite["planet_id"], json!(planet));

    let (status, body) = post_empty(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Favorite already exists");

    assert_eq!(favorite_planet_rows(&state, user, planet).await, 1);
}

#[tokio::test]
async fn favorites_need_an_existing_user_and_target() {
    let (app, _state) = test_app().await;
    let user = create(&app, "/user", user_body("luke")).await;
    let vehicle = create(&app, "/vehicle", vehicle_body("Sand Crawler")).await;

    let (status, body) = post_empty(&app, &format!("/favorite/user/{user}/planet/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User or planet not found");

    let (status, body) = post_empty(&app, &format!("/favorite/user/42/vehicle/{vehicle}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User or vehicle not found");
}

#[tokio::test]
async fn non_positive_ids_are_missing_parameters() {
    let (app, _state) = test_app().await;

    let (status, body) = post_empty(&app, "/favorite/user/0/character/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "You need to specify the user_id and character_id"
    );

    let (status, _) = post_empty(&app, "/favorite/user/1/character/-3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ids_beyond_storage_range_are_not_found() {
    let (app, _state) = test_app().await;

    let (status, body) = post_empty(&app, "/favorite/user/99999999999/planet/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User or planet not found");

    let (status, body) = delete(&app, "/favorite/user/1/planet/99999999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite planet not found");

    let (status, body) = get(&app, "/favorites/user/99999999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn delete_then_recreate_yields_a_new_row() {
    let (app, _state) = test_app().await;
    let user = create(&app, "/user", user_body("leia")).await;
    let character = create(&app, "/character", character_body("Han Solo")).await;
    let uri = format!("/favorite/user/{user}/character/{character}");

    let (_, first) = post_empty(&app, &uri).await;

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Favorite character deleted" }));

    let (status, second) = post_empty(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(id_of(&first), id_of(&second));
}

#[tokio::test]
async fn deleting_an_absent_favorite_is_not_found() {
    let (app, _state) = test_app().await;

    let (status, body) = delete(&app, "/favorite/user/1/vehicle/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite vehicle not found");
}

#[tokio::test]
async fn aggregation_joins_every_favorite_kind() {
    let (app, _state) = test_app().await;
    let user = create(&app, "/user", user_body("luke")).await;
    let other = create(&app, "/user", user_body("vader")).await;
    let planet = create(&app, "/planet", planet_body("Dagobah")).await;
    let character = create(&app, "/character", character_body("Yoda")).await;
    let vehicle = create(&app, "/vehicle", vehicle_body("X-34 landspeeder")).await;

    let planet_uri = format!("/favorite/user/{user}/planet/{planet}");
    let (_, fav_planet) = post_empty(&app, &planet_uri).await;
    post_empty(&app, &format!("/favorite/user/{user}/character/{character}")).await;
    post_empty(&app, &format!("/favorite/user/{user}/vehicle/{vehicle}")).await;
    post_empty(&app, &format!("/favorite/user/{other}/planet/{planet}")).await;

    let (status, body) = get(&app, &format!("/favorites/user/{user}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "luke");

    let planets = body["planets"].as_array().expect("planets");
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0]["favorite_id"], fav_planet["id"]);
    assert_eq!(planets[0]["id"], json!(planet));
    assert_eq!(planets[0]["name"], "Dagobah");

    assert_eq!(body["characters"][0]["name"], "Yoda");
    assert_eq!(body["vehicles"][0]["name"], "X-34 landspeeder");
}

#[tokio::test]
async fn aggregation_requires_an_existing_user() {
    let (app, _state) = test_app().await;

    let (status, body) = get(&app, "/favorites/user/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn orphaned_favorites_are_kept_and_skipped() {
    let (app, state) = test_app().await;
    let user = create(&app, "/user", user_body("luke")).await;
    let planet = create(&app, "/planet", planet_body("Alderaan")).await;
    post_empty(&app, &format!("/favorite/user/{user}/planet/{planet}")).await;

    let (status, _) = delete(&app, &format!("/planet/{planet}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, &format!("/favorites/user/{user}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["planets"], json!([]));
    assert_eq!(favorite_planet_rows(&state, user, planet).await, 1);

    let (status, _) = delete(&app, &format!("/user/{user}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, &format!("/favorites/user/{user}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(favorite_planet_rows(&state, user, planet).await, 1);
}

#[tokio::test]
async fn storage_rejects_duplicate_pairs() {
    let state = test_state().await;

    let link = || favorite_planets::ActiveModel {
        id: NotSet,
        user_id: Set(1),
        planet_id: Set(1),
    };
    link().insert(&state.orm).await.expect("first link");

    let err = link()
        .insert(&state.orm)
        .await
        .expect_err("duplicate pair must fail");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
}

#[tokio::test]
async fn service_adds_and_removes_character_favorites() {
    let (app, state) = test_app().await;
    let user = create(&app, "/user", user_body("rey")).await;
    let character = create(&app, "/character", character_body("BB-8")).await;

    let favorite: FavoriteCharacter = favorite_service::add_favorite::<
        starwars_blog_api::entity::FavoriteCharacters,
        FavoriteCharacter,
    >(&state, user, character)
    .await
    .expect("favorite added");
    assert_eq!(i64::from(favorite.user_id), user);
    assert_eq!(i64::from(favorite.character_id), character);

    let again = favorite_service::add_favorite::<
        starwars_blog_api::entity::FavoriteCharacters,
        FavoriteCharacter,
    >(&state, user, character)
    .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    let removed = favorite_service::remove_favorite::<
        starwars_blog_api::entity::FavoriteCharacters,
    >(&state, user, character)
    .await
    .expect("favorite removed");
    assert_eq!(removed.message, "Favorite character deleted");

    let favorites = favorite_service::list_favorites(&state, user)
        .await
        .expect("favorites");
    assert!(favorites.characters.is_empty());
}
