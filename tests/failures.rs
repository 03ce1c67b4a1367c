mod common;

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode, header},
    routing::post,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, EntityTrait, PaginatorTrait, Set,
    TransactionTrait,
};
use serde_json::{Value, json};
use starwars_blog_api::{
    entity::{Planets, planets},
    error::AppResult,
    middleware::limit::BODY_LIMIT,
    models::Planet,
    routes::with_error_handling,
    state::AppState,
};
use tower::ServiceExt;

use common::{
    create, delete, get, post_empty, send, test_app, test_state, user_body, vehicle_body,
};

fn internal_error() -> Value {
    json!({ "message": "Internal server error" })
}

fn hoth() -> planets::ActiveModel {
    planets::ActiveModel {
        id: NotSet,
        name: Set("Hoth".into()),
        population: Set(0),
        climate: Set("frozen".into()),
        terrain: Set("tundra".into()),
        diameter: Set(7200),
        rotation_period: Set(23),
        orbital_period: Set(549),
        gravity: Set("1.1 standard".into()),
        surface_water: Set(100),
        created: Set(Utc::now()),
    }
}

// Writes a planet, then hits a failing statement before commit.
async fn insert_then_fail(State(state): State<AppState>) -> AppResult<Json<Planet>> {
    let txn = state.orm.begin().await?;
    let planet = hoth().insert(&txn).await?;
    txn.execute_unprepared("SELECT * FROM starships").await?;
    txn.commit().await?;
    Ok(Json(Planet::from(planet)))
}

async fn insert_then_panic(State(state): State<AppState>) -> AppResult<Json<Planet>> {
    let txn = state.orm.begin().await?;
    hoth().insert(&txn).await?;
    panic!("planet write interrupted");
}

async fn planet_rows(state: &AppState) -> u64 {
    Planets::find().count(&state.orm).await.expect("count planets")
}

#[tokio::test]
async fn wrong_methods_render_json_405() {
    let (app, _state) = test_app().await;

    for (method, uri) in [
        (Method::PUT, "/planet/1"),
        (Method::PATCH, "/user"),
        (Method::GET, "/favorite/user/1/planet/1"),
    ] {
        let (status, body) = send(&app, method.clone(), uri, None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(
            body,
            json!({ "message": format!("Method {method} not allowed on {uri}") })
        );
    }
}

#[tokio::test]
async fn oversized_bodies_render_json_413() {
    let (app, state) = test_app().await;
    let payload = "x".repeat(BODY_LIMIT + 1);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/planet")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["message"], "Request body is too large");
    assert_eq!(planet_rows(&state).await, 0);
}

#[tokio::test]
async fn storage_failures_render_generic_500() {
    let (app, state) = test_app().await;
    let user = create(&app, "/user", user_body("luke")).await;
    let vehicle = create(&app, "/vehicle", vehicle_body("Snowspeeder")).await;
    let uri = format!("/favorite/user/{user}/vehicle/{vehicle}");

    state
        .orm
        .execute_unprepared("DROP TABLE favorite_vehicles")
        .await
        .expect("drop table");

    let (status, body) = post_empty(&app, &uri).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, internal_error());

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, internal_error());

    let (status, body) = get(&app, &format!("/favorites/user/{user}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, internal_error());

    // The connection stays usable after the failed transactions.
    let (status, _) = get(&app, &format!("/user/{user}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn failed_mutation_leaves_no_partial_write() {
    let state = test_state().await;
    let app = with_error_handling(Router::new().route("/faulty", post(insert_then_fail)))
        .with_state(state.clone());

    let (status, body) = post_empty(&app, "/faulty").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, internal_error());
    assert_eq!(planet_rows(&state).await, 0);
}

#[tokio::test]
async fn panicking_handler_renders_500_and_rolls_back() {
    let state = test_state().await;
    let app = with_error_handling(Router::new().route("/panicky", post(insert_then_panic)))
        .with_state(state.clone());

    let (status, body) = post_empty(&app, "/panicky").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, internal_error());
    assert_eq!(planet_rows(&state).await, 0);
}
