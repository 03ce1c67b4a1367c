#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use sea_orm::Database;
use serde_json::{Value, json};
use starwars_blog_api::{db::run_migrations, routes::create_app, state::AppState};
use tower::ServiceExt;

// Returns a migrated in-memory database wrapped in `AppState`.
pub async fn test_state() -> AppState {
    let orm = Database::connect("sqlite::memory:")
        .await
        .expect("sqlite connection");
    run_migrations(&orm).await.expect("migrations");
    AppState::new(orm)
}

pub async fn test_app() -> (Router, AppState) {
    let state = test_state().await;
    (create_app(state.clone()), state)
}

/// Sends one request through the router and decodes the JSON reply.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub fn id_of(value: &Value) -> i64 {
    value["id"].as_i64().expect("id field")
}

pub fn user_body(username: &str) -> Value {
    json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": "secret",
        "suscription_date": "2021-09-01"
    })
}

pub fn planet_body(name: &str) -> Value {
    json!({
        "name": name,
        "population": 200000,
        "climate": "arid",
        "terrain": "desert",
        "diameter": 10465,
        "rotation_period": 23,
        "orbital_period": 304,
        "gravity": "1 standard",
        "surface_water": 1
    })
}

pub fn character_body(name: &str) -> Value {
    json!({
        "name": name,
        "height": 172,
        "mass": 77,
        "hair_color": "blond",
        "age": 19,
        "homeworld": "Tatooine",
        "species": "Human"
    })
}

pub fn vehicle_body(name: &str) -> Value {
    json!({
        "name": name,
        "model": "Digger Crawler",
        "manufacturer": "Corellia Mining Corporation",
        "length": 36,
        "max_atmosphering_speed": 30,
        "passengers": 30,
        "cargo_capacity": 50000,
        "consumables": "2 months"
    })
}

pub async fn create(app: &Router, path: &str, body: Value) -> i64 {
    let (status, created) = post(app, path, body).await;
    assert_eq!(status, StatusCode::OK, "creating {path}: {created}");
    id_of(&created)
}
