use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveValue::NotSet, Set};

use crate::{
    dto::users::CreateUserRequest,
    entity::{Users, users::ActiveModel},
    error::{AppError, AppResult},
    models::User,
    services::resource_service,
    state::AppState,
};

pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    resource_service::list::<Users, User>(state).await
}

pub async fn get_user(state: &AppState, id: i64) -> AppResult<User> {
    resource_service::get::<Users, User>(state, id).await
}

pub async fn create_user(state: &AppState, payload: CreateUserRequest) -> AppResult<User> {
    let CreateUserRequest {
        username,
        email,
        password,
        suscription_date,
    } = payload;

    let password = hash_password(&password)?;
    let active = ActiveModel {
        id: NotSet,
        username: Set(username),
        email: Set(email),
        password: Set(password),
        suscription_date: Set(suscription_date),
        is_active: Set(true),
    };

    let user: User = resource_service::insert::<Users, User>(state, active).await?;
    tracing::info!(user_id = user.id, "user created");
    Ok(user)
}

pub async fn delete_user(state: &AppState, id: i64) -> AppResult<User> {
    resource_service::delete::<Users, User>(state, id).await
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}
