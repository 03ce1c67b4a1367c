use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, PrimaryKeyTrait, TransactionTrait};

use crate::{
    entity::{
        Characters, FavoriteCharacters, FavoritePlanets, FavoriteVehicles, Planets, Users,
        Vehicles,
    },
    error::{AppError, AppResult, on_unique_violation},
    state::AppState,
};

/// An entity exposed through the list/get/create/delete endpoints.
pub trait Resource: EntityTrait {
    /// Capitalised singular used in messages, e.g. `"Planet"`.
    const NAME: &'static str;
    /// Message for a unique-key collision on insert.
    const CONFLICT: &'static str;
}

impl Resource for Users {
    const NAME: &'static str = "User";
    const CONFLICT: &'static str = "Username or email already taken";
}

impl Resource for Planets {
    const NAME: &'static str = "Planet";
    const CONFLICT: &'static str = "Planet already exists";
}

impl Resource for Characters {
    const NAME: &'static str = "Character";
    const CONFLICT: &'static str = "Character already exists";
}

impl Resource for Vehicles {
    const NAME: &'static str = "Vehicle";
    const CONFLICT: &'static str = "Vehicle already exists";
}

impl Resource for FavoritePlanets {
    const NAME: &'static str = "Favorite planet";
    const CONFLICT: &'static str = "Favorite already exists";
}

impl Resource for FavoriteCharacters {
    const NAME: &'static str = "Favorite character";
    const CONFLICT: &'static str = "Favorite already exists";
}

impl Resource for FavoriteVehicles {
    const NAME: &'static str = "Favorite vehicle";
    const CONFLICT: &'static str = "Favorite already exists";
}

pub fn not_found<E: Resource>() -> AppError {
    AppError::NotFound(format!("{} not found", E::NAME))
}

/// Narrows a path id to the storage key type. Ids outside the `i32` range cannot
/// name a stored row.
pub fn row_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

/// Every row, in storage order.
pub async fn list<E, T>(state: &AppState) -> AppResult<Vec<T>>
where
    E: Resource,
    T: From<E::Model>,
{
    let rows = E::find().all(&state.orm).await?;
    Ok(rows.into_iter().map(T::from).collect())
}

pub async fn get<E, T>(state: &AppState, id: i64) -> AppResult<T>
where
    E: Resource,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    T: From<E::Model>,
{
    let id = row_id(id).ok_or_else(not_found::<E>)?;
    E::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(T::from)
        .ok_or_else(not_found::<E>)
}

/// Inserts `active` in its own transaction and returns the stored row.
pub async fn insert<E, T>(state: &AppState, active: E::ActiveModel) -> AppResult<T>
where
    E: Resource,
    E::ActiveModel: Send,
    E::Model: IntoActiveModel<E::ActiveModel>,
    T: From<E::Model>,
{
    let txn = state.orm.begin().await?;
    let model = active
        .insert(&txn)
        .await
        .map_err(on_unique_violation(E::CONFLICT))?;
    txn.commit().await?;

    Ok(T::from(model))
}

/// Removes the row and returns it as it was before deletion.
pub async fn delete<E, T>(state: &AppState, id: i64) -> AppResult<T>
where
    E: Resource,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    T: From<E::Model>,
{
    let id = row_id(id).ok_or_else(not_found::<E>)?;
    let txn = state.orm.begin().await?;
    let model = E::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(not_found::<E>)?;

    E::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(resource = E::NAME, id, "deleted");
    Ok(T::from(model))
}
