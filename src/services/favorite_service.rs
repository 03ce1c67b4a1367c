use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, Related, Set, TransactionTrait,
};

use crate::{
    dto::favorites::{FavoriteEntry, UserFavorites},
    entity::{
        Characters, FavoriteCharacters, FavoritePlanets, FavoriteVehicles, Planets, Users,
        Vehicles, favorite_characters, favorite_planets, favorite_vehicles,
    },
    error::{AppError, AppResult, on_unique_violation},
    models::{Character, Planet, User, Vehicle},
    response::MessageResponse,
    services::resource_service::{self, Resource, row_id},
    state::AppState,
};

/// A join table marking a [`Resource`] as one of a user's favorites.
pub trait FavoriteLink: Resource {
    type Target: Resource + Default;

    /// Path segment and id prefix of the target, e.g. `"planet"`.
    const TARGET_KEY: &'static str;
    const USER_COLUMN: Self::Column;
    const TARGET_COLUMN: Self::Column;

    fn link(user_id: i32, target_id: i32) -> Self::ActiveModel;
    fn favorite_id(model: &Self::Model) -> i32;
}

impl FavoriteLink for FavoritePlanets {
    type Target = Planets;

    const TARGET_KEY: &'static str = "planet";
    const USER_COLUMN: Self::Column = favorite_planets::Column::UserId;
    const TARGET_COLUMN: Self::Column = favorite_planets::Column::PlanetId;

    fn link(user_id: i32, target_id: i32) -> Self::ActiveModel {
        favorite_planets::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            planet_id: Set(target_id),
        }
    }

    fn favorite_id(model: &Self::Model) -> i32 {
        model.id
    }
}

impl FavoriteLink for FavoriteCharacters {
    type Target = Characters;

    const TARGET_KEY: &'static str = "character";
    const USER_COLUMN: Self::Column = favorite_characters::Column::UserId;
    const TARGET_COLUMN: Self::Column = favorite_characters::Column::CharacterId;

    fn link(user_id: i32, target_id: i32) -> Self::ActiveModel {
        favorite_characters::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            character_id: Set(target_id),
        }
    }

    fn favorite_id(model: &Self::Model) -> i32 {
        model.id
    }
}

impl FavoriteLink for FavoriteVehicles {
    type Target = Vehicles;

    const TARGET_KEY: &'static str = "vehicle";
    const USER_COLUMN: Self::Column = favorite_vehicles::Column::UserId;
    const TARGET_COLUMN: Self::Column = favorite_vehicles::Column::VehicleId;

    fn link(user_id: i32, target_id: i32) -> Self::ActiveModel {
        favorite_vehicles::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            vehicle_id: Set(target_id),
        }
    }

    fn favorite_id(model: &Self::Model) -> i32 {
        model.id
    }
}

/// Marks `target_id` as a favorite of `user_id`.
///
/// Both rows must exist and the pair must not already be linked. The existence
/// check and the insert share one transaction; the unique index on the pair
/// settles concurrent requests that both pass the check.
pub async fn add_favorite<F, T>(state: &AppState, user_id: i64, target_id: i64) -> AppResult<T>
where
    F: FavoriteLink,
    F::ActiveModel: Send,
    F::Model: IntoActiveModel<F::ActiveModel>,
    <<F::Target as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    T: From<F::Model>,
{
    if user_id <= 0 || target_id <= 0 {
        return Err(AppError::BadRequest(format!(
            "You need to specify the user_id and {}_id",
            F::TARGET_KEY
        )));
    }
    let missing = || AppError::NotFound(format!("User or {} not found", F::TARGET_KEY));
    let (Some(user_id), Some(target_id)) = (row_id(user_id), row_id(target_id)) else {
        return Err(missing());
    };

    let txn = state.orm.begin().await?;

    let user = Users::find_by_id(user_id).one(&txn).await?;
    let target = <F::Target as EntityTrait>::find_by_id(target_id)
        .one(&txn)
        .await?;
    if user.is_none() || target.is_none() {
        return Err(missing());
    }

    let existing = F::find()
        .filter(F::USER_COLUMN.eq(user_id))
        .filter(F::TARGET_COLUMN.eq(target_id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(F::CONFLICT.into()));
    }

    let favorite = F::link(user_id, target_id)
        .insert(&txn)
        .await
        .map_err(on_unique_violation(F::CONFLICT))?;
    txn.commit().await?;

    tracing::info!(
        user_id,
        kind = F::TARGET_KEY,
        target_id,
        favorite_id = F::favorite_id(&favorite),
        "favorite added"
    );
    Ok(T::from(favorite))
}

pub async fn remove_favorite<F>(
    state: &AppState,
    user_id: i64,
    target_id: i64,
) -> AppResult<MessageResponse>
where
    F: FavoriteLink,
{
    let (Some(user_id), Some(target_id)) = (row_id(user_id), row_id(target_id)) else {
        return Err(resource_service::not_found::<F>());
    };

    let txn = state.orm.begin().await?;

    let existing = F::find()
        .filter(F::USER_COLUMN.eq(user_id))
        .filter(F::TARGET_COLUMN.eq(target_id))
        .one(&txn)
        .await?;
    if existing.is_none() {
        return Err(resource_service::not_found::<F>());
    }

    F::delete_many()
        .filter(F::USER_COLUMN.eq(user_id))
        .filter(F::TARGET_COLUMN.eq(target_id))
        .exec(&txn)
        .await?;
    txn.commit().await?;

    tracing::info!(user_id, kind = F::TARGET_KEY, target_id, "favorite removed");
    Ok(MessageResponse::new(format!("{} deleted", F::NAME)))
}

/// All favorites of a user, each joined with its target row. The four reads share
/// one transaction so the result reflects a single snapshot.
pub async fn list_favorites(state: &AppState, user_id: i64) -> AppResult<UserFavorites> {
    let user_id = row_id(user_id).ok_or_else(resource_service::not_found::<Users>)?;

    let txn = state.orm.begin().await?;
    let user = Users::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(resource_service::not_found::<Users>)?;

    let favorites = UserFavorites {
        user: User::from(user),
        planets: entries::<FavoritePlanets, Planet, _>(&txn, user_id).await?,
        characters: entries::<FavoriteCharacters, Character, _>(&txn, user_id).await?,
        vehicles: entries::<FavoriteVehicles, Vehicle, _>(&txn, user_id).await?,
    };
    txn.commit().await?;

    Ok(favorites)
}

// Links whose target row has been deleted are skipped.
async fn entries<F, T, C>(db: &C, user_id: i32) -> AppResult<Vec<FavoriteEntry<T>>>
where
    F: FavoriteLink + Related<<F as FavoriteLink>::Target>,
    T: From<<<F as FavoriteLink>::Target as EntityTrait>::Model>,
    C: ConnectionTrait,
{
    let rows = F::find()
        .filter(F::USER_COLUMN.eq(user_id))
        .find_also_related(<<F as FavoriteLink>::Target as Default>::default())
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(link, target)| {
            target.map(|item| FavoriteEntry {
                favorite_id: F::favorite_id(&link),
                item: T::from(item),
            })
        })
        .collect())
}
