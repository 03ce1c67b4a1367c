use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Character, Planet, User, Vehicle};

/// A favorited row: the target's fields plus the id of the join row.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct FavoriteEntry<T> {
    pub favorite_id: i32,
    #[serde(flatten)]
    pub item: T,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserFavorites {
    pub user: User,
    pub planets: Vec<FavoriteEntry<Planet>>,
    pub characters: Vec<FavoriteEntry<Character>>,
    pub vehicles: Vec<FavoriteEntry<Vehicle>>,
}
