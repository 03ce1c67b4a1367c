use sea_orm::{ActiveValue::NotSet, Set};

use crate::{
    dto::characters::CreateCharacterRequest,
    entity::{Characters, characters::ActiveModel},
    error::AppResult,
    models::Character,
    services::resource_service,
    state::AppState,
};

pub async fn list_characters(state: &AppState) -> AppResult<Vec<Character>> {
    resource_service::list::<Characters, Character>(state).await
}

pub async fn get_character(state: &AppState, id: i64) -> AppResult<Character> {
    resource_service::get::<Characters, Character>(state, id).await
}

pub async fn create_character(
    state: &AppState,
    payload: CreateCharacterRequest,
) -> AppResult<Character> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        height: Set(payload.height),
        mass: Set(payload.mass),
        hair_color: Set(payload.hair_color),
        age: Set(payload.age),
        homeworld: Set(payload.homeworld),
        species: Set(payload.species),
    };

    let character: Character =
        resource_service::insert::<Characters, Character>(state, active).await?;
    tracing::info!(character_id = character.id, "character created");
    Ok(character)
}

pub async fn delete_character(state: &AppState, id: i64) -> AppResult<Character> {
    resource_service::delete::<Characters, Character>(state, id).await
}
