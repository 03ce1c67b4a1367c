use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        characters::CreateCharacterRequest, favorites::UserFavorites, planets::CreatePlanetRequest,
        users::CreateUserRequest, vehicles::CreateVehicleRequest,
    },
    models::{
        Character, FavoriteCharacter, FavoritePlanet, FavoriteVehicle, Planet, User, Vehicle,
    },
    response::MessageResponse,
    routes::{characters, favorites, health, planets, sitemap, users, vehicles},
};

pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        users::list_users,
        users::get_user,
        users::create_user,
        users::delete_user,
        planets::list_planets,
        planets::get_planet,
        planets::create_planet,
        planets::delete_planet,
        characters::list_characters,
        characters::get_character,
        characters::create_character,
        characters::delete_character,
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::create_vehicle,
        vehicles::delete_vehicle,
        favorites::list_favorites,
        favorites::add_favorite_planet,
        favorites::remove_favorite_planet,
        favorites::add_favorite_character,
        favorites::remove_favorite_character,
        favorites::add_favorite_vehicle,
        favorites::remove_favorite_vehicle
    ),
    components(
        schemas(
            User,
            Planet,
            Character,
            Vehicle,
            FavoritePlanet,
            FavoriteCharacter,
            FavoriteVehicle,
            UserFavorites,
            CreateUserRequest,
            CreatePlanetRequest,
            CreateCharacterRequest,
            CreateVehicleRequest,
            MessageResponse,
            sitemap::Sitemap,
            sitemap::RouteEntry,
            health::HealthData
        )
    ),
    tags(
        (name = "Sitemap", description = "Route listing"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "Characters", description = "Character endpoints"),
        (name = "Vehicles", description = "Vehicle endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url(DOCS_PATH, ApiDoc::openapi())
}
