pub mod characters;
pub mod favorite_characters;
pub mod favorite_planets;
pub mod favorite_vehicles;
pub mod planets;
pub mod users;
pub mod vehicles;

pub use characters::Entity as Characters;
pub use favorite_characters::Entity as FavoriteCharacters;
pub use favorite_planets::Entity as FavoritePlanets;
pub use favorite_vehicles::Entity as FavoriteVehicles;
pub use planets::Entity as Planets;
pub use users::Entity as Users;
pub use vehicles::Entity as Vehicles;
