use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{
    characters, favorite_characters, favorite_planets, favorite_vehicles, planets, users,
    vehicles,
};

/// Public view of a user. The password never leaves the database.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub suscription_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub population: i64,
    pub climate: String,
    pub terrain: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub gravity: String,
    pub surface_water: i32,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub age: i32,
    pub homeworld: String,
    pub species: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub length: i32,
    pub max_atmosphering_speed: i32,
    pub passengers: i32,
    pub cargo_capacity: i64,
    pub consumables: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct FavoritePlanet {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct FavoriteCharacter {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct FavoriteVehicle {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            suscription_date: model.suscription_date,
        }
    }
}

impl From<planets::Model> for Planet {
    fn from(model: planets::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            population: model.population,
            climate: model.climate,
            terrain: model.terrain,
            diameter: model.diameter,
            rotation_period: model.rotation_period,
            orbital_period: model.orbital_period,
            gravity: model.gravity,
            surface_water: model.surface_water,
            created: model.created,
        }
    }
}

impl From<characters::Model> for Character {
    fn from(model: characters::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            mass: model.mass,
            hair_color: model.hair_color,
            age: model.age,
            homeworld: model.homeworld,
            species: model.species,
        }
    }
}

impl From<vehicles::Model> for Vehicle {
    fn from(model: vehicles::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            model: model.model,
            manufacturer: model.manufacturer,
            length: model.length,
            max_atmosphering_speed: model.max_atmosphering_speed,
            passengers: model.passengers,
            cargo_capacity: model.cargo_capacity,
            consumables: model.consumables,
        }
    }
}

impl From<favorite_planets::Model> for FavoritePlanet {
    fn from(model: favorite_planets::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            planet_id: model.planet_id,
        }
    }
}

impl From<favorite_characters::Model> for FavoriteCharacter {
    fn from(model: favorite_characters::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            character_id: model.character_id,
        }
    }
}

impl From<favorite_vehicles::Model> for FavoriteVehicle {
    fn from(model: favorite_vehicles::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            vehicle_id: model.vehicle_id,
        }
    }
}
