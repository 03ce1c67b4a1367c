use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub length: i32,
    pub max_atmosphering_speed: i32,
    pub passengers: i32,
    pub cargo_capacity: i64,
    pub consumables: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_vehicles::Entity")]
    FavoriteVehicles,
}

impl Related<super::favorite_vehicles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteVehicles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
