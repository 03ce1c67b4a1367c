use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub age: i32,
    pub homeworld: String,
    pub species: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_characters::Entity")]
    FavoriteCharacters,
}

impl Related<super::favorite_characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
