use sea_orm_migration::{prelude::*, schema::*};

static IDX_FAVORITE_PLANETS_USER_PLANET: &str = "idx_favorite_planets_user_planet";
static IDX_FAVORITE_CHARACTERS_USER_CHARACTER: &str = "idx_favorite_characters_user_character";
static IDX_FAVORITE_VEHICLES_USER_VEHICLE: &str = "idx_favorite_vehicles_user_vehicle";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlanets::Id))
                    .col(integer(FavoritePlanets::UserId))
                    .col(integer(FavoritePlanets::PlanetId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_PLANETS_USER_PLANET)
                    .table(FavoritePlanets::Table)
                    .col(FavoritePlanets::UserId)
                    .col(FavoritePlanets::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteCharacters::Id))
                    .col(integer(FavoriteCharacters::UserId))
                    .col(integer(FavoriteCharacters::CharacterId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_CHARACTERS_USER_CHARACTER)
                    .table(FavoriteCharacters::Table)
                    .col(FavoriteCharacters::UserId)
                    .col(FavoriteCharacters::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FavoriteVehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteVehicles::Id))
                    .col(integer(FavoriteVehicles::UserId))
                    .col(integer(FavoriteVehicles::VehicleId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_VEHICLES_USER_VEHICLE)
                    .table(FavoriteVehicles::Table)
                    .col(FavoriteVehicles::UserId)
                    .col(FavoriteVehicles::VehicleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteVehicles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FavoritePlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}

#[derive(DeriveIden)]
pub enum FavoriteCharacters {
    Table,
    Id,
    UserId,
    CharacterId,
}

#[derive(DeriveIden)]
pub enum FavoriteVehicles {
    Table,
    Id,
    UserId,
    VehicleId,
}
