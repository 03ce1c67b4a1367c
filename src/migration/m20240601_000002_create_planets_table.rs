use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_uniq(Planets::Name))
                    .col(big_integer(Planets::Population))
                    .col(string(Planets::Climate))
                    .col(string(Planets::Terrain))
                    .col(integer(Planets::Diameter))
                    .col(integer(Planets::RotationPeriod))
                    .col(integer(Planets::OrbitalPeriod))
                    .col(string(Planets::Gravity))
                    .col(integer(Planets::SurfaceWater))
                    .col(timestamp_with_time_zone(Planets::Created))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planets {
    Table,
    Id,
    Name,
    Population,
    Climate,
    Terrain,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Gravity,
    SurfaceWater,
    Created,
}
