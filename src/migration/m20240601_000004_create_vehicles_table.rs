use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string_uniq(Vehicles::Name))
                    .col(string(Vehicles::Model))
                    .col(string(Vehicles::Manufacturer))
                    .col(integer(Vehicles::Length))
                    .col(integer(Vehicles::MaxAtmospheringSpeed))
                    .col(integer(Vehicles::Passengers))
                    .col(big_integer(Vehicles::CargoCapacity))
                    .col(string(Vehicles::Consumables))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicles {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    Length,
    MaxAtmospheringSpeed,
    Passengers,
    CargoCapacity,
    Consumables,
}
