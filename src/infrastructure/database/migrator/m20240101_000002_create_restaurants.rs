//! Create restaurants table
//!
//! `category_id` is a plain column: no foreign key, so a restaurant can
//! be stored against a category id that does not exist.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurants::Name).string().not_null())
                    .col(ColumnDef::new(Restaurants::Phone).string().not_null())
                    .col(ColumnDef::new(Restaurants::Address).string().not_null())
                    .col(
                        ColumnDef::new(Restaurants::Longitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Restaurants::Latitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Restaurants::CategoryId)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurants_category_id")
                    .table(Restaurants::Table)
                    .col(Restaurants::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurants::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Restaurants {
    Table,
    Id,
    Name,
    Phone,
    Address,
    Longitude,
    Latitude,
    CategoryId,
}
