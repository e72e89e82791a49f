use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mentor::Table)
                    .if_not_exists()
                    .col(pk_auto(Mentor::Id))
                    .col(string(Mentor::FirstName))
                    .col(string(Mentor::LastName))
                    .col(string_uniq(Mentor::Email))
                    .col(timestamp_with_time_zone(Mentor::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mentor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mentor {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    CreatedAt,
}
