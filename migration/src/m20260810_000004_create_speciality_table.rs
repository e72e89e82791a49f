use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Speciality::Table)
                    .if_not_exists()
                    .col(pk_auto(Speciality::Id))
                    .col(string_uniq(Speciality::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Speciality::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Speciality {
    Table,
    Id,
    Name,
}
