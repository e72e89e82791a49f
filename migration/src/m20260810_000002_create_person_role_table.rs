use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_person_table::Person;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PersonRole::Table)
                    .if_not_exists()
                    .col(pk_auto(PersonRole::Id))
                    .col(integer(PersonRole::PersonId))
                    .col(string(PersonRole::Role))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_role_person_id")
                            .from(PersonRole::Table, PersonRole::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_person_role_unique")
                    .table(PersonRole::Table)
                    .col(PersonRole::PersonId)
                    .col(PersonRole::Role)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PersonRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PersonRole {
    Table,
    Id,
    PersonId,
    Role,
}
