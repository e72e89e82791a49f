use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000004_create_speciality_table::Speciality;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LearningTopic::Table)
                    .if_not_exists()
                    .col(pk_auto(LearningTopic::Id))
                    .col(integer(LearningTopic::SpecialityId))
                    .col(string(LearningTopic::Name))
                    .col(string_null(LearningTopic::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_learning_topic_speciality_id")
                            .from(LearningTopic::Table, LearningTopic::SpecialityId)
                            .to(Speciality::Table, Speciality::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_learning_topic_name_unique")
                    .table(LearningTopic::Table)
                    .col(LearningTopic::SpecialityId)
                    .col(LearningTopic::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LearningTopic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LearningTopic {
    Table,
    Id,
    SpecialityId,
    Name,
    Description,
}
