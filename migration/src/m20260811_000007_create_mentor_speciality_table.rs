use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000004_create_speciality_table::Speciality,
    m20260811_000006_create_mentor_table::Mentor,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MentorSpeciality::Table)
                    .if_not_exists()
                    .col(pk_auto(MentorSpeciality::Id))
                    .col(integer(MentorSpeciality::MentorId))
                    .col(integer(MentorSpeciality::SpecialityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentor_speciality_mentor_id")
                            .from(MentorSpeciality::Table, MentorSpeciality::MentorId)
                            .to(Mentor::Table, Mentor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentor_speciality_speciality_id")
                            .from(MentorSpeciality::Table, MentorSpeciality::SpecialityId)
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
                    .name("idx_mentor_speciality_unique")
                    .table(MentorSpeciality::Table)
                    .col(MentorSpeciality::MentorId)
                    .col(MentorSpeciality::SpecialityId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MentorSpeciality::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MentorSpeciality {
    Table,
    Id,
    MentorId,
    SpecialityId,
}
