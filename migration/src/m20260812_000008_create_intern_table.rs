use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000003_create_campaign_table::Campaign,
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
                    .table(Intern::Table)
                    .if_not_exists()
                    .col(pk_auto(Intern::Id))
                    .col(integer(Intern::CampaignId))
                    .col(integer(Intern::SpecialityId))
                    .col(integer_null(Intern::MentorId))
                    .col(string(Intern::FirstName))
                    .col(string(Intern::LastName))
                    .col(string(Intern::Email))
                    .col(timestamp_with_time_zone(Intern::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_intern_campaign_id")
                            .from(Intern::Table, Intern::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_intern_speciality_id")
                            .from(Intern::Table, Intern::SpecialityId)
                            .to(Speciality::Table, Speciality::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_intern_mentor_id")
                            .from(Intern::Table, Intern::MentorId)
                            .to(Mentor::Table, Mentor::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_intern_campaign_email_unique")
                    .table(Intern::Table)
                    .col(Intern::CampaignId)
                    .col(Intern::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Intern::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Intern {
    Table,
    Id,
    CampaignId,
    SpecialityId,
    MentorId,
    FirstName,
    LastName,
    Email,
    CreatedAt,
}
