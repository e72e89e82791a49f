//! Intern repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::intern::{CreateInternParams, Intern, UpdateInternParams};

pub struct InternRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InternRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a new intern in a campaign.
    pub async fn create(&self, params: CreateInternParams) -> Result<Intern, DbErr> {
        let intern = entity::intern::ActiveModel {
            campaign_id: ActiveValue::Set(params.campaign_id),
            speciality_id: ActiveValue::Set(params.speciality_id),
            mentor_id: ActiveValue::Set(params.mentor_id),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Intern::from_entity(intern))
    }

    /// Gets an intern by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Intern>, DbErr> {
        let intern = entity::prelude::Intern::find_by_id(id).one(self.db).await?;

        Ok(intern.map(Intern::from_entity))
    }

    /// Gets paginated interns for a campaign ordered by last name, optionally
    /// restricted to a speciality.
    pub async fn get_by_campaign_paginated(
        &self,
        campaign_id: i32,
        speciality_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Intern>, u64), DbErr> {
        let mut query = entity::prelude::Intern::find()
            .filter(entity::intern::Column::CampaignId.eq(campaign_id));

        if let Some(speciality_id) = speciality_id {
            query = query.filter(entity::intern::Column::SpecialityId.eq(speciality_id));
        }

        let paginator = query
            .order_by_asc(entity::intern::Column::LastName)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let interns = paginator.fetch_page(page).await?;

        Ok((interns.into_iter().map(Intern::from_entity).collect(), total))
    }

    /// Updates an intern's fields. The campaign assignment never changes.
    pub async fn update(&self, params: UpdateInternParams) -> Result<Intern, DbErr> {
        let intern = entity::prelude::Intern::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Intern with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::intern::ActiveModel = intern.into();
        active_model.speciality_id = ActiveValue::Set(params.speciality_id);
        active_model.mentor_id = ActiveValue::Set(params.mentor_id);
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.email = ActiveValue::Set(params.email);

        let updated = active_model.update(self.db).await?;

        Ok(Intern::from_entity(updated))
    }

    /// Deletes an intern.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Intern::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if an intern exists and belongs to the specified campaign.
    pub async fn exists_in_campaign(&self, id: i32, campaign_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Intern::find()
            .filter(entity::intern::Column::Id.eq(id))
            .filter(entity::intern::Column::CampaignId.eq(campaign_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if an intern with the given email is already enrolled in the
    /// campaign.
    pub async fn email_taken_in_campaign(
        &self,
        campaign_id: i32,
        email: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Intern::find()
            .filter(entity::intern::Column::CampaignId.eq(campaign_id))
            .filter(entity::intern::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if another intern (different ID) in the campaign already uses
    /// the given email.
    pub async fn email_taken_in_campaign_excluding(
        &self,
        campaign_id: i32,
        email: &str,
        id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Intern::find()
            .filter(entity::intern::Column::CampaignId.eq(campaign_id))
            .filter(entity::intern::Column::Email.eq(email))
            .filter(entity::intern::Column::Id.ne(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
