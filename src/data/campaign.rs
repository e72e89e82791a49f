//! Campaign repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::campaign::{Campaign, CreateCampaignParams, UpdateCampaignParams};

pub struct CampaignRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new campaign.
    pub async fn create(&self, params: CreateCampaignParams) -> Result<Campaign, DbErr> {
        let campaign = entity::campaign::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Campaign::from_entity(campaign, 0))
    }

    /// Gets a campaign by ID together with its intern count.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Campaign>, DbErr> {
        let Some(campaign) = entity::prelude::Campaign::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let intern_count = entity::prelude::Intern::find()
            .filter(entity::intern::Column::CampaignId.eq(id))
            .count(self.db)
            .await?;

        Ok(Some(Campaign::from_entity(campaign, intern_count)))
    }

    /// Gets paginated campaigns ordered by start date, newest first, each
    /// with its intern count.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Campaign>, u64), DbErr> {
        let paginator = entity::prelude::Campaign::find()
            .order_by_desc(entity::campaign::Column::StartDate)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let campaigns = paginator.fetch_page(page).await?;

        let mut results = Vec::new();
        for campaign in campaigns {
            let intern_count = entity::prelude::Intern::find()
                .filter(entity::intern::Column::CampaignId.eq(campaign.id))
                .count(self.db)
                .await?;

            results.push(Campaign::from_entity(campaign, intern_count));
        }

        Ok((results, total))
    }

    /// Updates a campaign's name, dates, and description.
    pub async fn update(&self, params: UpdateCampaignParams) -> Result<Campaign, DbErr> {
        let campaign = entity::prelude::Campaign::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Campaign with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::campaign::ActiveModel = campaign.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.start_date = ActiveValue::Set(params.start_date);
        active_model.end_date = ActiveValue::Set(params.end_date);
        active_model.description = ActiveValue::Set(params.description);

        let updated = active_model.update(self.db).await?;

        let intern_count = entity::prelude::Intern::find()
            .filter(entity::intern::Column::CampaignId.eq(params.id))
            .count(self.db)
            .await?;

        Ok(Campaign::from_entity(updated, intern_count))
    }

    /// Deletes a campaign. Enrolled interns are removed by the FK cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Campaign::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if a campaign with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if a campaign with the given name already exists.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if another campaign (different ID) already uses the given name.
    pub async fn exists_by_name_excluding(&self, name: &str, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::Name.eq(name))
            .filter(entity::campaign::Column::Id.ne(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
