use sea_orm::DatabaseConnection;

use crate::{
    data::campaign::CampaignRepository,
    error::AppError,
    model::campaign::{Campaign, CreateCampaignParams, PaginatedCampaigns, UpdateCampaignParams},
    service::{clamp_per_page, total_pages},
};

pub struct CampaignService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new campaign. Campaign names are unique across the system.
    pub async fn create(&self, params: CreateCampaignParams) -> Result<Campaign, AppError> {
        let repo = CampaignRepository::new(self.db);

        if params.end_date <= params.start_date {
            return Err(AppError::BadRequest(
                "Campaign end date must be after its start date".to_string(),
            ));
        }

        if repo.exists_by_name(&params.name).await? {
            return Err(AppError::Conflict(format!(
                "A campaign named '{}' already exists",
                params.name
            )));
        }

        let campaign = repo.create(params).await?;

        Ok(campaign)
    }

    /// Gets a specific campaign by ID with its intern count.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Campaign>, AppError> {
        let repo = CampaignRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets paginated campaigns, newest first.
    pub async fn get_paginated(&self, page: u64, entries: u64) -> Result<PaginatedCampaigns, AppError> {
        let repo = CampaignRepository::new(self.db);

        let per_page = clamp_per_page(entries);
        let (campaigns, total) = repo.get_all_paginated(page, per_page).await?;

        Ok(PaginatedCampaigns {
            campaigns,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a campaign's name, dates, and description.
    /// Returns None if the campaign doesn't exist.
    pub async fn update(&self, params: UpdateCampaignParams) -> Result<Option<Campaign>, AppError> {
        let repo = CampaignRepository::new(self.db);

        if !repo.exists(params.id).await? {
            return Ok(None);
        }

        if params.end_date <= params.start_date {
            return Err(AppError::BadRequest(
                "Campaign end date must be after its start date".to_string(),
            ));
        }

        if repo.exists_by_name_excluding(&params.name, params.id).await? {
            return Err(AppError::Conflict(format!(
                "A campaign named '{}' already exists",
                params.name
            )));
        }

        let campaign = repo.update(params).await?;

        Ok(Some(campaign))
    }

    /// Deletes a campaign along with its interns.
    /// Returns true if deleted, false if not found.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CampaignRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
