use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        campaign::CampaignRepository, intern::InternRepository, mentor::MentorRepository,
        speciality::SpecialityRepository,
    },
    error::AppError,
    model::intern::{CreateInternParams, Intern, PaginatedInterns, UpdateInternParams},
    service::{clamp_per_page, total_pages},
};

/// Interns are always addressed through their campaign. Completed campaigns
/// are an archive: their rosters can be read but no longer changed.
pub struct InternService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InternService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls an intern into a campaign.
    /// Intern email addresses are unique within their campaign.
    pub async fn create(&self, params: CreateInternParams) -> Result<Intern, AppError> {
        let repo = InternRepository::new(self.db);

        self.check_campaign_open(params.campaign_id).await?;
        self.check_references(params.speciality_id, params.mentor_id)
            .await?;

        if repo
            .email_taken_in_campaign(params.campaign_id, &params.email)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "An intern with email '{}' is already enrolled in this campaign",
                params.email
            )));
        }

        let intern = repo.create(params).await?;

        Ok(intern)
    }

    /// Gets an intern, verifying they belong to the given campaign.
    pub async fn get_by_id(&self, campaign_id: i32, id: i32) -> Result<Option<Intern>, AppError> {
        let repo = InternRepository::new(self.db);

        let intern = repo.get_by_id(id).await?;

        Ok(intern.filter(|i| i.campaign_id == campaign_id))
    }

    /// Gets paginated interns for a campaign, optionally filtered by
    /// speciality.
    pub async fn get_paginated(
        &self,
        campaign_id: i32,
        speciality_id: Option<i32>,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedInterns, AppError> {
        let campaign_repo = CampaignRepository::new(self.db);
        let repo = InternRepository::new(self.db);

        if !campaign_repo.exists(campaign_id).await? {
            return Err(AppError::NotFound("Campaign not found".to_string()));
        }

        let per_page = clamp_per_page(entries);
        let (interns, total) = repo
            .get_by_campaign_paginated(campaign_id, speciality_id, page, per_page)
            .await?;

        Ok(PaginatedInterns {
            interns,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates an intern's fields. The campaign assignment never changes.
    /// Returns None if the intern doesn't exist or belongs to another campaign.
    pub async fn update(&self, params: UpdateInternParams) -> Result<Option<Intern>, AppError> {
        let repo = InternRepository::new(self.db);

        if !repo
            .exists_in_campaign(params.id, params.campaign_id)
            .await?
        {
            return Ok(None);
        }

        self.check_campaign_open(params.campaign_id).await?;
        self.check_references(params.speciality_id, params.mentor_id)
            .await?;

        if repo
            .email_taken_in_campaign_excluding(params.campaign_id, &params.email, params.id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "An intern with email '{}' is already enrolled in this campaign",
                params.email
            )));
        }

        let intern = repo.update(params).await?;

        Ok(Some(intern))
    }

    /// Removes an intern from a campaign.
    /// Returns true if deleted, false if not found in the campaign.
    pub async fn delete(&self, campaign_id: i32, id: i32) -> Result<bool, AppError> {
        let repo = InternRepository::new(self.db);

        if !repo.exists_in_campaign(id, campaign_id).await? {
            return Ok(false);
        }

        self.check_campaign_open(campaign_id).await?;

        repo.delete(id).await?;

        Ok(true)
    }

    /// Verifies the campaign exists and has not ended yet.
    async fn check_campaign_open(&self, campaign_id: i32) -> Result<(), AppError> {
        let campaign_repo = CampaignRepository::new(self.db);

        let Some(campaign) = campaign_repo.get_by_id(campaign_id).await? else {
            return Err(AppError::NotFound("Campaign not found".to_string()));
        };

        if campaign.is_completed_at(Utc::now().date_naive()) {
            return Err(AppError::Conflict(
                "Campaign has ended and its roster can no longer be changed".to_string(),
            ));
        }

        Ok(())
    }

    /// Verifies the speciality and, when given, the mentor exist.
    async fn check_references(
        &self,
        speciality_id: i32,
        mentor_id: Option<i32>,
    ) -> Result<(), AppError> {
        let speciality_repo = SpecialityRepository::new(self.db);

        if !speciality_repo.exists(speciality_id).await? {
            return Err(AppError::NotFound("Speciality not found".to_string()));
        }

        if let Some(mentor_id) = mentor_id {
            let mentor_repo = MentorRepository::new(self.db);
            if !mentor_repo.exists(mentor_id).await? {
                return Err(AppError::NotFound("Mentor not found".to_string()));
            }
        }

        Ok(())
    }
}
