//! Campaign domain models and parameters.

use chrono::NaiveDate;

use crate::dto::campaign::{
    CampaignDto, CreateCampaignDto, PaginatedCampaignsDto, UpdateCampaignDto,
};

/// Internship campaign with its enrollment window.
///
/// A campaign is *completed* once its end date has passed; completed
/// campaigns no longer accept interns.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    /// Number of interns enrolled in the campaign.
    pub intern_count: u64,
}

impl Campaign {
    /// Whether the campaign's end date lies strictly before the given day.
    pub fn is_completed_at(&self, today: NaiveDate) -> bool {
        self.end_date < today
    }

    /// Converts the campaign domain model to a DTO for API responses.
    ///
    /// Completion is computed against the current UTC day.
    pub fn into_dto(self) -> CampaignDto {
        let completed = self.is_completed_at(chrono::Utc::now().date_naive());
        CampaignDto {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            completed,
            intern_count: self.intern_count,
        }
    }

    /// Builds a campaign domain model from an entity plus its intern count.
    pub fn from_entity(entity: entity::campaign::Model, intern_count: u64) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            description: entity.description,
            intern_count,
        }
    }
}

/// Parameters for creating a campaign.
#[derive(Debug, Clone)]
pub struct CreateCampaignParams {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
}

impl CreateCampaignParams {
    pub fn from_dto(dto: CreateCampaignDto) -> Self {
        Self {
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            description: dto.description,
        }
    }
}

/// Parameters for updating a campaign.
#[derive(Debug, Clone)]
pub struct UpdateCampaignParams {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
}

impl UpdateCampaignParams {
    pub fn from_dto(id: i32, dto: UpdateCampaignDto) -> Self {
        Self {
            id,
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            description: dto.description,
        }
    }
}

/// Paginated collection of campaigns with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCampaigns {
    pub campaigns: Vec<Campaign>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCampaigns {
    pub fn into_dto(self) -> PaginatedCampaignsDto {
        PaginatedCampaignsDto {
            campaigns: self.campaigns.into_iter().map(|c| c.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
