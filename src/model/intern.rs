//! Intern domain models and parameters.

use crate::dto::intern::{CreateInternDto, InternDto, PaginatedInternsDto, UpdateInternDto};

/// Intern enrolled in a campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct Intern {
    pub id: i32,
    pub campaign_id: i32,
    pub speciality_id: i32,
    pub mentor_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Intern {
    pub fn into_dto(self) -> InternDto {
        InternDto {
            id: self.id,
            campaign_id: self.campaign_id,
            speciality_id: self.speciality_id,
            mentor_id: self.mentor_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }

    pub fn from_entity(entity: entity::intern::Model) -> Self {
        Self {
            id: entity.id,
            campaign_id: entity.campaign_id,
            speciality_id: entity.speciality_id,
            mentor_id: entity.mentor_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
        }
    }
}

/// Parameters for enrolling an intern in a campaign.
#[derive(Debug, Clone)]
pub struct CreateInternParams {
    pub campaign_id: i32,
    pub speciality_id: i32,
    pub mentor_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl CreateInternParams {
    pub fn from_dto(campaign_id: i32, dto: CreateInternDto) -> Self {
        Self {
            campaign_id,
            speciality_id: dto.speciality_id,
            mentor_id: dto.mentor_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        }
    }
}

/// Parameters for updating an intern.
///
/// The campaign id comes from the route path; interns cannot be moved
/// between campaigns.
#[derive(Debug, Clone)]
pub struct UpdateInternParams {
    pub id: i32,
    pub campaign_id: i32,
    pub speciality_id: i32,
    pub mentor_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UpdateInternParams {
    pub fn from_dto(id: i32, campaign_id: i32, dto: UpdateInternDto) -> Self {
        Self {
            id,
            campaign_id,
            speciality_id: dto.speciality_id,
            mentor_id: dto.mentor_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        }
    }
}

/// Paginated collection of interns with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedInterns {
    pub interns: Vec<Intern>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedInterns {
    pub fn into_dto(self) -> PaginatedInternsDto {
        PaginatedInternsDto {
            interns: self.interns.into_iter().map(|i| i.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
