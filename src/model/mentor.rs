//! Mentor domain models and parameters.

use crate::dto::mentor::{
    CreateMentorDto, MentorDto, MentorSpecialityDto, PaginatedMentorsDto, UpdateMentorDto,
};

/// Mentor with their speciality assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct Mentor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub specialities: Vec<MentorSpeciality>,
}

/// Speciality assignment as seen from a mentor.
#[derive(Debug, Clone, PartialEq)]
pub struct MentorSpeciality {
    pub id: i32,
    pub name: String,
}

impl Mentor {
    pub fn into_dto(self) -> MentorDto {
        MentorDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            specialities: self
                .specialities
                .into_iter()
                .map(|s| MentorSpecialityDto {
                    id: s.id,
                    name: s.name,
                })
                .collect(),
        }
    }

    /// Builds a mentor domain model from an entity plus its resolved
    /// speciality rows.
    pub fn from_entity(
        entity: entity::mentor::Model,
        specialities: Vec<entity::speciality::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            specialities: specialities
                .into_iter()
                .map(|s| MentorSpeciality {
                    id: s.id,
                    name: s.name,
                })
                .collect(),
        }
    }
}

/// Parameters for creating a mentor.
#[derive(Debug, Clone)]
pub struct CreateMentorParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub speciality_ids: Vec<i32>,
}

impl CreateMentorParams {
    pub fn from_dto(dto: CreateMentorDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            speciality_ids: dto.speciality_ids,
        }
    }
}

/// Parameters for updating a mentor. Speciality assignments are replaced
/// wholesale.
#[derive(Debug, Clone)]
pub struct UpdateMentorParams {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub speciality_ids: Vec<i32>,
}

impl UpdateMentorParams {
    pub fn from_dto(id: i32, dto: UpdateMentorDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            speciality_ids: dto.speciality_ids,
        }
    }
}

/// Paginated collection of mentors with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMentors {
    pub mentors: Vec<Mentor>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMentors {
    pub fn into_dto(self) -> PaginatedMentorsDto {
        PaginatedMentorsDto {
            mentors: self.mentors.into_iter().map(|m| m.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
