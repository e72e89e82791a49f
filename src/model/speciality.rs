//! Speciality domain models and parameters.

use crate::dto::speciality::{PaginatedSpecialitiesDto, SpecialityDto};

/// Speciality (study track) interns follow and mentors supervise.
#[derive(Debug, Clone, PartialEq)]
pub struct Speciality {
    pub id: i32,
    pub name: String,
    /// Number of learning topics attached to the speciality.
    pub topic_count: u64,
}

impl Speciality {
    pub fn into_dto(self) -> SpecialityDto {
        SpecialityDto {
            id: self.id,
            name: self.name,
            topic_count: self.topic_count,
        }
    }

    pub fn from_entity(entity: entity::speciality::Model, topic_count: u64) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            topic_count,
        }
    }
}

/// Paginated collection of specialities with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedSpecialities {
    pub specialities: Vec<Speciality>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedSpecialities {
    pub fn into_dto(self) -> PaginatedSpecialitiesDto {
        PaginatedSpecialitiesDto {
            specialities: self
                .specialities
                .into_iter()
                .map(|s| s.into_dto())
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
