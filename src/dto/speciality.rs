use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SpecialityDto {
    pub id: i32,
    pub name: String,
    /// Number of learning topics attached to the speciality.
    pub topic_count: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedSpecialitiesDto {
    pub specialities: Vec<SpecialityDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateSpecialityDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdateSpecialityDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}
