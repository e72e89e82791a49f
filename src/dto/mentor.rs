use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MentorDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Specialities the mentor can supervise.
    pub specialities: Vec<MentorSpecialityDto>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct MentorSpecialityDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedMentorsDto {
    pub mentors: Vec<MentorDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateMentorDto {
    #[validate(length(min = 1, max = 100, message = "first name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last name must be 1-100 characters"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Specialities to assign; every id must reference an existing speciality.
    pub speciality_ids: Vec<i32>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdateMentorDto {
    #[validate(length(min = 1, max = 100, message = "first name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last name must be 1-100 characters"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Replaces the full set of speciality assignments.
    pub speciality_ids: Vec<i32>,
}
