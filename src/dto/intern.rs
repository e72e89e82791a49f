use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct InternDto {
    pub id: i32,
    pub campaign_id: i32,
    pub speciality_id: i32,
    pub mentor_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedInternsDto {
    pub interns: Vec<InternDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateInternDto {
    #[validate(length(min = 1, max = 100, message = "first name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last name must be 1-100 characters"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub speciality_id: i32,
    pub mentor_id: Option<i32>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdateInternDto {
    #[validate(length(min = 1, max = 100, message = "first name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last name must be 1-100 characters"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub speciality_id: i32,
    pub mentor_id: Option<i32>,
}
