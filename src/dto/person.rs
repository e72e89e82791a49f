use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub external_id: String,
    pub display_name: String,
    pub email: String,
    /// Role names held by the person (`admin`, `mentor`).
    pub roles: Vec<String>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct InviteAdminDto {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "display name must be 1-100 characters"))]
    pub display_name: String,
}

/// Response for a successful admin invitation.
///
/// Carries the provisioned person and the invitation redeem URL returned by
/// the directory service.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AdminInvitationDto {
    pub person: PersonDto,
    pub redeem_url: String,
}
