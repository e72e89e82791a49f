//! Client for the external identity/directory service.
//!
//! The directory service owns user accounts and group membership. The backend
//! calls it for two things only: inviting a new user (admin provisioning) and
//! looking up which groups a user belongs to so group membership can be
//! mapped onto application roles.

use serde::{Deserialize, Serialize};

use crate::model::person::Role;

/// Invitation issued by the directory service.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryInvitation {
    /// Object id the directory assigned to the invited user.
    pub user_id: String,
    /// URL the invited user visits to redeem the invitation.
    pub redeem_url: String,
}

#[derive(Debug, Serialize)]
struct InviteRequest<'a> {
    email: &'a str,
    display_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct GroupsResponse {
    groups: Vec<String>,
}

/// HTTP client for the directory service.
///
/// Cheap to clone; the inner `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct DirectoryClient {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
}

impl DirectoryClient {
    pub fn new(http_client: reqwest::Client, base_url: String, token: String) -> Self {
        // Trailing slashes would produce double-slash paths below
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
            token,
        }
    }

    /// Invites a user into the directory.
    ///
    /// # Arguments
    /// - `email` - Address to send the invitation to
    /// - `display_name` - Name shown on the invitation
    ///
    /// # Returns
    /// - `Ok(DirectoryInvitation)` - Invitation with the new user's object id
    /// - `Err(reqwest::Error)` - Network failure or non-success status
    pub async fn invite_user(
        &self,
        email: &str,
        display_name: &str,
    ) -> Result<DirectoryInvitation, reqwest::Error> {
        let invitation = self
            .http_client
            .post(format!("{}/v1/invitations", self.base_url))
            .bearer_auth(&self.token)
            .json(&InviteRequest {
                email,
                display_name,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<DirectoryInvitation>()
            .await?;

        Ok(invitation)
    }

    /// Looks up the directory groups a user belongs to.
    ///
    /// # Arguments
    /// - `external_id` - Directory object id of the user
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Group ids the user is a member of
    /// - `Err(reqwest::Error)` - Network failure or non-success status
    pub async fn member_groups(&self, external_id: &str) -> Result<Vec<String>, reqwest::Error> {
        let response = self
            .http_client
            .get(format!("{}/v1/users/{}/groups", self.base_url, external_id))
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json::<GroupsResponse>()
            .await?;

        Ok(response.groups)
    }
}

/// Maps directory group membership onto application roles.
///
/// Only the two configured groups carry meaning; all other groups are
/// ignored.
pub fn roles_for_groups(groups: &[String], admin_group: &str, mentor_group: &str) -> Vec<Role> {
    let mut roles = Vec::new();

    if groups.iter().any(|g| g == admin_group) {
        roles.push(Role::Admin);
    }
    if groups.iter().any(|g| g == mentor_group) {
        roles.push(Role::Mentor);
    }

    roles
}
