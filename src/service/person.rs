use sea_orm::DatabaseConnection;

use crate::{
    data::person::PersonRepository,
    directory::DirectoryClient,
    error::AppError,
    model::person::{AdminInvitation, Person, Role, UpsertPersonParams},
};

/// Administrator management.
///
/// Inviting an administrator goes through the directory service, which owns
/// the account. The person row and admin role are recorded locally right
/// away, but sign-in re-syncs roles from directory groups, so the grant is
/// only durable once the directory places the invitee in the admin group.
pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a DirectoryClient,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection, directory: &'a DirectoryClient) -> Self {
        Self { db, directory }
    }

    /// Invites a new administrator by email.
    ///
    /// Any person already known under the email is a conflict, admin or
    /// not: the directory owns the account, and inviting an existing email
    /// would provision a second external identity for the same person.
    ///
    /// # Returns
    /// - `Ok(AdminInvitation)` - Provisioned person and redeem URL
    /// - `Err(AppError::Conflict)` - A person with this email already exists
    /// - `Err(AppError::ReqwestErr)` - Directory service call failed
    pub async fn invite_admin(
        &self,
        email: String,
        display_name: String,
    ) -> Result<AdminInvitation, AppError> {
        let repo = PersonRepository::new(self.db);

        if let Some(existing) = repo.find_by_email(&email).await? {
            let detail = if existing.has_role(Role::Admin) {
                "is already an administrator"
            } else {
                "already belongs to an existing person"
            };
            return Err(AppError::Conflict(format!("'{}' {}", email, detail)));
        }

        let invitation = self.directory.invite_user(&email, &display_name).await?;

        let person = repo
            .upsert(UpsertPersonParams {
                external_id: invitation.user_id,
                display_name,
                email,
            })
            .await?;

        repo.grant_role(person.id, Role::Admin).await?;

        // Re-read so the returned person carries the granted role
        let person = repo
            .find_by_id(person.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Person not found after invite".to_string()))?;

        Ok(AdminInvitation {
            person,
            redeem_url: invitation.redeem_url,
        })
    }

    /// Lists every person holding the admin role.
    pub async fn get_admins(&self) -> Result<Vec<Person>, AppError> {
        let repo = PersonRepository::new(self.db);

        Ok(repo.get_admins().await?)
    }

    /// Revokes the admin role from a person.
    ///
    /// The last administrator cannot be removed; the system would become
    /// unmanageable.
    ///
    /// Returns true if revoked, false if the person doesn't exist or holds
    /// no admin role.
    pub async fn revoke_admin(&self, person_id: i32) -> Result<bool, AppError> {
        let repo = PersonRepository::new(self.db);

        let Some(person) = repo.find_by_id(person_id).await? else {
            return Ok(false);
        };

        if !person.has_role(Role::Admin) {
            return Ok(false);
        }

        if repo.count_admins().await? <= 1 {
            return Err(AppError::Conflict(
                "Cannot revoke the last administrator".to_string(),
            ));
        }

        Ok(repo.revoke_role(person_id, Role::Admin).await?)
    }
}
