use sea_orm::DatabaseConnection;

use crate::{
    data::person::PersonRepository,
    directory::{roles_for_groups, DirectoryClient},
    error::AppError,
    middleware::auth::Claims,
    model::person::{Person, UpsertPersonParams},
};

/// Provisioning and role synchronization for authenticated callers.
///
/// Roles are never read from the bearer token. On every sync the caller's
/// directory group membership is fetched and the local role rows are replaced
/// to match, so a directory-side revocation takes effect on the next sync.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a DirectoryClient,
    admin_group: &'a str,
    mentor_group: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        directory: &'a DirectoryClient,
        admin_group: &'a str,
        mentor_group: &'a str,
    ) -> Self {
        Self {
            db,
            directory,
            admin_group,
            mentor_group,
        }
    }

    /// Provisions the caller and synchronizes their roles.
    ///
    /// Upserts the person keyed by the token subject, refreshing name and
    /// email from the claims, then replaces their roles with whatever their
    /// current directory group membership maps to.
    ///
    /// Directory groups are the authority here, so a role granted locally
    /// by the invite flow only survives once the directory has placed the
    /// person in the matching group. If an invitee signs in before that
    /// propagation completes, their admin role is dropped until the sync on
    /// their next sign-in picks the group up.
    pub async fn sync_person(&self, claims: &Claims) -> Result<Person, AppError> {
        let repo = PersonRepository::new(self.db);

        let person = repo
            .upsert(UpsertPersonParams {
                external_id: claims.sub.clone(),
                display_name: claims.name.clone(),
                email: claims.email.clone(),
            })
            .await?;

        let groups = self.directory.member_groups(&claims.sub).await?;
        let roles = roles_for_groups(&groups, self.admin_group, self.mentor_group);

        repo.set_roles(person.id, &roles).await?;

        repo.find_by_id(person.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Person not found after sync".to_string()))
    }
}
