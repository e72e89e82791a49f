//! Person factory.
//!
//! Persons mirror accounts provisioned from the external identity provider,
//! so the factory fills in an external object id alongside the profile
//! fields. Role grants are separate rows and have their own helpers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test persons.
///
/// Defaults are counter-suffixed (`ext-{id}`, `Person {id}`,
/// `person{id}@example.com`) so repeated builds never collide on the
/// unique external id or email columns.
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    external_id: String,
    display_name: String,
    email: String,
}

impl<'a> PersonFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            external_id: format!("ext-{}", id),
            display_name: format!("Person {}", id),
            email: format!("person{}@example.com", id),
        }
    }

    /// Overrides the identity provider object id.
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Overrides the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Overrides the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Inserts the person and returns the persisted model.
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            external_id: ActiveValue::Set(self.external_id),
            display_name: ActiveValue::Set(self.display_name),
            email: ActiveValue::Set(self.email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a person with default values and no roles.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}

/// Inserts a person and grants them `role` (`"admin"` or `"mentor"`).
pub async fn create_person_with_role(
    db: &DatabaseConnection,
    role: impl Into<String>,
) -> Result<entity::person::Model, DbErr> {
    let person = PersonFactory::new(db).build().await?;
    grant_role(db, person.id, role).await?;
    Ok(person)
}

/// Adds a role row for an existing person.
pub async fn grant_role(
    db: &DatabaseConnection,
    person_id: i32,
    role: impl Into<String>,
) -> Result<entity::person_role::Model, DbErr> {
    entity::person_role::ActiveModel {
        person_id: ActiveValue::Set(person_id),
        role: ActiveValue::Set(role.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
