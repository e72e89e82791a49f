//! Intern factory for creating test intern entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test interns with customizable fields.
pub struct InternFactory<'a> {
    db: &'a DatabaseConnection,
    campaign_id: i32,
    speciality_id: i32,
    mentor_id: Option<i32>,
    first_name: String,
    last_name: String,
    email: String,
}

impl<'a> InternFactory<'a> {
    /// Creates a new InternFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Intern"`
    /// - last_name: `"Number {id}"` where id is auto-incremented
    /// - email: `"intern{id}@example.com"`
    /// - mentor_id: None
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `campaign_id` - Campaign the intern joins (must exist)
    /// - `speciality_id` - Speciality the intern follows (must exist)
    pub fn new(db: &'a DatabaseConnection, campaign_id: i32, speciality_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            campaign_id,
            speciality_id,
            mentor_id: None,
            first_name: "Intern".to_string(),
            last_name: format!("Number {}", id),
            email: format!("intern{}@example.com", id),
        }
    }

    /// Sets the assigned mentor.
    pub fn mentor_id(mut self, mentor_id: i32) -> Self {
        self.mentor_id = Some(mentor_id);
        self
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the intern entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::intern::Model)` - Created intern entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::intern::Model, DbErr> {
        entity::intern::ActiveModel {
            campaign_id: ActiveValue::Set(self.campaign_id),
            speciality_id: ActiveValue::Set(self.speciality_id),
            mentor_id: ActiveValue::Set(self.mentor_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an intern with default values in the given campaign and speciality.
pub async fn create_intern(
    db: &DatabaseConnection,
    campaign_id: i32,
    speciality_id: i32,
) -> Result<entity::intern::Model, DbErr> {
    InternFactory::new(db, campaign_id, speciality_id)
        .build()
        .await
}
