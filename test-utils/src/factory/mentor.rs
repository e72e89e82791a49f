//! Mentor factory for creating test mentor entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mentors with customizable fields.
///
/// Optionally links the mentor to specialities through the
/// `mentor_speciality` join table.
pub struct MentorFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    speciality_ids: Vec<i32>,
}

impl<'a> MentorFactory<'a> {
    /// Creates a new MentorFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Mentor"`
    /// - last_name: `"Number {id}"` where id is auto-incremented
    /// - email: `"mentor{id}@example.com"`
    /// - speciality_ids: empty (no speciality links)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Mentor".to_string(),
            last_name: format!("Number {}", id),
            email: format!("mentor{}@example.com", id),
            speciality_ids: Vec::new(),
        }
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

    /// Sets the specialities to link the mentor to. The specialities must
    /// already exist.
    pub fn speciality_ids(mut self, speciality_ids: Vec<i32>) -> Self {
        self.speciality_ids = speciality_ids;
        self
    }

    /// Builds and inserts the mentor entity (and speciality links) into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mentor::Model)` - Created mentor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mentor::Model, DbErr> {
        let mentor = entity::mentor::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for speciality_id in self.speciality_ids {
            entity::mentor_speciality::ActiveModel {
                mentor_id: ActiveValue::Set(mentor.id),
                speciality_id: ActiveValue::Set(speciality_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(mentor)
    }
}

/// Creates a mentor with default values and no speciality links.
///
/// Shorthand for `MentorFactory::new(db).build().await`.
pub async fn create_mentor(db: &DatabaseConnection) -> Result<entity::mentor::Model, DbErr> {
    MentorFactory::new(db).build().await
}
