//! Learning topic factory for creating test learning topic entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test learning topics with customizable fields.
pub struct LearningTopicFactory<'a> {
    db: &'a DatabaseConnection,
    speciality_id: i32,
    name: String,
    description: Option<String>,
}

impl<'a> LearningTopicFactory<'a> {
    /// Creates a new LearningTopicFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Topic {id}"` where id is auto-incremented
    /// - description: None
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `speciality_id` - Speciality the topic belongs to (must exist)
    pub fn new(db: &'a DatabaseConnection, speciality_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            speciality_id,
            name: format!("Topic {}", id),
            description: None,
        }
    }

    /// Sets the topic name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the learning topic entity into the database.
    pub async fn build(self) -> Result<entity::learning_topic::Model, DbErr> {
        entity::learning_topic::ActiveModel {
            speciality_id: ActiveValue::Set(self.speciality_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a learning topic with default values for the given speciality.
pub async fn create_learning_topic(
    db: &DatabaseConnection,
    speciality_id: i32,
) -> Result<entity::learning_topic::Model, DbErr> {
    LearningTopicFactory::new(db, speciality_id).build().await
}
