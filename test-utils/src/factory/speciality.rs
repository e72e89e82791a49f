//! Speciality factory for creating test speciality entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test specialities with customizable fields.
pub struct SpecialityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> SpecialityFactory<'a> {
    /// Creates a new SpecialityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Speciality {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Speciality {}", id),
        }
    }

    /// Sets the speciality name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the speciality entity into the database.
    pub async fn build(self) -> Result<entity::speciality::Model, DbErr> {
        entity::speciality::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a speciality with default values.
///
/// Shorthand for `SpecialityFactory::new(db).build().await`.
pub async fn create_speciality(
    db: &DatabaseConnection,
) -> Result<entity::speciality::Model, DbErr> {
    SpecialityFactory::new(db).build().await
}
