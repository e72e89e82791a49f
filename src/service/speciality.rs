use sea_orm::DatabaseConnection;

use crate::{
    data::speciality::SpecialityRepository,
    error::AppError,
    model::speciality::{PaginatedSpecialities, Speciality},
    service::{clamp_per_page, total_pages},
};

pub struct SpecialityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecialityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new speciality. Speciality names are unique.
    pub async fn create(&self, name: String) -> Result<Speciality, AppError> {
        let repo = SpecialityRepository::new(self.db);

        if repo.exists_by_name(&name).await? {
            return Err(AppError::Conflict(format!(
                "A speciality named '{}' already exists",
                name
            )));
        }

        let speciality = repo.create(name).await?;

        Ok(speciality)
    }

    /// Gets a specific speciality by ID with its learning topic count.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Speciality>, AppError> {
        let repo = SpecialityRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets paginated specialities ordered by name.
    pub async fn get_paginated(
        &self,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedSpecialities, AppError> {
        let repo = SpecialityRepository::new(self.db);

        let per_page = clamp_per_page(entries);
        let (specialities, total) = repo.get_all_paginated(page, per_page).await?;

        Ok(PaginatedSpecialities {
            specialities,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Renames a speciality.
    /// Returns None if the speciality doesn't exist.
    pub async fn update(&self, id: i32, name: String) -> Result<Option<Speciality>, AppError> {
        let repo = SpecialityRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(None);
        }

        if repo.exists_by_name_excluding(&name, id).await? {
            return Err(AppError::Conflict(format!(
                "A speciality named '{}' already exists",
                name
            )));
        }

        let speciality = repo.update(id, name).await?;

        Ok(Some(speciality))
    }

    /// Deletes a speciality and its learning topics.
    ///
    /// Refused while interns are assigned to the speciality; those records
    /// would lose their required speciality reference.
    ///
    /// Returns true if deleted, false if not found.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = SpecialityRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        let intern_count = repo.intern_count(id).await?;
        if intern_count > 0 {
            return Err(AppError::Conflict(format!(
                "Speciality is assigned to {} intern(s) and cannot be deleted",
                intern_count
            )));
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
