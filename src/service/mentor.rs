use sea_orm::DatabaseConnection;

use crate::{
    data::{mentor::MentorRepository, speciality::SpecialityRepository},
    error::AppError,
    model::mentor::{CreateMentorParams, Mentor, PaginatedMentors, UpdateMentorParams},
    service::{clamp_per_page, total_pages},
};

pub struct MentorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MentorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a mentor with their speciality assignments.
    /// Mentor email addresses are unique across the system.
    pub async fn create(&self, mut params: CreateMentorParams) -> Result<Mentor, AppError> {
        let repo = MentorRepository::new(self.db);

        if repo.email_taken(&params.email).await? {
            return Err(AppError::Conflict(format!(
                "A mentor with email '{}' already exists",
                params.email
            )));
        }

        dedup_ids(&mut params.speciality_ids);
        self.check_specialities(&params.speciality_ids).await?;

        let mentor = repo.create(params).await?;

        Ok(mentor)
    }

    /// Gets a specific mentor by ID with their specialities.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Mentor>, AppError> {
        let repo = MentorRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets paginated mentors, optionally restricted to a speciality.
    pub async fn get_paginated(
        &self,
        speciality_id: Option<i32>,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedMentors, AppError> {
        let repo = MentorRepository::new(self.db);

        let per_page = clamp_per_page(entries);
        let (mentors, total) = repo
            .get_all_paginated(speciality_id, page, per_page)
            .await?;

        Ok(PaginatedMentors {
            mentors,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a mentor's fields and replaces their speciality assignments.
    /// Returns None if the mentor doesn't exist.
    pub async fn update(&self, mut params: UpdateMentorParams) -> Result<Option<Mentor>, AppError> {
        let repo = MentorRepository::new(self.db);

        if !repo.exists(params.id).await? {
            return Ok(None);
        }

        if repo.email_taken_excluding(&params.email, params.id).await? {
            return Err(AppError::Conflict(format!(
                "A mentor with email '{}' already exists",
                params.email
            )));
        }

        dedup_ids(&mut params.speciality_ids);
        self.check_specialities(&params.speciality_ids).await?;

        let mentor = repo.update(params).await?;

        Ok(Some(mentor))
    }

    /// Deletes a mentor. Interns assigned to them become unassigned.
    /// Returns true if deleted, false if not found.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = MentorRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    /// Verifies every referenced speciality exists.
    async fn check_specialities(&self, speciality_ids: &[i32]) -> Result<(), AppError> {
        let speciality_repo = SpecialityRepository::new(self.db);

        let missing = speciality_repo.missing_ids(speciality_ids).await?;
        if !missing.is_empty() {
            return Err(AppError::NotFound(format!(
                "Speciality id(s) {:?} not found",
                missing
            )));
        }

        Ok(())
    }
}

/// Drops repeated ids, keeping first occurrences in order. The assignment
/// table has a unique (mentor_id, speciality_id) index, so repeated ids in
/// a request body must collapse to a single row.
fn dedup_ids(ids: &mut Vec<i32>) {
    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(*id));
}
