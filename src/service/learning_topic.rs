use sea_orm::DatabaseConnection;

use crate::{
    data::{learning_topic::LearningTopicRepository, speciality::SpecialityRepository},
    error::AppError,
    model::learning_topic::{
        CreateLearningTopicParams, LearningTopic, PaginatedLearningTopics,
        UpdateLearningTopicParams,
    },
    service::{clamp_per_page, total_pages},
};

/// Learning topics are always addressed through their parent speciality.
/// Every operation verifies the speciality exists and, for a specific topic,
/// that the topic actually belongs to it.
pub struct LearningTopicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LearningTopicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a learning topic under a speciality.
    /// Topic names are unique within their speciality.
    pub async fn create(
        &self,
        params: CreateLearningTopicParams,
    ) -> Result<LearningTopic, AppError> {
        let speciality_repo = SpecialityRepository::new(self.db);
        let repo = LearningTopicRepository::new(self.db);

        if !speciality_repo.exists(params.speciality_id).await? {
            return Err(AppError::NotFound("Speciality not found".to_string()));
        }

        if repo
            .name_taken_in_speciality(params.speciality_id, &params.name)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A learning topic named '{}' already exists in this speciality",
                params.name
            )));
        }

        let topic = repo.create(params).await?;

        Ok(topic)
    }

    /// Gets a learning topic, verifying it belongs to the given speciality.
    pub async fn get_by_id(
        &self,
        speciality_id: i32,
        id: i32,
    ) -> Result<Option<LearningTopic>, AppError> {
        let repo = LearningTopicRepository::new(self.db);

        let topic = repo.get_by_id(id).await?;

        Ok(topic.filter(|t| t.speciality_id == speciality_id))
    }

    /// Gets paginated learning topics for a speciality.
    pub async fn get_paginated(
        &self,
        speciality_id: i32,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedLearningTopics, AppError> {
        let speciality_repo = SpecialityRepository::new(self.db);
        let repo = LearningTopicRepository::new(self.db);

        if !speciality_repo.exists(speciality_id).await? {
            return Err(AppError::NotFound("Speciality not found".to_string()));
        }

        let per_page = clamp_per_page(entries);
        let (topics, total) = repo
            .get_by_speciality_paginated(speciality_id, page, per_page)
            .await?;

        Ok(PaginatedLearningTopics {
            topics,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a learning topic's name and description.
    /// Returns None if the topic doesn't exist or belongs to another speciality.
    pub async fn update(
        &self,
        params: UpdateLearningTopicParams,
    ) -> Result<Option<LearningTopic>, AppError> {
        let repo = LearningTopicRepository::new(self.db);

        if !repo
            .exists_in_speciality(params.id, params.speciality_id)
            .await?
        {
            return Ok(None);
        }

        if repo
            .name_taken_in_speciality_excluding(params.speciality_id, &params.name, params.id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A learning topic named '{}' already exists in this speciality",
                params.name
            )));
        }

        let topic = repo.update(params).await?;

        Ok(Some(topic))
    }

    /// Deletes a learning topic.
    /// Returns true if deleted, false if not found in the speciality.
    pub async fn delete(&self, speciality_id: i32, id: i32) -> Result<bool, AppError> {
        let repo = LearningTopicRepository::new(self.db);

        if !repo.exists_in_speciality(id, speciality_id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
