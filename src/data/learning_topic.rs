//! Learning topic repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::learning_topic::{
    CreateLearningTopicParams, LearningTopic, UpdateLearningTopicParams,
};

pub struct LearningTopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LearningTopicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new learning topic under a speciality.
    pub async fn create(&self, params: CreateLearningTopicParams) -> Result<LearningTopic, DbErr> {
        let topic = entity::learning_topic::ActiveModel {
            speciality_id: ActiveValue::Set(params.speciality_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LearningTopic::from_entity(topic))
    }

    /// Gets a learning topic by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<LearningTopic>, DbErr> {
        let topic = entity::prelude::LearningTopic::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(topic.map(LearningTopic::from_entity))
    }

    /// Gets paginated learning topics for a speciality, ordered by name.
    pub async fn get_by_speciality_paginated(
        &self,
        speciality_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<LearningTopic>, u64), DbErr> {
        let paginator = entity::prelude::LearningTopic::find()
            .filter(entity::learning_topic::Column::SpecialityId.eq(speciality_id))
            .order_by_asc(entity::learning_topic::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let topics = paginator.fetch_page(page).await?;

        Ok((
            topics.into_iter().map(LearningTopic::from_entity).collect(),
            total,
        ))
    }

    /// Updates a learning topic's name and description.
    pub async fn update(&self, params: UpdateLearningTopicParams) -> Result<LearningTopic, DbErr> {
        let topic = entity::prelude::LearningTopic::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Learning topic with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::learning_topic::ActiveModel = topic.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);

        let updated = active_model.update(self.db).await?;

        Ok(LearningTopic::from_entity(updated))
    }

    /// Deletes a learning topic.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::LearningTopic::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if a learning topic exists and belongs to the specified speciality.
    pub async fn exists_in_speciality(&self, id: i32, speciality_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::LearningTopic::find()
            .filter(entity::learning_topic::Column::Id.eq(id))
            .filter(entity::learning_topic::Column::SpecialityId.eq(speciality_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if a topic with the given name already exists in the speciality.
    pub async fn name_taken_in_speciality(
        &self,
        speciality_id: i32,
        name: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::LearningTopic::find()
            .filter(entity::learning_topic::Column::SpecialityId.eq(speciality_id))
            .filter(entity::learning_topic::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if another topic (different ID) in the speciality already uses
    /// the given name.
    pub async fn name_taken_in_speciality_excluding(
        &self,
        speciality_id: i32,
        name: &str,
        id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::LearningTopic::find()
            .filter(entity::learning_topic::Column::SpecialityId.eq(speciality_id))
            .filter(entity::learning_topic::Column::Name.eq(name))
            .filter(entity::learning_topic::Column::Id.ne(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
