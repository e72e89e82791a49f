//! Speciality repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::speciality::Speciality;

pub struct SpecialityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecialityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new speciality.
    pub async fn create(&self, name: String) -> Result<Speciality, DbErr> {
        let speciality = entity::speciality::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Speciality::from_entity(speciality, 0))
    }

    /// Gets a speciality by ID together with its learning topic count.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Speciality>, DbErr> {
        let Some(speciality) = entity::prelude::Speciality::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let topic_count = entity::prelude::LearningTopic::find()
            .filter(entity::learning_topic::Column::SpecialityId.eq(id))
            .count(self.db)
            .await?;

        Ok(Some(Speciality::from_entity(speciality, topic_count)))
    }

    /// Gets paginated specialities ordered by name, each with its topic count.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Speciality>, u64), DbErr> {
        let paginator = entity::prelude::Speciality::find()
            .order_by_asc(entity::speciality::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let specialities = paginator.fetch_page(page).await?;

        let mut results = Vec::new();
        for speciality in specialities {
            let topic_count = entity::prelude::LearningTopic::find()
                .filter(entity::learning_topic::Column::SpecialityId.eq(speciality.id))
                .count(self.db)
                .await?;

            results.push(Speciality::from_entity(speciality, topic_count));
        }

        Ok((results, total))
    }

    /// Renames a speciality.
    pub async fn update(&self, id: i32, name: String) -> Result<Speciality, DbErr> {
        let speciality = entity::prelude::Speciality::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Speciality with id {} not found",
                id
            )))?;

        let mut active_model: entity::speciality::ActiveModel = speciality.into();
        active_model.name = ActiveValue::Set(name);

        let updated = active_model.update(self.db).await?;

        let topic_count = entity::prelude::LearningTopic::find()
            .filter(entity::learning_topic::Column::SpecialityId.eq(id))
            .count(self.db)
            .await?;

        Ok(Speciality::from_entity(updated, topic_count))
    }

    /// Deletes a speciality. Learning topics are removed by the FK cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Speciality::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if a speciality with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Speciality::find()
            .filter(entity::speciality::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the subset of `ids` that do not reference an existing
    /// speciality. Used to validate mentor speciality assignments in one
    /// query.
    pub async fn missing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<i32> = entity::prelude::Speciality::find()
            .filter(entity::speciality::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }

    /// Checks if a speciality with the given name already exists.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Speciality::find()
            .filter(entity::speciality::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if another speciality (different ID) already uses the given name.
    pub async fn exists_by_name_excluding(&self, name: &str, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Speciality::find()
            .filter(entity::speciality::Column::Name.eq(name))
            .filter(entity::speciality::Column::Id.ne(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts interns currently following the speciality. Used to block
    /// deletion while the speciality is referenced.
    pub async fn intern_count(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Intern::find()
            .filter(entity::intern::Column::SpecialityId.eq(id))
            .count(self.db)
            .await
    }
}
