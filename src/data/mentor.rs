//! Mentor repository for database operations.
//!
//! Mentors carry a set of speciality assignments through the
//! `mentor_speciality` join table. Updates replace the full assignment set
//! (delete-then-insert), so the stored state always mirrors the last write.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::mentor::{CreateMentorParams, Mentor, UpdateMentorParams};

pub struct MentorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MentorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new mentor and their speciality assignments.
    pub async fn create(&self, params: CreateMentorParams) -> Result<Mentor, DbErr> {
        let mentor = entity::mentor::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for speciality_id in params.speciality_ids {
            entity::mentor_speciality::ActiveModel {
                mentor_id: ActiveValue::Set(mentor.id),
                speciality_id: ActiveValue::Set(speciality_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        let specialities = self.specialities_of(mentor.id).await?;

        Ok(Mentor::from_entity(mentor, specialities))
    }

    /// Gets a mentor by ID with their resolved specialities.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Mentor>, DbErr> {
        let Some(mentor) = entity::prelude::Mentor::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let specialities = self.specialities_of(id).await?;

        Ok(Some(Mentor::from_entity(mentor, specialities)))
    }

    /// Gets paginated mentors ordered by last name, optionally restricted to
    /// those assigned to a speciality.
    pub async fn get_all_paginated(
        &self,
        speciality_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Mentor>, u64), DbErr> {
        let mut query = entity::prelude::Mentor::find();

        if let Some(speciality_id) = speciality_id {
            let mentor_ids: Vec<i32> = entity::prelude::MentorSpeciality::find()
                .filter(entity::mentor_speciality::Column::SpecialityId.eq(speciality_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|ms| ms.mentor_id)
                .collect();

            query = query.filter(entity::mentor::Column::Id.is_in(mentor_ids));
        }

        let paginator = query
            .order_by_asc(entity::mentor::Column::LastName)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let mentors = paginator.fetch_page(page).await?;

        let mut results = Vec::new();
        for mentor in mentors {
            let specialities = self.specialities_of(mentor.id).await?;
            results.push(Mentor::from_entity(mentor, specialities));
        }

        Ok((results, total))
    }

    /// Updates a mentor's fields and replaces their speciality assignments.
    pub async fn update(&self, params: UpdateMentorParams) -> Result<Mentor, DbErr> {
        let mentor = entity::prelude::Mentor::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Mentor with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::mentor::ActiveModel = mentor.into();
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.email = ActiveValue::Set(params.email);

        let updated = active_model.update(self.db).await?;

        // Replace the assignment set
        entity::prelude::MentorSpeciality::delete_many()
            .filter(entity::mentor_speciality::Column::MentorId.eq(params.id))
            .exec(self.db)
            .await?;

        for speciality_id in params.speciality_ids {
            entity::mentor_speciality::ActiveModel {
                mentor_id: ActiveValue::Set(params.id),
                speciality_id: ActiveValue::Set(speciality_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        let specialities = self.specialities_of(params.id).await?;

        Ok(Mentor::from_entity(updated, specialities))
    }

    /// Deletes a mentor. Assigned interns keep their enrollment with the
    /// mentor reference cleared by the FK set-null action.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Mentor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if a mentor with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Mentor::find()
            .filter(entity::mentor::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if a mentor with the given email already exists.
    pub async fn email_taken(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Mentor::find()
            .filter(entity::mentor::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if another mentor (different ID) already uses the given email.
    pub async fn email_taken_excluding(&self, email: &str, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Mentor::find()
            .filter(entity::mentor::Column::Email.eq(email))
            .filter(entity::mentor::Column::Id.ne(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Resolves the speciality rows assigned to a mentor, ordered by name.
    async fn specialities_of(&self, mentor_id: i32) -> Result<Vec<entity::speciality::Model>, DbErr> {
        let speciality_ids: Vec<i32> = entity::prelude::MentorSpeciality::find()
            .filter(entity::mentor_speciality::Column::MentorId.eq(mentor_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|ms| ms.speciality_id)
            .collect();

        if speciality_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Speciality::find()
            .filter(entity::speciality::Column::Id.is_in(speciality_ids))
            .order_by_asc(entity::speciality::Column::Name)
            .all(self.db)
            .await
    }
}
