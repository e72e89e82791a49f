//! Person repository for database operations.
//!
//! Persons are application users provisioned from the external identity
//! provider. The repository also owns the `person_role` rows which back all
//! authorization decisions.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::person::{Person, Role, UpsertPersonParams};

pub struct PersonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a person by the external identity provider object id.
    pub async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Person>, DbErr> {
        let person = entity::prelude::Person::find()
            .filter(entity::person::Column::ExternalId.eq(external_id))
            .one(self.db)
            .await?;

        match person {
            Some(person) => Ok(Some(self.with_roles(person).await?)),
            None => Ok(None),
        }
    }

    /// Finds a person by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Person>, DbErr> {
        let person = entity::prelude::Person::find_by_id(id).one(self.db).await?;

        match person {
            Some(person) => Ok(Some(self.with_roles(person).await?)),
            None => Ok(None),
        }
    }

    /// Finds a person by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DbErr> {
        let person = entity::prelude::Person::find()
            .filter(entity::person::Column::Email.eq(email))
            .one(self.db)
            .await?;

        match person {
            Some(person) => Ok(Some(self.with_roles(person).await?)),
            None => Ok(None),
        }
    }

    /// Creates or updates a person keyed by external id.
    ///
    /// Display name and email are refreshed from the identity provider's
    /// claims on every call. Roles are untouched.
    pub async fn upsert(&self, params: UpsertPersonParams) -> Result<Person, DbErr> {
        let existing = entity::prelude::Person::find()
            .filter(entity::person::Column::ExternalId.eq(&params.external_id))
            .one(self.db)
            .await?;

        let person = if let Some(existing) = existing {
            let mut active: entity::person::ActiveModel = existing.into();
            active.display_name = ActiveValue::Set(params.display_name);
            active.email = ActiveValue::Set(params.email);
            active.update(self.db).await?
        } else {
            entity::person::ActiveModel {
                external_id: ActiveValue::Set(params.external_id),
                display_name: ActiveValue::Set(params.display_name),
                email: ActiveValue::Set(params.email),
                created_at: ActiveValue::Set(chrono::Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?
        };

        self.with_roles(person).await
    }

    /// Gets all persons holding the admin role, ordered by display name.
    pub async fn get_admins(&self) -> Result<Vec<Person>, DbErr> {
        let admin_ids: Vec<i32> = entity::prelude::PersonRole::find()
            .filter(entity::person_role::Column::Role.eq(Role::Admin.as_str()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| r.person_id)
            .collect();

        if admin_ids.is_empty() {
            return Ok(Vec::new());
        }

        let persons = entity::prelude::Person::find()
            .filter(entity::person::Column::Id.is_in(admin_ids))
            .order_by_asc(entity::person::Column::DisplayName)
            .all(self.db)
            .await?;

        let mut results = Vec::new();
        for person in persons {
            results.push(self.with_roles(person).await?);
        }

        Ok(results)
    }

    /// Replaces a person's role set (delete-then-insert).
    pub async fn set_roles(&self, person_id: i32, roles: &[Role]) -> Result<(), DbErr> {
        entity::prelude::PersonRole::delete_many()
            .filter(entity::person_role::Column::PersonId.eq(person_id))
            .exec(self.db)
            .await?;

        for role in roles {
            entity::person_role::ActiveModel {
                person_id: ActiveValue::Set(person_id),
                role: ActiveValue::Set(role.as_str().to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Grants a role to a person. No-op if they already hold it.
    pub async fn grant_role(&self, person_id: i32, role: Role) -> Result<(), DbErr> {
        let held = entity::prelude::PersonRole::find()
            .filter(entity::person_role::Column::PersonId.eq(person_id))
            .filter(entity::person_role::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await?;

        if held == 0 {
            entity::person_role::ActiveModel {
                person_id: ActiveValue::Set(person_id),
                role: ActiveValue::Set(role.as_str().to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Revokes a role from a person. Returns false if they did not hold it.
    pub async fn revoke_role(&self, person_id: i32, role: Role) -> Result<bool, DbErr> {
        let result = entity::prelude::PersonRole::delete_many()
            .filter(entity::person_role::Column::PersonId.eq(person_id))
            .filter(entity::person_role::Column::Role.eq(role.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts persons currently holding the admin role.
    pub async fn count_admins(&self) -> Result<u64, DbErr> {
        entity::prelude::PersonRole::find()
            .filter(entity::person_role::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await
    }

    /// Loads the role rows for a person entity and assembles the domain model.
    async fn with_roles(&self, person: entity::person::Model) -> Result<Person, DbErr> {
        let roles = entity::prelude::PersonRole::find()
            .filter(entity::person_role::Column::PersonId.eq(person.id))
            .all(self.db)
            .await?;

        Ok(Person::from_entity(person, roles))
    }
}
