use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder assembling a [`TestContext`] with the schema a test needs.
///
/// Tables are derived from the SeaORM entities, so the test schema can never
/// drift from the one migrations produce in production. Add tables (or use
/// one of the grouped helpers), then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Campaign, Speciality};
///
/// let test = TestBuilder::new()
///     .with_table(Campaign)
///     .with_table(Speciality)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the table for one entity.
    ///
    /// Tables referencing others through foreign keys must be added after
    /// the tables they reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues the person and role tables.
    ///
    /// Covers person repository, guard, and admin-management tests.
    pub fn with_person_tables(self) -> Self {
        self.with_table(Person).with_table(PersonRole)
    }

    /// Queues the campaign-side tables in dependency order: campaigns,
    /// specialities, learning topics, mentors, the mentor-speciality join
    /// table, and interns.
    ///
    /// Covers every test touching campaigns, specialities, topics, mentors,
    /// or interns.
    pub fn with_campaign_tables(self) -> Self {
        self.with_table(Campaign)
            .with_table(Speciality)
            .with_table(LearningTopic)
            .with_table(Mentor)
            .with_table(MentorSpeciality)
            .with_table(Intern)
    }

    /// Queues the full schema, person and campaign sides both.
    pub fn with_all_tables(self) -> Self {
        self.with_person_tables().with_campaign_tables()
    }

    /// Connects to a fresh in-memory SQLite database and creates every
    /// queued table.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
