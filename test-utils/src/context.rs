use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Isolated test environment backed by an in-memory SQLite database.
///
/// Each context owns its own database, so tests never observe each other's
/// rows and need no cleanup. Built through `TestBuilder`, which also creates
/// the schema.
pub struct TestContext {
    /// Connection to the in-memory database, opened lazily by `database()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the database connection, opening it on first use.
    ///
    /// The connection stays alive for the lifetime of the context; dropping
    /// it would discard the in-memory database and its data.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        Ok(self.db.as_ref().unwrap())
    }

    /// Executes the given CREATE TABLE statements against the database.
    ///
    /// Called by `TestBuilder::build()`; statements run in order, so callers
    /// queue referenced tables before the tables referencing them.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
