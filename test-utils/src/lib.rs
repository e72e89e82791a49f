//! Shared test tooling for the internboard workspace.
//!
//! Tests get an isolated in-memory SQLite database with the schema derived
//! from the `entity` crate, plus factories for seeding rows with sensible
//! defaults:
//!
//! - [`builder::TestBuilder`] assembles the schema and builds a context
//! - [`context::TestContext`] owns the database connection for one test
//! - [`factory`] seeds campaigns, specialities, mentors, interns, persons
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn enrolls_intern() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let campaign = factory::create_campaign(db).await?;
//!     // exercise the code under test against `db`
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
