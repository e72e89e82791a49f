//! Factories seeding test rows for every entity in the schema.
//!
//! Each entity module carries a builder-style `*Factory` for tests that need
//! specific values and a `create_*` shorthand for tests that only need the
//! row to exist. Unique columns (names, emails, external ids) default to
//! counter-suffixed values from [`helpers::next_id`], so repeated calls never
//! collide. Foreign keys are passed in explicitly; [`helpers`] bundles the
//! common multi-entity setups.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // shorthand, defaults only
//! let speciality = factory::create_speciality(db).await?;
//!
//! // builder for specific values
//! let campaign = factory::campaign::CampaignFactory::new(db)
//!     .name("Summer 2026")
//!     .dates(
//!         NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
//!     )
//!     .build()
//!     .await?;
//!
//! // bundled dependencies
//! let (campaign, speciality, intern) =
//!     factory::helpers::create_intern_with_dependencies(db).await?;
//! ```

pub mod campaign;
pub mod helpers;
pub mod intern;
pub mod learning_topic;
pub mod mentor;
pub mod person;
pub mod speciality;

// Re-export commonly used factory functions for concise usage
pub use campaign::create_campaign;
pub use intern::create_intern;
pub use learning_topic::create_learning_topic;
pub use mentor::create_mentor;
pub use person::{create_person, create_person_with_role};
pub use speciality::create_speciality;
