//! SeaORM entity models for the internship-program database schema.

pub mod prelude;

pub mod campaign;
pub mod intern;
pub mod learning_topic;
pub mod mentor;
pub mod mentor_speciality;
pub mod person;
pub mod person_role;
pub mod speciality;
