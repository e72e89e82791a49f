//! Request and response DTOs for the REST API.
//!
//! DTOs are the only types that cross the HTTP boundary. Controllers convert
//! them to operation parameter types before calling services, and convert
//! domain models back to DTOs for responses. Request DTOs carry `validator`
//! rules which controllers apply before any business logic runs.

pub mod api;
pub mod campaign;
pub mod intern;
pub mod learning_topic;
pub mod mentor;
pub mod person;
pub mod speciality;
