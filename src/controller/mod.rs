//! HTTP request handlers.
//!
//! Controllers stay thin: authorize via `AuthGuard`, validate the payload,
//! convert DTOs to domain params, delegate to a service, and map the result
//! back to a response. All business rules live in the service layer.

pub mod admin;
pub mod auth;
pub mod campaign;
pub mod intern;
pub mod learning_topic;
pub mod mentor;
pub mod speciality;
