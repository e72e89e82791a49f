//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models at their boundary to keep database-specific structures out of the service
//! and controller layers. All queries, inserts, updates, and deletes go through here.

pub mod campaign;
pub mod intern;
pub mod learning_topic;
pub mod mentor;
pub mod person;
pub mod speciality;

#[cfg(test)]
mod test;
