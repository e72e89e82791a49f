//! Domain models and operation-specific parameter types.
//!
//! Domain models sit between the data layer and the DTO layer: repositories
//! convert SeaORM entities into these types at their boundary, and
//! controllers convert them into DTOs for responses. Parameter types carry
//! validated operation inputs from controllers into services.

pub mod campaign;
pub mod intern;
pub mod learning_topic;
pub mod mentor;
pub mod person;
pub mod speciality;
