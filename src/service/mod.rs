//! Business logic orchestration between controllers and the data layer.
//!
//! Services own precondition checks (existence, ownership, uniqueness, and
//! campaign-state rules) and pagination arithmetic. Controllers stay thin;
//! repositories stay free of business rules.

pub mod auth;
pub mod campaign;
pub mod intern;
pub mod learning_topic;
pub mod mentor;
pub mod person;
pub mod speciality;


/// Clamps the requested page size into the supported range.
pub(crate) fn clamp_per_page(entries: u64) -> u64 {
    entries.clamp(1, 100)
}

/// Computes the number of pages for a total item count.
pub(crate) fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        (total as f64 / per_page as f64).ceil() as u64
    } else {
        0
    }
}
