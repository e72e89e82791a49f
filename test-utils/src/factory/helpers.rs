//! Cross-factory helpers: unique-value generation and multi-entity setup.

use sea_orm::{DatabaseConnection, DbErr};

/// Source of unique suffixes for factory defaults (names, emails).
///
/// Tests inside one process share the counter, so two factories can never
/// produce colliding unique-column values even across concurrent tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Seeds a campaign, a speciality, and an intern enrolled in both.
///
/// The intern has no mentor. Reach for the individual factories when a test
/// needs custom values on any of the three.
pub async fn create_intern_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::campaign::Model,
        entity::speciality::Model,
        entity::intern::Model,
    ),
    DbErr,
> {
    let campaign = crate::factory::campaign::create_campaign(db).await?;
    let speciality = crate::factory::speciality::create_speciality(db).await?;
    let intern = crate::factory::intern::create_intern(db, campaign.id, speciality.id).await?;

    Ok((campaign, speciality, intern))
}

/// Seeds a speciality and a mentor assigned to it through the
/// `mentor_speciality` join table.
pub async fn create_mentor_with_speciality(
    db: &DatabaseConnection,
) -> Result<(entity::speciality::Model, entity::mentor::Model), DbErr> {
    let speciality = crate::factory::speciality::create_speciality(db).await?;
    let mentor = crate::factory::mentor::MentorFactory::new(db)
        .speciality_ids(vec![speciality.id])
        .build()
        .await?;

    Ok((speciality, mentor))
}
