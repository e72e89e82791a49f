pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_person_table;
mod m20260810_000002_create_person_role_table;
mod m20260810_000003_create_campaign_table;
mod m20260810_000004_create_speciality_table;
mod m20260811_000005_create_learning_topic_table;
mod m20260811_000006_create_mentor_table;
mod m20260811_000007_create_mentor_speciality_table;
mod m20260812_000008_create_intern_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_person_table::Migration),
            Box::new(m20260810_000002_create_person_role_table::Migration),
            Box::new(m20260810_000003_create_campaign_table::Migration),
            Box::new(m20260810_000004_create_speciality_table::Migration),
            Box::new(m20260811_000005_create_learning_topic_table::Migration),
            Box::new(m20260811_000006_create_mentor_table::Migration),
            Box::new(m20260811_000007_create_mentor_speciality_table::Migration),
            Box::new(m20260812_000008_create_intern_table::Migration),
        ]
    }
}
