//! Campaign factory for creating test campaign entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test campaigns with customizable fields.
///
/// Defaults produce a campaign that is currently running (started 30 days
/// ago, ends 60 days from now), so interns can be added to it.
pub struct CampaignFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: Option<String>,
}

impl<'a> CampaignFactory<'a> {
    /// Creates a new CampaignFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Campaign {id}"` where id is auto-incremented
    /// - start_date: 30 days before today
    /// - end_date: 60 days after today
    /// - description: None
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let today = chrono::Utc::now().date_naive();
        Self {
            db,
            name: format!("Campaign {}", id),
            start_date: today - chrono::Duration::days(30),
            end_date: today + chrono::Duration::days(60),
            description: None,
        }
    }

    /// Sets the campaign name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the start and end dates.
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Marks the campaign as already completed (ended 10 days ago).
    pub fn completed(mut self) -> Self {
        let today = chrono::Utc::now().date_naive();
        self.start_date = today - chrono::Duration::days(100);
        self.end_date = today - chrono::Duration::days(10);
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the campaign entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::campaign::Model)` - Created campaign entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::campaign::Model, DbErr> {
        entity::campaign::ActiveModel {
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a campaign with default values.
///
/// Shorthand for `CampaignFactory::new(db).build().await`.
pub async fn create_campaign(db: &DatabaseConnection) -> Result<entity::campaign::Model, DbErr> {
    CampaignFactory::new(db).build().await
}
