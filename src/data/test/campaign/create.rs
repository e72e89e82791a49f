use super::*;

/// Tests creating a new campaign.
///
/// Verifies that the repository persists a campaign with the given name,
/// dates, and description, and that a fresh campaign has no interns.
///
/// Expected: Ok with campaign created
#[tokio::test]
async fn creates_campaign() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampaignRepository::new(db);
    let result = repo
        .create(CreateCampaignParams {
            name: "Summer 2026".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            description: Some("Summer internship batch".to_string()),
        })
        .await;

    assert!(result.is_ok());
    let campaign = result.unwrap();
    assert_eq!(campaign.name, "Summer 2026");
    assert_eq!(campaign.intern_count, 0);

    // Verify campaign exists in database
    let db_campaign = entity::prelude::Campaign::find_by_id(campaign.id)
        .one(db)
        .await?;
    assert!(db_campaign.is_some());
    assert_eq!(db_campaign.unwrap().name, "Summer 2026");

    Ok(())
}

/// Tests creating a campaign without a description.
///
/// Expected: Ok with description stored as None
#[tokio::test]
async fn creates_campaign_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampaignRepository::new(db);
    let campaign = repo
        .create(CreateCampaignParams {
            name: "Winter 2026".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2027, 2, 28).unwrap(),
            description: None,
        })
        .await?;

    assert_eq!(campaign.description, None);

    Ok(())
}

/// Tests the duplicate-name check.
///
/// Expected: exists_by_name true for a stored name, false otherwise
#[tokio::test]
async fn detects_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campaign = factory::campaign::CampaignFactory::new(db)
        .name("Spring 2026")
        .build()
        .await?;

    let repo = CampaignRepository::new(db);

    assert!(repo.exists_by_name("Spring 2026").await?);
    assert!(!repo.exists_by_name("Autumn 2026").await?);

    // The excluding variant ignores the campaign itself
    assert!(!repo
        .exists_by_name_excluding("Spring 2026", campaign.id)
        .await?);
    assert!(repo.exists_by_name_excluding("Spring 2026", campaign.id + 1).await?);

    Ok(())
}
