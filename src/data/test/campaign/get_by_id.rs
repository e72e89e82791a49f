use super::*;

/// Tests fetching a campaign by id with its intern count.
///
/// Expected: Ok(Some(Campaign)) with intern_count matching enrollments
#[tokio::test]
async fn gets_campaign_with_intern_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campaign = factory::create_campaign(db).await?;
    let speciality = factory::create_speciality(db).await?;
    factory::create_intern(db, campaign.id, speciality.id).await?;
    factory::create_intern(db, campaign.id, speciality.id).await?;

    let repo = CampaignRepository::new(db);
    let found = repo.get_by_id(campaign.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, campaign.id);
    assert_eq!(found.name, campaign.name);
    assert_eq!(found.intern_count, 2);

    Ok(())
}

/// Tests fetching a nonexistent campaign.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_campaign() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampaignRepository::new(db);
    let found = repo.get_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
