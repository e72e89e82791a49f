use super::*;

/// Tests getting an intern by ID.
///
/// Expected: Some with the stored fields
#[tokio::test]
async fn gets_intern() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (campaign, speciality, intern) =
        factory::helpers::create_intern_with_dependencies(db).await?;

    let repo = InternRepository::new(db);
    let found = repo.get_by_id(intern.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.campaign_id, campaign.id);
    assert_eq!(found.speciality_id, speciality.id);
    assert_eq!(found.email, intern.email);

    Ok(())
}

/// Tests getting an intern that does not exist.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_missing_intern() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InternRepository::new(db);
    assert!(repo.get_by_id(9999).await?.is_none());

    Ok(())
}

/// Tests the campaign membership check.
///
/// Expected: exists_in_campaign true only for the enrolling campaign
#[tokio::test]
async fn checks_campaign_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (campaign, _speciality, intern) =
        factory::helpers::create_intern_with_dependencies(db).await?;
    let other_campaign = factory::create_campaign(db).await?;

    let repo = InternRepository::new(db);
    assert!(repo.exists_in_campaign(intern.id, campaign.id).await?);
    assert!(!repo.exists_in_campaign(intern.id, other_campaign.id).await?);
    assert!(!repo.exists_in_campaign(9999, campaign.id).await?);

    Ok(())
}
