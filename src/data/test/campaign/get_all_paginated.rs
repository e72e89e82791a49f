use super::*;

/// Tests pagination and ordering of the campaign listing.
///
/// Campaigns are ordered by start date, newest first.
///
/// Expected: correct page contents and total count
#[tokio::test]
async fn paginates_campaigns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for month in 1..=5 {
        factory::campaign::CampaignFactory::new(db)
            .name(format!("Batch {}", month))
            .dates(
                NaiveDate::from_ymd_opt(2026, month, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, month, 28).unwrap(),
            )
            .build()
            .await?;
    }

    let repo = CampaignRepository::new(db);
    let (page0, total) = repo.get_all_paginated(0, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(page0.len(), 2);
    assert_eq!(page0[0].name, "Batch 5");
    assert_eq!(page0[1].name, "Batch 4");

    let (page2, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(page2.len(), 1);
    assert_eq!(page2[0].name, "Batch 1");

    Ok(())
}

/// Tests listing when no campaigns exist.
///
/// Expected: empty page, total 0
#[tokio::test]
async fn returns_empty_page_when_no_campaigns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampaignRepository::new(db);
    let (campaigns, total) = repo.get_all_paginated(0, 10).await?;

    assert!(campaigns.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that each listed campaign carries its own intern count.
#[tokio::test]
async fn listing_carries_intern_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (campaign_a, speciality, _) = factory::helpers::create_intern_with_dependencies(db).await?;
    factory::create_intern(db, campaign_a.id, speciality.id).await?;
    let campaign_b = factory::create_campaign(db).await?;

    let repo = CampaignRepository::new(db);
    let (campaigns, total) = repo.get_all_paginated(0, 10).await?;

    assert_eq!(total, 2);
    let counts: std::collections::HashMap<i32, u64> =
        campaigns.iter().map(|c| (c.id, c.intern_count)).collect();
    assert_eq!(counts[&campaign_a.id], 2);
    assert_eq!(counts[&campaign_b.id], 0);

    Ok(())
}
