use super::*;

/// Tests deleting a campaign removes its interns through the FK cascade.
///
/// Expected: campaign and enrolled interns gone
#[tokio::test]
async fn deletes_campaign_and_cascades_interns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (campaign, _speciality, intern) =
        factory::helpers::create_intern_with_dependencies(db).await?;

    let repo = CampaignRepository::new(db);
    repo.delete(campaign.id).await?;

    let db_campaign = entity::prelude::Campaign::find_by_id(campaign.id)
        .one(db)
        .await?;
    assert!(db_campaign.is_none());

    let db_intern = entity::prelude::Intern::find_by_id(intern.id).one(db).await?;
    assert!(db_intern.is_none());

    Ok(())
}

/// Tests the existence check before and after deletion.
#[tokio::test]
async fn exists_reflects_deletion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campaign = factory::create_campaign(db).await?;

    let repo = CampaignRepository::new(db);
    assert!(repo.exists(campaign.id).await?);

    repo.delete(campaign.id).await?;
    assert!(!repo.exists(campaign.id).await?);

    Ok(())
}
