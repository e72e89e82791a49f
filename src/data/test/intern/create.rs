use super::*;

/// Tests enrolling an intern in a campaign.
///
/// Expected: Ok with intern linked to campaign, speciality, and mentor
#[tokio::test]
async fn creates_intern() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campaign = factory::create_campaign(db).await?;
    let speciality = factory::create_speciality(db).await?;
    let mentor = factory::create_mentor(db).await?;

    let repo = InternRepository::new(db);
    let intern = repo
        .create(CreateInternParams {
            campaign_id: campaign.id,
            speciality_id: speciality.id,
            mentor_id: Some(mentor.id),
            first_name: "Linh".to_string(),
            last_name: "Tran".to_string(),
            email: "linh.tran@example.com".to_string(),
        })
        .await?;

    assert_eq!(intern.campaign_id, campaign.id);
    assert_eq!(intern.speciality_id, speciality.id);
    assert_eq!(intern.mentor_id, Some(mentor.id));

    // Verify intern exists in database
    let db_intern = entity::prelude::Intern::find_by_id(intern.id).one(db).await?;
    assert!(db_intern.is_some());
    assert_eq!(db_intern.unwrap().email, "linh.tran@example.com");

    Ok(())
}

/// Tests enrolling an intern without a mentor.
///
/// Expected: Ok with mentor_id stored as None
#[tokio::test]
async fn creates_intern_without_mentor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campaign = factory::create_campaign(db).await?;
    let speciality = factory::create_speciality(db).await?;

    let repo = InternRepository::new(db);
    let intern = repo
        .create(CreateInternParams {
            campaign_id: campaign.id,
            speciality_id: speciality.id,
            mentor_id: None,
            first_name: "Noah".to_string(),
            last_name: "Okafor".to_string(),
            email: "noah.okafor@example.com".to_string(),
        })
        .await?;

    assert_eq!(intern.mentor_id, None);

    Ok(())
}

/// Tests the per-campaign duplicate-email check.
///
/// The same email is allowed in a different campaign.
///
/// Expected: email_taken_in_campaign true only within the enrolling campaign
#[tokio::test]
async fn detects_duplicate_emails_per_campaign() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campaign = factory::create_campaign(db).await?;
    let other_campaign = factory::create_campaign(db).await?;
    let speciality = factory::create_speciality(db).await?;
    let intern = factory::intern::InternFactory::new(db, campaign.id, speciality.id)
        .email("shared@example.com")
        .build()
        .await?;

    let repo = InternRepository::new(db);

    assert!(
        repo.email_taken_in_campaign(campaign.id, "shared@example.com")
            .await?
    );
    assert!(
        !repo
            .email_taken_in_campaign(other_campaign.id, "shared@example.com")
            .await?
    );

    // The excluding variant ignores the intern itself
    assert!(
        !repo
            .email_taken_in_campaign_excluding(campaign.id, "shared@example.com", intern.id)
            .await?
    );
    assert!(
        repo.email_taken_in_campaign_excluding(campaign.id, "shared@example.com", intern.id + 1)
            .await?
    );

    Ok(())
}
