use super::*;

/// Tests updating an intern's fields, speciality, and mentor.
///
/// The campaign assignment stays as originally enrolled.
///
/// Expected: Ok with new values persisted and campaign_id untouched
#[tokio::test]
async fn updates_intern_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (campaign, _speciality, intern) =
        factory::helpers::create_intern_with_dependencies(db).await?;
    let new_speciality = factory::create_speciality(db).await?;
    let mentor = factory::create_mentor(db).await?;

    let repo = InternRepository::new(db);
    let updated = repo
        .update(UpdateInternParams {
            id: intern.id,
            campaign_id: campaign.id,
            speciality_id: new_speciality.id,
            mentor_id: Some(mentor.id),
            first_name: "Updated".to_string(),
            last_name: "Intern".to_string(),
            email: "updated.intern@example.com".to_string(),
        })
        .await?;

    assert_eq!(updated.campaign_id, campaign.id);
    assert_eq!(updated.speciality_id, new_speciality.id);
    assert_eq!(updated.mentor_id, Some(mentor.id));
    assert_eq!(updated.email, "updated.intern@example.com");

    let db_intern = entity::prelude::Intern::find_by_id(intern.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_intern.campaign_id, campaign.id);
    assert_eq!(db_intern.speciality_id, new_speciality.id);

    Ok(())
}

/// Tests removing an intern's mentor assignment on update.
///
/// Expected: Ok with mentor_id cleared
#[tokio::test]
async fn clears_mentor_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campaign = factory::create_campaign(db).await?;
    let speciality = factory::create_speciality(db).await?;
    let mentor = factory::create_mentor(db).await?;
    let intern = factory::intern::InternFactory::new(db, campaign.id, speciality.id)
        .mentor_id(mentor.id)
        .build()
        .await?;

    let repo = InternRepository::new(db);
    let updated = repo
        .update(UpdateInternParams {
            id: intern.id,
            campaign_id: campaign.id,
            speciality_id: speciality.id,
            mentor_id: None,
            first_name: intern.first_name.clone(),
            last_name: intern.last_name.clone(),
            email: intern.email.clone(),
        })
        .await?;

    assert_eq!(updated.mentor_id, None);

    Ok(())
}

/// Tests updating an intern that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_intern() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campaign = factory::create_campaign(db).await?;
    let speciality = factory::create_speciality(db).await?;

    let repo = InternRepository::new(db);
    let result = repo
        .update(UpdateInternParams {
            id: 9999,
            campaign_id: campaign.id,
            speciality_id: speciality.id,
            mentor_id: None,
            first_name: "Ghost".to_string(),
            last_name: "Intern".to_string(),
            email: "ghost@example.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
