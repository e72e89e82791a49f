use super::*;

/// Tests updating a mentor's fields and replacing their speciality set.
///
/// The previous assignments are removed, not merged with the new ones.
///
/// Expected: Ok with new fields and only the new speciality linked
#[tokio::test]
async fn replaces_speciality_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old_speciality = factory::create_speciality(db).await?;
    let new_speciality = factory::create_speciality(db).await?;
    let mentor = factory::mentor::MentorFactory::new(db)
        .speciality_ids(vec![old_speciality.id])
        .build()
        .await?;

    let repo = MentorRepository::new(db);
    let updated = repo
        .update(UpdateMentorParams {
            id: mentor.id,
            first_name: "Updated".to_string(),
            last_name: "Mentor".to_string(),
            email: "updated@example.com".to_string(),
            speciality_ids: vec![new_speciality.id],
        })
        .await?;

    assert_eq!(updated.email, "updated@example.com");
    assert_eq!(updated.specialities.len(), 1);
    assert_eq!(updated.specialities[0].id, new_speciality.id);

    // Verify the old join row is gone
    let links = entity::prelude::MentorSpeciality::find()
        .filter(entity::mentor_speciality::Column::MentorId.eq(mentor.id))
        .all(db)
        .await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].speciality_id, new_speciality.id);

    Ok(())
}

/// Tests clearing all speciality assignments on update.
///
/// Expected: Ok with no specialities left
#[tokio::test]
async fn clears_speciality_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_speciality, mentor) = factory::helpers::create_mentor_with_speciality(db).await?;

    let repo = MentorRepository::new(db);
    let updated = repo
        .update(UpdateMentorParams {
            id: mentor.id,
            first_name: mentor.first_name.clone(),
            last_name: mentor.last_name.clone(),
            email: mentor.email.clone(),
            speciality_ids: Vec::new(),
        })
        .await?;

    assert!(updated.specialities.is_empty());

    Ok(())
}

/// Tests updating a mentor that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_mentor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MentorRepository::new(db);
    let result = repo
        .update(UpdateMentorParams {
            id: 9999,
            first_name: "Ghost".to_string(),
            last_name: "Mentor".to_string(),
            email: "ghost@example.com".to_string(),
            speciality_ids: Vec::new(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
