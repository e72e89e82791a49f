use super::*;

/// Tests fetching a speciality with its learning topic count.
///
/// Expected: Ok(Some(Speciality)) with topic_count matching topics
#[tokio::test]
async fn gets_speciality_with_topic_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let speciality = factory::create_speciality(db).await?;
    factory::create_learning_topic(db, speciality.id).await?;
    factory::create_learning_topic(db, speciality.id).await?;
    factory::create_learning_topic(db, speciality.id).await?;

    let repo = SpecialityRepository::new(db);
    let found = repo.get_by_id(speciality.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, speciality.id);
    assert_eq!(found.topic_count, 3);

    Ok(())
}

/// Tests fetching a nonexistent speciality.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_speciality() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecialityRepository::new(db);
    assert!(repo.get_by_id(9999).await?.is_none());

    Ok(())
}
