use super::*;

/// Tests getting a learning topic by ID.
///
/// Expected: Some with the stored fields
#[tokio::test]
async fn gets_learning_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let speciality = factory::create_speciality(db).await?;
    let topic = factory::learning_topic::LearningTopicFactory::new(db, speciality.id)
        .name("Async Runtimes")
        .description("Executors and task scheduling")
        .build()
        .await?;

    let repo = LearningTopicRepository::new(db);
    let found = repo.get_by_id(topic.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.name, "Async Runtimes");
    assert_eq!(
        found.description,
        Some("Executors and task scheduling".to_string())
    );
    assert_eq!(found.speciality_id, speciality.id);

    Ok(())
}

/// Tests getting a learning topic that does not exist.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_missing_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LearningTopicRepository::new(db);
    assert!(repo.get_by_id(9999).await?.is_none());

    Ok(())
}

/// Tests the speciality membership check.
///
/// Expected: exists_in_speciality true only for the owning speciality
#[tokio::test]
async fn checks_speciality_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let speciality = factory::create_speciality(db).await?;
    let other_speciality = factory::create_speciality(db).await?;
    let topic = factory::create_learning_topic(db, speciality.id).await?;

    let repo = LearningTopicRepository::new(db);
    assert!(repo.exists_in_speciality(topic.id, speciality.id).await?);
    assert!(
        !repo
            .exists_in_speciality(topic.id, other_speciality.id)
            .await?
    );
    assert!(!repo.exists_in_speciality(9999, speciality.id).await?);

    Ok(())
}
