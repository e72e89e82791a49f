use super::*;

/// Tests deleting a speciality removes its learning topics via cascade.
///
/// Expected: speciality and topics gone
#[tokio::test]
async fn deletes_speciality_and_cascades_topics() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let speciality = factory::create_speciality(db).await?;
    let topic = factory::create_learning_topic(db, speciality.id).await?;

    let repo = SpecialityRepository::new(db);
    repo.delete(speciality.id).await?;

    let db_speciality = entity::prelude::Speciality::find_by_id(speciality.id)
        .one(db)
        .await?;
    assert!(db_speciality.is_none());

    let db_topic = entity::prelude::LearningTopic::find_by_id(topic.id)
        .one(db)
        .await?;
    assert!(db_topic.is_none());

    Ok(())
}

/// Tests the intern count guard used before deletion.
///
/// Expected: count matches interns assigned to the speciality
#[tokio::test]
async fn counts_assigned_interns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_campaign, speciality, _intern) =
        factory::helpers::create_intern_with_dependencies(db).await?;
    let empty_speciality = factory::create_speciality(db).await?;

    let repo = SpecialityRepository::new(db);
    assert_eq!(repo.intern_count(speciality.id).await?, 1);
    assert_eq!(repo.intern_count(empty_speciality.id).await?, 0);

    Ok(())
}
