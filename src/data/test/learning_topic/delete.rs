use super::*;

/// Tests deleting a learning topic.
///
/// Expected: topic gone, sibling topics untouched
#[tokio::test]
async fn deletes_learning_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let speciality = factory::create_speciality(db).await?;
    let topic = factory::create_learning_topic(db, speciality.id).await?;
    let sibling = factory::create_learning_topic(db, speciality.id).await?;

    let repo = LearningTopicRepository::new(db);
    repo.delete(topic.id).await?;

    let db_topic = entity::prelude::LearningTopic::find_by_id(topic.id)
        .one(db)
        .await?;
    assert!(db_topic.is_none());

    let db_sibling = entity::prelude::LearningTopic::find_by_id(sibling.id)
        .one(db)
        .await?;
    assert!(db_sibling.is_some());

    Ok(())
}
