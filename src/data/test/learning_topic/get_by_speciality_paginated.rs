use super::*;

/// Tests paginated listing of a speciality's topics ordered by name.
///
/// Topics of other specialities never appear in the listing.
///
/// Expected: pages ordered alphabetically, total covers only the speciality
#[tokio::test]
async fn paginates_topics_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let speciality = factory::create_speciality(db).await?;
    let other_speciality = factory::create_speciality(db).await?;

    for name in ["Traits", "Closures", "Macros", "Lifetimes"] {
        factory::learning_topic::LearningTopicFactory::new(db, speciality.id)
            .name(name)
            .build()
            .await?;
    }
    factory::learning_topic::LearningTopicFactory::new(db, other_speciality.id)
        .name("Unrelated")
        .build()
        .await?;

    let repo = LearningTopicRepository::new(db);
    let (first_page, total) = repo
        .get_by_speciality_paginated(speciality.id, 0, 3)
        .await?;

    assert_eq!(total, 4);
    assert_eq!(first_page.len(), 3);
    assert_eq!(first_page[0].name, "Closures");
    assert_eq!(first_page[1].name, "Lifetimes");
    assert_eq!(first_page[2].name, "Macros");

    let (second_page, _) = repo
        .get_by_speciality_paginated(speciality.id, 1, 3)
        .await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Traits");

    Ok(())
}

/// Tests listing topics for a speciality with none stored.
///
/// Expected: empty page with total 0
#[tokio::test]
async fn returns_empty_page_when_no_topics() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let speciality = factory::create_speciality(db).await?;

    let repo = LearningTopicRepository::new(db);
    let (topics, total) = repo
        .get_by_speciality_paginated(speciality.id, 0, 10)
        .await?;

    assert!(topics.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
