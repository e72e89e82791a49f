use super::*;

/// Tests creating a new speciality.
///
/// Expected: Ok with speciality created and zero topics
#[tokio::test]
async fn creates_speciality() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecialityRepository::new(db);
    let speciality = repo.create("Backend Engineering".to_string()).await?;

    assert_eq!(speciality.name, "Backend Engineering");
    assert_eq!(speciality.topic_count, 0);

    let db_speciality = entity::prelude::Speciality::find_by_id(speciality.id)
        .one(db)
        .await?;
    assert!(db_speciality.is_some());

    Ok(())
}

/// Tests the duplicate-name checks.
#[tokio::test]
async fn detects_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let speciality = factory::speciality::SpecialityFactory::new(db)
        .name("Data Science")
        .build()
        .await?;

    let repo = SpecialityRepository::new(db);

    assert!(repo.exists_by_name("Data Science").await?);
    assert!(!repo.exists_by_name("Quantum Computing").await?);
    assert!(!repo
        .exists_by_name_excluding("Data Science", speciality.id)
        .await?);

    Ok(())
}
