use super::*;

/// Tests renaming a speciality.
///
/// Expected: Ok with new name persisted
#[tokio::test]
async fn renames_speciality() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let speciality = factory::speciality::SpecialityFactory::new(db)
        .name("Frontent")
        .build()
        .await?;

    let repo = SpecialityRepository::new(db);
    let updated = repo.update(speciality.id, "Frontend".to_string()).await?;

    assert_eq!(updated.id, speciality.id);
    assert_eq!(updated.name, "Frontend");

    let db_speciality = entity::prelude::Speciality::find_by_id(speciality.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_speciality.name, "Frontend");

    Ok(())
}

/// Tests renaming a nonexistent speciality.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_speciality() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecialityRepository::new(db);
    let result = repo.update(9999, "Ghost".to_string()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
