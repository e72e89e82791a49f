use super::*;

/// Tests that missing_ids reports exactly the ids without a stored row.
///
/// Expected: only the unknown ids come back
#[tokio::test]
async fn reports_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_speciality(db).await?;
    let b = factory::create_speciality(db).await?;

    let repo = SpecialityRepository::new(db);
    let missing = repo.missing_ids(&[a.id, 9998, b.id, 9999]).await?;

    assert_eq!(missing, vec![9998, 9999]);

    Ok(())
}

/// Tests that an empty id list yields no missing ids.
#[tokio::test]
async fn empty_input_yields_empty_output() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecialityRepository::new(db);
    let missing = repo.missing_ids(&[]).await?;

    assert!(missing.is_empty());

    Ok(())
}
