use super::*;

/// Tests pagination and name ordering of the speciality listing.
///
/// Expected: alphabetical pages and correct total
#[tokio::test]
async fn paginates_specialities_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Cloud", "Backend", "Android", "Design"] {
        factory::speciality::SpecialityFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = SpecialityRepository::new(db);
    let (page0, total) = repo.get_all_paginated(0, 3).await?;

    assert_eq!(total, 4);
    assert_eq!(page0.len(), 3);
    assert_eq!(page0[0].name, "Android");
    assert_eq!(page0[1].name, "Backend");
    assert_eq!(page0[2].name, "Cloud");

    let (page1, _) = repo.get_all_paginated(1, 3).await?;
    assert_eq!(page1.len(), 1);
    assert_eq!(page1[0].name, "Design");

    Ok(())
}
