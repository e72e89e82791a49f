use super::*;

/// Tests provisioning a person seen for the first time.
///
/// Expected: Ok with a fresh row and no roles
#[tokio::test]
async fn inserts_new_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo
        .upsert(UpsertPersonParams {
            external_id: "ext-1001".to_string(),
            display_name: "Sam Rivera".to_string(),
            email: "sam.rivera@example.com".to_string(),
        })
        .await?;

    assert_eq!(person.external_id, "ext-1001");
    assert_eq!(person.display_name, "Sam Rivera");
    assert!(person.roles.is_empty());

    // Verify person exists in database
    let db_person = entity::prelude::Person::find_by_id(person.id).one(db).await?;
    assert!(db_person.is_some());

    Ok(())
}

/// Tests refreshing an existing person's profile fields.
///
/// Roles stay as granted; only display name and email follow the claims.
///
/// Expected: same row updated, role kept
#[tokio::test]
async fn refreshes_existing_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::person::PersonFactory::new(db)
        .external_id("ext-2002")
        .display_name("Old Name")
        .email("old@example.com")
        .build()
        .await?;
    factory::person::grant_role(db, existing.id, "admin").await?;

    let repo = PersonRepository::new(db);
    let person = repo
        .upsert(UpsertPersonParams {
            external_id: "ext-2002".to_string(),
            display_name: "New Name".to_string(),
            email: "new@example.com".to_string(),
        })
        .await?;

    assert_eq!(person.id, existing.id);
    assert_eq!(person.display_name, "New Name");
    assert_eq!(person.email, "new@example.com");
    assert!(person.has_role(Role::Admin));

    // No second row was created
    let all = entity::prelude::Person::find().all(db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
