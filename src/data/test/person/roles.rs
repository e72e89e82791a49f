use super::*;

/// Tests replacing a person's role set wholesale.
///
/// Roles absent from the new set are revoked by the replacement.
///
/// Expected: stored roles match the last set_roles call exactly
#[tokio::test]
async fn replaces_role_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    factory::person::grant_role(db, person.id, "admin").await?;

    let repo = PersonRepository::new(db);
    repo.set_roles(person.id, &[Role::Mentor]).await?;

    let stored = repo.find_by_id(person.id).await?.unwrap();
    assert!(!stored.has_role(Role::Admin));
    assert!(stored.has_role(Role::Mentor));

    repo.set_roles(person.id, &[]).await?;
    let stored = repo.find_by_id(person.id).await?.unwrap();
    assert!(stored.roles.is_empty());

    Ok(())
}

/// Tests granting a role twice.
///
/// Expected: single role row, no duplicate
#[tokio::test]
async fn grant_role_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let repo = PersonRepository::new(db);
    repo.grant_role(person.id, Role::Admin).await?;
    repo.grant_role(person.id, Role::Admin).await?;

    let roles = entity::prelude::PersonRole::find().all(db).await?;
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].role, "admin");

    Ok(())
}

/// Tests revoking a role.
///
/// Expected: true when the role was held, false otherwise
#[tokio::test]
async fn revoke_role_reports_whether_held() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person_with_role(db, "admin").await?;

    let repo = PersonRepository::new(db);
    assert!(repo.revoke_role(person.id, Role::Admin).await?);
    assert!(!repo.revoke_role(person.id, Role::Admin).await?);

    let stored = repo.find_by_id(person.id).await?.unwrap();
    assert!(stored.roles.is_empty());

    Ok(())
}

/// Tests counting administrators.
///
/// Expected: count follows grants and revocations
#[tokio::test]
async fn counts_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    assert_eq!(repo.count_admins().await?, 0);

    let first = factory::create_person_with_role(db, "admin").await?;
    let _second = factory::create_person_with_role(db, "admin").await?;
    let _mentor = factory::create_person_with_role(db, "mentor").await?;

    assert_eq!(repo.count_admins().await?, 2);

    repo.revoke_role(first.id, Role::Admin).await?;
    assert_eq!(repo.count_admins().await?, 1);

    Ok(())
}
