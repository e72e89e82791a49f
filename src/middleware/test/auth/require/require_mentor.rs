use super::*;

/// Tests mentor person passes the mentor permission check.
///
/// Expected: Ok(Person) holding the mentor role
#[tokio::test]
async fn grants_access_to_mentor() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let person = factory::create_person_with_role(db, "mentor").await?;
    let claims = claims_for(&person.external_id);

    let auth_guard = AuthGuard::new(db, &claims);
    let result = auth_guard.require(&[Permission::Mentor]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, person.id);

    Ok(())
}

/// Tests the admin role satisfies the mentor requirement.
///
/// Administrators may do everything mentors may, so the mentor check
/// accepts either role.
///
/// Expected: Ok(Person) holding only the admin role
#[tokio::test]
async fn admin_satisfies_mentor_check() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let person = factory::create_person_with_role(db, "admin").await?;
    let claims = claims_for(&person.external_id);

    let auth_guard = AuthGuard::new(db, &claims);
    let result = auth_guard.require(&[Permission::Mentor]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, person.id);

    Ok(())
}

/// Tests a person with no roles fails the mentor check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_without_mentor_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let person = factory::create_person(db).await?;
    let claims = claims_for(&person.external_id);

    let auth_guard = AuthGuard::new(db, &claims);
    let result = auth_guard.require(&[Permission::Mentor]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(person_id, msg)) => {
            assert_eq!(person_id, person.id);
            assert!(msg.contains("mentor"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
