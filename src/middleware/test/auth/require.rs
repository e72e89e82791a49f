use super::*;

mod require_mentor;

/// Tests multiple permissions are all checked.
///
/// Verifies that when multiple permissions are required, all of them
/// must be satisfied for access to be granted.
///
/// Expected: Ok(Person) when all permissions are met
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    // Admin role satisfies both the admin and the mentor requirement
    let person = factory::create_person_with_role(db, "admin").await?;
    let claims = claims_for(&person.external_id);

    let auth_guard = AuthGuard::new(db, &claims);
    let result = auth_guard
        .require(&[Permission::Admin, Permission::Mentor])
        .await;

    assert!(result.is_ok());
    let returned = result.unwrap();
    assert_eq!(returned.id, person.id);

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Verifies that when checking multiple permissions, if the person lacks
/// any one of them, access is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    // Mentor role satisfies Permission::Mentor but not Permission::Admin
    let person = factory::create_person_with_role(db, "mentor").await?;
    let claims = claims_for(&person.external_id);

    let auth_guard = AuthGuard::new(db, &claims);
    let result = auth_guard
        .require(&[Permission::Mentor, Permission::Admin])
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(person_id, msg)) => {
            assert_eq!(person_id, person.id);
            assert!(msg.contains("admin"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests empty permission list grants access to any provisioned person.
///
/// Verifies that when no permissions are required, any authenticated
/// person with a database record is granted access.
///
/// Expected: Ok(Person)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let person = factory::create_person(db).await?;
    let claims = claims_for(&person.external_id);

    let auth_guard = AuthGuard::new(db, &claims);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, person.id);

    Ok(())
}

/// Tests a valid token for an unprovisioned subject is rejected.
///
/// Verifies that authentication alone is not enough: the subject must
/// exist in the person store before any permission check passes.
///
/// Expected: Err(AuthError::PersonNotProvisioned)
#[tokio::test]
async fn denies_access_when_person_not_provisioned() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_person_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let claims = claims_for("ext-unknown");

    let auth_guard = AuthGuard::new(db, &claims);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::PersonNotProvisioned(external_id)) => {
            assert_eq!(external_id, "ext-unknown");
        }
        e => panic!("Expected PersonNotProvisioned error, got: {:?}", e),
    }

    Ok(())
}
