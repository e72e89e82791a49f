use super::*;

/// Tests creating a mentor with speciality assignments.
///
/// Expected: Ok with mentor created and join rows persisted
#[tokio::test]
async fn creates_mentor_with_specialities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let backend = factory::speciality::SpecialityFactory::new(db)
        .name("Backend")
        .build()
        .await?;
    let frontend = factory::speciality::SpecialityFactory::new(db)
        .name("Frontend")
        .build()
        .await?;

    let repo = MentorRepository::new(db);
    let mentor = repo
        .create(CreateMentorParams {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            speciality_ids: vec![frontend.id, backend.id],
        })
        .await?;

    assert_eq!(mentor.email, "ada@example.com");
    // Resolved specialities come back ordered by name
    assert_eq!(mentor.specialities.len(), 2);
    assert_eq!(mentor.specialities[0].name, "Backend");
    assert_eq!(mentor.specialities[1].name, "Frontend");

    // Verify join rows exist in database
    let links = entity::prelude::MentorSpeciality::find()
        .filter(entity::mentor_speciality::Column::MentorId.eq(mentor.id))
        .all(db)
        .await?;
    assert_eq!(links.len(), 2);

    Ok(())
}

/// Tests creating a mentor without speciality assignments.
///
/// Expected: Ok with an empty speciality list
#[tokio::test]
async fn creates_mentor_without_specialities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MentorRepository::new(db);
    let mentor = repo
        .create(CreateMentorParams {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            speciality_ids: Vec::new(),
        })
        .await?;

    assert!(mentor.specialities.is_empty());

    Ok(())
}

/// Tests the duplicate-email check.
///
/// Expected: email_taken true for a stored email, false otherwise
#[tokio::test]
async fn detects_duplicate_emails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mentor = factory::mentor::MentorFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = MentorRepository::new(db);

    assert!(repo.email_taken("taken@example.com").await?);
    assert!(!repo.email_taken("free@example.com").await?);

    // The excluding variant ignores the mentor itself
    assert!(
        !repo
            .email_taken_excluding("taken@example.com", mentor.id)
            .await?
    );
    assert!(
        repo.email_taken_excluding("taken@example.com", mentor.id + 1)
            .await?
    );

    Ok(())
}
