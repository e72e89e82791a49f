use super::*;

/// Tests deleting a mentor clears the reference on their interns.
///
/// The interns stay enrolled, only the mentor assignment becomes null.
///
/// Expected: mentor and join rows gone, intern kept with mentor_id None
#[tokio::test]
async fn deletes_mentor_and_unassigns_interns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let campaign = factory::create_campaign(db).await?;
    let speciality = factory::create_speciality(db).await?;
    let mentor = factory::mentor::MentorFactory::new(db)
        .speciality_ids(vec![speciality.id])
        .build()
        .await?;
    let intern = factory::intern::InternFactory::new(db, campaign.id, speciality.id)
        .mentor_id(mentor.id)
        .build()
        .await?;

    let repo = MentorRepository::new(db);
    repo.delete(mentor.id).await?;

    let db_mentor = entity::prelude::Mentor::find_by_id(mentor.id).one(db).await?;
    assert!(db_mentor.is_none());

    let links = entity::prelude::MentorSpeciality::find()
        .filter(entity::mentor_speciality::Column::MentorId.eq(mentor.id))
        .all(db)
        .await?;
    assert!(links.is_empty());

    let db_intern = entity::prelude::Intern::find_by_id(intern.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_intern.mentor_id, None);

    Ok(())
}
