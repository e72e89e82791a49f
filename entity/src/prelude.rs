pub use super::campaign::Entity as Campaign;
pub use super::intern::Entity as Intern;
pub use super::learning_topic::Entity as LearningTopic;
pub use super::mentor::Entity as Mentor;
pub use super::mentor_speciality::Entity as MentorSpeciality;
pub use super::person::Entity as Person;
pub use super::person_role::Entity as PersonRole;
pub use super::speciality::Entity as Speciality;
