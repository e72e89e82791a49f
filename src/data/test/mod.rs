mod intern;
mod learning_topic;
mod person;
mod speciality;
