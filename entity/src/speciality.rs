use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "speciality")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::learning_topic::Entity")]
    LearningTopic,
    #[sea_orm(has_many = "super::mentor_speciality::Entity")]
    MentorSpeciality,
    #[sea_orm(has_many = "super::intern::Entity")]
    Intern,
}

impl Related<super::learning_topic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearningTopic.def()
    }
}

impl Related<super::mentor_speciality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MentorSpeciality.def()
    }
}

impl Related<super::intern::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Intern.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
