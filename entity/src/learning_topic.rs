use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "learning_topic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub speciality_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::speciality::Entity",
        from = "Column::SpecialityId",
        to = "super::speciality::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Speciality,
}

impl Related<super::speciality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Speciality.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
