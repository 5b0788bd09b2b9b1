use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "franchise_note")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub application_id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::franchise_application::Entity",
        from = "Column::ApplicationId",
        to = "super::franchise_application::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FranchiseApplication,
}

impl Related<super::franchise_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FranchiseApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
