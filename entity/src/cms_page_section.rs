use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cms_page_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub page_id: i32,
    pub section_type: String,
    pub title: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub content: Json,
    pub order_index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cms_page::Entity",
        from = "Column::PageId",
        to = "super::cms_page::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CmsPage,
}

impl Related<super::cms_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CmsPage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
