use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cms_page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cms_page_section::Entity")]
    CmsPageSection,
}

impl Related<super::cms_page_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CmsPageSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
