use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media_asset")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub asset_type: String,
    /// Either a public URL or a base64 data URI for small uploads.
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub size: i64,
    pub uploaded_by: String,
    pub is_gallery: bool,
    pub gallery_year: Option<i32>,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub location: Option<String>,
    pub order_index: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
