use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub short_description: Option<String>,
    pub category: String,
    pub level: String,
    pub duration: String,
    pub price: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
    pub instructor: String,
    pub total_students: i32,
    pub rating: f64,
    /// JSON array of feature strings.
    #[sea_orm(column_type = "Json")]
    pub features: Json,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_module::Entity")]
    CourseModule,
}

impl Related<super::course_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseModule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
