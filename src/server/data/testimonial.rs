//! Testimonial data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::testimonial::{
    CreateTestimonialParam, Testimonial, UpdateTestimonialParam,
};

/// Repository providing database operations for testimonials.
pub struct TestimonialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TestimonialRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets testimonials, newest first.
    ///
    /// # Arguments
    /// - `status` - Only return testimonials whose stored status equals this value exactly
    pub async fn get_all(&self, status: Option<&str>) -> Result<Vec<Testimonial>, DbErr> {
        entity::prelude::Testimonial::find()
            .apply_if(status, |query, status| {
                query.filter(entity::testimonial::Column::Status.eq(status))
            })
            .order_by_desc(entity::testimonial::Column::CreatedAt)
            .order_by_desc(entity::testimonial::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Testimonial::from_entity)
            .collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Testimonial>, DbErr> {
        entity::prelude::Testimonial::find_by_id(id)
            .one(self.db)
            .await?
            .map(Testimonial::from_entity)
            .transpose()
    }

    pub async fn create(&self, param: CreateTestimonialParam) -> Result<Testimonial, DbErr> {
        let now = Utc::now();

        let entity = entity::testimonial::ActiveModel {
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(param.role),
            content: ActiveValue::Set(param.content),
            rating: ActiveValue::Set(param.rating),
            image: ActiveValue::Set(param.image),
            featured: ActiveValue::Set(param.featured),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Testimonial::from_entity(entity)
    }

    /// Overwrites the provided fields of a testimonial.
    ///
    /// # Returns
    /// - `Ok(Testimonial)` - The updated testimonial
    /// - `Err(DbErr::RecordNotFound)` - No testimonial exists with the specified ID
    pub async fn update(&self, param: UpdateTestimonialParam) -> Result<Testimonial, DbErr> {
        let testimonial = entity::prelude::Testimonial::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Testimonial with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::testimonial::ActiveModel = testimonial.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(role) = param.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(content) = param.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(rating) = param.rating {
            active_model.rating = ActiveValue::Set(rating);
        }
        if let Some(image) = param.image {
            active_model.image = ActiveValue::Set(Some(image));
        }
        if let Some(featured) = param.featured {
            active_model.featured = ActiveValue::Set(featured);
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Testimonial::from_entity(entity)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::prelude::Testimonial::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Testimonial with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
