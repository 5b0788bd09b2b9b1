use std::ops::RangeInclusive;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::testimonial::TestimonialRepository,
    error::AppError,
    model::testimonial::{CreateTestimonialParam, Testimonial, UpdateTestimonialParam},
};

const RATING_RANGE: RangeInclusive<i32> = 1..=5;

pub struct TestimonialService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TestimonialService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, status: Option<&str>) -> Result<Vec<Testimonial>, AppError> {
        Ok(TestimonialRepository::new(self.db).get_all(status).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Testimonial>, AppError> {
        Ok(TestimonialRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, param: CreateTestimonialParam) -> Result<Testimonial, AppError> {
        validate_rating(param.rating)?;

        Ok(TestimonialRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, param: UpdateTestimonialParam) -> Result<Testimonial, AppError> {
        if let Some(rating) = param.rating {
            validate_rating(rating)?;
        }

        Ok(TestimonialRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(TestimonialRepository::new(self.db).delete(id).await?)
    }
}

fn validate_rating(rating: i32) -> Result<(), AppError> {
    if RATING_RANGE.contains(&rating) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Rating must be between {} and {}",
            RATING_RANGE.start(),
            RATING_RANGE.end()
        )))
    }
}
